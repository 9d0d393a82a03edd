use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, CurrentLearner};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultRowVm, StatTileVm, map_overview_tiles, map_result_rows};

#[derive(Clone, Debug, PartialEq)]
struct ResultsData {
    tiles: Vec<StatTileVm>,
    rows: Vec<ResultRowVm>,
}

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let learner = use_context::<CurrentLearner>();
    let results = ctx.results();

    let resource = use_resource(move || {
        let results = results.clone();
        let profile = learner.get();
        async move {
            let profile = profile.ok_or(ViewError::SignedOut)?;
            let overview = results
                .overview(profile.id())
                .await
                .map_err(|_| ViewError::Unknown)?;
            let recent = results
                .recent_results(profile.id())
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(ResultsData {
                tiles: map_overview_tiles(&overview),
                rows: map_result_rows(&recent),
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page results",
            h2 { "My results" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "stat-grid",
                        for tile in data.tiles {
                            div { key: "{tile.label}", class: "stat",
                                span { class: "stat-value", "{tile.value}" }
                                span { class: "stat-label", "{tile.label}" }
                            }
                        }
                    }
                    h3 { "Recent tests" }
                    if data.rows.is_empty() {
                        p { "No tests taken yet." }
                    } else {
                        table { class: "results-table",
                            thead {
                                tr {
                                    th { "Course" }
                                    th { "Date" }
                                    th { "Score" }
                                    th { "Status" }
                                    th { "Attempts" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    tr { key: "{row.id}",
                                        td { "{row.course_title}" }
                                        td { "{row.date}" }
                                        td { "{row.score}%" }
                                        td {
                                            span { class: if row.passed { "pill passed" } else { "pill failed" },
                                                "{row.status_label}"
                                            }
                                        }
                                        td { "{row.attempts_label}" }
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(ViewError::SignedOut) => rsx! {
                    p { "{ViewError::SignedOut.message()}" }
                    Link { class: "btn", to: Route::Auth {}, "Sign in" }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
