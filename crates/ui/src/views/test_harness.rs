use std::sync::Arc;
use std::time::Duration;

use academy_core::model::{PassThreshold, SignInForm};
use academy_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AcademyConfig, AccountService, AppServices, CatalogService, CertificateService, QuizService,
    ResultsService,
};

use crate::context::{UiApp, build_app_context, use_current_learner_provider};
use crate::views::{AuthView, CertificatesView, CourseView, CoursesView, HomeView, ResultsView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn pass_threshold(&self) -> PassThreshold {
        self.services.config().pass_threshold
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }

    fn certificates(&self) -> Arc<CertificateService> {
        self.services.certificates()
    }

    fn accounts(&self) -> Arc<AccountService> {
        self.services.accounts()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Auth,
    Courses,
    Course(u64),
    Results,
    Certificates,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_current_learner_provider(&ctx);
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Auth => rsx! { AuthView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Course(course_id) => rsx! { CourseView { course_id } },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::Certificates => rsx! { CertificatesView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending resources until `needle` shows up, returning the last render.
    pub async fn render_until(&mut self, needle: &str) -> String {
        let mut html = self.render();
        for _ in 0..10 {
            if html.contains(needle) {
                break;
            }
            self.drive_async().await;
            html = self.render();
        }
        html
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a harness over the demo catalog, optionally signed in as `email`.
pub async fn setup_view_harness(view: ViewKind, signed_in_as: Option<&str>) -> ViewHarness {
    let services = AppServices::demo(AcademyConfig::default(), fixed_clock())
        .await
        .expect("demo services");

    if let Some(email) = signed_in_as {
        services
            .accounts()
            .sign_in(&SignInForm {
                email: email.to_owned(),
                password: "secret".to_owned(),
            })
            .await
            .expect("sign in");
    }

    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}
