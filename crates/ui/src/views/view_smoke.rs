use storage::seed::SALES_COURSE;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog_stats() {
    let mut harness = setup_view_harness(ViewKind::Home, None).await;
    harness.rebuild();
    let html = harness.render_until("Courses available: 6").await;
    assert!(html.contains("Corporate training portal"), "missing hero in {html}");
    assert!(html.contains("Courses available: 6"), "missing count in {html}");
    assert!(html.contains("Categories: 6"), "missing categories in {html}");
    assert!(html.contains("Passing score for tests: 70%"), "missing threshold in {html}");
    assert!(html.contains("Start learning"), "missing call to action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_greets_signed_in_learner() {
    let mut harness = setup_view_harness(ViewKind::Home, Some("maria@example.com")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome back, maria!"), "missing greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Auth, None).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing title in {html}");
    assert!(html.contains("Register"), "missing register tab in {html}");
    assert!(html.contains("any email and password"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_renders_cards_and_filters() {
    let mut harness = setup_view_harness(ViewKind::Courses, None).await;
    harness.rebuild();
    let html = harness
        .render_until("Sales and Customer Relations Fundamentals")
        .await;
    assert!(html.contains("Course catalog"), "missing heading in {html}");
    assert!(
        html.contains("Sales and Customer Relations Fundamentals"),
        "missing course card in {html}"
    );
    assert!(html.contains("Project Management"), "missing course card in {html}");
    assert!(html.contains("Progress: 45%"), "missing progress in {html}");
    assert!(html.contains("Soft Skills"), "missing category chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_lessons() {
    let mut harness =
        setup_view_harness(ViewKind::Course(SALES_COURSE.value()), None).await;
    harness.rebuild();
    let html = harness.render_until("lessons completed").await;
    assert!(
        html.contains("Sales and Customer Relations Fundamentals"),
        "missing title in {html}"
    );
    assert!(html.contains("2 of 5 lessons completed"), "missing progress in {html}");
    assert!(html.contains("Instructor: Elena Volkova"), "missing instructor in {html}");
    assert!(html.contains("Final test"), "missing test tab in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_reports_unknown_course() {
    let mut harness = setup_view_harness(ViewKind::Course(404), None).await;
    harness.rebuild();
    let html = harness.render_until("does not exist").await;
    assert!(html.contains("This page does not exist."), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_asks_signed_out_visitor_to_sign_in() {
    let mut harness = setup_view_harness(ViewKind::Results, None).await;
    harness.rebuild();
    let html = harness.render_until("Please sign in").await;
    assert!(html.contains("My results"), "missing heading in {html}");
    assert!(html.contains("Please sign in to continue."), "missing prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_sample_history() {
    let mut harness = setup_view_harness(ViewKind::Results, Some("ivan@example.com")).await;
    harness.rebuild();
    let html = harness.render_until("Recent tests").await;
    assert!(html.contains("Average score"), "missing tiles in {html}");
    // (85 + 92 + 78) / 3 = 85
    assert!(html.contains("85%"), "missing average in {html}");
    assert!(html.contains("Corporate Security and Confidentiality"), "missing row in {html}");
    assert!(html.contains("Passed"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn certificates_view_smoke_renders_sample_certificates() {
    let mut harness =
        setup_view_harness(ViewKind::Certificates, Some("olga@example.com")).await;
    harness.rebuild();
    let html = harness.render_until("CERT-2023-").await;
    assert!(html.contains("My certificates"), "missing heading in {html}");
    assert!(html.contains("CERT-2023-001000"), "missing certificate number in {html}");
    assert!(html.contains("Instructor: Alexey Smirnov"), "missing instructor in {html}");
}
