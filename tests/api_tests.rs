mod common;

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

use common::MailerMode;

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/")).send().await.unwrap();
    let headers = resp.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
}

// ── Submission endpoint ─────────────────────────────────────────

#[tokio::test]
async fn valid_application_sends_one_email() {
    let app = common::spawn_app().await;

    let (body, status) = app.submit_json(&common::jane_doe()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.to, common::RECIPIENT);
    assert_eq!(email.subject, "New Get Scouted Application");
    assert_eq!(email.from, format!("\"House of OROS\" <{}>", common::SENDER));
    assert!(email.html_body.contains("New Application"));
    assert!(email.html_body.contains("Jane Doe"));
    assert!(email.html_body.contains("jane@x.com"));
    assert!(email.html_body.contains("USA"));
    assert!(email.html_body.contains("Models"));
}

#[tokio::test]
async fn notification_lists_fields_in_order() {
    let app = common::spawn_app().await;

    let (_, status) = app
        .submit_json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "country": "United Kingdom",
            "discipline": "Creators",
            "links": "ada.example, gallery.example",
            "statement": "Building something intentional.",
        }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let body = &app.mailer.sent()[0].html_body;
    let positions: Vec<usize> = [
        "Name:",
        "Ada Lovelace",
        "Email:",
        "ada@example.com",
        "Country:",
        "United Kingdom",
        "Discipline:",
        "Creators",
        "Links:",
        "ada.example, gallery.example",
        "Statement:",
        "Building something intentional.",
    ]
    .iter()
    .map(|needle| body.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {positions:?}");
}

#[tokio::test]
async fn recipient_ignores_payload_fields() {
    let app = common::spawn_app().await;

    let mut payload = common::jane_doe();
    payload["to"] = json!("attacker@evil.test");
    payload["email"] = json!("attacker@evil.test");

    let (_, status) = app.submit_json(&payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.mailer.sent()[0].to, common::RECIPIENT);
}

#[tokio::test]
async fn notification_escapes_html() {
    let app = common::spawn_app().await;

    let mut payload = common::jane_doe();
    payload["statement"] = json!("<script>alert(1)</script>");
    payload["discipline"] = json!("Artists & Musicians");

    let (_, status) = app.submit_json(&payload).await;
    assert_eq!(status, StatusCode::OK);

    let body = &app.mailer.sent()[0].html_body;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&#60;script&#62;"));
    assert!(body.contains("Artists &#38; Musicians"));
}

#[tokio::test]
async fn server_does_not_revalidate_required_fields() {
    let app = common::spawn_app().await;

    let (body, status) = app.submit_json(&json!({ "name": "Only A Name" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(app.mailer.sent().len(), 1);
}

#[tokio::test]
async fn resubmission_sends_a_second_email() {
    let app = common::spawn_app().await;

    app.submit_json(&common::jane_doe()).await;
    app.submit_json(&common::jane_doe()).await;

    assert_eq!(app.mailer.sent().len(), 2);
}

#[tokio::test]
async fn urlencoded_application_is_accepted() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/get-scouted"))
        .form(&[
            ("name", "Jane Doe"),
            ("email", "jane@x.com"),
            ("country", "USA"),
            ("discipline", "Performers"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(app.mailer.sent()[0].html_body.contains("Performers"));
}

#[tokio::test]
async fn transport_failure_returns_generic_500() {
    let app = common::spawn_app_with(MailerMode::Fail, Duration::from_secs(5)).await;

    let (body, status) = app.submit_json(&common::jane_doe()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false }));
}

#[tokio::test]
async fn malformed_payload_returns_generic_500() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/get-scouted"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "success": false }));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn hung_transport_times_out() {
    let app = common::spawn_app_with(MailerMode::Hang, Duration::from_millis(100)).await;

    let started = std::time::Instant::now();
    let (body, status) = app.submit_json(&common::jane_doe()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false }));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn oversized_application_returns_generic_500() {
    let app = common::spawn_app().await;

    let mut payload = common::jane_doe();
    payload["statement"] = json!("x".repeat(70_000));

    let (body, status) = app.submit_json(&payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false }));
    assert!(app.mailer.sent().is_empty());
}
