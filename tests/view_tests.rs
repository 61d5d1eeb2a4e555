mod common;

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

use idcarder::notice::{NotificationStyle, SUBMIT_FAILED};

fn card_form(name: &str, email: &str, phno: &str, photo: bool) -> Form {
    let form = Form::new()
        .text("name", name.to_string())
        .text("email", email.to_string())
        .text("phno", phno.to_string());
    if photo {
        form.part(
            "photo",
            Part::bytes(common::photo_png()).file_name("me.png"),
        )
    } else {
        form
    }
}

async fn submit(app: &common::TestApp, form: Form) -> (StatusCode, String) {
    let resp = app
        .client
        .post(app.url("/card"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.text().await.unwrap())
}

#[tokio::test]
async fn form_page_renders() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains(r#"action="/card""#));
    assert!(html.contains(r#"name="photo""#));
    assert!(html.contains("example@gmail.com"));
    assert!(html.contains("autofocus"));
}

#[tokio::test]
async fn valid_form_renders_card() {
    let app = common::spawn_app().await;

    let (status, html) = submit(&app, card_form("Jane Doe", "jane@gmail.com", "9876543210", true)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("id-card"));
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("9876543210"));
    assert!(html.contains("data:image/png;base64,"));
    assert!(!html.contains(r#"action="/card""#));
}

#[tokio::test]
async fn invalid_email_rerenders_form_with_inline_error() {
    let app = common::spawn_app().await;

    let (status, html) = submit(&app, card_form("Jane Doe", "jane@yahoo.com", "9876543210", true)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("invalid email"));
    assert!(html.contains(r#"class="field-error""#));
    assert!(!html.contains(r#"class="banner""#));
    // Entered values survive, focus moves to the email input.
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(html.contains(r#"value="jane@yahoo.com""#));
    assert!(html.contains(r#"placeholder="example@gmail.com" autofocus"#));
}

#[tokio::test]
async fn banner_style_shows_summary() {
    let mut config = common::test_config();
    config.notification_style = NotificationStyle::Banner;
    let app = common::spawn_app_with(config, None).await;

    let (status, html) = submit(&app, card_form("Jane Doe", "jane@gmail.com", "12345", true)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains(r#"class="banner""#));
    assert!(html.contains("invalid phone"));
    assert!(!html.contains(r#"class="field-error""#));
}

#[tokio::test]
async fn missing_photo_is_rejected() {
    let app = common::spawn_app().await;

    let (status, html) = submit(&app, card_form("Jane Doe", "jane@gmail.com", "9876543210", false)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("photo required"));
}

#[tokio::test]
async fn name_is_filtered_before_validation() {
    let app = common::spawn_app().await;

    let (status, html) = submit(&app, card_form("Jane D0e!", "jane@gmail.com", "9876543210", true)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Jane De"));
}

#[tokio::test]
async fn encoder_failure_keeps_form_values() {
    let app =
        common::spawn_app_with(common::test_config(), Some(Arc::new(common::FailingEncoder))).await;

    let (status, html) = submit(&app, card_form("Jane Doe", "jane@gmail.com", "9876543210", true)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains(SUBMIT_FAILED));
    assert!(html.contains(r#"value="jane@gmail.com""#));
}

#[tokio::test]
async fn non_multipart_body_is_rejected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/card"))
        .body("name=Jane")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.unwrap().contains("Missing multipart boundary"));
}

#[tokio::test]
async fn validation_status_matches_strict_api() {
    let mut config = common::test_config();
    config.strict_validation = true;
    let app = common::spawn_app_with(config, None).await;

    let (view_status, _) = submit(&app, card_form("Jane Doe", "jane@yahoo.com", "9876543210", true)).await;

    let mut input = common::jane();
    input["email"] = serde_json::json!("jane@yahoo.com");
    let (_, api_status) = app.generate(&input).await;

    assert_eq!(view_status, api_status);
    assert_eq!(view_status, StatusCode::BAD_REQUEST);
}
