use chrono::Duration;
use serde_json::json;

use crate::helpers::{RESET_URL_BASE, spawn_app};

#[tokio::test]
async fn reset_request_sends_an_email_with_a_link() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;

    let (status, body) = app
        .post(
            "/password-reset/request",
            json!({ "email": "ada@analytical.example" }),
        )
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Password reset email sent");

    let email = app.last_sent_email().await;
    assert_eq!(email.recipient, "ada@analytical.example");
    assert_eq!(email.subject, "Password reset");
    assert!(email.content.contains(RESET_URL_BASE));

    let token = app.reset_token_from_email().await;
    assert_eq!(token.len(), 64);
}

#[tokio::test]
async fn reset_request_for_an_unknown_email_returns_404() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/password-reset/request",
            json!({ "email": "nobody@analytical.example" }),
        )
        .await;

    assert_eq!(status, 404);
    assert!(app.email_client.sent().await.is_empty());
}

#[tokio::test]
async fn reset_confirm_rotates_the_credential() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;
    app.post(
        "/password-reset/request",
        json!({ "email": "ada@analytical.example" }),
    )
    .await;
    let token = app.reset_token_from_email().await;

    let (status, body) = app
        .post(
            "/password-reset/confirm",
            json!({ "token": token, "newPassword": "new-password-1" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Password updated");

    let (old_status, _) = app
        .post(
            "/login",
            json!({ "email": "ada@analytical.example", "password": "password123" }),
        )
        .await;
    assert_eq!(old_status, 401);

    app.login("ada@analytical.example", "new-password-1").await;
}

#[tokio::test]
async fn reset_confirm_rejects_a_second_use_of_the_token() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;
    app.post(
        "/password-reset/request",
        json!({ "email": "ada@analytical.example" }),
    )
    .await;
    let token = app.reset_token_from_email().await;

    let (first, _) = app
        .post(
            "/password-reset/confirm",
            json!({ "token": token, "newPassword": "new-password-1" }),
        )
        .await;
    assert_eq!(first, 200);

    let (second, _) = app
        .post(
            "/password-reset/confirm",
            json!({ "token": token, "newPassword": "new-password-2" }),
        )
        .await;
    assert_eq!(second, 400);

    // The second attempt changed nothing.
    app.login("ada@analytical.example", "new-password-1").await;
}

#[tokio::test]
async fn reset_confirm_rejects_an_expired_token() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;
    app.post(
        "/password-reset/request",
        json!({ "email": "ada@analytical.example" }),
    )
    .await;
    let token = app.reset_token_from_email().await;

    app.clock.advance(Duration::minutes(61));

    let (status, _) = app
        .post(
            "/password-reset/confirm",
            json!({ "token": token, "newPassword": "new-password-1" }),
        )
        .await;
    assert_eq!(status, 400);

    // The old credential still works.
    app.login("ada@analytical.example", "password123").await;
}

#[tokio::test]
async fn reset_confirm_rejects_a_malformed_token() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/password-reset/confirm",
            json!({ "token": "too-short", "newPassword": "new-password-1" }),
        )
        .await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn end_to_end_account_lifecycle() {
    let app = spawn_app();

    app.register_teacher("ada@analytical.example", "password123")
        .await;

    let login = app.login("ada@analytical.example", "password123").await;
    let token = login["token"].as_str().unwrap();

    let (status, me) = app.get_auth("/me", token).await;
    assert_eq!(status, 200);
    assert_eq!(me["email"], "ada@analytical.example");

    app.post(
        "/password-reset/request",
        json!({ "email": "ada@analytical.example" }),
    )
    .await;
    let reset_token = app.reset_token_from_email().await;

    let (status, _) = app
        .post(
            "/password-reset/confirm",
            json!({ "token": reset_token, "newPassword": "rotated-password-1" }),
        )
        .await;
    assert_eq!(status, 200);

    app.login("ada@analytical.example", "rotated-password-1")
        .await;
}
