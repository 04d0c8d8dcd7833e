use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn login_returns_a_token_and_a_redacted_profile() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;

    let body = app.login("ada@analytical.example", "password123").await;

    let token = body["token"].as_str().expect("token missing");
    assert_eq!(token.split('.').count(), 3);

    assert_eq!(body["user"]["email"], "ada@analytical.example");
    assert_eq!(body["user"]["name"], "Ada Lovelace");
    assert!(body["user"]["id"].is_string());

    // No credential material in the response.
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn login_rejects_a_wrong_password() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;

    let (status, _) = app
        .post(
            "/login",
            json!({ "email": "ada@analytical.example", "password": "wrong-password" }),
        )
        .await;

    assert_eq!(status, 401);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;

    let (wrong_password_status, wrong_password_body) = app
        .post(
            "/login",
            json!({ "email": "ada@analytical.example", "password": "wrong-password" }),
        )
        .await;
    let (unknown_email_status, unknown_email_body) = app
        .post(
            "/login",
            json!({ "email": "nobody@analytical.example", "password": "password123" }),
        )
        .await;

    assert_eq!(wrong_password_status, 401);
    assert_eq!(unknown_email_status, 401);
    assert_eq!(wrong_password_body, unknown_email_body);
}

#[tokio::test]
async fn login_with_a_malformed_email_gets_the_same_401() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/login",
            json!({ "email": "not-an-email", "password": "password123" }),
        )
        .await;

    assert_eq!(status, 401);
}
