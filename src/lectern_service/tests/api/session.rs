use lectern_adapters::sessions::{SessionConfig, generate_session_token};
use lectern_core::{Email, User, UserRole};
use secrecy::Secret;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TEST_JWT_SECRET, spawn_app};

#[tokio::test]
async fn me_returns_the_profile_for_a_valid_token() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;
    let login = app.login("ada@analytical.example", "password123").await;
    let token = login["token"].as_str().unwrap();

    let (status, body) = app.get_auth("/me", token).await;

    assert_eq!(status, 200);
    assert_eq!(body["email"], "ada@analytical.example");
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["role"], "teacher");
    assert!(body.get("group").is_none());
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn me_includes_the_group_for_students() {
    let app = spawn_app();
    let (status, _) = app
        .post(
            "/register",
            json!({
                "firstName": "Alan",
                "lastName": "Turing",
                "email": "alan@kings.example",
                "userType": "student",
                "group": "CS-101",
                "password": "password123",
            }),
        )
        .await;
    assert_eq!(status, 201);

    let login = app.login("alan@kings.example", "password123").await;
    let (status, body) = app.get_auth("/me", login["token"].as_str().unwrap()).await;

    assert_eq!(status, 200);
    assert_eq!(body["role"], "student");
    assert_eq!(body["group"], "CS-101");
}

#[tokio::test]
async fn me_without_a_token_returns_401() {
    let app = spawn_app();

    let (status, _) = app.get("/me").await;

    assert_eq!(status, 401);
}

#[tokio::test]
async fn me_with_a_garbage_token_returns_403() {
    let app = spawn_app();

    let (status, _) = app.get_auth("/me", "not.a.jwt").await;

    assert_eq!(status, 403);
}

#[tokio::test]
async fn me_with_an_expired_token_returns_403() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;

    // Mint a token that expired a minute ago, signed with the same secret.
    let email = Email::try_from(Secret::from("ada@analytical.example".to_string())).unwrap();
    let user = User::parse(
        Uuid::new_v4(),
        email,
        "Ada".to_string(),
        "Lovelace".to_string(),
        UserRole::Teacher,
        None,
    )
    .unwrap();
    let mut config = SessionConfig::new(Secret::from(TEST_JWT_SECRET.to_string()));
    config.token_ttl_seconds = -60;
    let token = generate_session_token(&user, &config).unwrap();

    let (status, _) = app.get_auth("/me", &token).await;

    assert_eq!(status, 403);
}

#[tokio::test]
async fn change_password_requires_the_current_password() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;
    let login = app.login("ada@analytical.example", "password123").await;
    let token = login["token"].as_str().unwrap();

    let (status, _) = app
        .post_auth(
            "/change-password",
            token,
            json!({ "currentPassword": "wrong-password", "newPassword": "new-password-1" }),
        )
        .await;

    assert_eq!(status, 401);
}

#[tokio::test]
async fn change_password_rotates_the_credential() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;
    let login = app.login("ada@analytical.example", "password123").await;
    let token = login["token"].as_str().unwrap();

    let (status, body) = app
        .post_auth(
            "/change-password",
            token,
            json!({ "currentPassword": "password123", "newPassword": "new-password-1" }),
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
async fn change_password_rejects_a_too_short_new_password() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;
    let login = app.login("ada@analytical.example", "password123").await;
    let token = login["token"].as_str().unwrap();

    let (status, _) = app
        .post_auth(
            "/change-password",
            token,
            json!({ "currentPassword": "password123", "newPassword": "short" }),
        )
        .await;

    assert_eq!(status, 400);
}
