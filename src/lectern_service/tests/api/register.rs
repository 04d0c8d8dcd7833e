use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn register_creates_a_user() {
    let app = spawn_app();

    let (status, body) = app
        .post(
            "/register",
            json!({
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@navy.example",
                "userType": "teacher",
                "password": "password123",
            }),
        )
        .await;

    assert_eq!(status, 201);
    assert_eq!(body["message"], "User created successfully");
}

#[tokio::test]
async fn register_accepts_a_student_with_a_group() {
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
}

#[tokio::test]
async fn register_rejects_a_student_without_a_group() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/register",
            json!({
                "firstName": "Alan",
                "lastName": "Turing",
                "email": "alan@kings.example",
                "userType": "student",
                "password": "password123",
            }),
        )
        .await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn register_rejects_a_group_for_non_students() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/register",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@analytical.example",
                "userType": "applicant",
                "group": "CS-101",
                "password": "password123",
            }),
        )
        .await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn register_treats_an_empty_group_as_absent() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/register",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@analytical.example",
                "userType": "applicant",
                "group": "",
                "password": "password123",
            }),
        )
        .await;

    assert_eq!(status, 201);
}

#[tokio::test]
async fn register_rejects_an_unknown_role() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/register",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@analytical.example",
                "userType": "admin",
                "password": "password123",
            }),
        )
        .await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn register_rejects_an_invalid_email() {
    let app = spawn_app();

    let (status, _) = app
        .post(
            "/register",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "not-an-email",
                "userType": "teacher",
                "password": "password123",
            }),
        )
        .await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn register_returns_409_for_a_duplicate_email() {
    let app = spawn_app();
    app.register_teacher("ada@analytical.example", "password123")
        .await;

    let (status, _) = app
        .post(
            "/register",
            json!({
                "firstName": "Other",
                "lastName": "Person",
                "email": "ada@analytical.example",
                "userType": "applicant",
                "password": "different-password",
            }),
        )
        .await;

    assert_eq!(status, 409);
}
