use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
};
use chrono::{DateTime, Duration, Utc};
use lectern_adapters::{
    email::{MockEmailClient, SentEmail},
    http::AccountState,
    persistence::{HashMapResetTokenStore, HashMapUserStore},
    sessions::SessionConfig,
};
use lectern_core::Clock;
use lectern_service::AccountService;
use secrecy::Secret;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
pub const RESET_URL_BASE: &str = "https://app.lectern.test/reset";

/// Clock double that tests can move forward to cross expiry boundaries.
#[derive(Clone)]
pub struct TestClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(RwLock::new(Utc::now())),
        }
    }

    pub fn advance(&self, delta: Duration) {
        *self.now.write().unwrap() += delta;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

/// The full service router wired up with in-memory stores, driven in-process
/// through `tower::ServiceExt::oneshot`.
pub struct TestApp {
    router: Router,
    pub email_client: MockEmailClient,
    pub clock: TestClock,
}

pub fn spawn_app() -> TestApp {
    let email_client = MockEmailClient::new();
    let clock = TestClock::new();

    let state = AccountState {
        user_store: Arc::new(HashMapUserStore::new()),
        reset_token_store: Arc::new(HashMapResetTokenStore::new()),
        email_client: Arc::new(email_client.clone()),
        clock: Arc::new(clock.clone()),
        sessions: SessionConfig::new(Secret::from(TEST_JWT_SECRET.to_string())),
        reset_url_base: RESET_URL_BASE.to_string(),
    };

    TestApp {
        router: AccountService::new(state).as_router(None),
        email_client,
        clock,
    }
}

impl TestApp {
    pub async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        self.request(Method::POST, path, Some(body), None).await
    }

    pub async fn post_auth(&self, path: &str, token: &str, body: Value) -> (u16, Value) {
        self.request(Method::POST, path, Some(body), Some(token))
            .await
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (u16, Value) {
        self.request(Method::GET, path, None, Some(token)).await
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        self.request(Method::GET, path, None, None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (u16, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        let request = builder.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status().as_u16();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
        };

        (status, json)
    }

    pub async fn register_teacher(&self, email: &str, password: &str) {
        let (status, _) = self
            .post(
                "/register",
                json!({
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": email,
                    "userType": "teacher",
                    "password": password,
                }),
            )
            .await;
        assert_eq!(status, 201);
    }

    pub async fn login(&self, email: &str, password: &str) -> Value {
        let (status, body) = self
            .post("/login", json!({ "email": email, "password": password }))
            .await;
        assert_eq!(status, 200);
        body
    }

    pub async fn last_sent_email(&self) -> SentEmail {
        self.email_client
            .sent()
            .await
            .pop()
            .expect("No email was sent")
    }

    /// Fish the reset token out of the most recent email.
    pub async fn reset_token_from_email(&self) -> String {
        let email = self.last_sent_email().await;
        let marker = "token=";
        let start = email
            .content
            .find(marker)
            .expect("Email did not contain a reset link")
            + marker.len();
        email.content[start..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect()
    }
}
