use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use lectern_adapters::{
    config::AllowedOrigins,
    http::{
        AccountState,
        routes::{change_password, confirm_password_reset, login, me, register, request_password_reset},
    },
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The account service router and everything it needs to serve requests.
pub struct AccountService {
    router: Router,
}

impl AccountService {
    pub fn new(state: AccountState) -> Self {
        let router = Router::new()
            .route("/register", post(register))
            .route("/login", post(login))
            .route("/me", get(me))
            .route("/change-password", post(change_password))
            .route("/password-reset/request", post(request_password_reset))
            .route("/password-reset/confirm", post(confirm_password_reset))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a plain router, optionally restricted to a
    /// CORS origin allow-list. Useful for mounting under another router and
    /// for driving the service in-process from tests.
    pub fn as_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the account service as a standalone server.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service()).await
    }
}
