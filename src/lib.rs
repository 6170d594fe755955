//! Account registration API.
//!
//! `POST /signup` validates a signup request, hashes its password and
//! stores the account, answering `201`, `400` or `500`.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
mod router;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use adapters::outbound::crypto::Argon2PasswordHasher;
use adapters::outbound::email::EmailValidatorAdapter;
use adapters::outbound::persistence::memory::InMemoryAccountRepository;
use adapters::outbound::persistence::postgres::PgAccountRepository;
use application::dto::SignupRequestDto;
use application::ports::inbound::Controller;
use application::ports::outbound::AccountRepository;
use application::usecases::{AddAccountUseCase, SignUpController};
use axum::http::{Method, StatusCode, header};
use axum::routing::{get, post};
use axum::{Router, middleware as AxumMiddleware};
use domain::identity::account::StoredAccount;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

pub const DEFAULT_POOL_SIZE: u32 = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Signup request handler, as seen by the routes.
pub type SignupHandler =
    dyn Controller<Body = SignupRequestDto, Resource = StoredAccount>;

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub signup: Arc<SignupHandler>,
    pub metrics: Option<PrometheusHandle>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
        )
        // Hung collaborators are cut here.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, REQUEST_TIMEOUT))
        // Remove senstive headers from trace.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION, header::COOKIE]))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        );

    let mut routes = Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        // `POST /signup` goes to `create`.
        .route("/signup", post(router::create::handler));

    if state.metrics.is_some() {
        routes = routes.route("/metrics", get(telemetry::render));
    }

    routes
        .with_state(state)
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Build the signup pipeline out of configured adapters.
pub fn signup_handler(
    config: &config::Configuration,
    account_repo: Box<dyn AccountRepository>,
) -> Result<SignUpController, Box<dyn std::error::Error>> {
    let argon2 = config.argon2.clone().unwrap_or_default();
    let hasher = Argon2PasswordHasher::new(
        argon2.memory_cost,
        argon2.iterations,
        argon2.parallelism,
        argon2.hash_length,
    )?;

    let add_account = AddAccountUseCase::new(Box::new(hasher), account_repo);

    Ok(SignUpController::new(
        Box::new(EmailValidatorAdapter::new()),
        Box::new(add_account),
    ))
}

/// Initialize the application state.
pub async fn initialize_state(
    config: Arc<config::Configuration>,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let account_repo: Box<dyn AccountRepository> = match &config.postgres {
        Some(postgres) => {
            let mut options = PgConnectOptions::new()
                .host(&postgres.host)
                .port(postgres.port);
            if let Some(database) = &postgres.database {
                options = options.database(database);
            }
            if let Some(username) = &postgres.username {
                options = options.username(username);
            }
            if let Some(password) = &postgres.password {
                options = options.password(password);
            }

            let pool = PgPoolOptions::new()
                .max_connections(postgres.pool_size.unwrap_or(DEFAULT_POOL_SIZE))
                .connect_with(options)
                .await?;

            // execute migrations scripts on start.
            sqlx::migrate!().run(&pool).await?;

            Box::new(PgAccountRepository::new(pool))
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on `config.yaml` file, accounts are kept in memory"
            );
            Box::new(InMemoryAccountRepository::new())
        },
    };

    let signup = signup_handler(&config, account_repo)?;

    Ok(AppState {
        config,
        signup: Arc::new(signup),
        metrics: None,
    })
}
