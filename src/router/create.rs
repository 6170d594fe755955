use application::dto::SignupRequestDto;
use application::http::{HttpBody, HttpRequest, HttpResponse};
use application::ports::inbound::Controller;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::identity::account::StoredAccount;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::{ResponseError, Result};

/// Signup body. Every field is optional here, presence is checked by the
/// signup controller.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

impl From<Body> for SignupRequestDto {
    fn from(body: Body) -> Self {
        Self {
            name: body.name,
            email: body.email,
            password: body.password,
            password_confirm: body.password_confirm,
        }
    }
}

/// Created account, echoed back with its hashed password.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<StoredAccount> for Account {
    fn from(account: StoredAccount) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_owned(),
            email: account.email().to_owned(),
            password: account.password().as_str().to_owned(),
        }
    }
}

fn into_response(response: HttpResponse<StoredAccount>) -> Response {
    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match response.body {
        HttpBody::Resource(account) => {
            (status, Json(Account::from(account))).into_response()
        },
        HttpBody::Error(failure) => {
            ResponseError::from(&failure).status(status).into_response()
        },
    }
}

/// Handler to sign up.
pub async fn handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Body>, JsonRejection>,
) -> Result<Response> {
    let Json(body) = payload?;

    let response = state.signup.handle(HttpRequest::new(body.into())).await;

    metrics::counter!(
        "signup_outcomes_total",
        "status" => response.status_code.to_string()
    )
    .increment(1);

    Ok(into_response(response))
}

#[cfg(test)]
pub(super) mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::*;
    use adapters::outbound::persistence::memory::InMemoryAccountRepository;
    use application::error::{ApplicationError, Result as ApplicationResult};
    use application::ports::outbound::AccountRepository;
    use domain::identity::account::NewAccount;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    struct BrokenRepository;

    #[async_trait::async_trait]
    impl AccountRepository for BrokenRepository {
        async fn add(&self, _: NewAccount) -> ApplicationResult<StoredAccount> {
            Err(ApplicationError::persistence(std::io::Error::other(
                "connection refused by 10.0.0.3",
            )))
        }
    }

    fn state(account_repo: Box<dyn AccountRepository>) -> AppState {
        let config = config::Configuration {
            argon2: Some(config::Argon2 {
                memory_cost: 8,
                iterations: 1,
                parallelism: 1,
                hash_length: 32,
            }),
            ..Default::default()
        };
        let signup = signup_handler(&config, account_repo).unwrap();

        AppState {
            config: Arc::new(config),
            signup: Arc::new(signup),
            metrics: None,
        }
    }

    async fn post(
        account_repo: Box<dyn AccountRepository>,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = app(state(account_repo));
        let response =
            make_request(app, Method::POST, "/signup", body.to_string()).await;

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn valid_body() -> Value {
        json!({
            "name": "A",
            "email": "a@b.com",
            "password": "p",
            "passwordConfirm": "p",
        })
    }

    #[tokio::test]
    async fn test_create_handler() {
        let (status, body) =
            post(Box::new(InMemoryAccountRepository::new()), valid_body()).await;

        assert_eq!(status, StatusCode::CREATED);

        let account: Account = serde_json::from_value(body).unwrap();
        assert!(!account.id.is_empty());
        assert_eq!(account.name, "A");
        assert_eq!(account.email, "a@b.com");
        assert_ne!(account.password, "p");
        assert!(account.password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_missing_field() {
        let mut body = valid_body();
        body["email"] = Value::Null;

        let (status, body) =
            post(Box::new(InMemoryAccountRepository::new()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Missing param: email");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_password_mismatch() {
        let mut body = valid_body();
        body["passwordConfirm"] = json!("q");

        let (status, body) =
            post(Box::new(InMemoryAccountRepository::new()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid param: passwordConfirm");
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let mut body = valid_body();
        body["email"] = json!("not-an-email");

        let (status, body) =
            post(Box::new(InMemoryAccountRepository::new()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "email");
        assert_eq!(body["errors"][0]["message"], "Invalid param: email");
    }

    #[tokio::test]
    async fn test_repository_failure_is_hidden() {
        let (status, body) = post(Box::new(BrokenRepository), valid_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["title"], "Internal server error.");
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (status, body) = post(
            Box::new(InMemoryAccountRepository::new()),
            json!({ "name": 42 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Server error during data parsing.");
    }

    #[tokio::test]
    async fn test_status() {
        let app = app(state(Box::new(InMemoryAccountRepository::new())));
        let response =
            make_request(app, Method::GET, "/status.json", String::new()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["name"], "signup");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
