//! Signup controller: the validation chain.

use async_trait::async_trait;
use domain::identity::account::StoredAccount;
use domain::identity::signup::SignupForm;

use crate::dto::SignupRequestDto;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse, bad_request, created, server_error};
use crate::ports::inbound::{AddAccount, Controller};
use crate::ports::outbound::EmailValidator;

/// Signup request handler.
///
/// Checks run in order and the first failure short-circuits: field
/// presence, password confirmation, email format, then account creation.
pub struct SignUpController {
    email_validator: Box<dyn EmailValidator>,
    add_account: Box<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(
        email_validator: Box<dyn EmailValidator>,
        add_account: Box<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// Validation failures are returned as responses, collaborator failures
    /// as `Err`.
    async fn signup(
        &self,
        body: SignupRequestDto,
    ) -> Result<HttpResponse<StoredAccount>> {
        let form = match SignupForm::parse(
            body.name,
            body.email,
            body.password,
            body.password_confirm,
        ) {
            Ok(form) => form,
            Err(err) => {
                tracing::debug!(field = err.field(), %err, "signup rejected");
                return Ok(bad_request(err));
            },
        };

        let email_is_valid = self.email_validator.is_valid(form.email())?;
        let candidate = match form.accept(email_is_valid) {
            Ok(candidate) => candidate,
            Err(err) => return Ok(bad_request(err)),
        };

        let account = self.add_account.add(candidate).await?;

        Ok(created(account))
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Body = SignupRequestDto;
    type Resource = StoredAccount;

    async fn handle(
        &self,
        request: HttpRequest<SignupRequestDto>,
    ) -> HttpResponse<StoredAccount> {
        match self.signup(request.body).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = ?err, "signup returned 500 status");
                server_error()
            },
        }
    }
}
