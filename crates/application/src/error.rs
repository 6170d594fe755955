//! Application-level errors.

use domain::error::DomainError;

pub type Result<T> = std::result::Result<T, ApplicationError>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures raised by collaborators.
///
/// They travel unmodified up to the controller, which hides them behind
/// [`SignupFailure::ServerFailure`].
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("email validation failed")]
    EmailValidation(#[source] BoxError),
    #[error("password hashing failed")]
    Hashing(#[source] BoxError),
    #[error("account persistence failed")]
    Persistence(#[source] BoxError),

    #[error("internal server error")]
    Internal(#[source] BoxError),
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }

    pub fn hashing<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Hashing(Box::new(err))
    }

    pub fn persistence<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(|e| ApplicationError::Internal(Box::new(e)))
    }
}

/// Outcome classes a signup can fail with, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupFailure {
    /// A required field was absent or empty.
    #[error("Missing param: {0}")]
    MissingField(&'static str),
    /// A present field failed a semantic check.
    #[error("Invalid param: {0}")]
    InvalidField(&'static str),
    /// Any unexpected collaborator failure. Carries no detail.
    #[error("Internal server error")]
    ServerFailure,
}

impl SignupFailure {
    /// Offending field, if the failure is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) | Self::InvalidField(field) => {
                Some(field)
            },
            Self::ServerFailure => None,
        }
    }
}

impl From<DomainError> for SignupFailure {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingParam { field } => Self::MissingField(field),
            DomainError::InvalidParam { field } => Self::InvalidField(field),
        }
    }
}
