//! Custom error handler for domain (core).

pub type Result<T> = std::result::Result<T, DomainError>;

/// Enum representing signup validation errors.
///
/// Each variant carries the wire name of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Missing param: {field}")]
    MissingParam { field: &'static str },
    #[error("Invalid param: {field}")]
    InvalidParam { field: &'static str },
}

impl DomainError {
    /// Name of the field which failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingParam { field } | Self::InvalidParam { field } => {
                field
            },
        }
    }
}
