//! Data Transfer Objects for the application layer.

/// Raw signup fields, as received from the transport.
///
/// No invariant holds: any field may be absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}
