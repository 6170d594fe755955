//! Transport-neutral request/response envelope.
//!
//! The three constructors below are the only place where a failure or a
//! created resource becomes an envelope.

use crate::error::SignupFailure;

/// Status code of a successful creation.
pub const CREATED: u16 = 201;
/// Status code of a client error.
pub const BAD_REQUEST: u16 = 400;
/// Status code of a server error.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Incoming request carrying an unvalidated body.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// Either a failure or the resource, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody<T> {
    Error(SignupFailure),
    Resource(T),
}

/// Status code plus body, returned for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<T> {
    pub status_code: u16,
    pub body: HttpBody<T>,
}

/// `400` with the client error as body.
pub fn bad_request<T>(error: impl Into<SignupFailure>) -> HttpResponse<T> {
    HttpResponse {
        status_code: BAD_REQUEST,
        body: HttpBody::Error(error.into()),
    }
}

/// `500` with a generic body which never carries request detail.
pub fn server_error<T>() -> HttpResponse<T> {
    HttpResponse {
        status_code: INTERNAL_SERVER_ERROR,
        body: HttpBody::Error(SignupFailure::ServerFailure),
    }
}

/// `201` with the created resource as body.
pub fn created<T>(resource: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: CREATED,
        body: HttpBody::Resource(resource),
    }
}
