//! Transport-agnostic request/response envelope exchanged with controllers.
//!
//! A [`ResponseEnvelope`] can only be built through [`ResponseEnvelope::ok`],
//! [`ResponseEnvelope::bad_request`] and [`ResponseEnvelope::server_error`],
//! so a 200 always carries data, a 400 always carries a [`FieldError`] and a
//! 500 always carries an internal failure detail.

use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

/// Client-side problem with a single request field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Missing param: {0}")]
    Missing(&'static str),

    #[error("Invalid param: {0}")]
    Invalid(&'static str),
}

/// Error carried in the body of a non-200 envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDescriptor {
    MissingField(String),
    InvalidField(String),
    /// Full failure detail. Only the log sink gets to see it.
    InternalFailure(String),
}

impl ErrorDescriptor {
    const INTERNAL_FAILURE_MESSAGE: &'static str = "Internal server error";

    /// Message safe to expose to the caller
    pub fn public_message(&self) -> String {
        match self {
            ErrorDescriptor::MissingField(field) => format!("Missing param: {}", field),
            ErrorDescriptor::InvalidField(field) => format!("Invalid param: {}", field),
            ErrorDescriptor::InternalFailure(_) => Self::INTERNAL_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorDescriptor::InternalFailure(_))
    }
}

impl From<FieldError> for ErrorDescriptor {
    fn from(error: FieldError) -> Self {
        match error {
            FieldError::Missing(field) => ErrorDescriptor::MissingField(field.to_string()),
            FieldError::Invalid(field) => ErrorDescriptor::InvalidField(field.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeBody<T> {
    Data(T),
    Error(ErrorDescriptor),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope<T> {
    status_code: StatusCode,
    body: EnvelopeBody<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: EnvelopeBody::Data(data),
        }
    }

    pub fn bad_request(error: FieldError) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            body: EnvelopeBody::Error(error.into()),
        }
    }

    pub fn server_error(detail: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            body: EnvelopeBody::Error(ErrorDescriptor::InternalFailure(detail.into())),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Failure detail of a 500 envelope, `None` for every other status
    pub fn internal_failure(&self) -> Option<&str> {
        match &self.body {
            EnvelopeBody::Error(ErrorDescriptor::InternalFailure(detail)) => Some(detail),
            _ => None,
        }
    }

    pub fn into_body(self) -> EnvelopeBody<T> {
        self.body
    }
}

/// Capability shared by controllers and the decorators wrapping them.
#[async_trait]
pub trait Controller: Send + Sync {
    type Request: Send + 'static;
    type Body: Send + 'static;

    async fn handle(&self, request: Self::Request) -> ResponseEnvelope<Self::Body>;
}
