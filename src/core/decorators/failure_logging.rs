use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;
use thiserror::Error;

use crate::shared::envelope::{Controller, ResponseEnvelope};

#[derive(Debug, Error)]
#[error("Log sink error: {0}")]
pub struct LogSinkError(pub String);

/// Destination for internal failure details
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn log(&self, detail: &str) -> Result<(), LogSinkError>;
}

/// Wraps a controller and forwards the detail of every 500 response to a
/// log sink. The inner response is returned untouched.
///
/// Sink failures, errors and panics alike, are swallowed so that sign-ups
/// keep working while the log store is down.
pub struct FailureLoggingDecorator<C, L> {
    inner: C,
    log_sink: L,
}

impl<C, L> FailureLoggingDecorator<C, L> {
    pub fn new(inner: C, log_sink: L) -> Self {
        Self { inner, log_sink }
    }
}

#[async_trait]
impl<C, L> Controller for FailureLoggingDecorator<C, L>
where
    C: Controller,
    L: LogSink,
{
    type Request = C::Request;
    type Body = C::Body;

    async fn handle(&self, request: Self::Request) -> ResponseEnvelope<Self::Body> {
        let response = self.inner.handle(request).await;

        if let Some(detail) = response.internal_failure() {
            match AssertUnwindSafe(self.log_sink.log(detail))
                .catch_unwind()
                .await
            {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("Failed to record internal failure: {}", e),
                Err(_) => tracing::warn!("Log sink panicked while recording internal failure"),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::FieldError;
    use crate::shared::test_helpers::{
        fake_account, fake_registration_request, StubController, StubLogSink,
    };

    #[tokio::test]
    async fn test_delegates_request_to_inner_controller() {
        let controller = StubController::responding(ResponseEnvelope::ok(fake_account()));
        let sut = FailureLoggingDecorator::new(controller.clone(), StubLogSink::default());
        let request = fake_registration_request();

        sut.handle(request.clone()).await;

        assert_eq!(*controller.requests.lock().unwrap(), vec![request]);
    }

    #[tokio::test]
    async fn test_success_passes_through_without_logging() {
        let expected = ResponseEnvelope::ok(fake_account());
        let sink = StubLogSink::default();
        let sut = FailureLoggingDecorator::new(
            StubController::responding(expected.clone()),
            sink.clone(),
        );

        let response = sut.handle(fake_registration_request()).await;

        assert_eq!(response, expected);
        assert!(sink.logged.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_error_is_not_logged() {
        let expected = ResponseEnvelope::bad_request(FieldError::Missing("name"));
        let sink = StubLogSink::default();
        let sut = FailureLoggingDecorator::new(
            StubController::responding(expected.clone()),
            sink.clone(),
        );

        let response = sut.handle(fake_registration_request()).await;

        assert_eq!(response, expected);
        assert!(sink.logged.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_logged_once_with_detail() {
        let expected = ResponseEnvelope::server_error("any_stack");
        let sink = StubLogSink::default();
        let sut = FailureLoggingDecorator::new(
            StubController::responding(expected.clone()),
            sink.clone(),
        );

        let response = sut.handle(fake_registration_request()).await;

        assert_eq!(response, expected);
        assert_eq!(*sink.logged.lock().unwrap(), vec!["any_stack".to_string()]);
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_change_response() {
        let expected = ResponseEnvelope::server_error("any_stack");
        let sink = StubLogSink::failing();
        let sut = FailureLoggingDecorator::new(
            StubController::responding(expected.clone()),
            sink.clone(),
        );

        let response = sut.handle(fake_registration_request()).await;

        assert_eq!(response, expected);
        assert_eq!(sink.logged.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sink_panic_does_not_change_response() {
        let expected = ResponseEnvelope::server_error("any_stack");
        let sink = StubLogSink::panicking();
        let sut = FailureLoggingDecorator::new(
            StubController::responding(expected.clone()),
            sink.clone(),
        );

        let response = sut.handle(fake_registration_request()).await;

        assert_eq!(response, expected);
        assert_eq!(sink.logged.lock().unwrap().len(), 1);
    }
}
