mod failure_logging;

pub use failure_logging::{FailureLoggingDecorator, LogSink, LogSinkError};
