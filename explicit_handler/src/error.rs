use mediator::error::{Error, ErrorKind};

/// Description of the error returned when a request is cancelled.
pub const CANCELLED: &str = "request was cancelled";

/// Returns the error surfaced when the cancellation token of a request fires.
///
/// The error uses the mediator's own error type so the explicit operations
/// return exactly what [`Mediator::send`](mediator::Mediator::send) returns.
pub fn cancelled_error() -> Error {
    Error::new(ErrorKind::Unknown, CANCELLED)
}

/// Returns `true` if the error was produced by a cancelled request.
pub fn is_cancelled(error: &Error) -> bool {
    *error == cancelled_error()
}
