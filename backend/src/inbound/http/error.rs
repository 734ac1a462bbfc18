//! HTTP rendering of domain errors for the users API.
//!
//! Every failure leaves the service as `{"error", "code", "traceId"}` with the
//! trace id echoed in the `trace-id` header. Storage rejections keep SQLite's
//! own wording. Internal failures are logged in full and answered with a
//! fixed message.

use std::borrow::Cow;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error, info};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for users API handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of any internal error detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log_rejection(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_view(self))
    }
}

fn log_rejection(error: &Error) {
    let trace_id = error.trace_id().unwrap_or("-");
    let reason = error.message();
    match error.code() {
        ErrorCode::InvalidRequest => info!(trace_id, reason, "request rejected"),
        ErrorCode::NotFound => debug!(trace_id, reason, "no matching user"),
        ErrorCode::InternalError => error!(trace_id, reason, "request failed"),
    }
}

/// The payload clients see; only internal errors are rewritten.
fn client_view(error: &Error) -> Cow<'_, Error> {
    if error.code() != ErrorCode::InternalError {
        return Cow::Borrowed(error);
    }
    let redacted = Error::internal(INTERNAL_ERROR_MESSAGE);
    Cow::Owned(match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    })
}

#[cfg(test)]
mod tests;
