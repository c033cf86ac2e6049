//! Error envelope shared by domain services and returned on every failing
//! request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::trace_id::TraceId;

/// Machine-readable error codes carried by [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request was malformed or failed validation.
    InvalidRequest,
    /// The caller is not authenticated.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected failure occurred while handling the request.
    InternalError,
}

/// Structured error envelope serialised on every failing response.
///
/// The `trace_id` is captured from the active request scope when the error
/// is constructed, tying the response to the server-side log stream.
///
/// # Examples
/// ```
/// use devfolio_backend::domain::{Error, ErrorCode};
///
/// let error = Error::invalid_request("missing required field: status");
/// assert_eq!(error.code, ErrorCode::InvalidRequest);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable code.
    pub code: ErrorCode,
    /// Human-readable description of the failure.
    pub message: String,
    /// Correlation identifier of the request that produced the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    pub trace_id: Option<String>,
    /// Optional structured context, e.g. per-field validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Construct an error, capturing the current trace identifier when one
    /// is in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach structured details to the error.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Override the trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// A malformed or invalid request.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// The caller is not authenticated.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// The requested resource does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// An unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn constructors_set_expected_codes() {
        assert_eq!(
            Error::invalid_request("bad").code,
            ErrorCode::InvalidRequest
        );
        assert_eq!(Error::unauthorized("who").code, ErrorCode::Unauthorized);
        assert_eq!(Error::not_found("where").code, ErrorCode::NotFound);
        assert_eq!(Error::internal("boom").code, ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn new_captures_trace_id_in_scope() {
        let trace_id: TraceId = "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            .parse()
            .expect("valid UUID");
        let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
        assert_eq!(error.trace_id.as_deref(), Some(trace_id.to_string().as_str()));
    }

    #[test]
    fn new_leaves_trace_id_empty_out_of_scope() {
        let error = Error::internal("boom");
        assert!(error.trace_id.is_none());
    }

    #[test]
    fn serialises_camel_case_and_skips_empty_fields() {
        let error = Error::invalid_request("bad");
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(value["code"], "invalid_request");
        assert_eq!(value["message"], "bad");
        assert!(value.get("traceId").is_none());
        assert!(value.get("details").is_none());
    }

    #[test]
    fn serialises_details_when_present() {
        let error = Error::invalid_request("bad")
            .with_trace_id("trace-1")
            .with_details(serde_json::json!({"field": "status"}));
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(value["traceId"], "trace-1");
        assert_eq!(value["details"]["field"], "status");
    }

    #[test]
    fn deserialises_snake_case_trace_alias() {
        let error: Error = serde_json::from_value(serde_json::json!({
            "code": "not_found",
            "message": "missing",
            "trace_id": "trace-2",
        }))
        .expect("deserialise error");
        assert_eq!(error.code, ErrorCode::NotFound);
        assert_eq!(error.trace_id.as_deref(), Some("trace-2"));
    }
}
