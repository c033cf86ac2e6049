//! Shared validation helpers for inbound HTTP adapters.
//!
//! Required-field checks collect every missing field before failing so
//! clients can render all problems at once. Identifier and timestamp parsing
//! report the offending value alongside a snake_case code.

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Collector for required-field checks on a request payload.
///
/// Call [`RequiredFields::take`] for each mandatory field, then
/// [`RequiredFields::finish`] to fail with a single aggregated error when
/// anything was absent.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `field` as missing unless a value was supplied.
    pub(crate) fn take<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    /// Fail with one `invalid_request` error listing every missing field.
    pub(crate) fn finish(self) -> Result<(), Error> {
        if self.missing.is_empty() {
            return Ok(());
        }
        let fields = self.missing.join(", ");
        let errors: Vec<_> = self
            .missing
            .into_iter()
            .map(|field| json!({"field": field, "code": "required"}))
            .collect();
        Err(
            Error::invalid_request(format!("missing required field: {fields}"))
                .with_details(json!({ "errors": errors })),
        )
    }
}

pub(crate) fn invalid_uuid_error(field: &'static str, value: &str) -> Error {
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

pub(crate) fn parse_uuid(value: &str, field: &'static str) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn invalid_timestamp_error(field: &'static str, value: &str) -> Error {
    Error::invalid_request(format!("{field} must be an RFC 3339 timestamp")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_timestamp",
    }))
}

pub(crate) fn parse_rfc3339_timestamp(
    value: &str,
    field: &'static str,
) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| invalid_timestamp_error(field, value))
}

pub(crate) fn parse_optional_rfc3339_timestamp(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, Error> {
    value
        .map(|raw| parse_rfc3339_timestamp(&raw, field))
        .transpose()
}

/// Split a comma-separated skills string into an ordered list.
///
/// Whitespace around each entry is trimmed and empty segments are dropped,
/// so `"a, b"` parses to `["a", "b"]`.
pub(crate) fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
