//! Errors reported by the service itself.
//!
//! Every modeled exception carries the same four optional strings: an opaque
//! `code`, a `docs` URL, a human-readable `message` and a `tip`. They are kept
//! verbatim for the caller to display or log; nothing here interprets them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wire::{WireEnum, wire_enum};

wire_enum! {
    /// Exception types the service documents for its actions.
    pub enum ServiceErrorKind {
        AccessDenied => "AccessDeniedException",
        AccountSetupInProgress => "AccountSetupInProgressException",
        InvalidInput => "InvalidInputException",
        /// The named resource does not exist.
        NotFound => "NotFoundException",
        OperationFailure => "OperationFailureException",
        Service => "ServiceException",
        Unauthenticated => "UnauthenticatedException",
    }
}

/// An error payload returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Error)]
#[error("{type_name} (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
pub struct ServiceError {
    /// The recognized exception type; `None` when `type_name` is not modeled.
    pub kind: Option<ServiceErrorKind>,
    /// Exception type name as sent by the service, namespace stripped.
    pub type_name: String,
    /// HTTP status of the response.
    pub status: u16,
    pub code: Option<String>,
    pub docs: Option<String>,
    pub message: Option<String>,
    pub tip: Option<String>,
}

/// Raw error body as it appears on the wire.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    type_name: Option<String>,
    code: Option<String>,
    docs: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
    tip: Option<String>,
}

const UNKNOWN_TYPE: &str = "UnknownError";

impl ServiceError {
    /// Decode an error response body.
    ///
    /// Never fails: a body that is not a JSON error object still produces a
    /// `ServiceError`, with the raw text as its message.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = if body.iter().all(u8::is_ascii_whitespace) {
            ErrorBody::default()
        } else if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
            parsed
        } else {
            ErrorBody {
                message: Some(String::from_utf8_lossy(body).into_owned()),
                ..ErrorBody::default()
            }
        };

        let type_name = parsed
            .type_name
            .as_deref()
            .map_or_else(|| UNKNOWN_TYPE.to_string(), normalize_type_name);
        let kind = ServiceErrorKind::from_wire_value(&type_name).ok();
        if kind.is_none() {
            tracing::warn!(%type_name, status, "unrecognized service error type");
        }

        Self {
            kind,
            type_name,
            status,
            code: parsed.code,
            docs: parsed.docs,
            message: parsed.message,
            tip: parsed.tip,
        }
    }

    /// Whether the service reported that the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == Some(ServiceErrorKind::NotFound)
    }
}

/// Strip a `namespace#` prefix and a `:uri` suffix from an error type.
fn normalize_type_name(raw: &str) -> String {
    let without_namespace = raw.rsplit('#').next().unwrap_or(raw);
    let without_suffix = without_namespace
        .split(':')
        .next()
        .unwrap_or(without_namespace);
    without_suffix.trim().to_string()
}
