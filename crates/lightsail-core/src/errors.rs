//! Error types shared by every module of this crate.
//!
//! Enumeration lookups fail with [`WireValueError`](crate::wire::WireValueError);
//! errors returned by the service are decoded into
//! [`ServiceError`](crate::service_error::ServiceError). [`CoreError`] wraps both
//! together with local validation and serialization failures.

use thiserror::Error;

use crate::actions::ActionName;
use crate::service_error::ServiceError;
use crate::wire::WireValueError;

/// Errors that can be raised while building, encoding or decoding API calls.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a declared enumeration value.
    #[error(transparent)]
    Wire(#[from] WireValueError),

    /// A request field violates a documented constraint.
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The service answered with an error payload.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The action exists but has no typed request shape in this crate.
    #[error("Action {0} has no typed request shape")]
    UnsupportedAction(ActionName),
}

impl CoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// The decoded service error, if this error came from the service.
    #[must_use]
    pub const fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(error) => Some(error),
            _ => None,
        }
    }
}
