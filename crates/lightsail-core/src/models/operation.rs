use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OperationStatus, ResourceType};
use crate::epoch_seconds;
use crate::models::ResourceLocation;

/// An asynchronous change started by a mutating action.
///
/// Mutating actions return one `Operation` per affected resource; callers
/// poll with `GetOperation` until [`Operation::is_finished`] holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(default, with = "epoch_seconds::optional", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<f64>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_terminal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_details: Option<String>,
    /// Kept as the raw wire string; the set of operation types grows with
    /// the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OperationStatus>,
    #[serde(default, with = "epoch_seconds::optional", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<f64>")]
    pub status_changed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl Operation {
    /// Whether the operation has reached a final state.
    ///
    /// Trusts `isTerminal` when the service sent it, otherwise falls back to
    /// the status.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_terminal
            .unwrap_or_else(|| self.status.is_some_and(OperationStatus::is_terminal))
    }

    /// Whether the operation ended in failure.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == Some(OperationStatus::Failed) || self.error_code.is_some()
    }
}
