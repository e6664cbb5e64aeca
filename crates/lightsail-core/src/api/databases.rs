//! Managed database actions.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::actions::ActionName;
use crate::enums::{MetricStatistic, MetricUnit, RelationalDatabaseMetricName};
use crate::epoch_seconds;
use crate::errors::CoreError;
use crate::models::{MetricDatapoint, Operation, RelationalDatabase, Tag};
use crate::protocol::{LightsailRequest, Paginated};
use crate::validate::{self, Validate};

const NAME_MAX_LEN: usize = 255;
const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 8..=41;

// ---------------------------------------------------------------------------
// CreateRelationalDatabase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseRequest {
    pub relational_database_name: String,
    /// Defaults to a random zone in the configured region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Engine and version, e.g. `mysql_5_6`.
    pub relational_database_blueprint_id: String,
    /// Size and plan, e.g. `micro_1_0`.
    pub relational_database_bundle_id: String,
    pub master_database_name: String,
    pub master_username: String,
    /// Generated by the service when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    /// Daily backup window, `hh24:mi-hh24:mi` in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    /// Weekly maintenance window, `ddd:hh24:mi-ddd:hh24:mi` in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateRelationalDatabaseRequest {
    #[must_use]
    pub fn new(
        relational_database_name: impl Into<String>,
        relational_database_blueprint_id: impl Into<String>,
        relational_database_bundle_id: impl Into<String>,
        master_database_name: impl Into<String>,
        master_username: impl Into<String>,
    ) -> Self {
        Self {
            relational_database_name: relational_database_name.into(),
            availability_zone: None,
            relational_database_blueprint_id: relational_database_blueprint_id.into(),
            relational_database_bundle_id: relational_database_bundle_id.into(),
            master_database_name: master_database_name.into(),
            master_username: master_username.into(),
            master_user_password: None,
            preferred_backup_window: None,
            preferred_maintenance_window: None,
            publicly_accessible: None,
            tags: None,
        }
    }
}

impl Validate for CreateRelationalDatabaseRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("relationalDatabaseName", &self.relational_database_name)?;
        if self.relational_database_name.len() > NAME_MAX_LEN {
            return Err(CoreError::validation(
                "relationalDatabaseName",
                format!("must be at most {NAME_MAX_LEN} characters"),
            ));
        }
        validate::non_blank(
            "relationalDatabaseBlueprintId",
            &self.relational_database_blueprint_id,
        )?;
        validate::non_blank("relationalDatabaseBundleId", &self.relational_database_bundle_id)?;
        validate::non_blank("masterDatabaseName", &self.master_database_name)?;
        validate::non_blank("masterUsername", &self.master_username)?;
        if let Some(password) = &self.master_user_password {
            master_password(password)?;
        }
        if let Some(tags) = &self.tags {
            tags.validate()?;
        }
        Ok(())
    }
}

/// Printable ASCII except `/`, `"` and `@`; 8 to 41 characters.
fn master_password(password: &str) -> Result<(), CoreError> {
    if !PASSWORD_LEN.contains(&password.len()) {
        return Err(CoreError::validation(
            "masterUserPassword",
            format!(
                "must contain {} to {} characters",
                PASSWORD_LEN.start(),
                PASSWORD_LEN.end()
            ),
        ));
    }
    let forbidden = |c: char| !c.is_ascii_graphic() || matches!(c, '/' | '"' | '@');
    if password.chars().any(forbidden) {
        return Err(CoreError::validation(
            "masterUserPassword",
            "may only contain printable ASCII characters other than '/', '\"' and '@'",
        ));
    }
    Ok(())
}

impl LightsailRequest for CreateRelationalDatabaseRequest {
    const ACTION: ActionName = ActionName::CreateRelationalDatabase;
    type Response = CreateRelationalDatabaseResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

// ---------------------------------------------------------------------------
// GetRelationalDatabase / GetRelationalDatabases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseRequest {
    pub relational_database_name: String,
}

impl GetRelationalDatabaseRequest {
    #[must_use]
    pub fn new(relational_database_name: impl Into<String>) -> Self {
        Self {
            relational_database_name: relational_database_name.into(),
        }
    }
}

impl Validate for GetRelationalDatabaseRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("relationalDatabaseName", &self.relational_database_name)
    }
}

impl LightsailRequest for GetRelationalDatabaseRequest {
    const ACTION: ActionName = ActionName::GetRelationalDatabase;
    type Response = GetRelationalDatabaseResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database: Option<RelationalDatabase>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabasesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl GetRelationalDatabasesRequest {
    #[must_use]
    pub fn page(page_token: impl Into<String>) -> Self {
        Self {
            page_token: Some(page_token.into()),
        }
    }
}

impl Validate for GetRelationalDatabasesRequest {
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

impl LightsailRequest for GetRelationalDatabasesRequest {
    const ACTION: ActionName = ActionName::GetRelationalDatabases;
    type Response = GetRelationalDatabasesResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabasesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_databases: Option<Vec<RelationalDatabase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Paginated for GetRelationalDatabasesResult {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

// ---------------------------------------------------------------------------
// GetRelationalDatabaseMetricData
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseMetricDataRequest {
    pub relational_database_name: String,
    pub metric_name: RelationalDatabaseMetricName,
    /// Granularity in seconds.
    pub period: i32,
    #[serde(with = "epoch_seconds::required")]
    #[schemars(with = "f64")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "epoch_seconds::required")]
    #[schemars(with = "f64")]
    pub end_time: DateTime<Utc>,
    pub unit: MetricUnit,
    pub statistics: Vec<MetricStatistic>,
}

impl Validate for GetRelationalDatabaseMetricDataRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("relationalDatabaseName", &self.relational_database_name)?;
        validate::metric_query(self.period, &self.start_time, &self.end_time, &self.statistics)
    }
}

impl LightsailRequest for GetRelationalDatabaseMetricDataRequest {
    const ACTION: ActionName = ActionName::GetRelationalDatabaseMetricData;
    type Response = GetRelationalDatabaseMetricDataResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseMetricDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<RelationalDatabaseMetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_data: Option<Vec<MetricDatapoint>>,
}
