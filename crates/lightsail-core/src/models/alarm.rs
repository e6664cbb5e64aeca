use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    AlarmState, ComparisonOperator, ContactProtocol, MetricName, MetricStatistic, MetricUnit,
    ResourceType, TreatMissingData,
};
use crate::epoch_seconds;
use crate::models::{MonitoredResourceInfo, ResourceLocation};

/// A metric alarm as reported by `GetAlarms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, with = "epoch_seconds::optional", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<f64>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_resource_info: Option<MonitoredResourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<i32>,
    /// Aggregation period in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datapoints_to_alarm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_data: Option<TreatMissingData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<MetricStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<MetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AlarmState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_protocols: Option<Vec<ContactProtocol>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_triggers: Option<Vec<AlarmState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_enabled: Option<bool>,
}

impl Alarm {
    /// Whether the alarm is currently firing.
    #[must_use]
    pub fn is_alarming(&self) -> bool {
        self.state == Some(AlarmState::Alarm)
    }
}
