//! Metric alarms: `PutAlarm`, `GetAlarms`, `DeleteAlarm`, `TestAlarm`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::actions::ActionName;
use crate::enums::{AlarmState, ComparisonOperator, ContactProtocol, MetricName, TreatMissingData};
use crate::errors::CoreError;
use crate::models::{Alarm, Operation};
use crate::protocol::{LightsailRequest, Paginated};
use crate::validate::{self, Validate};

// ---------------------------------------------------------------------------
// PutAlarm
// ---------------------------------------------------------------------------

/// Create an alarm, or replace the alarm with the same name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PutAlarmRequest {
    pub alarm_name: String,
    pub metric_name: MetricName,
    pub monitored_resource_name: String,
    pub comparison_operator: ComparisonOperator,
    pub threshold: f64,
    pub evaluation_periods: i32,
    /// Breaching datapoints within `evaluationPeriods` needed to alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datapoints_to_alarm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_data: Option<TreatMissingData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_protocols: Option<Vec<ContactProtocol>>,
    /// States that trigger a notification. When set, must include `ALARM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_triggers: Option<Vec<AlarmState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_enabled: Option<bool>,
}

impl PutAlarmRequest {
    #[must_use]
    pub fn new(
        alarm_name: impl Into<String>,
        metric_name: MetricName,
        monitored_resource_name: impl Into<String>,
        comparison_operator: ComparisonOperator,
        threshold: f64,
        evaluation_periods: i32,
    ) -> Self {
        Self {
            alarm_name: alarm_name.into(),
            metric_name,
            monitored_resource_name: monitored_resource_name.into(),
            comparison_operator,
            threshold,
            evaluation_periods,
            datapoints_to_alarm: None,
            treat_missing_data: None,
            contact_protocols: None,
            notification_triggers: None,
            notification_enabled: None,
        }
    }
}

impl Validate for PutAlarmRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("alarmName", &self.alarm_name)?;
        validate::resource_name("monitoredResourceName", &self.monitored_resource_name)?;
        if !self.threshold.is_finite() {
            return Err(CoreError::validation("threshold", "must be a finite number"));
        }
        validate::in_range(
            "evaluationPeriods",
            self.evaluation_periods,
            &validate::EVALUATION_PERIODS,
        )?;
        if let Some(datapoints) = self.datapoints_to_alarm {
            validate::in_range("datapointsToAlarm", datapoints, &(1..=self.evaluation_periods))?;
        }
        let triggers = self.notification_triggers.as_deref().unwrap_or_default();
        if !triggers.is_empty() && !triggers.contains(&AlarmState::Alarm) {
            return Err(CoreError::validation(
                "notificationTriggers",
                "must include ALARM when any trigger is set",
            ));
        }
        Ok(())
    }
}

impl LightsailRequest for PutAlarmRequest {
    const ACTION: ActionName = ActionName::PutAlarm;
    type Response = PutAlarmResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PutAlarmResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

// ---------------------------------------------------------------------------
// GetAlarms
// ---------------------------------------------------------------------------

/// List alarms, optionally narrowed to one alarm or one monitored resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAlarmsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_resource_name: Option<String>,
}

impl GetAlarmsRequest {
    /// The same query, continued from `page_token`.
    #[must_use]
    pub fn next_page(&self, page_token: impl Into<String>) -> Self {
        Self {
            page_token: Some(page_token.into()),
            ..self.clone()
        }
    }
}

impl Validate for GetAlarmsRequest {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.alarm_name {
            validate::resource_name("alarmName", name)?;
        }
        if let Some(name) = &self.monitored_resource_name {
            validate::resource_name("monitoredResourceName", name)?;
        }
        Ok(())
    }
}

impl LightsailRequest for GetAlarmsRequest {
    const ACTION: ActionName = ActionName::GetAlarms;
    type Response = GetAlarmsResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetAlarmsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<Alarm>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Paginated for GetAlarmsResult {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

// ---------------------------------------------------------------------------
// DeleteAlarm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAlarmRequest {
    pub alarm_name: String,
}

impl DeleteAlarmRequest {
    #[must_use]
    pub fn new(alarm_name: impl Into<String>) -> Self {
        Self {
            alarm_name: alarm_name.into(),
        }
    }
}

impl Validate for DeleteAlarmRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("alarmName", &self.alarm_name)
    }
}

impl LightsailRequest for DeleteAlarmRequest {
    const ACTION: ActionName = ActionName::DeleteAlarm;
    type Response = DeleteAlarmResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAlarmResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

// ---------------------------------------------------------------------------
// TestAlarm
// ---------------------------------------------------------------------------

/// Force an alarm into `state` to exercise its notifications.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestAlarmRequest {
    pub alarm_name: String,
    pub state: AlarmState,
}

impl TestAlarmRequest {
    #[must_use]
    pub fn new(alarm_name: impl Into<String>, state: AlarmState) -> Self {
        Self {
            alarm_name: alarm_name.into(),
            state,
        }
    }
}

impl Validate for TestAlarmRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("alarmName", &self.alarm_name)
    }
}

impl LightsailRequest for TestAlarmRequest {
    const ACTION: ActionName = ActionName::TestAlarm;
    type Response = TestAlarmResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestAlarmResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}
