//! Instance actions: snapshot restore, metrics and firewall ports.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::actions::ActionName;
use crate::enums::{InstanceMetricName, MetricStatistic, MetricUnit};
use crate::epoch_seconds;
use crate::errors::CoreError;
use crate::models::{
    AddOnRequest, DiskMap, InstancePortState, MetricDatapoint, Operation, PortInfo, Tag,
};
use crate::protocol::LightsailRequest;
use crate::validate::{self, Validate};

// ---------------------------------------------------------------------------
// CreateInstancesFromSnapshot
// ---------------------------------------------------------------------------

/// Create one or more instances from a manual snapshot, or from an automatic
/// snapshot of `sourceInstanceName`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesFromSnapshotRequest {
    pub instance_names: Vec<String>,
    /// Disk path in the snapshot to the disks to create from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_disk_mapping: Option<BTreeMap<String, Vec<DiskMap>>>,
    pub availability_zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_snapshot_name: Option<String>,
    pub bundle_id: String,
    /// Launch script run on first boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<AddOnRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_instance_name: Option<String>,
    /// Date of the automatic snapshot to restore, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_auto_snapshot: Option<bool>,
}

impl CreateInstancesFromSnapshotRequest {
    #[must_use]
    pub fn new(
        instance_names: Vec<String>,
        availability_zone: impl Into<String>,
        bundle_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_names,
            attached_disk_mapping: None,
            availability_zone: availability_zone.into(),
            instance_snapshot_name: None,
            bundle_id: bundle_id.into(),
            user_data: None,
            key_pair_name: None,
            tags: None,
            add_ons: None,
            source_instance_name: None,
            restore_date: None,
            use_latest_restorable_auto_snapshot: None,
        }
    }
}

impl Validate for CreateInstancesFromSnapshotRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::non_empty("instanceNames", &self.instance_names)?;
        validate::non_blank("availabilityZone", &self.availability_zone)?;
        validate::non_blank("bundleId", &self.bundle_id)?;

        match (&self.instance_snapshot_name, &self.source_instance_name) {
            (Some(_), Some(_)) => {
                return Err(CoreError::validation(
                    "sourceInstanceName",
                    "cannot be combined with instanceSnapshotName",
                ));
            }
            (None, None) => {
                return Err(CoreError::validation(
                    "instanceSnapshotName",
                    "either instanceSnapshotName or sourceInstanceName is required",
                ));
            }
            (Some(name), None) => validate::resource_name("instanceSnapshotName", name)?,
            (None, Some(name)) => validate::resource_name("sourceInstanceName", name)?,
        }

        if let Some(date) = &self.restore_date {
            if self.use_latest_restorable_auto_snapshot.is_some() {
                return Err(CoreError::validation(
                    "restoreDate",
                    "cannot be combined with useLatestRestorableAutoSnapshot",
                ));
            }
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err(CoreError::validation(
                    "restoreDate",
                    format!("'{date}' is not a YYYY-MM-DD date"),
                ));
            }
        }
        if self.source_instance_name.is_none()
            && (self.restore_date.is_some() || self.use_latest_restorable_auto_snapshot.is_some())
        {
            return Err(CoreError::validation(
                "restoreDate",
                "automatic snapshot options require sourceInstanceName",
            ));
        }

        if let Some(key_pair) = &self.key_pair_name {
            validate::resource_name("keyPairName", key_pair)?;
        }
        if let Some(mapping) = &self.attached_disk_mapping {
            for (path, disks) in mapping {
                validate::non_blank("attachedDiskMapping", path)?;
                disks.validate()?;
            }
        }
        if let Some(tags) = &self.tags {
            tags.validate()?;
        }
        if let Some(add_ons) = &self.add_ons {
            add_ons.validate()?;
        }
        validate::resource_names("instanceNames", &self.instance_names)
    }
}

impl LightsailRequest for CreateInstancesFromSnapshotRequest {
    const ACTION: ActionName = ActionName::CreateInstancesFromSnapshot;
    type Response = CreateInstancesFromSnapshotResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesFromSnapshotResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

// ---------------------------------------------------------------------------
// GetInstanceMetricData
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceMetricDataRequest {
    pub instance_name: String,
    pub metric_name: InstanceMetricName,
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

impl Validate for GetInstanceMetricDataRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("instanceName", &self.instance_name)?;
        validate::metric_query(self.period, &self.start_time, &self.end_time, &self.statistics)
    }
}

impl LightsailRequest for GetInstanceMetricDataRequest {
    const ACTION: ActionName = ActionName::GetInstanceMetricData;
    type Response = GetInstanceMetricDataResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceMetricDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<InstanceMetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_data: Option<Vec<MetricDatapoint>>,
}

// ---------------------------------------------------------------------------
// OpenInstancePublicPorts / PutInstancePublicPorts
// ---------------------------------------------------------------------------

/// Open one port range, leaving the rest of the firewall as it is.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenInstancePublicPortsRequest {
    pub port_info: PortInfo,
    pub instance_name: String,
}

impl OpenInstancePublicPortsRequest {
    #[must_use]
    pub fn new(instance_name: impl Into<String>, port_info: PortInfo) -> Self {
        Self {
            port_info,
            instance_name: instance_name.into(),
        }
    }
}

impl Validate for OpenInstancePublicPortsRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("instanceName", &self.instance_name)?;
        self.port_info.validate()
    }
}

impl LightsailRequest for OpenInstancePublicPortsRequest {
    const ACTION: ActionName = ActionName::OpenInstancePublicPorts;
    type Response = OpenInstancePublicPortsResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenInstancePublicPortsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
}

/// Replace the whole firewall with `portInfos`; anything not listed closes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PutInstancePublicPortsRequest {
    pub port_infos: Vec<PortInfo>,
    pub instance_name: String,
}

impl PutInstancePublicPortsRequest {
    #[must_use]
    pub fn new(instance_name: impl Into<String>, port_infos: Vec<PortInfo>) -> Self {
        Self {
            port_infos,
            instance_name: instance_name.into(),
        }
    }
}

impl Validate for PutInstancePublicPortsRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("instanceName", &self.instance_name)?;
        validate::non_empty("portInfos", &self.port_infos)?;
        self.port_infos.validate()
    }
}

impl LightsailRequest for PutInstancePublicPortsRequest {
    const ACTION: ActionName = ActionName::PutInstancePublicPorts;
    type Response = PutInstancePublicPortsResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PutInstancePublicPortsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
}

// ---------------------------------------------------------------------------
// GetInstancePortStates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetInstancePortStatesRequest {
    pub instance_name: String,
}

impl GetInstancePortStatesRequest {
    #[must_use]
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
        }
    }
}

impl Validate for GetInstancePortStatesRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("instanceName", &self.instance_name)
    }
}

impl LightsailRequest for GetInstancePortStatesRequest {
    const ACTION: ActionName = ActionName::GetInstancePortStates;
    type Response = GetInstancePortStatesResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetInstancePortStatesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_states: Option<Vec<InstancePortState>>,
}
