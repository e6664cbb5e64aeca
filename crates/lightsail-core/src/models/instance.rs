use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AccessDirection, AddOnType, NetworkProtocol, PortAccessType, PortState};
use crate::errors::CoreError;
use crate::validate::{self, Validate};

// ---------------------------------------------------------------------------
// Firewall ports
// ---------------------------------------------------------------------------

/// A firewall rule as described by `GetInstance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePortInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<NetworkProtocol>,
    /// Where traffic may originate, e.g. `Anywhere (0.0.0.0/0)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<PortAccessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_direction: Option<AccessDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidrs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_list_aliases: Option<Vec<String>>,
}

/// Whether a port range is open, as reported by `GetInstancePortStates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePortState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<NetworkProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PortState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidrs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_list_aliases: Option<Vec<String>>,
}

/// A port range to open or set on an instance firewall.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<NetworkProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidrs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_list_aliases: Option<Vec<String>>,
}

impl PortInfo {
    #[must_use]
    pub const fn range(protocol: NetworkProtocol, from_port: i32, to_port: i32) -> Self {
        Self {
            from_port: Some(from_port),
            to_port: Some(to_port),
            protocol: Some(protocol),
            cidrs: None,
            cidr_list_aliases: None,
        }
    }
}

impl Validate for PortInfo {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(from) = self.from_port {
            validate::in_range("portInfo.fromPort", from, &validate::PORT)?;
        }
        if let Some(to) = self.to_port {
            validate::in_range("portInfo.toPort", to, &validate::PORT)?;
        }
        // For icmp the pair is (type, code), not a range.
        if self.protocol == Some(NetworkProtocol::Icmp) {
            return Ok(());
        }
        match (self.from_port, self.to_port) {
            (Some(from), Some(to)) if from > to => Err(CoreError::validation(
                "portInfo.toPort",
                format!("{to} is lower than fromPort {from}"),
            )),
            _ => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot restore inputs
// ---------------------------------------------------------------------------

/// Maps a disk path of the source snapshot to the name of the new disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiskMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_disk_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_disk_name: Option<String>,
}

impl Validate for DiskMap {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(path) = &self.original_disk_path {
            validate::non_blank("attachedDiskMapping.originalDiskPath", path)?;
        }
        if let Some(name) = &self.new_disk_name {
            validate::resource_name("attachedDiskMapping.newDiskName", name)?;
        }
        Ok(())
    }
}

/// Enables an add-on on a newly created resource.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddOnRequest {
    pub add_on_type: AddOnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_snapshot_add_on_request: Option<AutoSnapshotAddOnRequest>,
}

impl AddOnRequest {
    #[must_use]
    pub const fn new(add_on_type: AddOnType) -> Self {
        Self {
            add_on_type,
            auto_snapshot_add_on_request: None,
        }
    }

    /// Daily automatic snapshots at `HH:00` UTC.
    #[must_use]
    pub fn auto_snapshot(snapshot_time_of_day: impl Into<String>) -> Self {
        Self {
            add_on_type: AddOnType::AutoSnapshot,
            auto_snapshot_add_on_request: Some(AutoSnapshotAddOnRequest {
                snapshot_time_of_day: Some(snapshot_time_of_day.into()),
            }),
        }
    }
}

impl Validate for AddOnRequest {
    fn validate(&self) -> Result<(), CoreError> {
        self.auto_snapshot_add_on_request.validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutoSnapshotAddOnRequest {
    /// Hour of the day, `HH:00` in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_time_of_day: Option<String>,
}

impl Validate for AutoSnapshotAddOnRequest {
    fn validate(&self) -> Result<(), CoreError> {
        let Some(time) = &self.snapshot_time_of_day else {
            return Ok(());
        };
        let valid = time
            .strip_suffix(":00")
            .filter(|hour| hour.len() == 2 && hour.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|hour| hour.parse::<u8>().ok())
            .is_some_and(|hour| hour < 24);
        if valid {
            Ok(())
        } else {
            Err(CoreError::validation(
                "addOns.autoSnapshotAddOnRequest.snapshotTimeOfDay",
                format!("'{time}' must be a whole hour in HH:00 format"),
            ))
        }
    }
}
