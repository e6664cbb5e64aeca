//! Nested descriptors shared by requests and results.
//!
//! Descriptors returned by the service have every field optional and derive
//! `Default`, so a partially populated payload still decodes. Field names are
//! lowerCamelCase on the wire and absent fields are omitted when encoding.
//! Timestamps go through [`crate::epoch_seconds`].

mod alarm;
mod common;
mod instance;
mod load_balancer_tls;
mod metric;
mod operation;
mod relational_database;

pub use alarm::Alarm;
pub use common::{MonitoredResourceInfo, ResourceLocation, Tag};
pub use instance::{
    AddOnRequest, AutoSnapshotAddOnRequest, DiskMap, InstancePortInfo, InstancePortState, PortInfo,
};
pub use load_balancer_tls::{
    LoadBalancerTlsCertificate, LoadBalancerTlsCertificateDomainValidationOption,
    LoadBalancerTlsCertificateDomainValidationRecord, LoadBalancerTlsCertificateRenewalSummary,
};
pub use metric::MetricDatapoint;
pub use operation::Operation;
pub use relational_database::{
    PendingMaintenanceAction, PendingModifiedRelationalDatabaseValues, RelationalDatabase,
    RelationalDatabaseEndpoint, RelationalDatabaseHardware,
};
