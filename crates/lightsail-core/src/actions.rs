//! Names of every action exposed by the Lightsail API.
//!
//! An action name is the suffix of the `X-Amz-Target` header, e.g.
//! `Lightsail_20161128.PutAlarm`. Only a subset of actions has typed request
//! and response shapes in [`crate::api`]; see [`ActionName::is_modeled`].

use crate::wire::wire_enum;

wire_enum! {
    /// A Lightsail API action.
    pub enum ActionName {
        AllocateStaticIp => "AllocateStaticIp",
        AttachDisk => "AttachDisk",
        AttachInstancesToLoadBalancer => "AttachInstancesToLoadBalancer",
        AttachLoadBalancerTlsCertificate => "AttachLoadBalancerTlsCertificate",
        AttachStaticIp => "AttachStaticIp",
        CloseInstancePublicPorts => "CloseInstancePublicPorts",
        CopySnapshot => "CopySnapshot",
        CreateCloudFormationStack => "CreateCloudFormationStack",
        CreateContactMethod => "CreateContactMethod",
        CreateDisk => "CreateDisk",
        CreateDiskFromSnapshot => "CreateDiskFromSnapshot",
        CreateDiskSnapshot => "CreateDiskSnapshot",
        CreateDomain => "CreateDomain",
        CreateDomainEntry => "CreateDomainEntry",
        CreateInstanceSnapshot => "CreateInstanceSnapshot",
        CreateInstances => "CreateInstances",
        CreateInstancesFromSnapshot => "CreateInstancesFromSnapshot",
        CreateKeyPair => "CreateKeyPair",
        CreateLoadBalancer => "CreateLoadBalancer",
        CreateLoadBalancerTlsCertificate => "CreateLoadBalancerTlsCertificate",
        CreateRelationalDatabase => "CreateRelationalDatabase",
        CreateRelationalDatabaseFromSnapshot => "CreateRelationalDatabaseFromSnapshot",
        CreateRelationalDatabaseSnapshot => "CreateRelationalDatabaseSnapshot",
        DeleteAlarm => "DeleteAlarm",
        DeleteAutoSnapshot => "DeleteAutoSnapshot",
        DeleteContactMethod => "DeleteContactMethod",
        DeleteDisk => "DeleteDisk",
        DeleteDiskSnapshot => "DeleteDiskSnapshot",
        DeleteDomain => "DeleteDomain",
        DeleteDomainEntry => "DeleteDomainEntry",
        DeleteInstance => "DeleteInstance",
        DeleteInstanceSnapshot => "DeleteInstanceSnapshot",
        DeleteKeyPair => "DeleteKeyPair",
        DeleteKnownHostKeys => "DeleteKnownHostKeys",
        DeleteLoadBalancer => "DeleteLoadBalancer",
        DeleteLoadBalancerTlsCertificate => "DeleteLoadBalancerTlsCertificate",
        DeleteRelationalDatabase => "DeleteRelationalDatabase",
        DeleteRelationalDatabaseSnapshot => "DeleteRelationalDatabaseSnapshot",
        DetachDisk => "DetachDisk",
        DetachInstancesFromLoadBalancer => "DetachInstancesFromLoadBalancer",
        DetachStaticIp => "DetachStaticIp",
        DisableAddOn => "DisableAddOn",
        DownloadDefaultKeyPair => "DownloadDefaultKeyPair",
        EnableAddOn => "EnableAddOn",
        ExportSnapshot => "ExportSnapshot",
        GetActiveNames => "GetActiveNames",
        GetAlarms => "GetAlarms",
        GetAutoSnapshots => "GetAutoSnapshots",
        GetBlueprints => "GetBlueprints",
        GetBundles => "GetBundles",
        GetCloudFormationStackRecords => "GetCloudFormationStackRecords",
        GetContactMethods => "GetContactMethods",
        GetDisk => "GetDisk",
        GetDiskSnapshot => "GetDiskSnapshot",
        GetDiskSnapshots => "GetDiskSnapshots",
        GetDisks => "GetDisks",
        GetDomain => "GetDomain",
        GetDomains => "GetDomains",
        GetExportSnapshotRecords => "GetExportSnapshotRecords",
        GetInstance => "GetInstance",
        GetInstanceAccessDetails => "GetInstanceAccessDetails",
        GetInstanceMetricData => "GetInstanceMetricData",
        GetInstancePortStates => "GetInstancePortStates",
        GetInstanceSnapshot => "GetInstanceSnapshot",
        GetInstanceSnapshots => "GetInstanceSnapshots",
        GetInstanceState => "GetInstanceState",
        GetInstances => "GetInstances",
        GetKeyPair => "GetKeyPair",
        GetKeyPairs => "GetKeyPairs",
        GetLoadBalancer => "GetLoadBalancer",
        GetLoadBalancerMetricData => "GetLoadBalancerMetricData",
        GetLoadBalancerTlsCertificates => "GetLoadBalancerTlsCertificates",
        GetLoadBalancers => "GetLoadBalancers",
        GetOperation => "GetOperation",
        GetOperations => "GetOperations",
        GetOperationsForResource => "GetOperationsForResource",
        GetRegions => "GetRegions",
        GetRelationalDatabase => "GetRelationalDatabase",
        GetRelationalDatabaseBlueprints => "GetRelationalDatabaseBlueprints",
        GetRelationalDatabaseBundles => "GetRelationalDatabaseBundles",
        GetRelationalDatabaseEvents => "GetRelationalDatabaseEvents",
        GetRelationalDatabaseLogEvents => "GetRelationalDatabaseLogEvents",
        GetRelationalDatabaseLogStreams => "GetRelationalDatabaseLogStreams",
        GetRelationalDatabaseMasterUserPassword => "GetRelationalDatabaseMasterUserPassword",
        GetRelationalDatabaseMetricData => "GetRelationalDatabaseMetricData",
        GetRelationalDatabaseParameters => "GetRelationalDatabaseParameters",
        GetRelationalDatabaseSnapshot => "GetRelationalDatabaseSnapshot",
        GetRelationalDatabaseSnapshots => "GetRelationalDatabaseSnapshots",
        GetRelationalDatabases => "GetRelationalDatabases",
        GetStaticIp => "GetStaticIp",
        GetStaticIps => "GetStaticIps",
        ImportKeyPair => "ImportKeyPair",
        IsVpcPeered => "IsVpcPeered",
        OpenInstancePublicPorts => "OpenInstancePublicPorts",
        PeerVpc => "PeerVpc",
        PutAlarm => "PutAlarm",
        PutInstancePublicPorts => "PutInstancePublicPorts",
        RebootInstance => "RebootInstance",
        RebootRelationalDatabase => "RebootRelationalDatabase",
        ReleaseStaticIp => "ReleaseStaticIp",
        SendContactMethodVerification => "SendContactMethodVerification",
        StartInstance => "StartInstance",
        StartRelationalDatabase => "StartRelationalDatabase",
        StopInstance => "StopInstance",
        StopRelationalDatabase => "StopRelationalDatabase",
        TagResource => "TagResource",
        TestAlarm => "TestAlarm",
        UnpeerVpc => "UnpeerVpc",
        UntagResource => "UntagResource",
        UpdateDomainEntry => "UpdateDomainEntry",
        UpdateLoadBalancerAttribute => "UpdateLoadBalancerAttribute",
        UpdateRelationalDatabase => "UpdateRelationalDatabase",
        UpdateRelationalDatabaseParameters => "UpdateRelationalDatabaseParameters",
    }
}

impl ActionName {
    /// The full `X-Amz-Target` header value for this action.
    #[must_use]
    pub fn target(self) -> String {
        format!("{}.{}", crate::protocol::TARGET_PREFIX, self.as_str())
    }

    /// Whether this crate has typed request and response shapes for the action.
    #[must_use]
    pub const fn is_modeled(self) -> bool {
        matches!(
            self,
            Self::PutAlarm
                | Self::GetAlarms
                | Self::DeleteAlarm
                | Self::TestAlarm
                | Self::CreateInstancesFromSnapshot
                | Self::GetInstanceMetricData
                | Self::OpenInstancePublicPorts
                | Self::PutInstancePublicPorts
                | Self::GetInstancePortStates
                | Self::CreateRelationalDatabase
                | Self::GetRelationalDatabase
                | Self::GetRelationalDatabases
                | Self::GetRelationalDatabaseMetricData
                | Self::GetLoadBalancerTlsCertificates
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireEnum;

    #[test]
    fn target_is_prefixed() {
        assert_eq!(ActionName::PutAlarm.target(), "Lightsail_20161128.PutAlarm");
        assert_eq!(
            ActionName::GetRelationalDatabaseMetricData.target(),
            "Lightsail_20161128.GetRelationalDatabaseMetricData"
        );
    }

    #[test]
    fn catalog_is_complete() {
        assert_eq!(ActionName::ALL.len(), 113);
        assert_eq!(
            ActionName::ALL.iter().filter(|a| a.is_modeled()).count(),
            14
        );
    }

    #[test]
    fn action_names_are_case_sensitive() {
        assert_eq!(ActionName::from_wire_value("GetAlarms"), Ok(ActionName::GetAlarms));
        assert!(ActionName::from_wire_value("getAlarms").is_err());
    }
}
