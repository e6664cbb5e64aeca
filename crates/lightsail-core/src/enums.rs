//! Closed enumerations used by Lightsail request and response shapes.
//!
//! Every enumeration is declared with [`wire_enum!`](crate::wire) so that the
//! Rust variant, the serde representation, the JSON Schema and the
//! [`WireEnum`](crate::wire::WireEnum) lookup all agree on one wire string.
//! Wire strings are case-sensitive and are not normalized.

use crate::wire::wire_enum;

// ---------------------------------------------------------------------------
// Ports and networking
// ---------------------------------------------------------------------------

wire_enum! {
    /// Direction of traffic a port rule applies to.
    ///
    /// Lightsail currently accepts only `inbound` rules.
    pub enum AccessDirection {
        Inbound => "inbound",
        Outbound => "outbound",
    }
}

wire_enum! {
    /// Whether a port is reachable from the public internet.
    pub enum PortAccessType {
        Public => "Public",
        Private => "Private",
    }
}

wire_enum! {
    /// IP protocol of a port range.
    ///
    /// For `icmp`, `fromPort` carries the ICMP type and `toPort` the ICMP
    /// code (`-1` for any).
    pub enum NetworkProtocol {
        Tcp => "tcp",
        All => "all",
        Udp => "udp",
        Icmp => "icmp",
    }
}

wire_enum! {
    pub enum PortState {
        Open => "open",
        Closed => "closed",
    }
}

// ---------------------------------------------------------------------------
// Alarms and notifications
// ---------------------------------------------------------------------------

wire_enum! {
    /// State of a metric alarm.
    ///
    /// ```text
    /// INSUFFICIENT_DATA (on create) → OK | ALARM
    /// ```
    pub enum AlarmState {
        /// The metric is within the defined threshold.
        Ok => "OK",
        /// The metric is outside of the defined threshold.
        Alarm => "ALARM",
        /// The alarm has just started or not enough data is available.
        InsufficientData => "INSUFFICIENT_DATA",
    }
}

wire_enum! {
    /// Arithmetic comparison between the alarm statistic (first operand) and
    /// its threshold.
    pub enum ComparisonOperator {
        GreaterThanOrEqualToThreshold => "GreaterThanOrEqualToThreshold",
        GreaterThanThreshold => "GreaterThanThreshold",
        LessThanThreshold => "LessThanThreshold",
        LessThanOrEqualToThreshold => "LessThanOrEqualToThreshold",
    }
}

wire_enum! {
    /// Channel through which alarm notifications are delivered.
    pub enum ContactProtocol {
        Email => "Email",
        Sms => "SMS",
    }
}

wire_enum! {
    /// How an alarm evaluates periods with no data points.
    ///
    /// `missing` is the service default when the field is omitted.
    pub enum TreatMissingData {
        /// Missing data counts as outside the threshold.
        Breaching => "breaching",
        /// Missing data counts as within the threshold.
        NotBreaching => "notBreaching",
        /// Keep the current alarm state.
        Ignore => "ignore",
        Missing => "missing",
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

wire_enum! {
    /// Metrics available to alarms across instances, load balancers and
    /// relational databases.
    pub enum MetricName {
        CpuUtilization => "CPUUtilization",
        NetworkIn => "NetworkIn",
        NetworkOut => "NetworkOut",
        StatusCheckFailed => "StatusCheckFailed",
        StatusCheckFailedInstance => "StatusCheckFailed_Instance",
        StatusCheckFailedSystem => "StatusCheckFailed_System",
        ClientTlsNegotiationErrorCount => "ClientTLSNegotiationErrorCount",
        HealthyHostCount => "HealthyHostCount",
        UnhealthyHostCount => "UnhealthyHostCount",
        HttpCodeLb4xxCount => "HTTPCode_LB_4XX_Count",
        HttpCodeLb5xxCount => "HTTPCode_LB_5XX_Count",
        HttpCodeInstance2xxCount => "HTTPCode_Instance_2XX_Count",
        HttpCodeInstance3xxCount => "HTTPCode_Instance_3XX_Count",
        HttpCodeInstance4xxCount => "HTTPCode_Instance_4XX_Count",
        HttpCodeInstance5xxCount => "HTTPCode_Instance_5XX_Count",
        InstanceResponseTime => "InstanceResponseTime",
        RejectedConnectionCount => "RejectedConnectionCount",
        RequestCount => "RequestCount",
        DatabaseConnections => "DatabaseConnections",
        DiskQueueDepth => "DiskQueueDepth",
        FreeStorageSpace => "FreeStorageSpace",
        NetworkReceiveThroughput => "NetworkReceiveThroughput",
        NetworkTransmitThroughput => "NetworkTransmitThroughput",
    }
}

wire_enum! {
    /// Metrics reported for instances.
    pub enum InstanceMetricName {
        CpuUtilization => "CPUUtilization",
        NetworkIn => "NetworkIn",
        NetworkOut => "NetworkOut",
        StatusCheckFailed => "StatusCheckFailed",
        StatusCheckFailedInstance => "StatusCheckFailed_Instance",
        StatusCheckFailedSystem => "StatusCheckFailed_System",
    }
}

wire_enum! {
    /// Metrics reported for relational databases, at one-minute granularity.
    pub enum RelationalDatabaseMetricName {
        CpuUtilization => "CPUUtilization",
        DatabaseConnections => "DatabaseConnections",
        DiskQueueDepth => "DiskQueueDepth",
        FreeStorageSpace => "FreeStorageSpace",
        NetworkReceiveThroughput => "NetworkReceiveThroughput",
        NetworkTransmitThroughput => "NetworkTransmitThroughput",
    }
}

wire_enum! {
    pub enum MetricStatistic {
        Minimum => "Minimum",
        Maximum => "Maximum",
        Sum => "Sum",
        Average => "Average",
        SampleCount => "SampleCount",
    }
}

wire_enum! {
    /// Unit of a metric value.
    pub enum MetricUnit {
        Seconds => "Seconds",
        Microseconds => "Microseconds",
        Milliseconds => "Milliseconds",
        Bytes => "Bytes",
        Kilobytes => "Kilobytes",
        Megabytes => "Megabytes",
        Gigabytes => "Gigabytes",
        Terabytes => "Terabytes",
        Bits => "Bits",
        Kilobits => "Kilobits",
        Megabits => "Megabits",
        Gigabits => "Gigabits",
        Terabits => "Terabits",
        Percent => "Percent",
        Count => "Count",
        BytesPerSecond => "Bytes/Second",
        KilobytesPerSecond => "Kilobytes/Second",
        MegabytesPerSecond => "Megabytes/Second",
        GigabytesPerSecond => "Gigabytes/Second",
        TerabytesPerSecond => "Terabytes/Second",
        BitsPerSecond => "Bits/Second",
        KilobitsPerSecond => "Kilobits/Second",
        MegabitsPerSecond => "Megabits/Second",
        GigabitsPerSecond => "Gigabits/Second",
        TerabitsPerSecond => "Terabits/Second",
        CountPerSecond => "Count/Second",
        None => "None",
    }
}

// ---------------------------------------------------------------------------
// Load balancer TLS certificates
// ---------------------------------------------------------------------------

wire_enum! {
    /// Lifecycle status of a load balancer TLS certificate.
    pub enum LoadBalancerTlsCertificateStatus {
        PendingValidation => "PENDING_VALIDATION",
        Issued => "ISSUED",
        Inactive => "INACTIVE",
        Expired => "EXPIRED",
        ValidationTimedOut => "VALIDATION_TIMED_OUT",
        Revoked => "REVOKED",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Validation status of one domain on a TLS certificate.
    pub enum LoadBalancerTlsCertificateDomainStatus {
        PendingValidation => "PENDING_VALIDATION",
        Failed => "FAILED",
        Success => "SUCCESS",
    }
}

wire_enum! {
    /// Why certificate validation failed.
    pub enum LoadBalancerTlsCertificateFailureReason {
        NoAvailableContacts => "NO_AVAILABLE_CONTACTS",
        AdditionalVerificationRequired => "ADDITIONAL_VERIFICATION_REQUIRED",
        DomainNotAllowed => "DOMAIN_NOT_ALLOWED",
        InvalidPublicDomain => "INVALID_PUBLIC_DOMAIN",
        Other => "OTHER",
    }
}

wire_enum! {
    pub enum LoadBalancerTlsCertificateRenewalStatus {
        PendingAutoRenewal => "PendingAutoRenewal",
        PendingValidation => "PendingValidation",
        Success => "Success",
        Failed => "Failed",
    }
}

wire_enum! {
    /// Reason a certificate was revoked.
    ///
    /// `SUPERCEDED` is spelled the way the service spells it.
    pub enum LoadBalancerTlsCertificateRevocationReason {
        Unspecified => "UNSPECIFIED",
        KeyCompromise => "KEY_COMPROMISE",
        CaCompromise => "CA_COMPROMISE",
        AffiliationChanged => "AFFILIATION_CHANGED",
        Superceded => "SUPERCEDED",
        CessationOfOperation => "CESSATION_OF_OPERATION",
        CertificateHold => "CERTIFICATE_HOLD",
        RemoveFromCrl => "REMOVE_FROM_CRL",
        PrivilegeWithdrawn => "PRIVILEGE_WITHDRAWN",
        AACompromise => "A_A_COMPROMISE",
    }
}

// ---------------------------------------------------------------------------
// Resources, regions, operations
// ---------------------------------------------------------------------------

wire_enum! {
    /// Kind of Lightsail resource.
    pub enum ResourceType {
        Instance => "Instance",
        StaticIp => "StaticIp",
        KeyPair => "KeyPair",
        InstanceSnapshot => "InstanceSnapshot",
        Domain => "Domain",
        PeeredVpc => "PeeredVpc",
        LoadBalancer => "LoadBalancer",
        LoadBalancerTlsCertificate => "LoadBalancerTlsCertificate",
        Disk => "Disk",
        DiskSnapshot => "DiskSnapshot",
        RelationalDatabase => "RelationalDatabase",
        RelationalDatabaseSnapshot => "RelationalDatabaseSnapshot",
        ExportSnapshotRecord => "ExportSnapshotRecord",
        CloudFormationStackRecord => "CloudFormationStackRecord",
        Alarm => "Alarm",
        ContactMethod => "ContactMethod",
    }
}

wire_enum! {
    /// AWS Regions where Lightsail is offered.
    pub enum RegionName {
        UsEast1 => "us-east-1",
        UsEast2 => "us-east-2",
        UsWest1 => "us-west-1",
        UsWest2 => "us-west-2",
        EuWest1 => "eu-west-1",
        EuWest2 => "eu-west-2",
        EuWest3 => "eu-west-3",
        EuCentral1 => "eu-central-1",
        CaCentral1 => "ca-central-1",
        ApSouth1 => "ap-south-1",
        ApSoutheast1 => "ap-southeast-1",
        ApSoutheast2 => "ap-southeast-2",
        ApNortheast1 => "ap-northeast-1",
        ApNortheast2 => "ap-northeast-2",
    }
}

wire_enum! {
    /// Progress of an asynchronous resource operation.
    ///
    /// ```text
    /// NotStarted → Started → Succeeded | Completed | Failed
    /// ```
    pub enum OperationStatus {
        NotStarted => "NotStarted",
        Started => "Started",
        Failed => "Failed",
        Completed => "Completed",
        Succeeded => "Succeeded",
    }
}

impl OperationStatus {
    /// Whether the operation has stopped progressing.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Completed | Self::Succeeded)
    }
}

wire_enum! {
    pub enum AddOnType {
        AutoSnapshot => "AutoSnapshot",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
