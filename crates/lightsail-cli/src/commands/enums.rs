use std::fmt::Debug;

use anyhow::bail;
use lightsail_core::enums::{
    AccessDirection, AddOnType, AlarmState, ComparisonOperator, ContactProtocol,
    InstanceMetricName, LoadBalancerTlsCertificateDomainStatus,
    LoadBalancerTlsCertificateFailureReason, LoadBalancerTlsCertificateRenewalStatus,
    LoadBalancerTlsCertificateRevocationReason, LoadBalancerTlsCertificateStatus, MetricName,
    MetricStatistic, MetricUnit, NetworkProtocol, OperationStatus, PortAccessType, PortState,
    RegionName, RelationalDatabaseMetricName, ResourceType, TreatMissingData,
};
use lightsail_core::{ActionName, ServiceErrorKind, WireEnum, WireValueError};
use serde::Serialize;

use crate::cli::{EnumsCommands, GlobalFlags};
use crate::output::output;

/// One enumeration, erased to plain functions so the catalog can be a slice.
pub struct EnumEntry {
    pub name: &'static str,
    values: fn() -> Vec<&'static str>,
    parse: fn(&str) -> Result<String, WireValueError>,
}

fn symbol_of<E: WireEnum + Debug>(value: &str) -> Result<String, WireValueError> {
    E::from_wire_value(value).map(|symbol| format!("{symbol:?}"))
}

macro_rules! catalog {
    ($($enumeration:ty),+ $(,)?) => {
        &[$(
            EnumEntry {
                name: <$enumeration as WireEnum>::NAME,
                values: <$enumeration as WireEnum>::wire_values,
                parse: symbol_of::<$enumeration>,
            }
        ),+]
    };
}

/// Every enumeration the API models, alphabetically.
pub static CATALOG: &[EnumEntry] = catalog![
    AccessDirection,
    ActionName,
    AddOnType,
    AlarmState,
    ComparisonOperator,
    ContactProtocol,
    InstanceMetricName,
    LoadBalancerTlsCertificateDomainStatus,
    LoadBalancerTlsCertificateFailureReason,
    LoadBalancerTlsCertificateRenewalStatus,
    LoadBalancerTlsCertificateRevocationReason,
    LoadBalancerTlsCertificateStatus,
    MetricName,
    MetricStatistic,
    MetricUnit,
    NetworkProtocol,
    OperationStatus,
    PortAccessType,
    PortState,
    RegionName,
    RelationalDatabaseMetricName,
    ResourceType,
    ServiceErrorKind,
    TreatMissingData,
];

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EnumSummary {
    pub name: &'static str,
    pub values: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EnumDetail {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParsedValue {
    pub enumeration: &'static str,
    pub value: String,
    pub symbol: String,
}

/// Look up an enumeration by name, ignoring ASCII case.
pub fn find(name: &str) -> anyhow::Result<&'static EnumEntry> {
    match CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
    {
        Some(entry) => Ok(entry),
        None => bail!("unknown enumeration '{name}' (run `lsail enums list` for the catalog)"),
    }
}

#[must_use]
pub fn list() -> Vec<EnumSummary> {
    CATALOG
        .iter()
        .map(|entry| EnumSummary {
            name: entry.name,
            values: (entry.values)().len(),
        })
        .collect()
}

pub fn show(name: &str) -> anyhow::Result<EnumDetail> {
    let entry = find(name)?;
    Ok(EnumDetail {
        name: entry.name,
        values: (entry.values)(),
    })
}

/// Parse `value` against one enumeration. The value itself is matched exactly.
pub fn parse(name: &str, value: &str) -> anyhow::Result<ParsedValue> {
    let entry = find(name)?;
    let symbol = (entry.parse)(value)?;
    Ok(ParsedValue {
        enumeration: entry.name,
        value: value.to_string(),
        symbol,
    })
}

/// Handle `lsail enums`.
pub fn handle(action: &EnumsCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EnumsCommands::List => output(&list(), flags),
        EnumsCommands::Show { name } => output(&show(name)?, flags),
        EnumsCommands::Parse { name, value } => output(&parse(name, value)?, flags),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CATALOG, list, parse, show};

    #[test]
    fn catalog_is_sorted_and_unique() {
        let names: Vec<&str> = CATALOG.iter().map(|entry| entry.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn list_counts_values() {
        let summaries = list();
        let tls = summaries
            .iter()
            .find(|summary| summary.name == "LoadBalancerTlsCertificateStatus")
            .expect("tls status should be listed");
        assert_eq!(tls.values, 7);
    }

    #[test]
    fn show_lists_wire_values_in_declaration_order() {
        let detail = show("PortAccessType").expect("enumeration should exist");
        assert_eq!(detail.values, vec!["Public", "Private"]);
    }

    #[test]
    fn show_accepts_any_name_case() {
        let detail = show("portaccesstype").expect("enumeration should exist");
        assert_eq!(detail.name, "PortAccessType");
    }

    #[test]
    fn show_rejects_unknown_enumeration() {
        let err = show("Colour").expect_err("should fail");
        assert!(err.to_string().contains("unknown enumeration 'Colour'"));
    }

    #[test]
    fn parse_maps_wire_value_to_symbol() {
        let parsed = parse("MetricName", "CPUUtilization").expect("value should parse");
        assert_eq!(parsed.enumeration, "MetricName");
        assert_eq!(parsed.symbol, "CpuUtilization");
    }

    #[test]
    fn parse_is_case_sensitive_on_values() {
        let err = parse("PortAccessType", "public").expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "cannot create PortAccessType from unknown value 'public'"
        );
    }

    #[test]
    fn parse_rejects_empty_value() {
        let err = parse("PortState", "").expect_err("should fail");
        assert_eq!(err.to_string(), "PortState value cannot be null or empty");
    }
}
