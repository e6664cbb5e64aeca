//! Mapper properties checked exhaustively for every enumeration.

use std::collections::HashSet;
use std::fmt::Debug;

use lightsail_core::enums::*;
use lightsail_core::{ActionName, ServiceErrorKind, WireEnum, WireValueError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

fn check_roundtrip<E: WireEnum + Debug>() {
    for &symbol in E::ALL {
        let wire = symbol.to_wire_value();
        assert_eq!(E::from_wire_value(wire), Ok(symbol), "{}::{symbol:?}", E::NAME);
        assert_eq!(symbol.to_wire_value(), wire, "unstable wire value for {symbol:?}");
    }
}

fn check_bijection<E: WireEnum + Debug>() {
    let wires: HashSet<&str> = E::ALL.iter().map(|s| s.to_wire_value()).collect();
    assert_eq!(wires.len(), E::ALL.len(), "{} has duplicate wire values", E::NAME);
    let symbols: HashSet<E> = wires
        .iter()
        .map(|w| E::from_wire_value(w).unwrap())
        .collect();
    assert_eq!(symbols.len(), E::ALL.len(), "{} lookup is not injective", E::NAME);
    assert_eq!(E::table().len(), E::ALL.len());
}

fn check_rejections<E: WireEnum + Debug>() {
    let invalid = WireValueError::InvalidValue {
        enumeration: E::NAME,
    };
    assert_eq!(E::from_wire_value(""), Err(invalid.clone()));
    assert_eq!(E::from_optional_wire_value(None), Err(invalid));
    assert_eq!(
        E::from_wire_value("not-a-real-value"),
        Err(WireValueError::UnknownValue {
            enumeration: E::NAME,
            value: "not-a-real-value".into(),
        })
    );
}

fn check_serde_and_schema<E>()
where
    E: WireEnum + Debug + Serialize + DeserializeOwned + JsonSchema,
{
    let schema = serde_json::to_value(schemars::schema_for!(E)).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");

    for &symbol in E::ALL {
        let json = serde_json::to_value(symbol).unwrap();
        assert_eq!(json, serde_json::Value::String(symbol.to_wire_value().into()));
        let back: E = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, symbol);
        assert!(
            validator.is_valid(&json),
            "{} schema rejects {json}",
            E::NAME
        );
    }
    let bogus = serde_json::json!("not-a-real-value");
    assert!(!validator.is_valid(&bogus), "{} schema accepts bogus value", E::NAME);
    assert!(serde_json::from_value::<E>(bogus).is_err());
}

macro_rules! mapper_properties {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn roundtrip() {
                    check_roundtrip::<$ty>();
                }

                #[test]
                fn bijection() {
                    check_bijection::<$ty>();
                }

                #[test]
                fn rejections() {
                    check_rejections::<$ty>();
                }

                #[test]
                fn serde_and_schema_agree() {
                    check_serde_and_schema::<$ty>();
                }
            }
        )+
    };
}

mapper_properties! {
    access_direction => AccessDirection,
    add_on_type => AddOnType,
    alarm_state => AlarmState,
    comparison_operator => ComparisonOperator,
    contact_protocol => ContactProtocol,
    instance_metric_name => InstanceMetricName,
    tls_domain_status => LoadBalancerTlsCertificateDomainStatus,
    tls_failure_reason => LoadBalancerTlsCertificateFailureReason,
    tls_renewal_status => LoadBalancerTlsCertificateRenewalStatus,
    tls_revocation_reason => LoadBalancerTlsCertificateRevocationReason,
    tls_status => LoadBalancerTlsCertificateStatus,
    metric_name => MetricName,
    metric_statistic => MetricStatistic,
    metric_unit => MetricUnit,
    network_protocol => NetworkProtocol,
    operation_status => OperationStatus,
    port_access_type => PortAccessType,
    port_state => PortState,
    region_name => RegionName,
    relational_database_metric_name => RelationalDatabaseMetricName,
    resource_type => ResourceType,
    treat_missing_data => TreatMissingData,
    service_error_kind => ServiceErrorKind,
    action_name => ActionName,
}

// ---------------------------------------------------------------------------
// Specific scenarios
// ---------------------------------------------------------------------------

#[rstest]
#[case("Public", Some(PortAccessType::Public))]
#[case("Private", Some(PortAccessType::Private))]
#[case("public", None)]
#[case("PUBLIC", None)]
#[case(" Public", None)]
fn port_access_type_is_case_sensitive(
    #[case] wire: &str,
    #[case] expected: Option<PortAccessType>,
) {
    match expected {
        Some(symbol) => assert_eq!(PortAccessType::from_wire_value(wire), Ok(symbol)),
        None => assert_eq!(
            PortAccessType::from_wire_value(wire),
            Err(WireValueError::UnknownValue {
                enumeration: "PortAccessType",
                value: wire.into(),
            })
        ),
    }
}

#[test]
fn tls_certificate_status_has_exactly_seven_values() {
    assert_eq!(
        LoadBalancerTlsCertificateStatus::wire_values(),
        vec![
            "PENDING_VALIDATION",
            "ISSUED",
            "INACTIVE",
            "EXPIRED",
            "VALIDATION_TIMED_OUT",
            "REVOKED",
            "FAILED",
        ]
    );
    assert_eq!(
        LoadBalancerTlsCertificateStatus::from_wire_value("ISSUED"),
        Ok(LoadBalancerTlsCertificateStatus::Issued)
    );
    assert!(matches!(
        LoadBalancerTlsCertificateStatus::from_wire_value("issued"),
        Err(WireValueError::UnknownValue { .. })
    ));
    assert!(LoadBalancerTlsCertificateStatus::from_wire_value("UNKNOWN").is_err());
}

#[rstest]
#[case::slash_unit(MetricUnit::BytesPerSecond, "Bytes/Second")]
#[case::none_unit(MetricUnit::None, "None")]
#[case::underscore_metric(MetricName::StatusCheckFailedInstance, "StatusCheckFailed_Instance")]
#[case::load_balancer_metric(MetricName::HttpCodeLb4xxCount, "HTTPCode_LB_4XX_Count")]
#[case::lowercase_region(RegionName::ApNortheast2, "ap-northeast-2")]
#[case::screaming_case(AlarmState::InsufficientData, "INSUFFICIENT_DATA")]
fn irregular_wire_strings<E: WireEnum + Debug>(#[case] symbol: E, #[case] wire: &str) {
    assert_eq!(symbol.to_wire_value(), wire);
    assert_eq!(E::from_wire_value(wire), Ok(symbol));
}

#[test]
fn lookups_are_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                MetricUnit::ALL
                    .iter()
                    .all(|&unit| MetricUnit::from_wire_value(unit.as_str()) == Ok(unit))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
