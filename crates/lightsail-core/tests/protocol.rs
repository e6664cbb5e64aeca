//! Envelope encoding and response decoding through the public API.

use lightsail_core::api::{
    GetAlarmsRequest, GetRelationalDatabaseRequest, OpenInstancePublicPortsRequest,
    encode_json,
};
use lightsail_core::enums::{NetworkProtocol, OperationStatus};
use lightsail_core::models::PortInfo;
use lightsail_core::{
    ActionName, CONTENT_TYPE, CoreError, Paginated, ServiceErrorKind, decode_response,
    encode_request,
};
use pretty_assertions::assert_eq;

#[test]
fn open_ports_envelope() {
    let request =
        OpenInstancePublicPortsRequest::new("web-1", PortInfo::range(NetworkProtocol::Tcp, 443, 443));
    let envelope = encode_request(&request).unwrap();

    assert_eq!(envelope.target, "Lightsail_20161128.OpenInstancePublicPorts");
    assert_eq!(envelope.content_type, CONTENT_TYPE);
    let body: serde_json::Value = serde_json::from_str(&envelope.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "portInfo": { "fromPort": 443, "toPort": 443, "protocol": "tcp" },
            "instanceName": "web-1"
        })
    );
}

#[test]
fn open_ports_response_carries_operation() {
    let body = br#"{
        "operation": {
            "id": "2b9f",
            "resourceName": "web-1",
            "resourceType": "Instance",
            "createdAt": 1588334400.0,
            "isTerminal": true,
            "operationType": "OpenInstancePublicPorts",
            "status": "Succeeded"
        }
    }"#;
    let result = decode_response::<OpenInstancePublicPortsRequest>(200, body).unwrap();
    let operation = result.operation.unwrap();
    assert_eq!(operation.status, Some(OperationStatus::Succeeded));
    assert!(operation.is_finished());
    assert!(!operation.is_failed());
}

#[test]
fn not_found_fields_are_preserved_verbatim() {
    let body = br#"{
        "__type": "NotFoundException",
        "code": "DoesNotExist",
        "docs": "https://lightsail.aws.amazon.com/ls/docs/en_us/articles/amazon-lightsail-creating-a-database",
        "message": "The RelationalDatabase does not exist: orders-db",
        "tip": "Please check the name of the database and try again."
    }"#;
    let err = decode_response::<GetRelationalDatabaseRequest>(400, body).unwrap_err();
    let CoreError::Service(service) = err else {
        panic!("expected service error, got {err:?}");
    };
    assert_eq!(service.kind, Some(ServiceErrorKind::NotFound));
    assert!(service.is_not_found());
    assert_eq!(service.code.as_deref(), Some("DoesNotExist"));
    assert_eq!(
        service.docs.as_deref(),
        Some("https://lightsail.aws.amazon.com/ls/docs/en_us/articles/amazon-lightsail-creating-a-database")
    );
    assert_eq!(
        service.tip.as_deref(),
        Some("Please check the name of the database and try again.")
    );
}

#[test]
fn alarm_pages_chain_through_page_token() {
    let first = GetAlarmsRequest {
        monitored_resource_name: Some("web-1".into()),
        ..GetAlarmsRequest::default()
    };
    let page = decode_response::<GetAlarmsRequest>(
        200,
        br#"{"alarms":[{"name":"cpu-high"}],"nextPageToken":"p2"}"#,
    )
    .unwrap();
    let token = page.next_page_token().unwrap();
    let second = first.next_page(token);

    let envelope = encode_request(&second).unwrap();
    let body: serde_json::Value = serde_json::from_str(&envelope.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "pageToken": "p2", "monitoredResourceName": "web-1" })
    );

    let last = decode_response::<GetAlarmsRequest>(200, br#"{"alarms":[]}"#).unwrap();
    assert!(!last.has_more());
}

#[test]
fn dynamic_encoding_matches_typed_encoding() {
    let typed = encode_request(&GetAlarmsRequest {
        alarm_name: Some("cpu-high".into()),
        ..GetAlarmsRequest::default()
    })
    .unwrap();
    let dynamic = encode_json(ActionName::GetAlarms, serde_json::json!({ "alarmName": "cpu-high" }))
        .unwrap();
    assert_eq!(typed, dynamic);
}

#[test]
fn missing_required_field_fails_dynamic_encoding() {
    let err = encode_json(ActionName::DeleteAlarm, serde_json::json!({})).unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn icmp_ping_rule_is_encoded() {
    let request =
        OpenInstancePublicPortsRequest::new("web-1", PortInfo::range(NetworkProtocol::Icmp, 8, -1));
    let envelope = encode_request(&request).unwrap();
    let body: serde_json::Value = serde_json::from_str(&envelope.body).unwrap();
    assert_eq!(
        body["portInfo"],
        serde_json::json!({ "fromPort": 8, "toPort": -1, "protocol": "icmp" })
    );
}

#[test]
fn non_ascii_resource_name_fails_dynamic_encoding() {
    let err = encode_json(
        ActionName::DeleteAlarm,
        serde_json::json!({ "alarmName": "café-ünï" }),
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::Validation { field, .. } if field == "alarmName"));
}
