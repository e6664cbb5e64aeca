//! The `application/x-amz-json-1.1` envelope.
//!
//! Every call is a POST to the service root with an `X-Amz-Target` header of
//! the form `Lightsail_20161128.<Action>` and a JSON body. Successful calls
//! answer with a JSON object; failed calls answer with a non-2xx status and a
//! body that [`ServiceError::from_response`] understands.
//!
//! Nothing here performs I/O.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::actions::ActionName;
use crate::errors::CoreError;
use crate::service_error::ServiceError;
use crate::validate::Validate;

/// Prefix of every `X-Amz-Target` header value.
pub const TARGET_PREFIX: &str = "Lightsail_20161128";

/// Content type of every request body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A typed request for one action.
pub trait LightsailRequest: Serialize + Validate {
    /// The action this request invokes.
    const ACTION: ActionName;

    /// The result shape the service answers with.
    type Response: DeserializeOwned;
}

/// A response that may be continued with another call.
pub trait Paginated {
    /// Opaque cursor to pass as `pageToken` on the next call, if any.
    fn next_page_token(&self) -> Option<&str>;

    fn has_more(&self) -> bool {
        self.next_page_token().is_some()
    }
}

/// Everything needed to put one call on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Value of the `X-Amz-Target` header.
    pub target: String,
    /// Value of the `Content-Type` header.
    pub content_type: &'static str,
    /// JSON request body.
    pub body: String,
}

impl RequestEnvelope {
    pub(crate) fn for_action(action: ActionName, body: String) -> Self {
        Self {
            target: action.target(),
            content_type: CONTENT_TYPE,
            body,
        }
    }
}

/// Validate `request` and build its envelope.
///
/// # Errors
///
/// [`CoreError::Validation`] if a field violates a documented constraint,
/// [`CoreError::Serialization`] if the body cannot be encoded.
pub fn encode_request<R: LightsailRequest>(request: &R) -> Result<RequestEnvelope, CoreError> {
    request.validate()?;
    let body = serde_json::to_string(request)?;
    tracing::debug!(action = %R::ACTION, bytes = body.len(), "encoded request");
    Ok(RequestEnvelope::for_action(R::ACTION, body))
}

/// Decode the response to a request of type `R`.
///
/// # Errors
///
/// [`CoreError::Service`] for a non-2xx status,
/// [`CoreError::Serialization`] if a 2xx body does not match the result shape.
pub fn decode_response<R: LightsailRequest>(
    status: u16,
    body: &[u8],
) -> Result<R::Response, CoreError> {
    if !(200..300).contains(&status) {
        let error = ServiceError::from_response(status, body);
        tracing::debug!(action = %R::ACTION, status, error_type = %error.type_name, "service error");
        return Err(error.into());
    }
    tracing::debug!(action = %R::ACTION, status, bytes = body.len(), "decoding response");
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"{}")?);
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Ping {
        resource_name: String,
    }

    #[derive(Debug, Default, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Pong {
        next_page_token: Option<String>,
    }

    impl Paginated for Pong {
        fn next_page_token(&self) -> Option<&str> {
            self.next_page_token.as_deref()
        }
    }

    impl Validate for Ping {
        fn validate(&self) -> Result<(), CoreError> {
            crate::validate::resource_name("resourceName", &self.resource_name)
        }
    }

    impl LightsailRequest for Ping {
        const ACTION: ActionName = ActionName::GetOperation;
        type Response = Pong;
    }

    #[test]
    fn envelope_carries_target_and_body() {
        let envelope = encode_request(&Ping {
            resource_name: "web-1".into(),
        })
        .unwrap();
        assert_eq!(envelope.target, "Lightsail_20161128.GetOperation");
        assert_eq!(envelope.content_type, CONTENT_TYPE);
        assert_eq!(envelope.body, r#"{"resourceName":"web-1"}"#);
    }

    #[test]
    fn invalid_request_is_not_encoded() {
        let err = encode_request(&Ping {
            resource_name: "-".into(),
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
    }

    #[test]
    fn empty_success_body_decodes_as_empty_object() {
        let pong = decode_response::<Ping>(200, b"").unwrap();
        assert_eq!(pong, Pong::default());
        assert!(!pong.has_more());
    }

    #[test]
    fn success_body_is_typed() {
        let pong = decode_response::<Ping>(200, br#"{"nextPageToken":"abc"}"#).unwrap();
        assert_eq!(pong.next_page_token(), Some("abc"));
        assert!(pong.has_more());
    }

    #[test]
    fn error_status_becomes_service_error() {
        let err = decode_response::<Ping>(
            400,
            br#"{"__type":"NotFoundException","message":"missing"}"#,
        )
        .unwrap_err();
        let service = err.as_service_error().unwrap();
        assert!(service.is_not_found());
        assert_eq!(service.message.as_deref(), Some("missing"));
    }

    #[test]
    fn malformed_success_body_is_a_serialization_error() {
        let err = decode_response::<Ping>(200, b"[1,2]").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}
