//! Typed request and result shapes for the modeled actions.
//!
//! Each request implements [`LightsailRequest`] and [`Validate`]. The
//! functions at the bottom of this module dispatch on an [`ActionName`] at
//! runtime for callers that only have untyped JSON.

mod alarms;
mod databases;
mod instances;
mod load_balancers;

pub use alarms::{
    DeleteAlarmRequest, DeleteAlarmResult, GetAlarmsRequest, GetAlarmsResult, PutAlarmRequest,
    PutAlarmResult, TestAlarmRequest, TestAlarmResult,
};
pub use databases::{
    CreateRelationalDatabaseRequest, CreateRelationalDatabaseResult,
    GetRelationalDatabaseMetricDataRequest, GetRelationalDatabaseMetricDataResult,
    GetRelationalDatabaseRequest, GetRelationalDatabaseResult, GetRelationalDatabasesRequest,
    GetRelationalDatabasesResult,
};
pub use instances::{
    CreateInstancesFromSnapshotRequest, CreateInstancesFromSnapshotResult,
    GetInstanceMetricDataRequest, GetInstanceMetricDataResult, GetInstancePortStatesRequest,
    GetInstancePortStatesResult, OpenInstancePublicPortsRequest, OpenInstancePublicPortsResult,
    PutInstancePublicPortsRequest, PutInstancePublicPortsResult,
};
pub use load_balancers::{GetLoadBalancerTlsCertificatesRequest, GetLoadBalancerTlsCertificatesResult};

use schemars::Schema;

use crate::actions::ActionName;
use crate::errors::CoreError;
use crate::protocol::{LightsailRequest, RequestEnvelope, encode_request};

macro_rules! modeled_actions {
    ($($request:ty),+ $(,)?) => {
        /// Actions with a typed request shape, in registry order.
        pub const MODELED_ACTIONS: &[ActionName] = &[
            $(<$request as LightsailRequest>::ACTION),+
        ];

        /// Decode `input` into the request type for `action`, validate it and
        /// build its envelope.
        ///
        /// # Errors
        ///
        /// [`CoreError::UnsupportedAction`] for an action without a typed
        /// shape, otherwise the errors of [`encode_request`].
        pub fn encode_json(
            action: ActionName,
            input: serde_json::Value,
        ) -> Result<RequestEnvelope, CoreError> {
            $(
                if action == <$request as LightsailRequest>::ACTION {
                    let request: $request = serde_json::from_value(input)?;
                    return encode_request(&request);
                }
            )+
            Err(CoreError::UnsupportedAction(action))
        }

        /// JSON Schema of the request body for `action`.
        ///
        /// # Errors
        ///
        /// [`CoreError::UnsupportedAction`] for an action without a typed shape.
        pub fn request_schema(action: ActionName) -> Result<Schema, CoreError> {
            $(
                if action == <$request as LightsailRequest>::ACTION {
                    return Ok(schemars::schema_for!($request));
                }
            )+
            Err(CoreError::UnsupportedAction(action))
        }

        /// JSON Schema of the result body for `action`.
        ///
        /// # Errors
        ///
        /// [`CoreError::UnsupportedAction`] for an action without a typed shape.
        pub fn response_schema(action: ActionName) -> Result<Schema, CoreError> {
            $(
                if action == <$request as LightsailRequest>::ACTION {
                    return Ok(schemars::schema_for!(<$request as LightsailRequest>::Response));
                }
            )+
            Err(CoreError::UnsupportedAction(action))
        }

        /// Decode a response body for `action` into its typed result and
        /// re-encode it as JSON, dropping anything the result shape does not
        /// model.
        ///
        /// # Errors
        ///
        /// [`CoreError::UnsupportedAction`] for an action without a typed
        /// shape, otherwise the errors of [`crate::protocol::decode_response`].
        pub fn decode_json(
            action: ActionName,
            status: u16,
            body: &[u8],
        ) -> Result<serde_json::Value, CoreError> {
            $(
                if action == <$request as LightsailRequest>::ACTION {
                    let result = crate::protocol::decode_response::<$request>(status, body)?;
                    return Ok(serde_json::to_value(result)?);
                }
            )+
            Err(CoreError::UnsupportedAction(action))
        }
    };
}

modeled_actions! {
    PutAlarmRequest,
    GetAlarmsRequest,
    DeleteAlarmRequest,
    TestAlarmRequest,
    CreateInstancesFromSnapshotRequest,
    GetInstanceMetricDataRequest,
    OpenInstancePublicPortsRequest,
    PutInstancePublicPortsRequest,
    GetInstancePortStatesRequest,
    CreateRelationalDatabaseRequest,
    GetRelationalDatabaseRequest,
    GetRelationalDatabasesRequest,
    GetRelationalDatabaseMetricDataRequest,
    GetLoadBalancerTlsCertificatesRequest,
}
