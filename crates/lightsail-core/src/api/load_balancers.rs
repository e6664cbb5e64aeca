//! Load balancer TLS certificates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::actions::ActionName;
use crate::errors::CoreError;
use crate::models::LoadBalancerTlsCertificate;
use crate::protocol::LightsailRequest;
use crate::validate::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetLoadBalancerTlsCertificatesRequest {
    pub load_balancer_name: String,
}

impl GetLoadBalancerTlsCertificatesRequest {
    #[must_use]
    pub fn new(load_balancer_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: load_balancer_name.into(),
        }
    }
}

impl Validate for GetLoadBalancerTlsCertificatesRequest {
    fn validate(&self) -> Result<(), CoreError> {
        validate::resource_name("loadBalancerName", &self.load_balancer_name)
    }
}

impl LightsailRequest for GetLoadBalancerTlsCertificatesRequest {
    const ACTION: ActionName = ActionName::GetLoadBalancerTlsCertificates;
    type Response = GetLoadBalancerTlsCertificatesResult;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetLoadBalancerTlsCertificatesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_certificates: Option<Vec<LoadBalancerTlsCertificate>>,
}
