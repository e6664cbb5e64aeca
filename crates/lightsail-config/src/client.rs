//! Service endpoint configuration.

use lightsail_core::WireEnum;
use lightsail_core::enums::RegionName;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_region() -> String {
    RegionName::UsEast1.as_str().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Region to address, e.g. `us-east-2`.
    #[serde(default = "default_region")]
    pub region: String,

    /// Endpoint override (e.g. a local mock). Empty means the regional
    /// service endpoint.
    #[serde(default)]
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: String::new(),
        }
    }
}

impl ClientConfig {
    /// Check if a region is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.region.is_empty()
    }

    #[must_use]
    pub fn has_endpoint_override(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// The configured region as a known region name.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotConfigured`] if no region is set,
    /// [`ConfigError::InvalidValue`] if it is not a region the service runs in.
    pub fn region_name(&self) -> Result<RegionName, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "client".into(),
            });
        }
        RegionName::from_wire_value(&self.region).map_err(|e| ConfigError::InvalidValue {
            field: "client.region".into(),
            reason: e.to_string(),
        })
    }

    /// The endpoint requests should be sent to.
    ///
    /// Returns the override when set, otherwise
    /// `https://lightsail.{region}.amazonaws.com`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for an override without an `http(s)://`
    /// scheme, or the errors of [`ClientConfig::region_name`].
    pub fn resolved_endpoint(&self) -> Result<String, ConfigError> {
        if self.has_endpoint_override() {
            if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
                return Err(ConfigError::InvalidValue {
                    field: "client.endpoint".into(),
                    reason: format!("'{}' must start with http:// or https://", self.endpoint),
                });
            }
            return Ok(self.endpoint.trim_end_matches('/').to_string());
        }
        let region = self.region_name()?;
        Ok(format!("https://lightsail.{region}.amazonaws.com"))
    }
}
