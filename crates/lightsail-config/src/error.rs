use thiserror::Error;

/// Failures while loading or checking lsail configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment layer could not be read or has the wrong shape.
    #[error("failed to read lsail configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section the caller needs has no value set anywhere.
    #[error(
        "[{section}] is not set; configure it in .lightsail/config.toml or LIGHTSAIL_* variables"
    )]
    NotConfigured { section: String },

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
