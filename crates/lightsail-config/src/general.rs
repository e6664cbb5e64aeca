//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_output_format() -> String {
    "json".to_string()
}

/// Pretty-print JSON output by default.
const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (`json` or `raw`).
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Whether JSON output is indented.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            pretty: default_pretty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.output_format, "json");
        assert!(config.pretty);
    }
}
