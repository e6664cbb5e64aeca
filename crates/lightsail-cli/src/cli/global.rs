use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// JSON, indented unless `general.pretty` is off.
    Json,
    /// Single-line JSON.
    Raw,
}

impl OutputFormat {
    /// Parse the `general.output_format` config value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}

/// Global flags available before or after subcommands, resolved against
/// the loaded configuration.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub pretty: bool,
}
