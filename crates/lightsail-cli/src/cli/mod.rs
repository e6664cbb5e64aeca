use clap::Parser;
use lightsail_config::LightsailConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, EnumsCommands};

/// Top-level CLI parser for the `lsail` binary.
#[derive(Debug, Parser)]
#[command(
    name = "lsail",
    version,
    about = "Inspect, validate and encode Lightsail API payloads offline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `general.output_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Region used to resolve the service endpoint, e.g. `eu-west-1`
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Override the service endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Resolve the global flags against the loaded configuration.
    #[must_use]
    pub fn global_flags(&self, config: &LightsailConfig) -> GlobalFlags {
        let format = self
            .format
            .or_else(|| OutputFormat::from_config(&config.general.output_format))
            .unwrap_or(OutputFormat::Json);

        GlobalFlags {
            format,
            pretty: config.general.pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use lightsail_config::LightsailConfig;

    use super::{Cli, Commands, EnumsCommands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "lsail",
            "--format",
            "raw",
            "--region",
            "eu-west-1",
            "--verbose",
            "actions",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Actions(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lsail", "enums", "list", "--format", "json", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Enums {
                action: EnumsCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lsail", "--format", "table", "actions"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn decode_error_status_defaults_to_400() {
        let cli = Cli::try_parse_from(["lsail", "decode-error"]).expect("cli should parse");
        match cli.command {
            Commands::DecodeError(args) => {
                assert_eq!(args.status, 400);
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn format_falls_back_to_config() {
        let cli = Cli::try_parse_from(["lsail", "actions"]).expect("cli should parse");
        let mut config = LightsailConfig::default();
        config.general.output_format = "raw".to_string();
        config.general.pretty = false;

        let flags = cli.global_flags(&config);
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(!flags.pretty);
    }

    #[test]
    fn format_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["lsail", "--format", "json", "actions"])
            .expect("cli should parse");
        let mut config = LightsailConfig::default();
        config.general.output_format = "raw".to_string();

        assert_eq!(cli.global_flags(&config).format, OutputFormat::Json);
    }
}
