use anyhow::Context;
use lightsail_config::LightsailConfig;

use crate::cli::Cli;

/// Load layered configuration, then apply the `--region` and `--endpoint`
/// flags on top of it.
///
/// Region and endpoint are checked by the commands that build requests, so
/// offline commands keep working with any `AWS_REGION`.
pub fn load_config(cli: &Cli) -> anyhow::Result<LightsailConfig> {
    let mut config =
        LightsailConfig::load_with_dotenv().context("could not load configuration")?;
    apply_overrides(&mut config, cli);
    config
        .validate_general()
        .context("invalid lsail configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut LightsailConfig, cli: &Cli) {
    if let Some(region) = &cli.region {
        tracing::debug!(%region, "region overridden on the command line");
        config.client.region.clone_from(region);
    }
    if let Some(endpoint) = &cli.endpoint {
        tracing::debug!(%endpoint, "endpoint overridden on the command line");
        config.client.endpoint.clone_from(endpoint);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use lightsail_config::LightsailConfig;

    use super::apply_overrides;
    use crate::cli::Cli;

    #[test]
    fn flags_replace_configured_client_values() {
        let cli = Cli::try_parse_from([
            "lsail",
            "--region",
            "eu-west-1",
            "--endpoint",
            "http://localhost:4566",
            "actions",
        ])
        .expect("cli should parse");
        let mut config = LightsailConfig::default();

        apply_overrides(&mut config, &cli);

        assert_eq!(config.client.region, "eu-west-1");
        assert_eq!(config.client.endpoint, "http://localhost:4566");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unsupported_region_does_not_block_offline_commands() {
        let cli = Cli::try_parse_from(["lsail", "--region", "eu-north-1", "enums", "list"])
            .expect("cli should parse");
        let mut config = LightsailConfig::default();

        apply_overrides(&mut config, &cli);

        assert!(config.validate_general().is_ok());
        assert!(config.client.resolved_endpoint().is_err());
    }

    #[test]
    fn absent_flags_keep_configured_values() {
        let cli = Cli::try_parse_from(["lsail", "actions"]).expect("cli should parse");
        let mut config = LightsailConfig::default();
        config.client.region = "ap-south-1".to_string();

        apply_overrides(&mut config, &cli);

        assert_eq!(config.client.region, "ap-south-1");
        assert!(config.client.endpoint.is_empty());
    }
}
