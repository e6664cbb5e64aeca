//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lightsail_config::LightsailConfig;
use lightsail_core::enums::RegionName;

#[test]
fn loads_client_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[client]
region = "eu-west-3"
endpoint = "http://localhost:4566"
"#,
        )?;

        let config: LightsailConfig = Figment::from(Serialized::defaults(LightsailConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.client.region, "eu-west-3");
        assert_eq!(config.client.region_name().unwrap(), RegionName::EuWest3);
        assert_eq!(config.client.resolved_endpoint().unwrap(), "http://localhost:4566");
        Ok(())
    });
}

#[test]
fn missing_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
pretty = false
"#,
        )?;

        let config: LightsailConfig = Figment::from(Serialized::defaults(LightsailConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.general.pretty);
        assert_eq!(config.general.output_format, "json");
        assert_eq!(config.client.region, "us-east-1");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lightsail")?;
        jail.create_file(
            ".lightsail/config.toml",
            r#"
[client]
region = "ap-south-1"

[general]
output_format = "raw"
"#,
        )?;

        let config = LightsailConfig::load().expect("config loads");
        assert_eq!(config.client.region, "ap-south-1");
        assert_eq!(config.general.output_format, "raw");
        assert_eq!(
            config.client.resolved_endpoint().unwrap(),
            "https://lightsail.ap-south-1.amazonaws.com"
        );
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
pretty = "very"
"#,
        )?;

        let result: Result<LightsailConfig, _> =
            Figment::from(Serialized::defaults(LightsailConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn invalid_region_in_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[client]
region = "US-EAST-1"
"#,
        )?;

        let config: LightsailConfig = Figment::from(Serialized::defaults(LightsailConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;
        assert!(config.validate().is_err());
        Ok(())
    });
}
