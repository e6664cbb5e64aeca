use std::collections::BTreeMap;

use anyhow::Context;
use lightsail_config::LightsailConfig;
use lightsail_core::api;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EncodeArgs;
use crate::commands::shared::input::{parse_json, read_input};
use crate::commands::shared::parse::parse_action;
use crate::output::output;

/// An HTTP request ready to be signed and sent.
#[derive(Debug, Serialize)]
pub struct EncodedRequest {
    pub endpoint: String,
    pub method: &'static str,
    pub headers: BTreeMap<&'static str, String>,
    pub body: serde_json::Value,
}

/// Validate `input` as the request for `action` and wrap it in its envelope.
pub fn build(
    action: &str,
    input: &[u8],
    config: &LightsailConfig,
) -> anyhow::Result<EncodedRequest> {
    let action = parse_action(action)?;
    let request = parse_json(input, "request")?;
    let envelope = api::encode_json(action, request)?;
    let endpoint = config
        .client
        .resolved_endpoint()
        .context("cannot resolve the service endpoint")?;

    let mut headers = BTreeMap::new();
    headers.insert("Content-Type", envelope.content_type.to_string());
    headers.insert("X-Amz-Target", envelope.target);

    Ok(EncodedRequest {
        endpoint,
        method: "POST",
        headers,
        body: serde_json::from_str(&envelope.body)?,
    })
}

/// Handle `lsail encode`.
pub fn handle(
    args: &EncodeArgs,
    config: &LightsailConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = read_input(args.input.as_deref())?;
    output(&build(&args.action, &input, config)?, flags)
}
