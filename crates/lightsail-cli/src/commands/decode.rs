use lightsail_core::api;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeArgs;
use crate::commands::shared::input::read_input;
use crate::commands::shared::parse::parse_action;
use crate::output::output;

/// Decode a response body for `action` through its typed result shape.
pub fn build(action: &str, status: u16, body: &[u8]) -> anyhow::Result<serde_json::Value> {
    let action = parse_action(action)?;
    Ok(api::decode_json(action, status, body)?)
}

/// Handle `lsail decode`.
pub fn handle(args: &DecodeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = read_input(args.input.as_deref())?;
    output(&build(&args.action, args.status, &body)?, flags)
}
