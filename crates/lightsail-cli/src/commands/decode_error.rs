use lightsail_core::ServiceError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeErrorArgs;
use crate::commands::shared::input::read_input;
use crate::output::output;

/// Decode an error body. Never fails; see [`ServiceError::from_response`].
#[must_use]
pub fn build(status: u16, body: &[u8]) -> ServiceError {
    let error = ServiceError::from_response(status, body);
    tracing::debug!(type_name = %error.type_name, kind = ?error.kind, "decoded service error");
    error
}

/// Handle `lsail decode-error`.
pub fn handle(args: &DecodeErrorArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = read_input(args.input.as_deref())?;
    output(&build(args.status, &body), flags)
}
