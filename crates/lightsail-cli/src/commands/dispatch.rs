use lightsail_config::LightsailConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &LightsailConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Enums { action } => commands::enums::handle(action, flags),
        Commands::Actions(args) => commands::actions::handle(args, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
        Commands::Encode(args) => commands::encode::handle(args, config, flags),
        Commands::Decode(args) => commands::decode::handle(args, flags),
        Commands::DecodeError(args) => commands::decode_error::handle(args, flags),
    }
}
