use lightsail_core::{ActionName, WireEnum};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActionsArgs;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionSummary {
    pub name: &'static str,
    pub target: String,
    pub modeled: bool,
}

/// Every action in declaration order, optionally only the modeled ones.
#[must_use]
pub fn list(modeled_only: bool) -> Vec<ActionSummary> {
    ActionName::ALL
        .iter()
        .filter(|action| !modeled_only || action.is_modeled())
        .map(|&action| ActionSummary {
            name: action.to_wire_value(),
            target: action.target(),
            modeled: action.is_modeled(),
        })
        .collect()
}

/// Handle `lsail actions`.
pub fn handle(args: &ActionsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&list(args.modeled), flags)
}
