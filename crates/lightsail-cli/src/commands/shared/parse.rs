use lightsail_core::{ActionName, WireEnum};

/// Parse an action name, e.g. `PutAlarm`.
///
/// Matching is exact, like every other wire lookup.
pub fn parse_action(raw: &str) -> anyhow::Result<ActionName> {
    ActionName::from_wire_value(raw).map_err(|error| {
        anyhow::anyhow!("{error} (run `lsail actions` for the list of action names)")
    })
}
