use lightsail_core::api;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::parse::parse_action;
use crate::output::output;

/// JSON Schema of the request, or the result when `response` is set.
pub fn build(action: &str, response: bool) -> anyhow::Result<serde_json::Value> {
    let action = parse_action(action)?;
    let schema = if response {
        api::response_schema(action)?
    } else {
        api::request_schema(action)?
    };
    Ok(serde_json::to_value(schema)?)
}

/// Handle `lsail schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(&args.action, args.response)?, flags)
}

#[cfg(test)]
mod tests {
    use super::build;

    #[test]
    fn request_schema_has_required_fields() {
        let schema = build("TestAlarm", false).expect("schema should build");
        let mut required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required should be an array")
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();
        required.sort_unstable();
        assert_eq!(required, vec!["alarmName", "state"]);
    }

    #[test]
    fn response_schema_describes_result() {
        let schema = build("GetInstancePortStates", true).expect("schema should build");
        assert!(schema["properties"].get("portStates").is_some());
    }

    #[test]
    fn unmodeled_action_is_reported() {
        let err = build("RebootInstance", false).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "Action RebootInstance has no typed request shape"
        );
    }
}
