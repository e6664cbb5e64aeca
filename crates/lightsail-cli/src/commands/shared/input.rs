use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read a payload from `path`, or from stdin when `path` is absent or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Parse a payload as JSON, naming its source in the error.
pub fn parse_json(bytes: &[u8], source: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_slice(bytes).with_context(|| format!("{source} is not valid JSON"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{parse_json, read_input};

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        file.write_all(br#"{"alarmName":"cpu-high"}"#)
            .expect("temp file should be writable");

        let bytes = read_input(Some(file.path())).expect("input should be read");
        assert_eq!(bytes, br#"{"alarmName":"cpu-high"}"#);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("absent.json");

        let err = read_input(Some(&path)).expect_err("missing file should fail");
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn invalid_json_names_the_source() {
        let err = parse_json(b"{not json", "request").expect_err("should fail");
        assert_eq!(err.to_string(), "request is not valid JSON");
    }
}
