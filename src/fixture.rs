use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::AppData;

/// Bundled resources live in the crate-relative `res/` directory.
fn res_path(name: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/res")).join(name)
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("couldn't find `{name}` in res/")]
    NotFound { name: String },
    #[error("couldn't read `{name}`: {source}")]
    Unreadable { name: String, source: std::io::Error },
    #[error("couldn't parse `{name}` as app data: {source}")]
    Decode { name: String, source: serde_json::Error },
}

/// Read and decode a bundled fixture. Runs once at startup; any failure
/// here is fatal to the caller, there is no partial or default data.
pub fn load(name: &str) -> Result<AppData, LoadError> {
    let bytes = std::fs::read(res_path(name)).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound { name: name.to_owned() },
        _ => LoadError::Unreadable { name: name.to_owned(), source: e },
    })?;
    decode(name, &bytes)
}

pub fn decode(name: &str, bytes: &[u8]) -> Result<AppData, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::Decode {
        name: name.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resource_is_not_found() {
        let err = load("no-such-fixture.json").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("no-such-fixture.json"));
    }

    #[test]
    fn malformed_bytes_are_a_decode_error() {
        let err = decode("broken.json", b"{ \"revision\": ").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn schema_mismatch_is_a_decode_error() {
        // valid JSON, wrong shape
        let err = decode("odd.json", b"{ \"revision\": \"one\" }").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }
}
