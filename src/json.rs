use crate::version::Version;
use anyhow::{Context, Result};
use tracing::trace;

/// Encodes `version` as a JSON string, e.g. `"v1.2.3"`.
pub fn to_json(version: &Version) -> Result<String> {
    serde_json::to_string(version).with_context(|| format!("Failed to encode {} as JSON", version))
}

/// Decodes a JSON string value into a version.
///
/// The string is extracted first and then parsed, so a malformed version keeps
/// its [`ParseError`](crate::ParseError) in the error chain.
pub fn from_json(data: &str) -> Result<Version> {
    let decoded: String =
        serde_json::from_str(data).with_context(|| "Failed to parse JSON data")?;
    trace!("Decoding version {:?} from JSON", decoded);
    Version::parse(&decoded).with_context(|| format!("Invalid version in JSON: {:?}", decoded))
}
