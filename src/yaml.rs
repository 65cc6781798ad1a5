use crate::version::Version;
use anyhow::{Context, Result};
use tracing::trace;

/// Encodes `version` as a YAML string scalar.
pub fn to_yaml(version: &Version) -> Result<String> {
    serde_yaml::to_string(version).with_context(|| format!("Failed to encode {} as YAML", version))
}

/// Decodes a YAML string scalar into a version, keeping any
/// [`ParseError`](crate::ParseError) in the error chain.
pub fn from_yaml(data: &str) -> Result<Version> {
    let decoded: String =
        serde_yaml::from_str(data).with_context(|| "Failed to parse YAML data")?;
    trace!("Decoding version {:?} from YAML", decoded);
    Version::parse(&decoded).with_context(|| format!("Invalid version in YAML: {:?}", decoded))
}
