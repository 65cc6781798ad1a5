use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

pub static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

const PREFIX: char = 'v';
const SEPARATOR: char = '.';
const ELEMENTS: usize = 3;

/// Three-way result of [`Version::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Less => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::Greater => Ordering::Greater,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Comparison::Less => write!(f, "less"),
            Comparison::Equal => write!(f, "equal"),
            Comparison::Greater => write!(f, "greater"),
        }
    }
}

/// A `vMAJOR.MINOR.PATCH` release number without pre-release or build metadata.
///
/// The zero value `v0.0.0` is a valid version and is what `Default` returns.
/// Serialized as its canonical string in every serde format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses `vMAJOR.MINOR.PATCH`, the `v` prefix being optional.
    ///
    /// Checks run in a fixed order and the first failing one decides the error:
    /// empty input, element count, empty element, non-digit characters, leading
    /// zeroes, and finally the `u64` conversion itself.
    pub fn parse(version_str: &str) -> Result<Self, ParseError> {
        if version_str.is_empty() {
            trace!("Rejecting empty version string");
            return Err(ParseError::EmptyInput);
        }

        let stripped = version_str.strip_prefix(PREFIX).unwrap_or(version_str);
        let parts: Vec<&str> = stripped.split(SEPARATOR).collect();
        if parts.len() != ELEMENTS {
            trace!(
                "Rejecting {:?}: {} elements instead of {}",
                version_str,
                parts.len(),
                ELEMENTS
            );
            return Err(ParseError::InvalidFormat);
        }

        if parts.iter().any(|part| part.is_empty()) {
            trace!("Rejecting {:?}: empty element", version_str);
            return Err(ParseError::EmptyElement);
        }
        if !parts
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        {
            trace!("Rejecting {:?}: invalid character", version_str);
            return Err(ParseError::InvalidCharacter);
        }
        if parts.iter().any(|part| part.len() > 1 && part.starts_with('0')) {
            trace!("Rejecting {:?}: leading zeroes", version_str);
            return Err(ParseError::LeadingZeroes);
        }

        // Only overflow can fail past this point
        let major = parts[0].parse::<u64>()?;
        let minor = parts[1].parse::<u64>()?;
        let patch = parts[2].parse::<u64>()?;
        Ok(Version::new(major, minor, patch))
    }

    /// Parses a version that is known to be valid, typically a literal.
    ///
    /// # Panics
    ///
    /// Panics if `version_str` is not a valid version. Use [`Version::parse`]
    /// for anything that did not come from source code.
    pub fn must(version_str: &str) -> Self {
        match Version::parse(version_str) {
            Ok(version) => version,
            Err(e) => panic!("invalid version literal {:?}: {}", version_str, e),
        }
    }

    /// Three-way comparison over (major, minor, patch), in that order.
    ///
    /// The `==`, `<`, `<=`, `>` and `>=` operators agree with this result.
    pub fn compare(&self, other: &Version) -> Comparison {
        self.cmp(other).into()
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            PREFIX, self.major, self.minor, self.patch
        )
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Version::new(major, minor, patch)
    }
}

/// Builds a [`Version`] from a literal, panicking if it is malformed.
///
/// ```
/// let v = semver_core::version!("v1.2.3");
/// assert_eq!(v, semver_core::Version::new(1, 2, 3));
/// ```
#[macro_export]
macro_rules! version {
    ($literal:expr) => {
        $crate::Version::must($literal)
    };
}
