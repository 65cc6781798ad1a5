use std::num::ParseIntError;
use strum_macros::{Display, EnumString};

/// Why a string was rejected by [`Version::parse`](crate::Version::parse).
///
/// The first five variants are the validation failures, reported in the order
/// they are checked. `Number` carries the integer conversion error unchanged;
/// after validation the only way to get there is a `u64` overflow.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("semver: empty string")]
    EmptyInput,
    #[error("semver: invalid format")]
    InvalidFormat,
    #[error("semver: empty element")]
    EmptyElement,
    #[error("semver: invalid character")]
    InvalidCharacter,
    #[error("semver: leading zeros")]
    LeadingZeroes,
    #[error(transparent)]
    Number(#[from] ParseIntError),
}

// Payload-free mirror of ParseError, for matching and logging by kind
#[derive(Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidFormat,
    EmptyElement,
    InvalidCharacter,
    LeadingZeroes,
    Number,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            ParseError::EmptyInput => ErrorKind::EmptyInput,
            ParseError::InvalidFormat => ErrorKind::InvalidFormat,
            ParseError::EmptyElement => ErrorKind::EmptyElement,
            ParseError::InvalidCharacter => ErrorKind::InvalidCharacter,
            ParseError::LeadingZeroes => ErrorKind::LeadingZeroes,
            ParseError::Number(_) => ErrorKind::Number,
        }
    }

    pub fn from_anyhow_error(error: &anyhow::Error) -> Option<&Self> {
        error.chain().find_map(|cause| cause.downcast_ref::<Self>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "semver: empty string");
        assert_eq!(ParseError::InvalidFormat.to_string(), "semver: invalid format");
        assert_eq!(ParseError::EmptyElement.to_string(), "semver: empty element");
        assert_eq!(
            ParseError::InvalidCharacter.to_string(),
            "semver: invalid character"
        );
        assert_eq!(ParseError::LeadingZeroes.to_string(), "semver: leading zeros");
    }

    #[test]
    fn test_number_is_transparent() {
        let inner = "18446744073709551616".parse::<u64>().unwrap_err();
        let error = ParseError::from(inner.clone());
        assert_eq!(error.to_string(), inner.to_string());
        assert_eq!(error.kind(), ErrorKind::Number);
    }

    #[test]
    fn test_kind_round_trips_through_strum() {
        for kind in [
            ErrorKind::EmptyInput,
            ErrorKind::InvalidFormat,
            ErrorKind::EmptyElement,
            ErrorKind::InvalidCharacter,
            ErrorKind::LeadingZeroes,
            ErrorKind::Number,
        ] {
            assert_eq!(ErrorKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        assert!(ErrorKind::from_str("Unknown").is_err());
    }

    #[test]
    fn test_from_anyhow_error() {
        let error = anyhow::Error::new(ParseError::LeadingZeroes).context("Failed to decode");
        assert_eq!(
            ParseError::from_anyhow_error(&error),
            Some(&ParseError::LeadingZeroes)
        );

        let unrelated = anyhow::anyhow!("something else");
        assert!(ParseError::from_anyhow_error(&unrelated).is_none());
    }
}
