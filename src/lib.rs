//! Strict `vMAJOR.MINOR.PATCH` versions: parsing, ordering and formatting.
//!
//! ```
//! use semver_core::{sort, Version};
//!
//! let parsed = Version::parse("v1.10.0").unwrap();
//! assert!(parsed > Version::new(1, 9, 7));
//! assert_eq!(parsed.to_string(), "v1.10.0");
//!
//! let sorted = sort(["v2.0.0", "1.0.0"].iter().map(|s| Version::must(s)));
//! assert_eq!(sorted[0], Version::new(1, 0, 0));
//! ```

pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod logger;
pub mod version;
pub mod versions;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use error::{ErrorKind, ParseError};
pub use version::{Comparison, Version};
pub use versions::{sort, Versions};
