//! Semantic version value type
//!
//! This crate provides strict SemVer 2.0.0 parsing, an immutable `Version`
//! value with "with" style producers, canonical rendering and precedence
//! comparison.
//!
//! ```
//! use sourecode_semver::Version;
//!
//! let rc = Version::parse("1.0.0-rc.1").unwrap();
//! let release = rc.with_pre_release(Vec::<String>::new());
//!
//! assert!(rc < release);
//! assert_eq!(release.to_string(), "1.0.0");
//! ```

mod comparator;
mod semver;
#[cfg(feature = "serde")]
mod serde_impl;
mod version;
pub mod version_parser;

pub use comparator::Comparator;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{VersionParser, VersionParserError};
