//! SemVer 2.0.0 grammar and string parsing

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::Version;

/// Major component: `0` or a number without leading zeros
pub const MAJOR_EXPRESSION: &str = r"(?P<major>0|[1-9][0-9]*)";

/// Minor component: `0` or a number without leading zeros
pub const MINOR_EXPRESSION: &str = r"(?P<minor>0|[1-9][0-9]*)";

/// Patch component: `0` or a number without leading zeros
pub const PATCH_EXPRESSION: &str = r"(?P<patch>0|[1-9][0-9]*)";

/// Dot separated pre-release identifiers, numeric ones without leading zeros
pub const PRE_RELEASE_EXPRESSION: &str = r"(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*)";

/// Dot separated build metadata identifiers
pub const BUILD_METADATA_EXPRESSION: &str = r"(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)";

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("The \"{0}\" version is invalid.")]
    InvalidFormat(String),
    #[error("Invalid {kind} identifier \"{identifier}\"")]
    InvalidIdentifier {
        identifier: String,
        kind: &'static str,
    },
}

lazy_static! {
    // Composed, unanchored version expression
    static ref EXPRESSION: String = format!(
        r"{}\.{}\.{}(?:-{})?(?:\+{})?",
        MAJOR_EXPRESSION,
        MINOR_EXPRESSION,
        PATCH_EXPRESSION,
        PRE_RELEASE_EXPRESSION,
        BUILD_METADATA_EXPRESSION
    );

    static ref VERSION_RE: Regex = Regex::new(&format!("^{}$", *EXPRESSION)).unwrap();

    static ref PRE_RELEASE_IDENTIFIER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)$").unwrap();

    static ref BUILD_IDENTIFIER_RE: Regex = Regex::new(r"^[0-9a-zA-Z-]+$").unwrap();
}

/// The full version expression without anchors, compiled once per process.
pub fn expression() -> &'static str {
    EXPRESSION.as_str()
}

/// Strict SemVer 2.0.0 parser
#[derive(Debug, Clone, Copy)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        VERSION_RE.is_match(version)
    }

    /// Parse a version string.
    ///
    /// The whole input must match the grammar: no surrounding whitespace,
    /// no `v` prefix, no missing components.
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let invalid = || {
            log::debug!("rejecting version string {:?}", version);
            VersionParserError::InvalidFormat(version.to_string())
        };

        let caps = VERSION_RE.captures(version).ok_or_else(invalid)?;

        let major = numeric_capture(&caps, "major").ok_or_else(invalid)?;
        let minor = numeric_capture(&caps, "minor").ok_or_else(invalid)?;
        let patch = numeric_capture(&caps, "patch").ok_or_else(invalid)?;

        let pre_release = split_identifiers(caps.name("prerelease").map(|m| m.as_str()));
        let build_metadata = split_identifiers(caps.name("buildmetadata").map(|m| m.as_str()));

        log::trace!("parsed version {:?}", version);

        Ok(Version::from_parts(major, minor, patch, pre_release, build_metadata))
    }

    /// Check a single pre-release identifier against the grammar
    pub fn is_valid_pre_release_identifier(identifier: &str) -> bool {
        PRE_RELEASE_IDENTIFIER_RE.is_match(identifier)
    }

    /// Check a single build metadata identifier against the grammar
    pub fn is_valid_build_identifier(identifier: &str) -> bool {
        BUILD_IDENTIFIER_RE.is_match(identifier)
    }

    /// Validate already split pre-release and build metadata identifiers
    pub fn validate_identifiers(
        pre_release: &[String],
        build_metadata: &[String],
    ) -> Result<(), VersionParserError> {
        if let Some(bad) = pre_release
            .iter()
            .find(|id| !Self::is_valid_pre_release_identifier(id))
        {
            return Err(VersionParserError::InvalidIdentifier {
                identifier: bad.clone(),
                kind: "pre-release",
            });
        }

        if let Some(bad) = build_metadata
            .iter()
            .find(|id| !Self::is_valid_build_identifier(id))
        {
            return Err(VersionParserError::InvalidIdentifier {
                identifier: bad.clone(),
                kind: "build metadata",
            });
        }

        Ok(())
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

// Components that match the grammar but overflow u64 yield None.
fn numeric_capture(caps: &Captures<'_>, name: &str) -> Option<u64> {
    caps.name(name)?.as_str().parse().ok()
}

fn split_identifiers(section: Option<&str>) -> Vec<String> {
    match section {
        Some(s) => s.split('.').map(str::to_string).collect(),
        None => Vec::new(),
    }
}
