//! Immutable semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{Comparator, VersionParser, VersionParserError};

/// A parsed SemVer 2.0.0 version.
///
/// All fields are private; the `with_*` producers return a new value and
/// never touch the receiver. Equality and hashing are structural, so two
/// versions that differ only in build metadata are not `==` even though
/// [`Version::compare`] reports them as equal precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
}

impl Version {
    /// Create a release version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// Create a version from all of its parts.
    ///
    /// Identifiers are taken as given; use [`Version::try_from_parts`] to
    /// have them checked against the grammar.
    pub fn from_parts<P, B>(major: u64, minor: u64, patch: u64, pre_release: P, build_metadata: B) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Version {
            major,
            minor,
            patch,
            pre_release: pre_release.into_iter().map(Into::into).collect(),
            build_metadata: build_metadata.into_iter().map(Into::into).collect(),
        }
    }

    /// Like [`Version::from_parts`], but rejects identifiers that could
    /// never come out of [`Version::parse`].
    pub fn try_from_parts<P, B>(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: P,
        build_metadata: B,
    ) -> Result<Self, VersionParserError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let version = Self::from_parts(major, minor, patch, pre_release, build_metadata);
        VersionParser::validate_identifiers(&version.pre_release, &version.build_metadata)?;
        Ok(version)
    }

    /// Parse a version string, see [`VersionParser::parse`]
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    /// True when the version carries at least one pre-release identifier
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn with_major(&self, major: u64) -> Self {
        Version {
            major,
            ..self.clone()
        }
    }

    pub fn with_minor(&self, minor: u64) -> Self {
        Version {
            minor,
            ..self.clone()
        }
    }

    pub fn with_patch(&self, patch: u64) -> Self {
        Version {
            patch,
            ..self.clone()
        }
    }

    /// Replace the pre-release identifiers; an empty sequence makes this a release
    pub fn with_pre_release<I>(&self, pre_release: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: pre_release.into_iter().map(Into::into).collect(),
            build_metadata: self.build_metadata.clone(),
        }
    }

    pub fn with_build_metadata<I>(&self, build_metadata: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: self.pre_release.clone(),
            build_metadata: build_metadata.into_iter().map(Into::into).collect(),
        }
    }

    /// Compare precedence with another version; build metadata is ignored
    pub fn compare(&self, other: &Version) -> Ordering {
        Self::compare_version(self, other)
    }

    /// Compare the precedence of two versions
    pub fn compare_version(a: &Version, b: &Version) -> Ordering {
        Comparator::compare_version(a, b)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }

        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata.join("."))?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionParserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Ord for Version {
    /// Precedence order, with build metadata as the last tie-break so the
    /// ordering agrees with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
            .then_with(|| self.build_metadata.cmp(&other.build_metadata))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
