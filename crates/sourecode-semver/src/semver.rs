//! Semver facade providing string level version operations

use crate::{Version, VersionParser};

/// Facade for working with version strings directly
pub struct Semver;

impl Semver {
    /// Check if a string is a valid SemVer 2.0.0 version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Sort versions in ascending order of precedence
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order of precedence
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    // Invalid versions are dropped; equal precedence keeps input order.
    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match parser.parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("skipping version while sorting: {}", err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
