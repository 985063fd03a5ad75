//! Version precedence comparison

use std::cmp::Ordering;

use crate::Version;

/// Comparator implementing SemVer precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_version(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_version(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_version(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_version(version1, version2) != Ordering::Greater
    }

    /// Check if version1 and version2 have the same precedence
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_version(version1, version2) == Ordering::Equal
    }

    /// Check if version1 and version2 differ in precedence
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        !Self::equal_to(version1, version2)
    }

    /// Compare two versions: major, minor and patch first, then pre-release.
    /// Build metadata never takes part.
    pub fn compare_version(a: &Version, b: &Version) -> Ordering {
        if std::ptr::eq(a, b) {
            return Ordering::Equal;
        }

        Self::compare_main(a, b).then_with(|| Self::compare_pre_release(a, b))
    }

    /// Compare major, minor and patch numerically
    pub fn compare_main(a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
    }

    /// Compare pre-release sequences.
    ///
    /// A release outranks any pre-release. Otherwise identifiers are compared
    /// pairwise and, when one sequence runs out first, the shorter one is lower.
    pub fn compare_pre_release(a: &Version, b: &Version) -> Ordering {
        let (a, b) = (a.pre_release(), b.pre_release());

        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (false, false) => {}
        }

        let mut left = a.iter();
        let mut right = b.iter();

        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some(x), Some(y)) => match Self::compare_identifiers(x, y) {
                    Ordering::Equal => continue,
                    other => return other,
                },
            }
        }
    }

    /// Compare two identifiers.
    ///
    /// Numeric strings sort before anything else and compare by value; the
    /// rest compare byte-wise.
    pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        match (is_numeric(a), is_numeric(b)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => compare_numeric(a, b).then_with(|| a.cmp(b)),
            (false, false) => a.cmp(b),
        }
    }
}

/// Generic numeric string test: optional surrounding whitespace, an optional
/// sign, digits with an optional fraction and an optional exponent.
pub(crate) fn is_numeric(s: &str) -> bool {
    let bytes = s.trim_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// Plain digit strings compare exactly at any length; anything else goes
// through f64.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let plain = |s: &str| s.bytes().all(|c| c.is_ascii_digit());

    if plain(a) && plain(b) {
        let a = a.trim_start_matches('0');
        let b = b.trim_start_matches('0');
        return a.len().cmp(&b.len()).then_with(|| a.cmp(b));
    }

    let value = |s: &str| s.trim().parse::<f64>().ok();
    match (value(a), value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: &str, b: &str) -> Ordering {
        Version::parse(a).unwrap().compare(&Version::parse(b).unwrap())
    }

    const COMPARE_DATA: &[(Ordering, &str, &str)] = &[
        (Ordering::Equal, "1.2.3", "1.2.3"),
        (Ordering::Less, "1.2.3", "2.2.3"),
        (Ordering::Less, "1.2.3", "1.3.3"),
        (Ordering::Less, "1.2.3", "1.2.4"),
        (Ordering::Greater, "1.2.3", "0.2.3"),
        (Ordering::Greater, "1.2.3", "1.1.3"),
        (Ordering::Greater, "1.2.3", "1.2.2"),
        (Ordering::Less, "1.2.3-a", "1.2.3-b"),
        (Ordering::Greater, "1.2.3-b", "1.2.3-a"),
        (Ordering::Greater, "1.2.3", "1.2.3-a"),
        (Ordering::Less, "1.0.0-alpha", "1.0.0-alpha.1"),
        (Ordering::Less, "1.0.0-alpha.1", "1.0.0-alpha.beta"),
        (Ordering::Less, "1.0.0-alpha.beta", "1.0.0-beta"),
        (Ordering::Less, "1.0.0-beta", "1.0.0-beta.2"),
        (Ordering::Less, "1.0.0-beta.2", "1.0.0-beta.11"),
        (Ordering::Less, "1.0.0-beta.11", "1.0.0-rc.1"),
        (Ordering::Less, "1.0.0-rc.1", "1.0.0"),
    ];

    #[test]
    fn test_compare() {
        for &(expected, a, b) in COMPARE_DATA {
            assert_eq!(compare(a, b), expected, "compare({}, {})", a, b);
        }
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let versions: Vec<&str> = COMPARE_DATA
            .iter()
            .flat_map(|&(_, a, b)| [a, b])
            .chain(["1.2.3+foo", "1.0.0-alpha.1+build", "10.0.0", "1.10.0"])
            .collect();

        for a in &versions {
            for b in &versions {
                assert_eq!(compare(a, b), compare(b, a).reverse(), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_compare_ignores_build_metadata() {
        assert_eq!(compare("1.2.3+foo", "1.2.3+bar"), Ordering::Equal);
        assert_eq!(compare("1.2.3-rc.1+foo", "1.2.3-rc.1"), Ordering::Equal);
        assert_eq!(compare("1.2.3+zzz", "1.2.4+aaa"), Ordering::Less);
    }

    #[test]
    fn test_equal_pre_release_distinct_values() {
        assert_eq!(compare("1.0.0-alpha.1", "1.0.0-alpha.1"), Ordering::Equal);
    }

    #[test]
    fn test_same_instance() {
        let version = Version::parse("1.0.0-beta").unwrap();
        assert_eq!(Comparator::compare_version(&version, &version), Ordering::Equal);
    }

    #[test]
    fn test_numeric_components_are_not_lexicographic() {
        assert_eq!(compare("10.0.0", "9.0.0"), Ordering::Greater);
        assert_eq!(compare("1.10.0", "1.9.0"), Ordering::Greater);
        assert_eq!(compare("1.0.10", "1.0.9"), Ordering::Greater);
    }

    #[test]
    fn test_boolean_helpers() {
        let low = Version::parse("1.25.0").unwrap();
        let high = Version::parse("1.26.0").unwrap();
        let low_build = Version::parse("1.25.0+build.7").unwrap();

        assert!(Comparator::greater_than(&high, &low));
        assert!(!Comparator::greater_than(&low, &low_build));
        assert!(Comparator::greater_than_or_equal_to(&low, &low_build));
        assert!(Comparator::less_than(&low, &high));
        assert!(Comparator::less_than_or_equal_to(&low, &high));
        assert!(!Comparator::less_than_or_equal_to(&high, &low));
        assert!(Comparator::equal_to(&low, &low_build));
        assert!(Comparator::not_equal_to(&low, &high));
    }

    #[test]
    fn test_compare_identifiers() {
        assert_eq!(Comparator::compare_identifiers("2", "11"), Ordering::Less);
        assert_eq!(Comparator::compare_identifiers("11", "alpha"), Ordering::Less);
        assert_eq!(Comparator::compare_identifiers("alpha", "0"), Ordering::Greater);
        assert_eq!(Comparator::compare_identifiers("alpha", "beta"), Ordering::Less);
        assert_eq!(Comparator::compare_identifiers("Beta", "alpha"), Ordering::Less);
        assert_eq!(Comparator::compare_identifiers("rc", "rc"), Ordering::Equal);
        assert_eq!(
            Comparator::compare_identifiers("18446744073709551616", "18446744073709551615"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_identifiers_generic_numeric() {
        // Exponent and signed forms are numbers, not words
        assert_eq!(Comparator::compare_identifiers("1e3", "999"), Ordering::Greater);
        assert_eq!(Comparator::compare_identifiers("1e3", "alpha"), Ordering::Less);
        assert_eq!(Comparator::compare_identifiers("-1", "0"), Ordering::Less);
        assert_eq!(Comparator::compare_identifiers("1e3", "1000"), Ordering::Greater);
        assert_eq!(Comparator::compare_identifiers("1000", "1e3"), Ordering::Less);
    }

    #[test]
    fn test_is_numeric() {
        for s in ["0", "11", "007", "-1", "+1", "1.5", ".5", "5.", "1e3", "1E-3", " 1", "1 "] {
            assert!(is_numeric(s), "{:?} should be numeric", s);
        }
        for s in ["", "-", ".", "e3", "1e", "1e+", "alpha", "1a", "0x1A", "--1", "inf", "NaN", "1-2"] {
            assert!(!is_numeric(s), "{:?} should not be numeric", s);
        }
    }
}
