use crate::error::{ReleaseGateError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    pub fn parse(tag: &str) -> Result<Self> {
        // Remove 'v' or 'V' prefix
        let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');

        // Split by '.' and parse
        let parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseGateError::MalformedVersion(tag.to_string()));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| ReleaseGateError::MalformedVersion(tag.to_string()))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| ReleaseGateError::MalformedVersion(tag.to_string()))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| ReleaseGateError::MalformedVersion(tag.to_string()))?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Check whether a string looks like a version ("1.2.3", optionally
    /// prefixed with 'v' or 'V') without parsing it.
    pub fn is_valid(s: &str) -> bool {
        match regex::Regex::new(r"^[vV]?\d+\.\d+\.\d+$") {
            Ok(re) => re.is_match(s),
            Err(_) => false,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        let v = Version::parse("V1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("v1.2.3.4").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_negative_component() {
        assert!(Version::parse("1.-2.3").is_err());
    }

    #[test]
    fn test_version_equality_ignores_prefix() {
        assert_eq!(
            Version::parse("v1.2.3").unwrap(),
            Version::parse("1.2.3").unwrap()
        );
    }

    #[test]
    fn test_version_ordering() {
        let a = Version::new(1, 2, 3);
        let b = Version::new(1, 2, 4);
        let c = Version::new(2, 0, 0);

        assert!(a < b);
        assert!(b < c);
        assert!(c > a);
    }

    #[test]
    fn test_version_ordering_is_numeric_not_lexicographic() {
        // "10" sorts before "9" as a string; as a version it must not
        assert!(Version::parse("1.10.0").unwrap() > Version::parse("1.9.0").unwrap());
        assert!(Version::parse("10.0.0").unwrap() > Version::parse("9.9.9").unwrap());
    }

    #[test]
    fn test_version_ordering_is_total() {
        let a = Version::new(1, 2, 3);
        let b = Version::new(1, 3, 0);

        let relations = [a < b, a == b, a > b];
        assert_eq!(relations.iter().filter(|r| **r).count(), 1);
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_parse_format_round_trip() {
        for tag in ["0.0.1", "1.2.3", "10.20.30", "v4.5.6"] {
            let v = Version::parse(tag).unwrap();
            let formatted = v.to_string();
            assert_eq!(Version::parse(&formatted).unwrap(), v);
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(Version::is_valid("1.2.3"));
        assert!(Version::is_valid("v1.2.3"));
        assert!(Version::is_valid("V10.0.1"));
        assert!(!Version::is_valid("1.2"));
        assert!(!Version::is_valid("1.2.3.4"));
        assert!(!Version::is_valid("abc"));
        assert!(!Version::is_valid(""));
    }
}
