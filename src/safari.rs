//! Safari platform constraints for the surrounding pipeline.
//!
//! The dialect converter itself never consults this module; it exists for the
//! later stages that assemble converted lines into a content-blocker list and
//! must respect the per-version rule-count ceiling. OS-level version
//! detection (bundle lookups and the like) is platform glue and lives with
//! the embedding application, not here.

use std::str::FromStr;
use thiserror::Error;

/// Safari major versions with known content-blocker rule limits.
///
/// iOS builds support Safari from version 11; the desktop product requires
/// at least Safari 13, which is also the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SafariVersion {
    Safari11,
    Safari12,
    #[default]
    Safari13,
    Safari14,
    Safari15,
}

impl SafariVersion {
    /// Rule-count ceiling for this version. Safari accepts up to 50k
    /// content-blocker rules by default; starting with version 15 the
    /// ceiling is 150k.
    pub fn rules_limit(self) -> usize {
        match self {
            SafariVersion::Safari11
            | SafariVersion::Safari12
            | SafariVersion::Safari13
            | SafariVersion::Safari14 => 50_000,
            SafariVersion::Safari15 => 150_000,
        }
    }

    pub fn is_safari15(self) -> bool {
        self == SafariVersion::Safari15
    }

    /// The numeric major version.
    pub fn major(self) -> u32 {
        match self {
            SafariVersion::Safari11 => 11,
            SafariVersion::Safari12 => 12,
            SafariVersion::Safari13 => 13,
            SafariVersion::Safari14 => 14,
            SafariVersion::Safari15 => 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafariVersionError {
    #[error("invalid Safari version value: {0:?}")]
    InvalidVersion(String),
    #[error("unsupported Safari version: {0}")]
    UnsupportedVersion(u32),
}

impl TryFrom<u32> for SafariVersion {
    type Error = SafariVersionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(SafariVersion::Safari11),
            12 => Ok(SafariVersion::Safari12),
            13 => Ok(SafariVersion::Safari13),
            14 => Ok(SafariVersion::Safari14),
            15 => Ok(SafariVersion::Safari15),
            other => Err(SafariVersionError::UnsupportedVersion(other)),
        }
    }
}

impl FromStr for SafariVersion {
    type Err = SafariVersionError;

    /// Parses a dotted version string by its leading major component, so
    /// `"15.1"` and `"15"` both map to [`SafariVersion::Safari15`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let major = s.trim().split('.').next().unwrap_or_default();
        let major: u32 =
            major.parse().map_err(|_| SafariVersionError::InvalidVersion(s.to_string()))?;
        Self::try_from(major)
    }
}

#[cfg(test)]
mod tests {
    use super::{SafariVersion, SafariVersionError};

    #[test]
    fn rules_limits_per_version() {
        let cases = vec![
            (50_000, SafariVersion::Safari11),
            (50_000, SafariVersion::Safari12),
            (50_000, SafariVersion::Safari13),
            (50_000, SafariVersion::Safari14),
            (150_000, SafariVersion::Safari15),
        ];

        for (expected, version) in cases {
            assert_eq!(version.rules_limit(), expected, "version: {version:?}");
        }
    }

    #[test]
    fn default_is_safari13() {
        assert_eq!(SafariVersion::default(), SafariVersion::Safari13);
    }

    #[test]
    fn only_safari15_reports_safari15() {
        assert!(SafariVersion::Safari15.is_safari15());
        assert!(!SafariVersion::Safari14.is_safari15());
    }

    #[test]
    fn parses_major_version_strings() {
        assert_eq!("15.1".parse::<SafariVersion>(), Ok(SafariVersion::Safari15));
        assert_eq!("13".parse::<SafariVersion>(), Ok(SafariVersion::Safari13));
        assert_eq!(" 14.0.3 ".parse::<SafariVersion>(), Ok(SafariVersion::Safari14));
    }

    #[test]
    fn rejects_unknown_versions() {
        assert_eq!(
            "10".parse::<SafariVersion>(),
            Err(SafariVersionError::UnsupportedVersion(10)),
        );
        assert_eq!(SafariVersion::try_from(16), Err(SafariVersionError::UnsupportedVersion(16)));
        assert_eq!(
            "safari".parse::<SafariVersion>(),
            Err(SafariVersionError::InvalidVersion("safari".to_string())),
        );
    }

    #[test]
    fn major_round_trips() {
        for version in [
            SafariVersion::Safari11,
            SafariVersion::Safari12,
            SafariVersion::Safari13,
            SafariVersion::Safari14,
            SafariVersion::Safari15,
        ] {
            assert_eq!(SafariVersion::try_from(version.major()), Ok(version));
        }
    }
}
