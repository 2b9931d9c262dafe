//! Platform partitioning of catalog records.

use super::distribution::Distribution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms recognized from a record's operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    Mac,
    Android,
    Ios,
}

impl Platform {
    /// All platforms in matching order.
    pub const ALL: [Self; 5] = [
        Self::Windows,
        Self::Linux,
        Self::Mac,
        Self::Android,
        Self::Ios,
    ];

    /// Lower-case keyword searched for in the operating system string.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }

    /// First platform whose keyword occurs in `os` (case-insensitive).
    ///
    /// Returns `None` for anything else; there is no catch-all platform.
    #[must_use]
    pub fn classify(os: &str) -> Option<Self> {
        let os = os.to_lowercase();
        Self::ALL.into_iter().find(|p| os.contains(p.keyword()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Statistics for the records of one platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    /// Records in this partition
    pub count: usize,
    /// Records whose document could be read
    pub readable: usize,
    /// Components across readable documents
    pub total_components: usize,
    /// `total_components / readable`, 0 when nothing was readable
    pub average_components: f64,
    pub binary_type_distribution: Distribution,
    /// Top licenses across readable documents
    pub license_distribution: Distribution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Platform::classify("Windows 11"), Some(Platform::Windows));
        assert_eq!(Platform::classify("ubuntu-LINUX"), Some(Platform::Linux));
        assert_eq!(Platform::classify("macOS Sonoma"), Some(Platform::Mac));
        assert_eq!(Platform::classify("Android 14"), Some(Platform::Android));
        assert_eq!(Platform::classify("iOS 17"), Some(Platform::Ios));
    }

    #[test]
    fn test_unmatched_os_has_no_platform() {
        assert_eq!(Platform::classify("FreeBSD"), None);
        assert_eq!(Platform::classify("Unknown"), None);
        assert_eq!(Platform::classify(""), None);
    }

    #[test]
    fn test_first_match_wins() {
        // "mac" is probed before "ios"
        assert_eq!(Platform::classify("macios"), Some(Platform::Mac));
    }
}
