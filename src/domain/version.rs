use std::fmt;

use crate::boundary::DispatchWarning;

/// A version string taken from a release reference.
///
/// The raw text is what gets dispatched. The semver parse is only used to
/// warn about versions the downstream build may not expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    raw: String,
    semver: Option<semver::Version>,
}

impl ReleaseVersion {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let clean = raw.strip_prefix(['v', 'V']).unwrap_or(&raw);
        let semver = semver::Version::parse(clean).ok();

        ReleaseVersion { raw, semver }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_semver(&self) -> bool {
        self.semver.is_some()
    }

    pub fn is_prerelease(&self) -> bool {
        self.semver
            .as_ref()
            .map(|v| !v.pre.is_empty())
            .unwrap_or(false)
    }

    /// Warnings for a version that is about to be dispatched as latest
    pub fn warnings(&self) -> Vec<DispatchWarning> {
        if !self.is_semver() {
            return vec![DispatchWarning::NonSemverVersion {
                version: self.raw.clone(),
            }];
        }

        if self.is_prerelease() {
            return vec![DispatchWarning::PrereleaseMarkedLatest {
                version: self.raw.clone(),
            }];
        }

        Vec::new()
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_version_semver() {
        let version = ReleaseVersion::new("0.1.5");
        assert!(version.is_semver());
        assert!(!version.is_prerelease());
        assert!(version.warnings().is_empty());
    }

    #[test]
    fn test_release_version_keeps_raw_text() {
        let version = ReleaseVersion::new("v2.0.0");
        assert_eq!(version.as_str(), "v2.0.0");
        assert!(version.is_semver());
    }

    #[test]
    fn test_release_version_strips_single_v() {
        assert!(ReleaseVersion::new("V1.0.0").is_semver());
        assert!(!ReleaseVersion::new("vv1.0.0").is_semver());
        assert!(!ReleaseVersion::new("vvv1.0.0").is_semver());
    }

    #[test]
    fn test_release_version_prerelease_warning() {
        let version = ReleaseVersion::new("1.0.0-beta.1");
        assert!(version.is_prerelease());
        assert_eq!(
            version.warnings(),
            vec![DispatchWarning::PrereleaseMarkedLatest {
                version: "1.0.0-beta.1".to_string()
            }]
        );
    }

    #[test]
    fn test_release_version_non_semver_warning() {
        let version = ReleaseVersion::new("0.1.6rc1");
        assert!(!version.is_semver());
        assert!(matches!(
            version.warnings().as_slice(),
            [DispatchWarning::NonSemverVersion { .. }]
        ));
    }
}
