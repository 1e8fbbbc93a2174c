use crate::error::{DispatchError, Result};

/// Removes the first occurrence of `prefix` from `reference`.
///
/// A reference that does not contain the prefix comes back unchanged, so
/// applying the substitution to its own output is a no-op.
///
/// # Example
/// ```ignore
/// assert_eq!(derive_version("refs/tags/v1.2.3", "refs/tags/v"), "1.2.3");
/// assert_eq!(derive_version("refs/heads/dev", "refs/tags/v"), "refs/heads/dev");
/// ```
pub fn derive_version(reference: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return reference.to_string();
    }
    reference.replacen(prefix, "", 1)
}

/// A triggering git reference and the version derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub reference: String,
    pub prefix: String,
    pub version: String,
}

impl TagRef {
    /// Derive the version from `reference`.
    ///
    /// Fails only when nothing is left to send downstream.
    pub fn parse(reference: impl Into<String>, prefix: impl Into<String>) -> Result<Self> {
        let reference = reference.into();
        let prefix = prefix.into();
        let version = derive_version(&reference, &prefix);

        if version.is_empty() {
            return Err(DispatchError::reference(format!(
                "reference '{}' yields an empty version",
                reference
            )));
        }

        Ok(TagRef {
            reference,
            prefix,
            version,
        })
    }

    /// Whether the derivation removed the prefix from the reference
    pub fn is_tag(&self) -> bool {
        self.reference.contains(&self.prefix)
    }
}
