use std::fmt;

/// Non-fatal conditions noticed while preparing a dispatch.
/// These are reported to the user; none of them stops the request.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchWarning {
    /// Reference does not contain the tag prefix, so it is sent unchanged
    MissingTagPrefix { reference: String, prefix: String },
    /// Derived version is not a semantic version
    NonSemverVersion { version: String },
    /// A pre-release is about to be announced as the latest version
    PrereleaseMarkedLatest { version: String },
    /// A credential variable is unset; the remote API will reject the call
    MissingCredential { variable: String },
    /// Release event whose action is not `published`
    ReleaseNotPublished { action: String },
}

impl fmt::Display for DispatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchWarning::MissingTagPrefix { reference, prefix } => {
                write!(
                    f,
                    "Reference '{}' does not contain '{}'; sending it unchanged",
                    reference, prefix
                )
            }
            DispatchWarning::NonSemverVersion { version } => {
                write!(f, "Version '{}' is not a semantic version", version)
            }
            DispatchWarning::PrereleaseMarkedLatest { version } => {
                write!(
                    f,
                    "Pre-release '{}' will be marked as the latest version",
                    version
                )
            }
            DispatchWarning::MissingCredential { variable } => {
                write!(f, "Environment variable '{}' is not set", variable)
            }
            DispatchWarning::ReleaseNotPublished { action } => {
                write!(f, "Release event action is '{}', not 'published'", action)
            }
        }
    }
}
