use std::fmt;

use crate::boundary::DispatchWarning;
use crate::config::CredentialsConfig;

/// Basic-auth identity for the workflow dispatch API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Reads both secrets from the process environment.
    pub fn from_env(config: &CredentialsConfig) -> (Self, Vec<DispatchWarning>) {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Reads both secrets through `lookup`.
    ///
    /// An unset or empty variable becomes an empty value plus a warning.
    /// The call still goes out and the API answers with its own auth error.
    pub fn from_lookup<F>(config: &CredentialsConfig, lookup: F) -> (Self, Vec<DispatchWarning>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let mut read = |name: &str| match lookup(name).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => {
                warnings.push(DispatchWarning::MissingCredential {
                    variable: name.to_string(),
                });
                String::new()
            }
        };

        let username = read(&config.username_env);
        let token = read(&config.token_env);

        (Credentials { username, token }, warnings)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
