use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DispatchError, Result};

const LOCAL_CONFIG_FILE: &str = "./release-dispatch.toml";
const USER_CONFIG_FILE: &str = ".release-dispatch.toml";

/// Complete configuration for release-dispatch.
///
/// Every section has built-in defaults targeting the downstream
/// simulator build, so an absent file is a valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub credentials: CredentialsConfig,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_owner() -> String {
    "biosimulators".to_string()
}

fn default_repo() -> String {
    "Biosimulators_MASS".to_string()
}

fn default_workflow() -> String {
    "ci.yml".to_string()
}

fn default_branch() -> String {
    "dev".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// The downstream workflow that receives the dispatch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TargetConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_repo")]
    pub repo: String,

    #[serde(default = "default_workflow")]
    pub workflow: String,

    /// Branch of the downstream repository the workflow runs on
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            api_url: default_api_url(),
            owner: default_owner(),
            repo: default_repo(),
            workflow: default_workflow(),
            branch: default_branch(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_tag_prefix() -> String {
    "refs/tags/v".to_string()
}

/// How the version is taken from the triggering reference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_username_env() -> String {
    "BIOSIMULATORS_GH_USERNAME".to_string()
}

fn default_token_env() -> String {
    "BIOSIMULATORS_GH_TOKEN".to_string()
}

/// Names of the environment variables holding the secrets.
///
/// The secrets themselves never live in the file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CredentialsConfig {
    #[serde(default = "default_username_env")]
    pub username_env: String,

    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        CredentialsConfig {
            username_env: default_username_env(),
            token_env: default_token_env(),
        }
    }
}

impl Config {
    /// Rejects values that would produce a malformed endpoint URL.
    pub fn validate(&self) -> Result<()> {
        let target = &self.target;
        let fields = [
            ("target.api_url", &target.api_url),
            ("target.owner", &target.owner),
            ("target.repo", &target.repo),
            ("target.workflow", &target.workflow),
            ("target.branch", &target.branch),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(DispatchError::config(format!("{} must not be empty", name)));
            }
        }

        if !target.api_url.starts_with("http://") && !target.api_url.starts_with("https://") {
            return Err(DispatchError::config(format!(
                "target.api_url must be an http(s) URL, got '{}'",
                target.api_url
            )));
        }

        if target.timeout_secs == 0 {
            return Err(DispatchError::config("target.timeout_secs must be positive"));
        }

        if self.source.tag_prefix.is_empty() {
            return Err(DispatchError::config("source.tag_prefix must not be empty"));
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-dispatch.toml` in current directory
/// 3. `.release-dispatch.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// The result is validated before it is returned.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| DispatchError::config(format!("invalid TOML: {}", e)))?;
    config.validate()?;
    Ok(config)
}
