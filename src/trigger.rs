//! Classification of the event that started the run.
//!
//! The hosting platform fires on `release` (types: `published`) and on
//! `workflow_dispatch`. Anything that is not a release counts as a manual run.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::boundary::DispatchWarning;
use crate::error::Result;

const PUBLISHED: &str = "published";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A release event; `action` is e.g. `published`, `created`, `edited`
    Release { action: String },
    /// Manual invocation or any non-release event
    Manual,
}

#[derive(Deserialize)]
struct ReleaseEvent {
    #[serde(default)]
    action: Option<String>,
}

impl Trigger {
    /// Reads `GITHUB_EVENT_NAME` and, for releases, `GITHUB_EVENT_PATH`.
    pub fn from_env() -> Result<Self> {
        let event_name = std::env::var("GITHUB_EVENT_NAME").ok();
        let event_path = std::env::var("GITHUB_EVENT_PATH").ok();
        Self::from_parts(event_name.as_deref(), event_path.as_deref().map(Path::new))
    }

    /// Builds a trigger from an event name and the event payload file.
    ///
    /// A release without a readable payload is assumed to be published,
    /// which is the only release type the platform is subscribed to.
    pub fn from_parts(event_name: Option<&str>, event_path: Option<&Path>) -> Result<Self> {
        if event_name != Some("release") {
            return Ok(Trigger::Manual);
        }

        let action = match event_path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                let event: ReleaseEvent = serde_json::from_str(&content)?;
                event.action.unwrap_or_else(|| PUBLISHED.to_string())
            }
            _ => PUBLISHED.to_string(),
        };

        Ok(Trigger::Release { action })
    }

    pub fn should_dispatch(&self) -> bool {
        match self {
            Trigger::Release { action } => action == PUBLISHED,
            Trigger::Manual => true,
        }
    }

    /// Warning explaining why a release event would be skipped
    pub fn warning(&self) -> Option<DispatchWarning> {
        match self {
            Trigger::Release { action } if action != PUBLISHED => {
                Some(DispatchWarning::ReleaseNotPublished {
                    action: action.clone(),
                })
            }
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Trigger::Release { .. } => "release",
            Trigger::Manual => "manual",
        }
    }
}
