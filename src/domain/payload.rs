use serde::{Deserialize, Serialize};

/// Value of the `simulatorVersionLatest` input. Every dispatch announces
/// the released version as the latest one.
pub const LATEST_FLAG: &str = "true";

/// Body of a `workflow_dispatch` API call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchPayload {
    #[serde(rename = "ref")]
    pub target_ref: String,
    pub inputs: DispatchInputs,
}

/// Workflow inputs understood by the downstream build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchInputs {
    pub simulator_version: String,
    pub simulator_version_latest: String,
}

impl DispatchPayload {
    pub fn new(target_ref: impl Into<String>, version: impl Into<String>) -> Self {
        DispatchPayload {
            target_ref: target_ref.into(),
            inputs: DispatchInputs {
                simulator_version: version.into(),
                simulator_version_latest: LATEST_FLAG.to_string(),
            },
        }
    }
}
