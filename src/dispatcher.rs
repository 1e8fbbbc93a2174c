//! The outbound `workflow_dispatch` call.
//!
//! One POST per invocation. There is no retry and no deduplication:
//! calling [`Dispatcher::dispatch`] twice sends two requests.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::TargetConfig;
use crate::credentials::Credentials;
use crate::domain::DispatchPayload;
use crate::error::{DispatchError, Result};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Result of an accepted dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub status: u16,
    pub endpoint: String,
    pub version: String,
}

pub struct Dispatcher {
    client: Client,
    endpoint: String,
}

impl Dispatcher {
    /// Create a dispatcher for the configured downstream workflow.
    pub fn new(target: &TargetConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(target.timeout_secs))
            .user_agent(format!("release-dispatch/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, target))
    }

    /// Create a dispatcher with a custom reqwest client.
    pub fn with_client(client: Client, target: &TargetConfig) -> Self {
        Dispatcher {
            client,
            endpoint: endpoint_url(target),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `payload` to the workflow dispatch endpoint.
    ///
    /// Any 2xx answer is success; GitHub replies `204 No Content`.
    pub async fn dispatch(
        &self,
        payload: &DispatchPayload,
        credentials: &Credentials,
    ) -> Result<DispatchOutcome> {
        let version = payload.inputs.simulator_version.clone();
        debug!(endpoint = %self.endpoint, %version, "Sending workflow dispatch");

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&credentials.username, Some(&credentials.token))
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                %version,
                "Workflow dispatch rejected"
            );
            return Err(DispatchError::rejected(status.as_u16(), body));
        }

        info!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            %version,
            "Workflow dispatch accepted"
        );

        Ok(DispatchOutcome {
            status: status.as_u16(),
            endpoint: self.endpoint.clone(),
            version,
        })
    }
}

/// `{api_url}/repos/{owner}/{repo}/actions/workflows/{workflow}/dispatches`
pub fn endpoint_url(target: &TargetConfig) -> String {
    format!(
        "{}/repos/{}/{}/actions/workflows/{}/dispatches",
        target.api_url.trim_end_matches('/'),
        target.owner,
        target.repo,
        target.workflow
    )
}
