//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing in `main.rs` and the dispatch steps here, so
//! the workflow can be driven programmatically and from tests.

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use crate::boundary::DispatchWarning;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::dispatcher::{DispatchOutcome, Dispatcher};
use crate::domain::{DispatchPayload, ReleaseVersion, TagRef};
use crate::error::DispatchError;
use crate::git::{self, Git2Repository};
use crate::trigger::Trigger;
use crate::ui;

/// Arguments for the dispatch workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchWorkflowArgs {
    /// Triggering reference, e.g. `refs/tags/v0.1.5`
    pub reference: Option<String>,

    /// Take the reference from the tag at HEAD when none is given
    pub from_head: bool,

    /// Skip confirmation prompts and the published-release check
    pub force: bool,

    /// Print the request without sending it
    pub dry_run: bool,
}

/// How a workflow run ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// The downstream API accepted the dispatch
    Dispatched(DispatchOutcome),

    /// Dry run; nothing was sent
    DryRun {
        endpoint: String,
        payload: DispatchPayload,
    },

    /// The triggering event does not call for a dispatch
    Skipped { reason: String },

    /// The operator declined the confirmation prompt
    Cancelled,
}

/// A dispatch body together with everything learned while building it
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDispatch {
    pub tag: TagRef,
    pub version: ReleaseVersion,
    pub payload: DispatchPayload,
    pub warnings: Vec<DispatchWarning>,
}

/// Picks the triggering reference: explicit argument first, then the tag
/// at HEAD when `from_head` is set.
pub fn resolve_reference(
    args: &DispatchWorkflowArgs,
    tags: Option<&dyn git::TagSource>,
) -> Result<String> {
    if let Some(reference) = args.reference.as_deref().filter(|r| !r.is_empty()) {
        return Ok(reference.to_string());
    }

    if !args.from_head {
        return Err(DispatchError::reference(
            "no reference given; pass --ref, set GITHUB_REF, or use --from-head",
        )
        .into());
    }

    let source = tags.ok_or_else(|| anyhow!("no git repository available for --from-head"))?;
    let reference = git::head_tag_reference(source)?
        .ok_or_else(|| DispatchError::reference("HEAD is not tagged"))?;
    Ok(reference)
}

/// Derives the version from `reference` and builds the request body.
pub fn prepare_dispatch(reference: &str, config: &Config) -> Result<PreparedDispatch> {
    let tag = TagRef::parse(reference, config.source.tag_prefix.as_str())?;
    let version = ReleaseVersion::new(tag.version.clone());

    let mut warnings = Vec::new();
    if !tag.is_tag() {
        warnings.push(DispatchWarning::MissingTagPrefix {
            reference: tag.reference.clone(),
            prefix: tag.prefix.clone(),
        });
    }
    warnings.extend(version.warnings());

    let payload = DispatchPayload::new(config.target.branch.as_str(), version.as_str());

    Ok(PreparedDispatch {
        tag,
        version,
        payload,
        warnings,
    })
}

/// Main dispatch workflow
///
/// 1. Check the triggering event
/// 2. Resolve the reference and derive the version
/// 3. Read credentials
/// 4. Send one workflow dispatch (unless dry run or declined)
pub async fn run_dispatch_workflow(
    args: DispatchWorkflowArgs,
    config: Config,
    trigger: Trigger,
) -> Result<WorkflowResult> {
    info!(trigger = trigger.label(), "Starting release dispatch");

    if let Some(warning) = trigger.warning() {
        ui::display_warning(&warning);
    }
    if !trigger.should_dispatch() && !args.force {
        let reason = format!("{} event does not request a dispatch", trigger.label());
        warn!(%reason, "Skipping dispatch");
        ui::display_status(&format!("Skipping: {}", reason));
        return Ok(WorkflowResult::Skipped { reason });
    }

    let has_reference = args.reference.as_deref().is_some_and(|r| !r.is_empty());
    let repository = if !has_reference && args.from_head {
        Some(Git2Repository::open(".").context("failed to open git repository")?)
    } else {
        None
    };
    let reference = resolve_reference(
        &args,
        repository.as_ref().map(|r| r as &dyn git::TagSource),
    )?;

    let prepared = prepare_dispatch(&reference, &config)?;
    info!(
        reference = %prepared.tag.reference,
        version = %prepared.version,
        "Derived release version"
    );

    let (credentials, credential_warnings) = Credentials::from_env(&config.credentials);
    for warning in prepared.warnings.iter().chain(credential_warnings.iter()) {
        warn!(%warning, "Dispatch warning");
        ui::display_warning(warning);
    }

    let dispatcher = Dispatcher::new(&config.target)?;
    ui::display_dispatch_plan(dispatcher.endpoint(), &prepared.payload);

    if args.dry_run {
        ui::display_status("Dry run: no request sent");
        return Ok(WorkflowResult::DryRun {
            endpoint: dispatcher.endpoint().to_string(),
            payload: prepared.payload,
        });
    }

    if trigger == Trigger::Manual
        && !args.force
        && ui::is_interactive()
        && !ui::confirm_action("Send this workflow dispatch?")?
    {
        println!("Dispatch cancelled by user.");
        return Ok(WorkflowResult::Cancelled);
    }

    ui::display_status(&format!(
        "Dispatching version {} to {}/{}",
        prepared.version, config.target.owner, config.target.repo
    ));
    let outcome = dispatcher
        .dispatch(&prepared.payload, &credentials)
        .await
        .with_context(|| format!("dispatch of version {} failed", prepared.version))?;

    ui::display_outcome(&outcome);
    Ok(WorkflowResult::Dispatched(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    #[test]
    fn test_resolve_reference_prefers_explicit() {
        let args = DispatchWorkflowArgs {
            reference: Some("refs/tags/v0.1.5".to_string()),
            from_head: true,
            ..Default::default()
        };
        let mut repo = MockRepository::new();
        repo.add_head_tag("v9.9.9");

        assert_eq!(
            resolve_reference(&args, Some(&repo)).unwrap(),
            "refs/tags/v0.1.5"
        );
    }

    #[test]
    fn test_resolve_reference_from_head() {
        let args = DispatchWorkflowArgs {
            from_head: true,
            ..Default::default()
        };
        let mut repo = MockRepository::new();
        repo.add_head_tag("v0.1.6");

        assert_eq!(
            resolve_reference(&args, Some(&repo)).unwrap(),
            "refs/tags/v0.1.6"
        );
    }

    #[test]
    fn test_resolve_reference_untagged_head() {
        let args = DispatchWorkflowArgs {
            from_head: true,
            ..Default::default()
        };
        let repo = MockRepository::new();
        let err = resolve_reference(&args, Some(&repo)).unwrap_err();
        assert!(err.to_string().contains("not tagged"));
    }

    #[test]
    fn test_resolve_reference_missing() {
        let args = DispatchWorkflowArgs::default();
        assert!(resolve_reference(&args, None).is_err());

        let empty = DispatchWorkflowArgs {
            reference: Some(String::new()),
            ..Default::default()
        };
        assert!(resolve_reference(&empty, None).is_err());
    }

    #[test]
    fn test_prepare_dispatch_release_tag() {
        let prepared = prepare_dispatch("refs/tags/v1.2.3", &Config::default()).unwrap();
        assert_eq!(prepared.version.as_str(), "1.2.3");
        assert_eq!(prepared.payload, DispatchPayload::new("dev", "1.2.3"));
        assert!(prepared.warnings.is_empty());
    }

    #[test]
    fn test_prepare_dispatch_branch_reference_warns() {
        let prepared = prepare_dispatch("refs/heads/master", &Config::default()).unwrap();
        assert_eq!(prepared.payload.inputs.simulator_version, "refs/heads/master");
        assert!(prepared
            .warnings
            .iter()
            .any(|w| matches!(w, DispatchWarning::MissingTagPrefix { .. })));
        assert!(prepared
            .warnings
            .iter()
            .any(|w| matches!(w, DispatchWarning::NonSemverVersion { .. })));
    }

    #[test]
    fn test_prepare_dispatch_prefix_inside_reference() {
        let prepared =
            prepare_dispatch("refs/remotes/origin/refs/tags/v1.2.3", &Config::default()).unwrap();
        assert_eq!(
            prepared.payload.inputs.simulator_version,
            "refs/remotes/origin/1.2.3"
        );
        assert!(!prepared
            .warnings
            .iter()
            .any(|w| matches!(w, DispatchWarning::MissingTagPrefix { .. })));
    }

    #[test]
    fn test_prepare_dispatch_uses_configured_branch() {
        let mut config = Config::default();
        config.target.branch = "main".to_string();
        let prepared = prepare_dispatch("refs/tags/v1.2.3", &config).unwrap();
        assert_eq!(prepared.payload.target_ref, "main");
    }

    #[test]
    fn test_prepare_dispatch_empty_version() {
        assert!(prepare_dispatch("refs/tags/v", &Config::default()).is_err());
    }
}
