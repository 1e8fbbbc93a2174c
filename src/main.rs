use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_dispatch::cli::orchestration::{self, DispatchWorkflowArgs, WorkflowResult};
use release_dispatch::config;
use release_dispatch::trigger::Trigger;
use release_dispatch::DispatchError;
use release_dispatch::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-dispatch",
    about = "Forward a published release to the downstream build workflow"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long = "ref",
        env = "GITHUB_REF",
        help = "Triggering reference, e.g. refs/tags/v0.1.5"
    )]
    reference: Option<String>,

    #[arg(long, help = "Use the tag at HEAD when no reference is given")]
    from_head: bool,

    #[arg(short, long, help = "Skip confirmation prompts and event checks")]
    force: bool,

    #[arg(long, help = "Preview the request without sending it")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.version {
        println!("release-dispatch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let trigger = match Trigger::from_env() {
        Ok(trigger) => trigger,
        Err(e) => {
            ui::display_error(&format!("Cannot read triggering event: {}", e));
            std::process::exit(1);
        }
    };

    let credential_vars = config.credentials.clone();
    let workflow_args = DispatchWorkflowArgs {
        reference: args.reference,
        from_head: args.from_head,
        force: args.force,
        dry_run: args.dry_run,
    };

    match orchestration::run_dispatch_workflow(workflow_args, config, trigger).await {
        Ok(WorkflowResult::Dispatched(outcome)) => {
            println!(
                "\n{} Release {} forwarded to {}\n",
                console::style("✓").green(),
                outcome.version,
                outcome.endpoint
            );
        }
        Ok(_) => {}
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            if e
                .downcast_ref::<DispatchError>()
                .is_some_and(DispatchError::is_auth_failure)
            {
                ui::display_status(&format!(
                    "Check the {} and {} environment variables",
                    credential_vars.username_env, credential_vars.token_env
                ));
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
