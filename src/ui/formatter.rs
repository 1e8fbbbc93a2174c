//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use console::style;

use crate::boundary::DispatchWarning;
use crate::dispatcher::DispatchOutcome;
use crate::domain::DispatchPayload;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a dispatch warning to the user.
pub fn display_warning(warning: &DispatchWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render the request that is about to be sent (or would be, in a dry run).
///
/// The body is pretty-printed JSON; credentials are never part of it.
pub fn format_dispatch_plan(endpoint: &str, payload: &DispatchPayload) -> String {
    let body = serde_json::to_string_pretty(payload).unwrap_or_else(|_| format!("{:?}", payload));
    format!("POST {}\n{}", endpoint, body)
}

/// Display the request that is about to be sent.
pub fn display_dispatch_plan(endpoint: &str, payload: &DispatchPayload) {
    println!("\n{}", style("Workflow dispatch:").bold());
    for line in format_dispatch_plan(endpoint, payload).lines() {
        println!("  {}", line);
    }
}

/// Display an accepted dispatch.
pub fn display_outcome(outcome: &DispatchOutcome) {
    display_success(&format!(
        "Dispatched version {} (HTTP {})",
        style(&outcome.version).cyan(),
        outcome.status
    ));
}
