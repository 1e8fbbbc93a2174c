//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, IsTerminal, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_dispatch_plan, display_error, display_outcome, display_status, display_success,
    display_warning, format_dispatch_plan,
};

/// Whether a human can answer prompts on this terminal.
///
/// CI runners have no TTY on stdin/stdout, so prompts are skipped there.
pub fn is_interactive() -> bool {
    prompt_allowed(console::user_attended(), io::stdin().is_terminal())
}

/// A prompt needs a terminal to print to and a terminal to read the answer from.
pub fn prompt_allowed(stdout_attended: bool, stdin_is_terminal: bool) -> bool {
    stdout_attended && stdin_is_terminal
}

/// Ask a yes/no question, defaulting to "no".
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(parse_confirmation(&input))
}

/// Interprets a prompt answer; only `y`/`yes` (any case) confirm.
pub fn parse_confirmation(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_allowed_requires_terminal_stdin() {
        assert!(prompt_allowed(true, true));
        assert!(!prompt_allowed(true, false));
        assert!(!prompt_allowed(false, true));
    }

    #[test]
    fn test_parse_confirmation() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation("YES"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation("yep"));
    }
}
