//! Shared helpers for command handlers.

use std::io;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::notify::StderrNotifier;
use crate::output;

/// Notifier for this invocation's stderr, honouring `--color` and `--quiet`.
pub fn notifier(global: &GlobalOpts) -> StderrNotifier {
    StderrNotifier::new(
        output::should_color(global.color(), &io::stderr()),
        global.quiet,
    )
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Treat a blank optional flag as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_dropped() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("020-555".into())), Some("020-555".into()));
    }
}
