//! Terminal notifier: toasts become one line on stderr.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use resqtrack_core::{Notifier, Severity};

/// Writes each notification to stderr, coloured by severity.
///
/// Success lines are suppressed in quiet mode; errors never are.
pub struct StderrNotifier {
    color: bool,
    quiet: bool,
}

impl StderrNotifier {
    pub fn new(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }

    fn line(&self, message: &str, severity: Severity) -> String {
        match (severity, self.color) {
            (Severity::Success, true) => format!("{} {message}", "✓".green().bold()),
            (Severity::Success, false) => format!("✓ {message}"),
            (Severity::Error, true) => format!("{} {}", "✗".red().bold(), message.red()),
            (Severity::Error, false) => format!("✗ {message}"),
        }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        if self.quiet && severity == Severity::Success {
            return;
        }
        let _ = writeln!(io::stderr().lock(), "{}", self.line(message, severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_carry_a_marker() {
        let notifier = StderrNotifier::new(false, false);
        assert_eq!(notifier.line("Saved", Severity::Success), "✓ Saved");
        assert_eq!(notifier.line("Nope", Severity::Error), "✗ Nope");
    }

    #[test]
    fn colored_lines_keep_the_message() {
        let notifier = StderrNotifier::new(true, false);
        let line = notifier.line("Hospital added successfully", Severity::Success);
        assert!(line.contains("Hospital added successfully"));
        assert!(line.contains('\u{1b}'));
    }
}
