//! Unified UI output interface.
//!
//! Commands report status through [`Output`] rather than printing directly.
//! Status lines are styled only when the stream is a terminal, so piped
//! output stays plain.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::style::Stylize;

use super::theme::Theme;

/// Message severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Handle for writing status lines to the console.
#[derive(Debug, Clone)]
pub struct Output {
    theme: Theme,
    styled: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create an output handle, styling only when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            styled: io::stdout().is_terminal(),
        }
    }

    /// Render a status line without printing it.
    pub fn render(&self, severity: Severity, msg: &str) -> String {
        let (icon, color) = match severity {
            Severity::Info => (self.theme.icons.info, self.theme.colors.info),
            Severity::Success => (self.theme.icons.success, self.theme.colors.success),
            Severity::Error => (self.theme.icons.error, self.theme.colors.error),
        };

        if self.styled {
            format!("{} {}", icon.with(color), msg.with(color))
        } else {
            format!("{icon} {msg}")
        }
    }

    /// Highlight a value (path, URL) inside a message.
    pub fn highlight(&self, value: &str) -> String {
        if self.styled {
            value.with(self.theme.colors.highlight).to_string()
        } else {
            value.to_string()
        }
    }

    /// Prints an informational message to the console.
    pub fn info(&self, msg: &str) {
        println!("{}", self.render(Severity::Info, msg));
    }

    /// Prints a success message to the console.
    pub fn success(&self, msg: &str) {
        println!("{}", self.render(Severity::Success, msg));
    }

    /// Prints an error message to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.render(Severity::Error, msg));
    }

    /// Print `text` without a trailing newline and read one line of input.
    ///
    /// Returns an empty string on end of input.
    pub fn prompt(&self, text: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render_has_no_escape_codes() {
        let output = Output {
            theme: Theme::default(),
            styled: false,
        };
        assert_eq!(output.render(Severity::Success, "done"), "✓ done");
        assert_eq!(output.render(Severity::Error, "failed"), "✗ failed");
        assert_eq!(output.highlight("/tmp/x"), "/tmp/x");
    }

    #[test]
    fn test_styled_render_keeps_message_text() {
        let output = Output {
            theme: Theme::default(),
            styled: true,
        };
        let line = output.render(Severity::Error, "careful");
        assert!(line.contains("✗"));
        assert!(line.contains("careful"));
    }
}
