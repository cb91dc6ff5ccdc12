//! Rendering surfaces and execution-context detection.
//!
//! A trace is either written to an interactive terminal (ANSI colors, one
//! statement per line) or rendered as markup (`<b style=...>` highlighting,
//! `<br />` separators) for pages and log viewers.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Line separator used by the markup surface.
pub const MARKUP_LINE_BREAK: &str = "<br />";

/// Rendering target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Interactive terminal with ANSI escapes.
    Console,
    /// Markup with inline styles.
    Markup,
}

impl Surface {
    /// Pick the surface for the given context.
    ///
    /// The console is used only when running interactively and the
    /// override is off.
    pub fn select(probe: &dyn InteractiveProbe, override_interactive_output: bool) -> Self {
        if probe.is_interactive() && !override_interactive_output {
            Self::Console
        } else {
            Self::Markup
        }
    }

    /// Decorate a canonical slot name.
    pub fn slot(&self, name: &str) -> String {
        match self {
            Self::Console => name.green().to_string(),
            Self::Markup => format!("<b style=\"color:green\">{}</b>", name),
        }
    }

    /// Decorate a finished trace line, including its terminator.
    pub fn line(&self, line: &str, highlight: bool) -> String {
        match (self, highlight) {
            (Self::Console, true) => format!("{}\n", line.bright_red()),
            (Self::Console, false) => format!("{}\n", line),
            (Self::Markup, true) => {
                format!("<b style=\"color:red\">{}</b>{}", line, MARKUP_LINE_BREAK)
            }
            (Self::Markup, false) => format!("{}{}", line, MARKUP_LINE_BREAK),
        }
    }
}

/// Answers whether the process runs in an interactive context.
pub trait InteractiveProbe: Send + Sync {
    /// Check if output goes to an interactive session.
    fn is_interactive(&self) -> bool;
}

/// Probe that checks whether stdout is a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

impl InteractiveProbe for TerminalProbe {
    fn is_interactive(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub bool);

impl FixedProbe {
    /// An interactive context.
    pub fn interactive() -> Self {
        Self(true)
    }

    /// A non-interactive context.
    pub fn non_interactive() -> Self {
        Self(false)
    }
}

impl InteractiveProbe for FixedProbe {
    fn is_interactive(&self) -> bool {
        self.0
    }
}

impl<F> InteractiveProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_interactive(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(Surface::select(&FixedProbe(true), false), Surface::Console);
        assert_eq!(Surface::select(&FixedProbe(true), true), Surface::Markup);
        assert_eq!(Surface::select(&FixedProbe(false), false), Surface::Markup);
        assert_eq!(Surface::select(&FixedProbe(false), true), Surface::Markup);
    }

    #[test]
    fn test_closure_probe() {
        let probe = || true;
        assert_eq!(Surface::select(&probe, false), Surface::Console);
    }

    #[test]
    fn test_markup_decoration() {
        assert_eq!(
            Surface::Markup.slot(":slot0"),
            "<b style=\"color:green\">:slot0</b>"
        );
        assert_eq!(Surface::Markup.line("SELECT 1", false), "SELECT 1<br />");
        assert_eq!(
            Surface::Markup.line("DROP TABLE t", true),
            "<b style=\"color:red\">DROP TABLE t</b><br />"
        );
    }

    #[test]
    fn test_console_decoration() {
        let slot = Surface::Console.slot(":slot3");
        assert!(slot.contains(":slot3"));
        assert!(slot.starts_with("\u{1b}[32m"));

        assert_eq!(Surface::Console.line("SELECT 1", false), "SELECT 1\n");

        let highlighted = Surface::Console.line("ALTER TABLE t", true);
        assert!(highlighted.starts_with("\u{1b}[91m"));
        assert!(highlighted.ends_with('\n'));
    }
}
