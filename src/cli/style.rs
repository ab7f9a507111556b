//! Terminal styling helpers

use owo_colors::{OwoColorize, Stream, Style};

/// Semantic styles for CLI output
///
/// Colors are dropped automatically when stdout is not a terminal.
pub trait Stylize {
    /// De-emphasized status text
    fn muted(&self) -> String;
    /// Headline text
    fn emphasis(&self) -> String;
    /// Identifiers such as PR numbers and shas
    fn accent(&self) -> String;
}

fn styled(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

impl<T: AsRef<str>> Stylize for T {
    fn muted(&self) -> String {
        styled(self.as_ref(), Style::new().dimmed())
    }

    fn emphasis(&self) -> String {
        styled(self.as_ref(), Style::new().bold())
    }

    fn accent(&self) -> String {
        styled(self.as_ref(), Style::new().cyan())
    }
}

/// Green check mark
pub fn check() -> String {
    styled("✓", Style::new().green())
}
