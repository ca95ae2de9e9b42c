//! Configuration for the interactive shell.

/// Configuration for the REPL.
///
/// Controls the prompt, the welcome banner, and ANSI colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt shown before every line of input.
    pub prompt: String,

    /// Whether to print the welcome banner on start.
    pub banner: bool,

    /// Whether to color results and errors with ANSI escapes.
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            banner: true,
            color: true,
        }
    }
}

impl ReplConfig {
    /// Creates a configuration for non-terminal use: no banner, no colors.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            banner: false,
            color: false,
            ..Self::default()
        }
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to enable or disable the banner.
    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Builder method to enable or disable colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Wraps `text` in the given ANSI style when colors are enabled.
    #[must_use]
    pub fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{style}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}
