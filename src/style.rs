//! ANSI escape sequences used to color console output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[1;31m";
pub const GREEN: &str = "\x1b[1;32m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const BLUE: &str = "\x1b[1;34m";
pub const CYAN: &str = "\x1b[1;36m";

pub const GREEN_N: &str = "\x1b[0;32m";

/// Color policy for everything the shell prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Wrap `text` in `code` ... reset, or return it untouched when color is off
    pub fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Same as `paint` with two stacked codes (e.g. cyan + bold)
    pub fn paint2(&self, first: &str, second: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}{}", first, second, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self { color: true }
    }
}
