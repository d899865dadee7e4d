//! Color, emoji, and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    // Basic colors
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const CYAN: &'static str = "\x1b[36m";
    pub const WHITE: &'static str = "\x1b[37m";

    // Bright colors
    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_BLUE: &'static str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &'static str = "\x1b[95m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Enhanced terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors/emojis are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    // Check if output is being redirected
    if !std::io::stdout().is_terminal() {
        return false;
    }

    // Check TERM environment variable
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" || term.is_empty() {
            return false;
        }

        // Check for known capable terminals
        if term.contains("color")
            || term.contains("256")
            || term.starts_with("xterm")
            || term.starts_with("screen")
            || term.starts_with("tmux")
            || term == "linux"
        {
            return true;
        }
    }

    // Check for modern terminal programs
    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        match term_program.as_str() {
            "Apple_Terminal" | "iTerm.app" | "vscode" | "Hyper" | "Alacritty" | "kitty"
            | "WezTerm" => return true,
            _ => {}
        }
    }

    // Check CI environments that support colors
    if env::var("CI").is_ok() {
        let ci_supports_color = [
            "GITHUB_ACTIONS",
            "TRAVIS",
            "CIRCLECI",
            "APPVEYOR",
            "GITLAB_CI",
            "AZURE_HTTP_USER_AGENT",
            "BUILDKITE",
        ]
        .iter()
        .any(|var| env::var(var).is_ok());

        if ci_supports_color {
            return true;
        }
    }

    // Default: assume no support if we can't detect
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_with_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
        let result = colorize("test", Colors::RED);
        assert_eq!(result, "test");
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_supports_formatting_with_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
        assert!(!supports_formatting());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_supports_formatting_with_dumb_term() {
        unsafe {
            std::env::set_var("TERM", "dumb");
        }
        assert!(!supports_formatting());
        unsafe {
            std::env::remove_var("TERM");
        }
    }

    #[test]
    fn test_disable_formatting_when_running_tests() {
        unsafe {
            std::env::set_var("RUST_TEST_TIME_UNIT", "1");
        }

        assert!(!supports_formatting());

        unsafe {
            std::env::remove_var("RUST_TEST_TIME_UNIT");
        }
    }

    #[test]
    fn test_colorize_edge_cases() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        // Empty string
        assert_eq!(colorize("", Colors::RED), "");

        // Special characters
        assert_eq!(
            colorize("test\nwith\ttabs", Colors::BLUE),
            "test\nwith\ttabs"
        );

        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_color_constants_are_unique_escape_sequences() {
        let constants = [
            Colors::RESET,
            Colors::BOLD,
            Colors::DIM,
            Colors::RED,
            Colors::GREEN,
            Colors::YELLOW,
            Colors::BLUE,
            Colors::MAGENTA,
            Colors::CYAN,
            Colors::WHITE,
            Colors::BRIGHT_RED,
            Colors::BRIGHT_GREEN,
            Colors::BRIGHT_YELLOW,
            Colors::BRIGHT_BLUE,
            Colors::BRIGHT_MAGENTA,
            Colors::BRIGHT_CYAN,
            Colors::BRIGHT_WHITE,
        ];

        let mut unique_values = std::collections::HashSet::new();
        for constant in &constants {
            assert!(constant.starts_with('\x1b'));
            assert!(unique_values.insert(*constant));
        }
    }
}
