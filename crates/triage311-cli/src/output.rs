// Console output formatting and styling

use colored::Colorize;

use crate::logging::{self, VerbosityLevel};

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }
}

/// Print a step-completed line (suppressed in quiet mode)
pub fn print_success(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().success(msg));
    }
}

/// Print a step-skipped line (suppressed in quiet mode)
pub fn print_warning(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().warning(msg));
    }
}

/// Print an informational line (suppressed in quiet mode)
pub fn print_info(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", OutputStyle::default().info(msg));
    }
}

/// Print an error line (always shown)
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

/// Print a debug line (verbose mode only)
pub fn print_debug(msg: &str) {
    logging::debug(msg);
}
