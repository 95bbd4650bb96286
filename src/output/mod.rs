//! Output formatting for CLI display
//!
//! Status messages go to stderr so stdout only ever carries results and can
//! be piped.

use colored::Colorize;

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Print a success message unless quiet
pub fn success(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {}", "✓".green(), message);
    }
}

/// Print a secondary, dimmed message unless quiet
pub fn info(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", message.dimmed());
    }
}

/// Format a `key = value` configuration line
#[must_use]
pub fn setting(key: &str, value: &str) -> String {
    format!("{} = {}", key.bold(), value)
}

/// Format one row of the style table
#[must_use]
pub fn style_row(cli_name: &str, wire_value: &str, label: &str, quiet: bool) -> String {
    if quiet {
        wire_value.to_string()
    } else {
        format!("  {:<18} {:<16} {}", cli_name.cyan(), wire_value, label.dimmed())
    }
}
