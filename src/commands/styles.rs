//! List caption styles

use crate::output;
use crate::style::CaptionStyle;

/// Rows of the style table, in menu order
#[must_use]
pub fn rows(quiet: bool) -> Vec<String> {
    CaptionStyle::ALL
        .iter()
        .map(|s| output::style_row(s.cli_name(), s.wire_value(), s.label(), quiet))
        .collect()
}

/// Execute the styles command
pub fn execute(quiet: bool) {
    if !quiet {
        println!("Available styles:");
    }
    for row in rows(quiet) {
        println!("{row}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_rows_are_wire_values() {
        assert_eq!(rows(true), vec!["Funny", "Inspirational", "Short & Punchy"]);
    }
}
