//! Terminal rendering of the controller
//!
//! Pure projection: nothing here mutates state, so the same controller always
//! renders the same text.

use crate::api::{CaptionResult, CaptionService};
use crate::controller::CaptionController;
use colored::Colorize;

/// Label of the submit control when idle
pub const LAUNCH_LABEL: &str = "Launch";
/// Label of the submit control while loading
pub const LAUNCHING_LABEL: &str = "Launching...";
/// Shown next to the preview until captions arrive
pub const WAITING_PLACEHOLDER: &str = "Waiting for launch sequence...";
/// Shown when no image has been selected yet
pub const NO_IMAGE_PLACEHOLDER: &str = "Upload an image to get started.";

/// Format a hashtag with exactly one leading `#`
#[must_use]
pub fn hashtag(tag: &str) -> String {
    format!("#{}", tag.trim().trim_start_matches('#'))
}

/// Label of the submit control for the current state
#[must_use]
pub fn submit_label<S: CaptionService>(controller: &CaptionController<S>) -> String {
    let label = if controller.is_loading() {
        LAUNCHING_LABEL
    } else {
        LAUNCH_LABEL
    };

    if controller.can_submit() {
        format!("[ {} ]", label.bold())
    } else {
        format!("[ {label} ]").dimmed().to_string()
    }
}

/// Numbered captions, one per line
#[must_use]
pub fn caption_lines(result: &CaptionResult) -> Vec<String> {
    result
        .captions
        .iter()
        .enumerate()
        .map(|(i, caption)| format!("  {}. {caption}", i + 1))
        .collect()
}

/// Hashtags on a single line, separated by spaces
#[must_use]
pub fn hashtag_line(result: &CaptionResult) -> String {
    result
        .hashtags
        .iter()
        .map(|tag| hashtag(tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Captions and hashtags without decoration, for scripting
#[must_use]
pub fn plain(result: &CaptionResult) -> String {
    let mut lines: Vec<String> = result.captions.clone();
    if !result.hashtags.is_empty() {
        lines.push(hashtag_line(result));
    }
    lines.join("\n")
}

/// Render the whole page for the current controller state
#[must_use]
pub fn render<S: CaptionService>(controller: &CaptionController<S>) -> String {
    let mut lines = Vec::new();

    match (controller.selection(), controller.preview()) {
        (Some(selection), Some(preview)) => {
            lines.push(format!(
                "{} {} ({}, {})",
                "Image:".bold(),
                preview.display_name(),
                selection.human_size(),
                selection.mime_type()
            ));
        }
        _ => lines.push(format!("{} {}", "Image:".bold(), "none".dimmed())),
    }
    lines.push(format!("{} {}", "Style:".bold(), controller.style().label()));
    lines.push(submit_label(controller));

    if let Some(error) = controller.error() {
        lines.push(String::new());
        lines.push(format!("{} {}", "Error:".red().bold(), error.red()));
    }

    lines.push(String::new());
    match controller.result() {
        Some(result) => {
            if controller.state().result_is_stale() {
                lines.push("(from the previous launch)".dimmed().to_string());
            }
            lines.push("Captions:".bold().to_string());
            lines.extend(caption_lines(result));
            if !result.hashtags.is_empty() {
                lines.push(String::new());
                lines.push(format!("{} {}", "Hashtags:".bold(), hashtag_line(result).cyan()));
            }
        }
        None if controller.preview().is_some() => lines.push(WAITING_PLACEHOLDER.dimmed().to_string()),
        None => lines.push(NO_IMAGE_PLACEHOLDER.dimmed().to_string()),
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, GENERATE_FAILED, MockCaptionService};
    use crate::selection::Selection;
    use crate::style::CaptionStyle;

    fn sample() -> CaptionResult {
        CaptionResult::new(vec!["A".into(), "B".into()], vec!["x".into(), "#y".into()])
    }

    fn controller(mock: MockCaptionService) -> CaptionController<MockCaptionService> {
        CaptionController::new(mock, CaptionStyle::Inspirational)
    }

    #[test]
    fn test_hashtag_has_single_hash() {
        assert_eq!(hashtag("sunset"), "#sunset");
        assert_eq!(hashtag("#sunset"), "#sunset");
        assert_eq!(hashtag("##sunset "), "#sunset");
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(plain(&sample()), "A\nB\n#x #y");
        assert_eq!(plain(&CaptionResult::new(vec!["only".into()], vec![])), "only");
    }

    #[test]
    fn test_caption_lines_are_numbered_in_order() {
        assert_eq!(caption_lines(&sample()), vec!["  1. A".to_string(), "  2. B".to_string()]);
    }

    #[test]
    fn test_render_empty_controller() {
        let page = render(&controller(MockCaptionService::new()));
        assert!(page.contains(NO_IMAGE_PLACEHOLDER));
        assert!(page.contains("Inspirational"));
        assert!(page.contains(LAUNCH_LABEL));
    }

    #[test]
    fn test_render_waiting_after_selection() {
        let mut c = controller(MockCaptionService::new());
        c.select_file(Selection::from_bytes("a_very_long_holiday_photo.jpg", "image/jpeg", vec![1; 10]));

        let page = render(&c);
        assert!(page.contains("a_very_long_hol..."));
        assert!(page.contains("image/jpeg"));
        assert!(page.contains(WAITING_PLACEHOLDER));
    }

    #[test]
    fn test_render_loading_label() {
        let mut c = controller(MockCaptionService::new());
        c.select_file(Selection::from_bytes("a.png", "image/png", vec![1]));
        c.begin_submit();

        assert!(render(&c).contains(LAUNCHING_LABEL));
    }

    #[test]
    fn test_render_result() {
        let mut c = controller(MockCaptionService::succeeding(sample()));
        c.select_file(Selection::from_bytes("a.png", "image/png", vec![1]));
        c.submit();

        let page = render(&c);
        assert!(page.contains("1. A"));
        assert!(page.contains("2. B"));
        assert!(page.contains("#x #y"));
        assert!(!page.contains("##y"));
        assert!(!page.contains(WAITING_PLACEHOLDER));
    }

    #[test]
    fn test_render_error() {
        let mut c = controller(MockCaptionService::failing(ApiError::Status(500)));
        c.select_file(Selection::from_bytes("a.png", "image/png", vec![1]));
        c.submit();

        let page = render(&c);
        assert!(page.contains(GENERATE_FAILED));
        assert!(page.contains(WAITING_PLACEHOLDER));
    }
}
