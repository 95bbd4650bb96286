//! Local preview of the selected image
//!
//! A preview never leaves the machine. It only knows where the image lives
//! and how to name it in a cramped header.

use super::{Result, Selection, SelectionError};
use std::path::{Path, PathBuf};

const NAME_LIMIT: usize = 15;

/// Shorten a file name for display: the first 15 characters plus `...`
#[must_use]
pub fn display_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Display-only reference to the currently selected image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    display_name: String,
    path: Option<PathBuf>,
}

impl Preview {
    /// Derive a preview from a selection
    #[must_use]
    pub fn of(selection: &Selection) -> Self {
        Self {
            display_name: display_name(selection.name()),
            path: selection.path().map(Path::to_path_buf),
        }
    }

    /// Shortened file name
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Location of the image on disk, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Open the image in the system's default viewer
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::PreviewError` if the image has no location on
    /// disk or no viewer could be launched.
    pub fn open(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| SelectionError::PreviewError("image is not backed by a file".into()))?;
        open::that(path).map_err(|e| SelectionError::PreviewError(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_short_names_unchanged() {
        assert_eq!(display_name("cat.png"), "cat.png");
        assert_eq!(display_name("exactly_15_.png"), "exactly_15_.png");
    }

    #[test]
    fn test_display_name_truncates_long_names() {
        assert_eq!(display_name("a_very_long_holiday_photo.jpg"), "a_very_long_hol...");
    }

    #[test]
    fn test_display_name_counts_chars_not_bytes() {
        assert_eq!(display_name("ééééééééééééééééé.png"), "ééééééééééééééé...");
    }

    #[test]
    fn test_preview_of_in_memory_selection_cannot_open() {
        let selection = Selection::from_bytes("mem.png", "image/png", vec![1, 2, 3]);
        let preview = Preview::of(&selection);

        assert_eq!(preview.display_name(), "mem.png");
        assert!(preview.path().is_none());
        assert!(matches!(preview.open(), Err(SelectionError::PreviewError(_))));
    }
}
