//! Testing utilities for instacaption
//!
//! Helpers for writing throwaway image files that clean up after themselves.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Smallest valid PNG: a 1x1 transparent pixel
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// Image file in its own temporary directory, removed on drop
///
/// # Examples
/// ```ignore
/// let image = TempImage::png("cat.png");
/// let selection = Selection::from_path(image.path()).unwrap();
/// assert_eq!(selection.mime_type(), "image/png");
/// ```
pub struct TempImage {
    _dir: TempDir,
    path: PathBuf,
}

impl TempImage {
    /// Write `bytes` to a file called `name`
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    pub fn with_bytes(name: &str, bytes: &[u8]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, bytes).expect("Failed to write test image");
        Self { _dir: dir, path }
    }

    /// Write a tiny PNG to a file called `name`
    ///
    /// # Panics
    /// Panics if the file cannot be created.
    pub fn png(name: &str) -> Self {
        Self::with_bytes(name, TINY_PNG)
    }

    /// Location of the image
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;

    #[test]
    fn test_temp_image_is_removed_on_drop() {
        let path = {
            let image = TempImage::png("gone.png");
            assert!(image.path().exists());
            image.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_image_is_selectable() {
        let image = TempImage::png("cat.png");
        let selection = Selection::from_path(image.path()).unwrap();
        assert_eq!(selection.bytes(), TINY_PNG);
    }
}
