//! Image selection
//!
//! A [`Selection`] is the image the user picked together with its raw bytes
//! and MIME type. Loading from disk goes through the same `image/*` filter a
//! browser file picker applies: the MIME type is derived from the extension
//! and anything that is not an image is refused. Nothing else is validated,
//! so a large or corrupt file is only rejected by the remote API.
//!
//! The [`Preview`] is the local, display-only counterpart of a selection.

mod error;
mod preview;

pub use error::{Result, SelectionError};
pub use preview::{Preview, display_name};

use byte_unit::{Byte, UnitType};
use std::fs;
use std::path::{Path, PathBuf};

/// MIME filter applied by the picker
pub const ACCEPT: &str = "image/*";

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("apng", "image/apng"),
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("ico", "image/x-icon"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
];

/// Guess the image MIME type of a path from its extension
///
/// Returns `None` for anything the picker would not accept.
#[must_use]
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, mime)| *mime)
}

/// An image chosen for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
    path: Option<PathBuf>,
}

impl Selection {
    /// Build a selection from bytes already in memory
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
            path: None,
        }
    }

    /// Load an image from disk through the `image/*` picker filter
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::NotAnImage` if the extension is not an image
    /// type, `SelectionError::NotAFile` if the path has no file name or is a
    /// directory, and `SelectionError::Read` if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| SelectionError::NotAFile(path.to_path_buf()))?;

        if path.is_dir() {
            return Err(SelectionError::NotAFile(path.to_path_buf()));
        }

        let mime_type =
            image_mime_type(path).ok_or_else(|| SelectionError::NotAnImage(path.to_path_buf()))?;

        let bytes = fs::read(path).map_err(|source| SelectionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(file = %path.display(), mime_type, size = bytes.len(), "image selected");

        Ok(Self {
            name,
            mime_type: mime_type.to_string(),
            bytes,
            path: Some(path.to_path_buf()),
        })
    }

    /// File name sent with the upload
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type sent with the upload
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Raw file contents
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Where the file was loaded from, if it came from disk
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Size of the file in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Human-readable file size (e.g. `1.5 KiB`)
    #[must_use]
    pub fn human_size(&self) -> String {
        Byte::from_u64(self.bytes.len() as u64)
            .get_appropriate_unit(UnitType::Binary)
            .to_string()
    }
}
