//! Copying captions to the clipboard

use thiserror::Error;

/// Errors that can occur while writing to the clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (e.g. headless session)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard refused the text
    #[error("Clipboard error: {0}")]
    WriteFailed(String),
}

/// Destination for copied text
pub trait TextClipboard {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if the clipboard cannot be opened or written.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened lazily on first use
///
/// On X11 and Wayland the copied text lives only as long as the process that
/// set it, unless a clipboard manager takes it over. A process about to exit
/// should use [`SystemClipboard::holding`], whose writes block until another
/// client has taken the contents.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: bool,
}

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None, hold: false }
    }

    /// A clipboard whose writes outlive the process on Linux
    #[must_use]
    pub const fn holding() -> Self {
        Self { inner: None, hold: true }
    }

    /// Whether writes wait for the contents to be taken over
    #[must_use]
    pub const fn holds_contents(&self) -> bool {
        self.hold
    }
}

impl TextClipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let hold = self.hold;
        match self.inner.as_mut() {
            Some(clipboard) => write_text(clipboard, text, hold)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable("not initialised".into())),
        }
    }
}

#[cfg(target_os = "linux")]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str, hold: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(target_os = "linux"))]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str, _hold: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// In-memory clipboard, handy for tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl TextClipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copy `text` without waiting on or reporting the outcome
///
/// Failures are logged and otherwise dropped.
pub fn copy_fire_and_forget(clipboard: &mut dyn TextClipboard, text: &str) {
    if let Err(e) = clipboard.set_text(text) {
        tracing::warn!(error = %e, "failed to copy caption to clipboard");
    }
}
