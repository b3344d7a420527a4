// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clipboard access.
//!
//! Reads and writes are single-shot: a failure is reported to the caller
//! and never retried.

/// Clipboard failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is reachable on this host
    #[error("clipboard is not supported here")]
    Unsupported,

    /// The clipboard exists but the operation failed
    #[error("clipboard access failed: {0}")]
    Access(String),
}

/// Text clipboard.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Connect to the system clipboard.
    ///
    /// Connection failure is not an error here; every later operation
    /// reports [`ClipboardError::Unsupported`] instead.
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!(error = %e, "system clipboard unavailable");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let clipboard = self.inner.as_mut().ok_or(ClipboardError::Unsupported)?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // An empty clipboard is not a failure; callers decide what empty means.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(arboard::Error::ClipboardNotSupported) => Err(ClipboardError::Unsupported),
            Err(e) => Err(ClipboardError::Access(e.to_string())),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.inner.as_mut().ok_or(ClipboardError::Unsupported)?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// In-process clipboard for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: String,
    fail_with: Option<ClipboardError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard pre-filled with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fail_with: None,
        }
    }

    /// Clipboard whose every operation fails with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            text: String::new(),
            fail_with: Some(error),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(self.text.clone()),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => {
                self.text = text.to_string();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "clipboard_tests.rs"]
mod tests;
