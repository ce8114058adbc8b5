//! Clipboard seam.

use std::cell::RefCell;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// The environment has no clipboard (insecure context, old browser).
    #[error("clipboard unavailable")]
    Unavailable,
    /// The write was refused, typically for lack of permission.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[async_trait(?Send)]
pub trait Clipboard {
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] when the text could not be written.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps written text in memory. Can be switched to refuse writes.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
    refuse: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    #[must_use]
    pub fn refusing() -> Self {
        Self { contents: RefCell::new(None), refuse: true }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.refuse {
            return Err(ClipboardError::Rejected("permission denied".to_owned()));
        }
        *self.contents.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}
