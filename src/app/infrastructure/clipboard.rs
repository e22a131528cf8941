//! System clipboard adapter for hosts that don't provide their own.

use super::error::{AppError, Result};
use super::host::Clipboard;

/// `Clipboard` implementation using arboard.
///
/// A fresh arboard handle is opened per write; headless sessions surface
/// as `AppError::Clipboard` instead of panicking.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = arboard::Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("clipboard init: {}", e)))?;
        ctx.set_text(text.to_owned())
            .map_err(|e| AppError::Clipboard(format!("clipboard set: {}", e)))
    }
}
