//! Copying the display value to the system clipboard

use arboard::Clipboard;

use crate::engine::DentakuError;

/// Somewhere a copied result can go
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), DentakuError>;
}

/// System clipboard via arboard.
///
/// On X11 and Wayland the owning process serves the clipboard contents, so the
/// handle is opened on first copy and kept for the lifetime of the app.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, DentakuError> {
        if self.handle.is_none() {
            let clipboard = Clipboard::new().map_err(|e| {
                DentakuError::Clipboard(format!("Failed to access clipboard: {}", e))
            })?;
            tracing::debug!("opened system clipboard");
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| DentakuError::Clipboard("Clipboard unavailable".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), DentakuError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| DentakuError::Clipboard(format!("Failed to copy to clipboard: {}", e)))
    }
}
