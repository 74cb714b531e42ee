//! System clipboard output
//!
//! Only functional with the `clipboard` feature; otherwise every write
//! reports that support was not compiled in.

use crate::utils::error::{ConversionError, ConversionResult};
use crate::utils::files::OutputSink;

/// Copies the converted text to the system clipboard
#[derive(Debug, Default)]
pub struct ClipboardSink;

impl ClipboardSink {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "clipboard")]
impl OutputSink for ClipboardSink {
    fn write_output(&mut self, content: &str) -> ConversionResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ConversionError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(content.to_string())
            .map_err(|e| ConversionError::Clipboard(e.to_string()))
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}

#[cfg(not(feature = "clipboard"))]
impl OutputSink for ClipboardSink {
    fn write_output(&mut self, _content: &str) -> ConversionResult<()> {
        Err(ConversionError::Clipboard(
            "clipboard support not enabled; rebuild with --features clipboard".to_string(),
        ))
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}
