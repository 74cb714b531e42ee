//! Error handling for tabtsv conversions
//!
//! Text-to-text transforms never fail; only work that touches archives,
//! the filesystem or the clipboard returns a [`ConversionResult`].

use thiserror::Error;

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a readable zip archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Malformed XML inside a document archive
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A required archive member is absent
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// Invalid input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn missing_part(name: impl Into<String>) -> Self {
        ConversionError::MissingPart(name.into())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ConversionError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ConversionError::Xml(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ConversionError::invalid("not a table");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("not a table"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConversionError = io.into();
        assert!(matches!(err, ConversionError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_missing_part_display() {
        let err = ConversionError::missing_part("word/document.xml");
        assert_eq!(
            err.to_string(),
            "Missing document part: word/document.xml"
        );
    }
}
