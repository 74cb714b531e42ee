//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Input reading, output naming and output sinks
//! - Clipboard output

pub mod clipboard;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use clipboard::ClipboardSink;
pub use error::{ConversionError, ConversionResult};
pub use files::{FileSink, MemorySink, OutputSink, StdoutSink};
