//! Input reading, output naming and output sinks
//!
//! The converters themselves are pure; everything that touches stdin,
//! stdout, files or the clipboard goes through here. The [`OutputSink`]
//! trait lets the CLI write to a real destination while tests collect
//! output in memory.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::utils::error::ConversionResult;

/// Suffix added to the file stem of an inline conversion's default output
pub const INLINE_SUFFIX: &str = "_inline";

/// Read a text document from `path`, or from stdin when `None`.
pub fn read_text(path: Option<&Path>) -> ConversionResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read a binary document (e.g. `.docx`) from `path`.
pub fn read_bytes(path: &Path) -> ConversionResult<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Default output path of an inline conversion: `<stem>_inline<ext>`,
/// using `.md` when the input has no extension.
pub fn inline_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "md".to_string());
    input.with_file_name(format!("{stem}{INLINE_SUFFIX}.{ext}"))
}

/// Path of the `index`-th (1-based) per-table file next to `output`:
/// `<stem>_table<index><ext>`.
pub fn per_table_path(output: &Path, index: usize, ext: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{stem}_table{index}{ext}"))
}

/// Destination for converted text
pub trait OutputSink {
    /// Write the full converted content
    fn write_output(&mut self, content: &str) -> ConversionResult<()>;

    /// Human-readable name of the destination, for status messages
    fn describe(&self) -> String;
}

/// Writes to standard output, followed by a newline
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_output(&mut self, content: &str) -> ConversionResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{content}")?;
        stdout.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

/// Writes the content byte-for-byte to a file, replacing it
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn write_output(&mut self, content: &str) -> ConversionResult<()> {
        fs::write(&self.path, content)?;
        log::debug!("wrote {} byte(s) to {}", content.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Collects output in memory (testing, embedding)
#[derive(Debug, Default)]
pub struct MemorySink {
    pub outputs: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, concatenated
    pub fn contents(&self) -> String {
        self.outputs.concat()
    }
}

impl OutputSink for MemorySink {
    fn write_output(&mut self, content: &str) -> ConversionResult<()> {
        self.outputs.push(content.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
