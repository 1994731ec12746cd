//! Bundle format.
//!
//! Every included file is preceded by a header block naming its path:
//!
//! ```text
//!
//!
//! // ================ ./src/main.py ================
//!
//! ```
//!
//! Content is written verbatim with no escaping, so header-like text inside a
//! source file cannot be told apart from a real header. When a file could not
//! be read, its header is followed by a single error-marker line instead of
//! content.

use crate::types::{BundleSummary, BundledFile, FileContent};
use std::io::{self, Write};
use std::path::Path;

/// Returns the header block written before a file's content.
pub fn header(path: &Path) -> String {
    format!("\n\n// ================ {} ================\n\n", path.display())
}

/// Returns the single-line marker written in place of an unreadable file's content.
pub fn error_marker(path: &Path, error: &str) -> String {
    // Keep the marker on one line even when the OS message spans several.
    let error = error.replace(['\r', '\n'], " ");
    format!("// Error reading file {}: {}\n", path.display(), error)
}

/// Sequential, append-only writer for bundle entries.
pub struct BundleWriter<W: Write> {
    inner: W,
    summary: BundleSummary,
}

impl<W: Write> BundleWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            summary: BundleSummary::default(),
        }
    }

    pub fn write_entry(&mut self, file: &BundledFile) -> io::Result<()> {
        self.inner.write_all(header(&file.path).as_bytes())?;
        match &file.content {
            FileContent::Text(text) => {
                self.inner.write_all(text.as_bytes())?;
                self.summary.files_written += 1;
                self.summary.bytes_written += text.len() as u64;
            }
            FileContent::Unreadable(error) => {
                self.inner
                    .write_all(error_marker(&file.path, error).as_bytes())?;
                self.summary.files_failed += 1;
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> BundleSummary {
        self.summary
    }

    /// Flushes the sink and hands it back with the run totals.
    pub fn finish(mut self) -> io::Result<(BundleSummary, W)> {
        self.inner.flush()?;
        Ok((self.summary, self.inner))
    }
}
