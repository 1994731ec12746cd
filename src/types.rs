use std::path::PathBuf;

/// What reading one file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// The file's content, verbatim.
    Text(String),
    /// The file could not be read or decoded; holds the error description.
    Unreadable(String),
}

impl FileContent {
    pub fn is_text(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }
}

/// A file selected for the bundle.
#[derive(Debug, Clone)]
pub struct BundledFile {
    /// The path as produced by the walk: the root joined with the relative path.
    pub path: PathBuf,
    pub content: FileContent,
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleSummary {
    /// Files whose content was written.
    pub files_written: usize,
    /// Files replaced by an error marker.
    pub files_failed: usize,
    /// Content bytes written, excluding headers and markers.
    pub bytes_written: u64,
}
