use crate::error::BundleError;
use crate::options::{BinaryDetection, BundleOptions};
use crate::output::BundleWriter;
use crate::types::{BundleSummary, BundledFile, FileContent};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
const BINARY_SNIFF_LEN: usize = 4096;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &BundleOptions) -> Result<Self, BundleError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .hidden(!options.include_hidden)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .require_git(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links);
        if options.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        let matcher = build_matcher(&options.ignore_patterns)?;
        let filter = options.clone();
        // The root is never pruned, only what lies beneath it.
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| filter.is_ignored_folder(name))
            {
                return false;
            }
            match &matcher {
                Some(matcher) => !matcher.is_match(entry.path()),
                None => true,
            }
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
}
fn build_matcher(patterns: &[String]) -> Result<Option<globset::GlobSet>, BundleError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut glob_builder = globset::GlobSetBuilder::new();
    for pattern in patterns {
        let glob = globset::Glob::new(pattern)
            .map_err(|e| BundleError::Pattern(format!("'{}': {}", pattern, e)))?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map(Some)
        .map_err(|e| BundleError::Pattern(format!("failed to build glob set: {}", e)))
}
fn is_binary(bytes: &[u8], detection: BinaryDetection) -> bool {
    let head = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    match detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    }
}
fn read_text(path: &Path, detection: BinaryDetection) -> Result<String, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    if is_binary(&bytes, detection) {
        return Err("binary file, content omitted".to_string());
    }
    String::from_utf8(bytes).map_err(|e| format!("invalid UTF-8: {}", e.utf8_error()))
}
/// Reads one file into a [`FileContent`]. Never fails: any problem becomes
/// [`FileContent::Unreadable`].
pub fn read_file(path: &Path, detection: BinaryDetection) -> FileContent {
    match read_text(path, detection) {
        Ok(text) => FileContent::Text(text),
        Err(error) => {
            debug!("Could not read {}: {}", path.display(), error);
            FileContent::Unreadable(error)
        }
    }
}
/// Iterator over the files selected for a bundle, in walk order.
///
/// Unreadable files are yielded with [`FileContent::Unreadable`]; directories
/// the walk cannot enter are logged and skipped.
pub struct BundleStream {
    walk: ignore::Walk,
    options: BundleOptions,
    exclude: Option<PathBuf>,
}
impl BundleStream {
    /// Prepares the walk. Fails if the root cannot be listed or an ignore
    /// pattern is invalid.
    pub fn new(options: &BundleOptions) -> Result<Self, BundleError> {
        fs::read_dir(&options.root).map_err(|e| BundleError::io(&options.root, e))?;
        let walker = Walker::new(options)?;
        Ok(Self {
            walk: walker.inner,
            options: options.clone(),
            exclude: None,
        })
    }
    /// Skips the file at `path` (compared after canonicalization).
    pub fn excluding(mut self, path: Option<PathBuf>) -> Self {
        self.exclude = path;
        self
    }
    fn is_excluded(&self, path: &Path) -> bool {
        match &self.exclude {
            Some(excluded) => fs::canonicalize(path).is_ok_and(|p| &p == excluded),
            None => false,
        }
    }
}
impl Iterator for BundleStream {
    type Item = BundledFile;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !is_file_entry(&entry) || !self.options.accepts_extension(path) {
                continue;
            }
            if self.is_excluded(path) {
                debug!("Skipping bundle output {}", path.display());
                continue;
            }
            debug!("Bundling {}", path.display());
            let content = read_file(path, self.options.binary_detection);
            return Some(BundledFile {
                path: path.to_path_buf(),
                content,
            });
        }
    }
}
/// File-ness comes from the directory listing. A symlink counts when it
/// points at a file or its target cannot be resolved, so a dangling or
/// vanished file still reaches `read_file` and gets an error marker.
fn is_file_entry(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => fs::metadata(entry.path()).map_or(true, |m| m.is_file()),
        _ => false,
    }
}
fn drain<W: Write>(
    stream: BundleStream,
    writer: W,
    sink: &Path,
) -> Result<BundleSummary, BundleError> {
    let mut writer = BundleWriter::new(writer);
    for file in stream {
        writer
            .write_entry(&file)
            .map_err(|e| BundleError::io(sink, e))?;
    }
    let (summary, _) = writer.finish().map_err(|e| BundleError::io(sink, e))?;
    info!(
        "Bundled {} files ({} bytes), {} unreadable",
        summary.files_written, summary.bytes_written, summary.files_failed
    );
    Ok(summary)
}
/// Bundles `options.root` into the file at `options.output`.
///
/// The output is created (or truncated) before the walk starts and is never
/// bundled into itself.
pub fn bundle(options: &BundleOptions) -> Result<BundleSummary, BundleError> {
    debug!("Starting bundle of {}", options.root.display());
    let file = File::create(&options.output).map_err(|e| BundleError::io(&options.output, e))?;
    let output = fs::canonicalize(&options.output).ok();
    let stream = BundleStream::new(options)?.excluding(output);
    drain(stream, BufWriter::new(file), &options.output)
}
/// Bundles `options.root` into an arbitrary sink. `options.output` is ignored.
pub fn bundle_into<W: Write>(
    options: &BundleOptions,
    writer: W,
) -> Result<BundleSummary, BundleError> {
    let stream = BundleStream::new(options)?;
    drain(stream, writer, Path::new("<writer>"))
}
