use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
pub const DEFAULT_OUTPUT: &str = "all_code.txt";
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".cpp", ".c", ".h", ".css", ".html", ".php", ".rb", ".swift", ".go",
    ".ts", ".jsx", ".tsx",
];
pub const DEFAULT_IGNORE_FOLDERS: &[&str] = &[
    "node_modules",
    "venv",
    ".next",
    "env",
    "dist",
    "build",
    "__pycache__",
    ".git",
    "vendor",
    "packages",
];
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: BTreeSet<String>,
    pub ignore_folders: BTreeSet<String>,
    pub ignore_patterns: Vec<String>,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub binary_detection: BinaryDetection,
    pub sort_by_name: bool,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore_folders: DEFAULT_IGNORE_FOLDERS.iter().map(|f| f.to_string()).collect(),
            ignore_patterns: Vec::new(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
            binary_detection: BinaryDetection::None,
            sort_by_name: false,
        }
    }
}
impl BundleOptions {
    /// Loads options from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, BundleError> {
        Self::parse_json(json).map_err(|e| BundleError::Config(e.to_string()))
    }
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| BundleError::io(path, e))?;
        Self::parse_json(&json)
            .map_err(|e| BundleError::Config(format!("{}: {}", path.display(), e)))
    }
    fn parse_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut options: BundleOptions = serde_json::from_str(json)?;
        options.extensions = options
            .extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        Ok(options)
    }
    /// Case-insensitive extension check. Files without an extension, dotfiles
    /// included, never match.
    pub fn accepts_extension(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.extensions.contains(&ext))
    }
    pub fn is_ignored_folder(&self, name: &str) -> bool {
        self.ignore_folders.contains(name)
    }
}
/// Lowercased extension with its dot. Leading dots of the file name never
/// start an extension, so `.py` and `..py` have none while `a..py` has `.py`.
fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem = name.trim_start_matches('.');
    stem.rfind('.').map(|i| stem[i..].to_lowercase())
}
/// Lowercases an extension and gives it a leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: BundleOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: BundleOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    /// Replaces the extension set.
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.extensions = exts
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }
    pub fn add_extension(mut self, ext: &str) -> Self {
        self.options.extensions.insert(normalize_extension(ext));
        self
    }
    /// Replaces the ignore-folder set.
    pub fn ignore_folders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.ignore_folders = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn add_ignore_folder(mut self, name: impl Into<String>) -> Self {
        self.options.ignore_folders.insert(name.into());
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn sort_by_name(mut self, yes: bool) -> Self {
        self.options.sort_by_name = yes;
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
