//! # allcode
//!
//! `allcode` walks a directory tree, keeps the files whose extension is in a
//! recognized set, and concatenates them into one text file. Each file is
//! preceded by a header comment naming its path:
//!
//! ```text
//! // ================ ./app/main.py ================
//! ```
//!
//! Directories whose name is in the ignore set (`node_modules`, `.git`, …) are
//! pruned wherever they occur. A file that cannot be read or is not valid UTF-8
//! gets an error-marker line instead of content, and the run carries on.
//!
//! Walk order is whatever the filesystem reports unless
//! [`BundleBuilder::sort_by_name`] is set.
//!
//! # Example
//!
//! ```no_run
//! use allcode::{BundleBuilder, bundle};
//!
//! let options = BundleBuilder::new(".")
//!     .output("all_code.txt")
//!     .add_extension("rs")
//!     .add_ignore_folder("target")
//!     .build();
//!
//! let summary = bundle(&options).expect("Failed to bundle directory");
//! println!("{} files bundled", summary.files_written);
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{BundleStream, bundle, bundle_into, read_file};
pub use error::BundleError;
pub use options::{
    BinaryDetection, BundleBuilder, BundleOptions, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_FOLDERS,
    DEFAULT_OUTPUT, normalize_extension,
};
pub use types::{BundleSummary, BundledFile, FileContent};
