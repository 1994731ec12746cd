//! Command-line interface for allcode.
//!
//! With no arguments, bundles every recognized source file under the current
//! directory into `all_code.txt`.

use allcode::{BinaryDetection, BundleBuilder, BundleOptions, bundle};
use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// allcode — bundle a source tree into one text file
#[derive(Parser)]
#[command(name = "allcode", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Output file (default all_code.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extensions to include, replacing the default set (can be repeated)
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Extensions to add to the default set (can be repeated)
    #[arg(long = "add-ext")]
    add_extensions: Vec<String>,

    /// Extra folder names to skip (can be repeated)
    #[arg(short = 'x', long = "ignore-folder")]
    ignore_folders: Vec<String>,

    /// Glob patterns to skip (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and folders
    #[arg(long)]
    no_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Binary detection strategy
    #[arg(long, value_parser = parse_binary_detection)]
    binary_detection: Option<BinaryDetection>,

    /// Sort entries by name for a deterministic bundle
    #[arg(long)]
    sort: bool,

    /// JSON file with base options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective options as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self, base: BundleOptions) -> BundleOptions {
        let mut builder = BundleBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        if !self.extensions.is_empty() {
            builder = builder.extensions(&self.extensions);
        }
        for ext in &self.add_extensions {
            builder = builder.add_extension(ext);
        }
        for name in self.ignore_folders {
            builder = builder.add_ignore_folder(name);
        }
        if !self.ignore_patterns.is_empty() {
            builder = builder.ignore_patterns(self.ignore_patterns);
        }
        if self.gitignore {
            builder = builder.respect_gitignore(true);
        }
        if self.no_hidden {
            builder = builder.include_hidden(false);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        if self.max_depth.is_some() {
            builder = builder.max_depth(self.max_depth);
        }
        if let Some(method) = self.binary_detection {
            builder = builder.binary_detection(method);
        }
        if self.sort {
            builder = builder.sort_by_name(true);
        }
        builder.build()
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = match &cli.config {
        Some(path) => BundleOptions::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            exit(1);
        }),
        None => BundleOptions::default(),
    };
    let print_config = cli.print_config;
    let options = cli.into_options(base);

    if print_config {
        match serde_json::to_string_pretty(&options) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON serialization error: {}", e);
                exit(1);
            }
        }
        return;
    }

    println!("Starting to combine code files...");
    if let Err(e) = bundle(&options) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!(
        "Finished! Check {} for the combined code.",
        options.output.display()
    );
}
