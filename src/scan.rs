//! Sequential scan of the working directory for `.tsx` files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rand::RngCore;
use tracing::{debug, info};

use crate::error::Result;
use crate::extractors::JsxLabelExtractor;
use crate::language;
use crate::report;

/// All `.tsx` files under the current working directory, in glob order.
pub fn discover_files() -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob("**/*.tsx")? {
        files.push(entry?);
    }
    Ok(files)
}

/// Read, parse and label one file, writing its report lines to `out`.
/// A read failure is fatal for the whole run.
pub fn label_file<W: Write>(path: &Path, rng: &mut dyn RngCore, out: &mut W) -> Result<usize> {
    let file_path = path.display().to_string();
    let content = fs::read_to_string(path)?;
    let tree = language::parse_source(&file_path, &content)?;

    let extractor = JsxLabelExtractor::new(file_path.clone(), content);
    let labels = extractor.extract_labels(&tree, rng)?;
    report::write_report(out, &file_path, &labels)?;

    debug!("{}: {} labeled elements", file_path, labels.len());
    Ok(labels.len())
}

/// Discover files, then process them strictly sequentially in discovery
/// order. Report line order is traversal order within discovery order.
pub fn scan_current_dir<W: Write>(rng: &mut dyn RngCore, out: &mut W) -> Result<usize> {
    let files = discover_files()?;
    let mut total = 0;
    for path in &files {
        total += label_file(path, rng, out)?;
    }
    info!("{} labeled elements across {} files", total, files.len());
    Ok(total)
}
