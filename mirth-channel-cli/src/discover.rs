//! Channel export discovery
//!
//! Walks the input directory recursively and returns every file whose name
//! ends in `.xml` (any case). Entries are visited in file-name order so the
//! report rows come out in a stable order.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every `.xml` file below `root`
pub fn find_channel_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Input directory not found: {:?}", root);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read directory under {:?}", root))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if is_channel_export(entry.path()) {
            log::trace!("Found channel export: {:?}", entry.path());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_channel_export(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".xml"))
        .unwrap_or(false)
}
