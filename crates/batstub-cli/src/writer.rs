use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use batstub_core::generate::ProcessedCategory;
use log::info;

/// What happened to the files of one category.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Write a processed category to `<base>/<category>/<file>`, creating the
/// directory when it is missing. Existing files are kept unless `overwrite`.
pub fn write_category(
    base: &Path,
    category: &ProcessedCategory,
    overwrite: bool,
) -> Result<WriteSummary> {
    let dir = base.join(&category.name);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let mut summary = WriteSummary::default();
    for file in &category.files {
        let path = dir.join(&file.path);
        if !overwrite && path.exists() {
            info!("keeping existing {}", path.display());
            summary.skipped += 1;
            continue;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
        summary.written += 1;
    }
    Ok(summary)
}
