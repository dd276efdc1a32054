//! Final file write.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the rendered document to `path`, overwriting any existing file.
pub fn write_readme(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))
}
