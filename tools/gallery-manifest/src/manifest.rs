//! Manifest (pdfs.json) loading and saving

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const PDF_FOLDER: &str = "pdfs";
pub const THUMBNAIL_FOLDER: &str = "thumbnails";
pub const JSON_FILE: &str = "pdfs.json";

/// One gallery entry, as consumed by the web page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfEntry {
    pub name: String,
    pub file: String,
    pub thumbnail: String,
}

/// Load the manifest. A missing or corrupt file yields an empty list.
pub fn load(root: &Path) -> Vec<PdfEntry> {
    let path = root.join(JSON_FILE);
    match fs::read_to_string(&path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

/// Save the manifest, pretty-printed.
pub fn save(root: &Path, entries: &[PdfEntry]) -> Result<()> {
    let path = root.join(JSON_FILE);
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(name: &str) -> PdfEntry {
        PdfEntry {
            name: name.to_string(),
            file: format!("{}.pdf", name),
            thumbnail: format!("{}.png", name),
        }
    }

    #[test]
    fn missing_manifest_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_manifest_loads_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(JSON_FILE), "{not json").unwrap();
        assert!(load(dir.path()).is_empty());
    }

    #[test]
    fn save_then_load_preserves_entries_and_order() {
        let dir = TempDir::new().unwrap();
        let entries = vec![entry("beta"), entry("alpha")];
        save(dir.path(), &entries).unwrap();
        assert_eq!(load(dir.path()), entries);
    }
}
