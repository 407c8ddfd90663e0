//! Update command: scan pdfs/, generate thumbnails, rewrite the manifest

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::manifest::{self, PdfEntry, PDF_FOLDER, THUMBNAIL_FOLDER};
use crate::thumbnails;

pub fn run(root: &Path, regen: bool) -> Result<()> {
    let pdf_dir = root.join(PDF_FOLDER);
    let thumb_dir = root.join(THUMBNAIL_FOLDER);
    fs::create_dir_all(&pdf_dir)?;
    fs::create_dir_all(&thumb_dir)?;

    if regen {
        println!("Regenerating all thumbnails...");
        for entry in fs::read_dir(&thumb_dir)? {
            fs::remove_file(entry?.path())?;
        }
        println!("All thumbnails deleted.");
    }

    let existing = manifest::load(root);
    let existing_thumbnails: HashSet<&str> =
        existing.iter().map(|e| e.thumbnail.as_str()).collect();

    let mut updated = Vec::new();
    for pdf_file in scan_pdfs(&pdf_dir)? {
        let pdf_path = pdf_dir.join(&pdf_file);
        let thumbnail = thumbnails::thumbnail_name(&pdf_file);
        let thumb_path = thumb_dir.join(&thumbnail);

        let need_new = regen
            || !existing_thumbnails.contains(thumbnail.as_str())
            || !thumb_path.exists();

        if need_new {
            println!("Generating thumbnail for: {}", pdf_file);
            if let Err(e) = thumbnails::generate(&pdf_path, &thumb_path) {
                println!("Error generating thumbnail for {}: {}", pdf_file, e);
                continue;
            }
            println!("Thumbnail created: {}", thumb_path.display());
        }

        updated.push(PdfEntry {
            name: pdf_file.strip_suffix(".pdf").unwrap_or(&pdf_file).to_string(),
            file: pdf_file,
            thumbnail,
        });
    }

    // Clean up orphaned thumbnails (thumbnails without corresponding PDFs)
    let referenced: HashSet<&str> = updated.iter().map(|e| e.thumbnail.as_str()).collect();
    for entry in fs::read_dir(&thumb_dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !referenced.contains(file_name.as_str()) {
            fs::remove_file(entry.path())?;
            println!("Deleted orphaned thumbnail: {}", file_name);
        }
    }

    manifest::save(root, &updated)?;
    println!("Updated pdfs.json with {} PDFs", updated.len());
    Ok(())
}

/// PDF filenames in the folder, sorted for a stable manifest order.
fn scan_pdfs(pdf_dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(pdf_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_pdf = Path::new(&name)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn scan_finds_only_pdfs_sorted() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("b.pdf"));
        touch(&dir.path().join("a.PDF"));
        touch(&dir.path().join("notes.txt"));
        fs::create_dir(dir.path().join("sub.pdf")).unwrap();

        let files = scan_pdfs(dir.path()).unwrap();
        assert_eq!(files, ["a.PDF", "b.pdf"]);
    }

    #[test]
    fn update_keeps_entries_with_existing_thumbnails() {
        let root = TempDir::new().unwrap();
        let pdf_dir = root.path().join(PDF_FOLDER);
        let thumb_dir = root.path().join(THUMBNAIL_FOLDER);
        fs::create_dir_all(&pdf_dir).unwrap();
        fs::create_dir_all(&thumb_dir).unwrap();

        touch(&pdf_dir.join("report.pdf"));
        touch(&thumb_dir.join("report.png"));
        manifest::save(
            root.path(),
            &[PdfEntry {
                name: "report".to_string(),
                file: "report.pdf".to_string(),
                thumbnail: "report.png".to_string(),
            }],
        )
        .unwrap();

        run(root.path(), false).unwrap();

        let entries = manifest::load(root.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file, "report.pdf");
        assert!(thumb_dir.join("report.png").exists());
    }

    #[test]
    fn update_removes_orphaned_thumbnails() {
        let root = TempDir::new().unwrap();
        let pdf_dir = root.path().join(PDF_FOLDER);
        let thumb_dir = root.path().join(THUMBNAIL_FOLDER);
        fs::create_dir_all(&pdf_dir).unwrap();
        fs::create_dir_all(&thumb_dir).unwrap();

        touch(&thumb_dir.join("ghost.png"));

        run(root.path(), false).unwrap();

        assert!(!thumb_dir.join("ghost.png").exists());
        assert!(manifest::load(root.path()).is_empty());
    }

    #[test]
    fn update_creates_missing_folders() {
        let root = TempDir::new().unwrap();
        run(root.path(), false).unwrap();
        assert!(root.path().join(PDF_FOLDER).is_dir());
        assert!(root.path().join(THUMBNAIL_FOLDER).is_dir());
    }
}
