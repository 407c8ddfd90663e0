//! Thumbnail naming and generation (ImageMagick)

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Thumbnail filename for a PDF: spaces become underscores, .pdf becomes .png
pub fn thumbnail_name(pdf_file: &str) -> String {
    let stem = pdf_file.strip_suffix(".pdf").unwrap_or(pdf_file);
    format!("{}.png", stem.replace(' ', "_"))
}

/// Render page 1 of the PDF as a flattened PNG, at most 800x800.
pub fn generate(pdf_path: &Path, thumbnail_path: &Path) -> Result<()> {
    let first_page = format!("{}[0]", pdf_path.display());
    let output = Command::new("magick")
        .args(["-density", "300"])
        .arg(&first_page)
        .args(["-background", "white", "-flatten", "-alpha", "off"])
        .args(["-resize", "800x800"])
        .arg(thumbnail_path)
        .output()
        .context("failed to run ImageMagick (is `magick` installed?)")?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        bail!("ImageMagick failed: {}", stderr.trim());
    }
    if !stderr.trim().is_empty() {
        println!(
            "ImageMagick warning for {}: {}",
            pdf_path.display(),
            stderr.trim()
        );
    }
    Ok(())
}
