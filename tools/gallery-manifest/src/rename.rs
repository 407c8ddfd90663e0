//! Rename command: rename a PDF, its thumbnail and its manifest entry

use anyhow::{bail, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::manifest::{self, PdfEntry, PDF_FOLDER, THUMBNAIL_FOLDER};

pub fn run(root: &Path, index: Option<usize>, to: Option<String>) -> Result<()> {
    let entries = manifest::load(root);
    if entries.is_empty() {
        println!("No PDFs available for renaming.");
        return Ok(());
    }

    println!("\nStored PDFs:");
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, entry.file);
    }

    let index = match index {
        Some(i) => i,
        None => prompt_index(entries.len())?,
    };
    if index < 1 || index > entries.len() {
        bail!("invalid PDF number: {} (expected 1-{})", index, entries.len());
    }
    let selected = entries[index - 1].clone();

    let new_base = match to {
        Some(t) => t.trim().to_string(),
        None => prompt("\nEnter the new name for the PDF (without .pdf): ")?,
    };
    if new_base.is_empty() {
        bail!("new name must not be empty");
    }

    rename_files(root, &selected, &new_base)?;

    let mut entries = manifest::load(root);
    apply_rename(&mut entries, &selected.file, &new_base);
    manifest::save(root, &entries)?;
    println!("Updated pdfs.json successfully!");
    Ok(())
}

/// Move the PDF and, when present, its thumbnail.
fn rename_files(root: &Path, entry: &PdfEntry, new_base: &str) -> Result<()> {
    let new_name = format!("{}.pdf", new_base);
    let old_pdf = root.join(PDF_FOLDER).join(&entry.file);
    let new_pdf = root.join(PDF_FOLDER).join(&new_name);
    if new_pdf.exists() {
        bail!("a PDF named {} already exists", new_name);
    }
    fs::rename(&old_pdf, &new_pdf)?;
    println!("Renamed PDF: {} -> {}", entry.file, new_name);

    let new_thumb_name = new_thumbnail_name(new_base);
    let old_thumb = root.join(THUMBNAIL_FOLDER).join(&entry.thumbnail);
    if old_thumb.exists() {
        let new_thumb = root.join(THUMBNAIL_FOLDER).join(&new_thumb_name);
        fs::rename(&old_thumb, &new_thumb)?;
        println!("Renamed Thumbnail: {} -> {}", entry.thumbnail, new_thumb_name);
    }
    Ok(())
}

fn new_thumbnail_name(new_base: &str) -> String {
    format!("{}.png", new_base).replace(' ', "_")
}

/// Rewrite the manifest entry whose file matches the old name.
fn apply_rename(entries: &mut [PdfEntry], old_file: &str, new_base: &str) {
    for entry in entries.iter_mut() {
        if entry.file == old_file {
            entry.file = format!("{}.pdf", new_base);
            entry.name = new_base.to_string();
            entry.thumbnail = new_thumbnail_name(new_base);
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// A zero-byte read means stdin is closed; erroring out stops the
/// prompt loop from re-asking forever.
fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("stdin closed");
    }
    Ok(line.trim().to_string())
}

fn prompt_index(count: usize) -> Result<usize> {
    loop {
        let answer = prompt("\nEnter the number of the PDF to rename: ")?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(n),
            _ => println!("Invalid choice. Please enter a number between 1 and {}.", count),
        }
    }
}
