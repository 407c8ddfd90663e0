//! Gallery Manifest CLI Tool
//!
//! Scans the pdfs/ folder, generates thumbnails and keeps pdfs.json in sync.

mod manifest;
mod rename;
mod thumbnails;
mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-manifest")]
#[command(version = "0.1.0")]
#[command(about = "Generate and manage PDF gallery thumbnails and manifest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan pdfs/, generate missing thumbnails and rewrite pdfs.json
    Update {
        /// Path to the gallery root (contains pdfs/ and thumbnails/)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Delete existing thumbnails and regenerate them
        #[arg(long)]
        regen: bool,
    },

    /// Rename a PDF, its thumbnail and its manifest entry
    Rename {
        /// Path to the gallery root (contains pdfs/ and thumbnails/)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// 1-based number of the PDF to rename (prompts when omitted)
        #[arg(short, long)]
        index: Option<usize>,

        /// New base name without the .pdf extension (prompts when omitted)
        #[arg(short, long)]
        to: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Update { path, regen } => update::run(&path, regen),
        Commands::Rename { path, index, to } => rename::run(&path, index, to),
    }
}
