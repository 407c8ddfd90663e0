//! データ構造体モジュール

use serde::Deserialize;

use crate::utils::{pdf_href, thumbnail_src};

// ============================================
// PDFマニフェスト用データ構造
// ============================================

/// pdfs.json の1エントリ
#[derive(Debug, Clone, Deserialize)]
pub struct PdfEntry {
    pub file: String,
    pub thumbnail: String,
    pub name: String,
}

/// 1エントリ分の表示内容（DOM構築前の純粋データ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUnit {
    pub pdf_href: String,
    pub thumbnail_src: String,
    pub title: String,
}

/// マニフェスト順を保ったまま表示内容を組み立てる
pub fn build_display_units(entries: &[PdfEntry]) -> Vec<DisplayUnit> {
    entries
        .iter()
        .map(|entry| DisplayUnit {
            pdf_href: pdf_href(&entry.file),
            thumbnail_src: thumbnail_src(&entry.thumbnail),
            title: entry.name.clone(),
        })
        .collect()
}
