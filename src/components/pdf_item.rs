//! PDFアイテムコンポーネント
//! サムネイルとタイトルの2つのリンクで1エントリを表示する

use leptos::*;

use crate::models::DisplayUnit;

#[component]
pub fn PdfItem(unit: DisplayUnit) -> impl IntoView {
    let title_text = unit.title.clone();

    view! {
        <div class="pdf-item">
            // クリック可能なサムネイル（新しいタブで開く）
            <a href=unit.pdf_href.clone() target="_blank" rel="noopener">
                <img src=unit.thumbnail_src alt=unit.title />
            </a>
            // クリック可能なタイトル（リンク先はサムネイルと同じPDF）
            <a href=unit.pdf_href target="_blank" rel="noopener">
                {title_text}
            </a>
        </div>
    }
}
