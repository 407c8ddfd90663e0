//! PDFギャラリーコンポーネント
//! ページ読み込み時にマニフェストを1回fetchし、エントリ順に表示する

use leptos::*;

use crate::components::PdfItem;
use crate::models::{build_display_units, DisplayUnit};
use crate::utils::manifest::fetch_manifest;

/// マニフェストの取得先（同一オリジンの相対URL）
const MANIFEST_URL: &str = "pdfs.json";

#[component]
pub fn Gallery() -> impl IntoView {
    let (units, set_units) = create_signal(Vec::<DisplayUnit>::new());

    // 初回マウント時に1回だけfetch（リトライ・タイムアウトなし）
    spawn_local(async move {
        match fetch_manifest(MANIFEST_URL).await {
            Ok(entries) => {
                set_units.set(build_display_units(&entries));
            }
            Err(e) => {
                // 失敗はコンソールに記録するのみ（画面にはエラーを出さない）
                web_sys::console::error_1(&format!("[gallery] {}", e).into());
            }
        }
    });

    move || {
        units
            .get()
            .into_iter()
            .map(|unit| view! { <PdfItem unit=unit /> })
            .collect_view()
    }
}
