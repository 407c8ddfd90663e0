//! ユーティリティモジュール

pub mod manifest;

/// PDFファイルの配置ディレクトリ
const PDF_BASE: &str = "pdfs";
/// サムネイル画像の配置ディレクトリ
const THUMBNAIL_BASE: &str = "thumbnails";

// 共通ヘルパー

/// パスセグメントをパーセントエンコード
/// 空白や `#` `?` を含むファイル名でもリンクが壊れないようにする
fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// PDFへのリンク先パスを組み立てる
pub fn pdf_href(file: &str) -> String {
    format!("{}/{}", PDF_BASE, encode_segment(file))
}

/// サムネイル画像のパスを組み立てる
pub fn thumbnail_src(thumbnail: &str) -> String {
    format!("{}/{}", THUMBNAIL_BASE, encode_segment(thumbnail))
}
