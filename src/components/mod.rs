//! UIコンポーネントモジュール

pub mod gallery;
pub mod pdf_item;

pub use gallery::Gallery;
pub use pdf_item::PdfItem;
