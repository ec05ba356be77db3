//! NASA Gallery CLI
//!
//! 検索・ページ移動・選択・CSVエクスポートをターミナルから行う。
//! 状態ロジックは nasa_gallery_common 側。

pub mod browse;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod session;
pub mod storage;
