pub mod csv;

use crate::error::Result;
use nasa_gallery_common::SelectionEntry;
use std::path::{Path, PathBuf};

/// CSVの書式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CsvStyle {
    /// フィールドをそのまま連結（既定）
    #[default]
    Raw,
    /// RFC 4180のクォートあり
    Quoted,
}

fn output_path_for_count(output: &Path, count: usize) -> PathBuf {
    let file_name = nasa_gallery_common::export_filename(count);
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

/// 選択中のアイテムをCSVファイルに書き出す
///
/// # Arguments
/// * `entries` - 選択一覧
/// * `output` - 出力ディレクトリ（拡張子付きならそのファイル名）
/// * `style` - CSVの書式
///
/// # Returns
/// 書き出したファイルのパス
pub fn export_selection(entries: &[SelectionEntry], output: &Path, style: CsvStyle) -> Result<PathBuf> {
    let output_path = output_path_for_count(output, entries.len());
    println!("- CSVを生成中... ({}件)", entries.len());
    csv::write_csv(entries, &output_path, style)?;
    println!("✔ CSV出力: {}", output_path.display());
    Ok(output_path)
}
