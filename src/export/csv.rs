//! CSV出力（CLI版）

use super::CsvStyle;
use crate::error::{GalleryError, Result};
use nasa_gallery_common::export::to_csv;
use nasa_gallery_common::SelectionEntry;
use std::path::Path;

/// CSVテキストを生成
pub fn render_csv(entries: &[SelectionEntry], style: CsvStyle) -> Result<String> {
    match style {
        CsvStyle::Raw => Ok(to_csv(entries)),
        CsvStyle::Quoted => Ok(nasa_gallery_common::export::to_csv_quoted(entries)?),
    }
}

pub fn write_csv(entries: &[SelectionEntry], output_path: &Path, style: CsvStyle) -> Result<()> {
    let text = render_csv(entries, style)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, text).map_err(|e| {
        GalleryError::Export(format!("{}: {}", output_path.display(), e))
    })?;

    tracing::debug!(path = %output_path.display(), count = entries.len(), "CSVを書き出しました");
    Ok(())
}
