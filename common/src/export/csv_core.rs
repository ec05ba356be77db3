//! CSV生成（共通ライブラリ）
//!
//! 選択中のアイテムを `Title,Description,Image` 形式で出力する。
//!
//! 既定の `to_csv` はフィールドをそのままカンマで連結する
//! （カンマや引用符はエスケープしない。既知の制限）。
//! クォートが必要な場合は `to_csv_quoted` を使う。

use crate::types::SelectionEntry;

/// ヘッダ行の列
pub const CSV_HEADER: [&str; 3] = ["Title", "Description", "Image"];

/// ダウンロード時のMIMEタイプ
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// 出力ファイル名（"{件数}_items.csv"）
pub fn export_filename(count: usize) -> String {
    format!("{}_items.csv", count)
}

fn row_fields(entry: &SelectionEntry) -> [&str; 3] {
    [
        entry.title.as_str(),
        entry.description.as_str(),
        entry.image.as_deref().unwrap_or(""),
    ]
}

/// CSVテキストを生成（エスケープなし）
///
/// 空の選択ならヘッダ行のみ、N件ならN+1行
pub fn to_csv(entries: &[SelectionEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for entry in entries {
        lines.push(row_fields(entry).join(","));
    }
    lines.join("\n")
}

/// CSVテキストを生成（RFC 4180のクォートあり）
#[cfg(feature = "quoted-csv")]
pub fn to_csv_quoted(entries: &[SelectionEntry]) -> crate::error::Result<String> {
    use crate::error::Error;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| Error::Csv(e.to_string()))?;
    for entry in entries {
        writer
            .write_record(row_fields(entry))
            .map_err(|e| Error::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))?;
    Ok(text.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogItem;

    fn entry(title: &str, description: &str, image: Option<&str>) -> SelectionEntry {
        CatalogItem {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: description.to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_selection_is_header_only() {
        assert_eq!(to_csv(&[]), "Title,Description,Image");
    }

    #[test]
    fn test_n_entries_yield_n_plus_one_rows() {
        let entries = vec![
            entry("Orion", "Nebula", Some("https://example.com/o.jpg")),
            entry("Moon", "Crater", None),
            entry("Mars", "Red", Some("https://example.com/m.jpg")),
        ];
        let csv = to_csv(&entries);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Orion,Nebula,https://example.com/o.jpg");
        assert_eq!(lines[2], "Moon,Crater,");
    }

    #[test]
    fn test_raw_fields_are_not_escaped() {
        // 既知の制限: 埋め込みカンマはそのまま
        let csv = to_csv(&[entry("A, B", "say \"hi\"", None)]);
        assert_eq!(csv.lines().nth(1), Some("A, B,say \"hi\","));
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(0), "0_items.csv");
        assert_eq!(export_filename(12), "12_items.csv");
    }

    #[cfg(feature = "quoted-csv")]
    #[test]
    fn test_quoted_csv_escapes_commas() {
        let csv = to_csv_quoted(&[entry("A, B", "plain", None)]).expect("CSV生成失敗");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Title,Description,Image");
        assert_eq!(lines[1], "\"A, B\",plain,");
    }

    #[cfg(feature = "quoted-csv")]
    #[test]
    fn test_quoted_csv_empty_is_header_only() {
        assert_eq!(to_csv_quoted(&[]).unwrap(), "Title,Description,Image");
    }
}
