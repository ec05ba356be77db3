//! CSVのブラウザダウンロード
//!
//! Blob → オブジェクトURL → 非表示アンカーをクリック → アンカー除去。
//! オブジェクトURLはクリックの成否にかかわらず解放する。

use nasa_gallery_common::{export_filename, to_csv, SelectionEntry, CSV_MIME};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// ダウンロードするファイル名と本文
pub fn csv_payload(entries: &[SelectionEntry]) -> (String, String) {
    (export_filename(entries.len()), to_csv(entries))
}

/// 選択中のアイテムをCSVでダウンロード
pub fn download_csv(entries: &[SelectionEntry]) -> Result<(), JsValue> {
    let (filename, text) = csv_payload(entries);
    download_text(&text, &filename, CSV_MIME)
}

fn download_text(text: &str, filename: &str, mime: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_anchor(&url, filename);
    if let Err(e) = Url::revoke_object_url(&url) {
        gloo::console::warn!(format!("オブジェクトURLを解放できませんでした: {:?}", e));
    }
    clicked
}

fn click_anchor(url: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body is not available"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nasa_gallery_common::CatalogItem;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_csv_payload() {
        let entries = vec![CatalogItem {
            id: "a".into(),
            title: "Moon".into(),
            description: "Grey".into(),
            image: None,
        }];
        let (filename, text) = csv_payload(&entries);
        assert_eq!(filename, "1_items.csv");
        assert_eq!(text, "Title,Description,Image\nMoon,Grey,");
    }
}
