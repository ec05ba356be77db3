//! 画像ファイルをData URLとして読む

use nasa_gallery_common::forms::{validate_image, ImageUpload};
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

/// ファイルを読み込み、読み終わったら `on_loaded` を呼ぶ
///
/// 形式・サイズが不正なら読み込まずにメタ情報だけ渡す（検証でエラーになる）
pub fn read_image<F>(file: File, on_loaded: F)
where
    F: Fn(ImageUpload) + 'static,
{
    let mime_type = file.type_();
    let size = file.size() as u64;

    if validate_image(&mime_type, size).is_err() {
        on_loaded(ImageUpload {
            mime_type,
            size,
            data_url: String::new(),
        });
        return;
    }

    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!(format!("FileReaderを作れません: {:?}", e));
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(ImageUpload {
                    mime_type: mime_type.clone(),
                    size,
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        gloo::console::error!(format!("画像を読み込めません: {:?}", e));
    }
}

/// `<input type="file">` の最初のファイル
pub fn first_file(input: &web_sys::HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}
