//! デモフォームの対話入力
//!
//! 全項目を集めてから一括検証する（非制御フォームと同じ流れ）。
//! エラーは全部まとめて表示する。

use crate::error::{GalleryError, Result};
use base64::Engine;
use dialoguer::{Confirm, Input, Password, Select};
use nasa_gallery_common::forms::validation::GENDERS;
use nasa_gallery_common::forms::{validate_form, FieldError, ImageUpload};
use nasa_gallery_common::{FormEntry, FormInput, FormStore};
use std::path::Path;

/// 拡張子からMIMEタイプを推定
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// バイト列をData URL付きの添付画像にする
pub fn image_upload_from_bytes(mime_type: &str, bytes: &[u8]) -> ImageUpload {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    ImageUpload {
        mime_type: mime_type.to_string(),
        size: bytes.len() as u64,
        data_url: format!("data:{};base64,{}", mime_type, encoded),
    }
}

/// 画像ファイルを読み込む
pub fn load_image(path: &Path) -> Result<ImageUpload> {
    let bytes = std::fs::read(path)
        .map_err(|e| GalleryError::Form(format!("{}: {}", path.display(), e)))?;
    Ok(image_upload_from_bytes(mime_for_path(path), &bytes))
}

/// エントリID（送信時刻のミリ秒）
pub fn next_entry_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// 検証して、通ればストアに追加
pub fn submit_form(
    store: &mut FormStore,
    input: &FormInput,
    id: &str,
) -> std::result::Result<FormEntry, Vec<FieldError>> {
    let entry = validate_form(input, id)?;
    store.add(entry.clone());
    Ok(entry)
}

/// 表示行（パスワードは伏せる）
pub fn format_entry(entry: &FormEntry) -> Vec<String> {
    let image = if entry.image.is_empty() {
        "なし".to_string()
    } else {
        format!("{}文字のData URL", entry.image.len())
    };
    vec![
        format!("  ID: {}", entry.id),
        format!("  Name: {}", entry.name),
        format!("  Age: {}", entry.age),
        format!("  Email: {}", entry.email),
        format!("  Password: {}", "*".repeat(entry.password.chars().count())),
        format!("  Gender: {}", entry.gender),
        format!("  Terms accepted: {}", entry.terms_accepted),
        format!("  Country: {}", entry.country),
        format!("  Image: {}", image),
    ]
}

/// 国名の入力（候補が複数あれば選ばせる）
fn prompt_country(store: &FormStore) -> Result<String> {
    let typed: String = Input::new()
        .with_prompt("Country")
        .allow_empty(true)
        .interact_text()?;

    let suggestions = store.suggest(&typed);
    if typed.trim().is_empty()
        || suggestions.is_empty()
        || suggestions.iter().any(|c| c.eq_ignore_ascii_case(typed.trim()))
    {
        return Ok(typed);
    }

    let mut items = suggestions.clone();
    items.push(format!("そのまま使う: {}", typed.trim()));
    let index = Select::new()
        .with_prompt("候補")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(suggestions.get(index).cloned().unwrap_or(typed))
}

fn prompt_input(store: &FormStore) -> Result<FormInput> {
    let name: String = Input::new().with_prompt("Name").allow_empty(true).interact_text()?;
    let age: String = Input::new().with_prompt("Age").allow_empty(true).interact_text()?;
    let email: String = Input::new().with_prompt("Email").allow_empty(true).interact_text()?;
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    let confirm_password = Password::new()
        .with_prompt("Confirm Password")
        .allow_empty_password(true)
        .interact()?;

    let mut genders: Vec<&str> = GENDERS.to_vec();
    genders.push("(未選択)");
    let gender_index = Select::new()
        .with_prompt("Gender")
        .items(&genders)
        .default(genders.len() - 1)
        .interact()?;
    let gender = GENDERS.get(gender_index).map(|g| g.to_string()).unwrap_or_default();

    let terms_accepted = Confirm::new()
        .with_prompt("Accept Terms and Conditions")
        .default(false)
        .interact()?;

    let country = prompt_country(store)?;

    let image_path: String = Input::new()
        .with_prompt("画像ファイル（JPEG/PNG、省略可）")
        .allow_empty(true)
        .interact_text()?;
    let image = if image_path.trim().is_empty() {
        None
    } else {
        Some(load_image(Path::new(image_path.trim()))?)
    };

    Ok(FormInput {
        name,
        age,
        email,
        password,
        confirm_password,
        gender,
        terms_accepted,
        country,
        image,
    })
}

/// 対話でフォームを1件入力
pub fn run_form(store: &mut FormStore) -> Result<()> {
    println!("📝 nasa-gallery - フォーム入力\n");

    let input = prompt_input(store)?;
    match submit_form(store, &input, &next_entry_id()) {
        Ok(entry) => {
            println!("\n✔ 登録しました（{}件目）", store.entries().len());
            for line in format_entry(&entry) {
                println!("{}", line);
            }
        }
        Err(errors) => {
            println!("\n入力エラー: {}件", errors.len());
            for error in &errors {
                println!("  - {}: {}", error.field.as_str(), error.message);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_input() -> FormInput {
        FormInput {
            name: "Alice".into(),
            age: "30".into(),
            email: "alice@example.com".into(),
            password: "Secret1!x".into(),
            confirm_password: "Secret1!x".into(),
            gender: "female".into(),
            terms_accepted: true,
            country: "Japan".into(),
            image: None,
        }
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/b.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("x.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_image_upload_data_url() {
        let upload = image_upload_from_bytes("image/png", b"abc");
        assert_eq!(upload.size, 3);
        assert_eq!(upload.data_url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_load_image_from_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("photo.jpeg");
        std::fs::write(&path, [0xFFu8, 0xD8, 0xFF]).unwrap();

        let upload = load_image(&path).unwrap();
        assert_eq!(upload.mime_type, "image/jpeg");
        assert_eq!(upload.size, 3);
        assert!(upload.data_url.starts_with("data:image/jpeg;base64,"));

        assert!(load_image(&dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn test_submit_form_adds_entry() {
        let mut store = FormStore::new();
        let entry = submit_form(&mut store, &valid_input(), "1700000000000").unwrap();
        assert_eq!(entry.age, 30);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.last_added(), Some("1700000000000"));
    }

    #[test]
    fn test_submit_form_reports_all_errors() {
        let mut store = FormStore::new();
        let input = FormInput {
            name: "alice".into(),
            terms_accepted: false,
            ..valid_input()
        };
        let errors = submit_form(&mut store, &input, "1").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_format_entry_masks_password() {
        let entry = validate_form(&valid_input(), "42").unwrap();
        let lines = format_entry(&entry);
        assert!(lines.iter().any(|l| l == "  Password: *********"));
        assert!(lines.iter().all(|l| !l.contains("Secret1!x")));
    }

    #[test]
    fn test_entry_id_is_numeric() {
        assert!(next_entry_id().parse::<i64>().is_ok());
    }
}
