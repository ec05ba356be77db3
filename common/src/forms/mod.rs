//! デモフォーム
//!
//! 制御フォーム（入力ごとに検証）と非制御フォーム（送信時に一括検証）で
//! 同じ検証ルールとストアを共有する。

pub mod store;
pub mod validation;

pub use store::{filter_countries, FormStore, COUNTRY_SEPARATOR};
pub use validation::{
    validate_field, validate_form, validate_image, FieldError, FormField, FormInput,
    ImageUpload, ALLOWED_IMAGE_TYPES, GENDERS, MAX_IMAGE_SIZE,
};

use serde::{Deserialize, Serialize};

/// 送信済みのフォーム1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
    pub terms_accepted: bool,
    pub country: String,
    /// base64のData URL（未添付なら空）
    pub image: String,
}
