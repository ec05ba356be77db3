//! フォーム検証ルール
//!
//! - name: 必須、先頭は英大文字
//! - age: 必須、0以上の整数
//! - email: 必須、メール形式
//! - password: 必須、8文字以上、小文字・大文字・数字・記号(!@#$%^&*)を各1つ以上
//! - confirmPassword: passwordと一致
//! - gender: 必須（male/female/other）
//! - termsAccepted: 同意必須
//! - country: 必須
//! - image: 任意、JPEG/PNGのみ、2MB未満

use super::FormEntry;
use lazy_static::lazy_static;
use regex::Regex;

/// 画像の最大サイズ（2MB）
pub const MAX_IMAGE_SIZE: u64 = 2 * 1024 * 1024;

/// 許可する画像形式
pub const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// 性別の選択肢
pub const GENDERS: [&str; 3] = ["male", "female", "other"];

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[A-Z]").expect("invalid name regex");
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex");
    static ref LOWER_RE: Regex = Regex::new(r"[a-z]").expect("invalid regex");
    static ref UPPER_RE: Regex = Regex::new(r"[A-Z]").expect("invalid regex");
    static ref DIGIT_RE: Regex = Regex::new(r"\d").expect("invalid regex");
    static ref SPECIAL_RE: Regex = Regex::new(r"[!@#$%^&*]").expect("invalid regex");
}

/// フォームの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Email,
    Password,
    ConfirmPassword,
    Gender,
    TermsAccepted,
    Country,
    Image,
}

impl FormField {
    /// 表示・検証の順序
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Age,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
        FormField::Gender,
        FormField::TermsAccepted,
        FormField::Country,
        FormField::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
            FormField::Gender => "gender",
            FormField::TermsAccepted => "termsAccepted",
            FormField::Country => "country",
            FormField::Image => "image",
        }
    }
}

/// 項目ごとの検証エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// 添付画像
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub mime_type: String,
    pub size: u64,
    pub data_url: String,
}

/// 入力値（画面から受け取った生の文字列）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub age: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
    pub terms_accepted: bool,
    pub country: String,
    pub image: Option<ImageUpload>,
}

/// 画像の形式・サイズを検証
pub fn validate_image(mime_type: &str, size: u64) -> Result<(), &'static str> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return Err("Only JPEG and PNG files are allowed");
    }
    if size > MAX_IMAGE_SIZE {
        return Err("File size should be less than 2MB");
    }
    Ok(())
}

fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Password is required");
    }
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters");
    }
    let strong = LOWER_RE.is_match(password)
        && UPPER_RE.is_match(password)
        && DIGIT_RE.is_match(password)
        && SPECIAL_RE.is_match(password);
    if !strong {
        return Some(
            "Password must contain one number, one uppercase, one lowercase and one special character",
        );
    }
    None
}

/// 1項目を検証（制御フォームの入力ごと検証用）
pub fn validate_field(field: FormField, input: &FormInput) -> Option<String> {
    let message: Option<&str> = match field {
        FormField::Name => {
            if input.name.is_empty() {
                Some("Name is required")
            } else if !NAME_RE.is_match(&input.name) {
                Some("Name must start with an uppercase letter")
            } else {
                None
            }
        }
        FormField::Age => match input.age.trim() {
            "" => Some("Age is required"),
            raw => match raw.parse::<i64>() {
                Ok(age) if age < 0 => Some("Age must be non-negative"),
                Ok(age) if age > u32::MAX as i64 => Some("Age is required"),
                Ok(_) => None,
                Err(_) => Some("Age is required"),
            },
        },
        FormField::Email => {
            if input.email.is_empty() {
                Some("Email is required")
            } else if !EMAIL_RE.is_match(&input.email) {
                Some("Invalid email")
            } else {
                None
            }
        }
        FormField::Password => validate_password(&input.password),
        FormField::ConfirmPassword => {
            if input.confirm_password.is_empty() {
                Some("Confirm password is required")
            } else if input.confirm_password != input.password {
                Some("Passwords must match")
            } else {
                None
            }
        }
        FormField::Gender => {
            if GENDERS.contains(&input.gender.as_str()) {
                None
            } else {
                Some("Gender is required")
            }
        }
        FormField::TermsAccepted => {
            if input.terms_accepted {
                None
            } else {
                Some("You must accept the terms")
            }
        }
        FormField::Country => {
            if input.country.trim().is_empty() {
                Some("Country is required")
            } else {
                None
            }
        }
        FormField::Image => input
            .image
            .as_ref()
            .and_then(|img| validate_image(&img.mime_type, img.size).err()),
    };
    message.map(str::to_string)
}

/// 全項目を検証（非制御フォームの一括検証用）
///
/// # Arguments
/// * `input` - 入力値
/// * `id` - 採番済みのエントリID（呼び出し側の時刻など）
///
/// # Returns
/// * `Ok(FormEntry)` - 全項目OK
/// * `Err(Vec<FieldError>)` - 全エラー（項目順）
pub fn validate_form(input: &FormInput, id: &str) -> Result<FormEntry, Vec<FieldError>> {
    let errors: Vec<FieldError> = FormField::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, input).map(|message| FieldError { field, message })
        })
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(FormEntry {
        id: id.to_string(),
        name: input.name.clone(),
        age: input.age.trim().parse().unwrap_or_default(),
        email: input.email.clone(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
        gender: input.gender.clone(),
        terms_accepted: input.terms_accepted,
        country: input.country.trim().to_string(),
        image: input
            .image
            .as_ref()
            .map(|img| img.data_url.clone())
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput {
            name: "Neil".to_string(),
            age: "38".to_string(),
            email: "neil@example.com".to_string(),
            password: "Apollo11!".to_string(),
            confirm_password: "Apollo11!".to_string(),
            gender: "male".to_string(),
            terms_accepted: true,
            country: "United States".to_string(),
            image: None,
        }
    }

    fn messages(input: &FormInput) -> Vec<String> {
        validate_form(input, "1")
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn test_valid_form() {
        let entry = validate_form(&valid_input(), "1700000000000").expect("検証失敗");
        assert_eq!(entry.id, "1700000000000");
        assert_eq!(entry.age, 38);
        assert!(entry.image.is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = validate_form(&FormInput::default(), "1").unwrap_err();
        let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FormField::Name,
                FormField::Age,
                FormField::Email,
                FormField::Password,
                FormField::ConfirmPassword,
                FormField::Gender,
                FormField::TermsAccepted,
                FormField::Country,
            ]
        );
    }

    #[test]
    fn test_name_must_start_uppercase() {
        let input = FormInput { name: "neil".into(), ..valid_input() };
        assert_eq!(messages(&input), vec!["Name must start with an uppercase letter"]);
    }

    #[test]
    fn test_negative_age() {
        let input = FormInput { age: "-1".into(), ..valid_input() };
        assert_eq!(messages(&input), vec!["Age must be non-negative"]);
    }

    #[test]
    fn test_invalid_email() {
        let input = FormInput { email: "not-an-email".into(), ..valid_input() };
        assert_eq!(messages(&input), vec!["Invalid email"]);
    }

    #[test]
    fn test_password_rules() {
        let short = FormInput {
            password: "Ab1!".into(),
            confirm_password: "Ab1!".into(),
            ..valid_input()
        };
        assert_eq!(messages(&short), vec!["Password must be at least 8 characters"]);

        let weak = FormInput {
            password: "apollo1111".into(),
            confirm_password: "apollo1111".into(),
            ..valid_input()
        };
        assert!(messages(&weak)[0].starts_with("Password must contain"));
    }

    #[test]
    fn test_passwords_must_match() {
        let input = FormInput { confirm_password: "Apollo12!".into(), ..valid_input() };
        assert_eq!(messages(&input), vec!["Passwords must match"]);
    }

    #[test]
    fn test_terms_and_country() {
        let input = FormInput {
            terms_accepted: false,
            country: "  ".into(),
            ..valid_input()
        };
        assert_eq!(messages(&input), vec!["You must accept the terms", "Country is required"]);
    }

    // =============================================
    // 画像
    // =============================================

    #[test]
    fn test_validate_image() {
        assert_eq!(validate_image("image/png", 1024), Ok(()));
        assert_eq!(
            validate_image("image/gif", 1024),
            Err("Only JPEG and PNG files are allowed")
        );
        assert_eq!(
            validate_image("image/jpeg", MAX_IMAGE_SIZE + 1),
            Err("File size should be less than 2MB")
        );
    }

    #[test]
    fn test_image_is_carried_into_entry() {
        let input = FormInput {
            image: Some(ImageUpload {
                mime_type: "image/png".into(),
                size: 10,
                data_url: "data:image/png;base64,AAAA".into(),
            }),
            ..valid_input()
        };
        let entry = validate_form(&input, "1").unwrap();
        assert_eq!(entry.image, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_validate_single_field() {
        let input = FormInput { email: "x@y".into(), ..valid_input() };
        assert_eq!(validate_field(FormField::Email, &input).as_deref(), Some("Invalid email"));
        assert_eq!(validate_field(FormField::Name, &input), None);
    }
}
