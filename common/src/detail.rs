//! 詳細取得
//!
//! IDで1件を取り直す。取れなかった場合はエラーではなく
//! `DetailOutcome::NotAvailable` を返す。

use crate::normalize::parse_body;
use crate::types::{DetailRecord, NO_DESCRIPTION};

/// サムネイル画像の配信元
pub const IMAGE_ASSETS_BASE_URL: &str = "https://images-assets.nasa.gov";

/// 詳細の取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Available(DetailRecord),
    NotAvailable,
}

impl DetailOutcome {
    pub fn record(&self) -> Option<&DetailRecord> {
        match self {
            DetailOutcome::Available(record) => Some(record),
            DetailOutcome::NotAvailable => None,
        }
    }
}

/// リンクが無いときのサムネイルURL
pub fn thumbnail_url(id: &str) -> String {
    format!("{}/image/{}/{}~thumb.jpg", IMAGE_ASSETS_BASE_URL, id, id)
}

/// 詳細レスポンスを解決
///
/// # Arguments
/// * `requested_id` - 取得したID（レスポンスに nasa_id が無いときの代わり）
/// * `status` - HTTPステータス（リクエスト自体が失敗したら呼ばずに NotAvailable）
/// * `body` - レスポンス本文
pub fn resolve_detail(requested_id: &str, status: u16, body: &str) -> DetailOutcome {
    if !(200..300).contains(&status) {
        return DetailOutcome::NotAvailable;
    }
    let Ok(records) = parse_body(body) else {
        return DetailOutcome::NotAvailable;
    };
    let Some(record) = records.first() else {
        return DetailOutcome::NotAvailable;
    };
    let Some(data) = record.first_data() else {
        return DetailOutcome::NotAvailable;
    };

    let id = data
        .nasa_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| requested_id.to_string());
    let image = record
        .first_href()
        .map(str::to_string)
        .unwrap_or_else(|| thumbnail_url(&id));

    DetailOutcome::Available(DetailRecord {
        title: data.title.clone().unwrap_or_default(),
        description: data
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        image,
        id,
    })
}

/// 閉じるボタンの動作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseAction {
    /// 呼び出し元が渡したコールバックを呼ぶ
    Callback,
    /// フロントページへ遷移（frontpageパラメータを引き継ぐ）
    Navigate(String),
}

/// 閉じる動作を決める
pub fn close_action(has_callback: bool, frontpage: Option<&str>) -> CloseAction {
    if has_callback {
        return CloseAction::Callback;
    }
    match frontpage.map(str::trim).filter(|p| !p.is_empty()) {
        Some(page) => CloseAction::Navigate(format!("/?frontpage={}", page)),
        None => CloseAction::Navigate("/".to_string()),
    }
}
