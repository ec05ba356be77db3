//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 画像検索の失敗分類
///
/// コントローラ境界で表示用文字列に変換される
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 通信失敗（レスポンスなし）
    #[error("network error: {0}")]
    Network(String),

    /// 2xx以外のHTTPステータス
    #[error("API error (Code: {code})")]
    Api { code: u16 },

    /// 期待するコレクションが無い
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// 有効なレコードが0件
    #[error("no results")]
    NoResults,

    /// 空の検索語（EmptyTermPolicy::Reject時のみ）
    #[error("empty search term")]
    EmptyTerm,
}

impl CatalogError {
    /// 画面表示用メッセージ
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Network(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            CatalogError::Api { code } => format!("Request failed (Code: {})", code),
            CatalogError::MalformedResponse(_) => {
                "Unexpected response from the image service.".to_string()
            }
            CatalogError::NoResults => "No results found.".to_string(),
            CatalogError::EmptyTerm => "Please enter a search term.".to_string(),
        }
    }

    /// 「検索は成功したが0件」かどうか
    pub fn is_no_results(&self) -> bool {
        matches!(self, CatalogError::NoResults)
    }

    /// HTTPステータスから分類（成功ステータスならNone）
    pub fn from_status(code: u16) -> Option<Self> {
        if (200..300).contains(&code) {
            None
        } else {
            Some(CatalogError::Api { code })
        }
    }
}
