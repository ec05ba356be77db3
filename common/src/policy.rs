//! 検索ポリシー
//!
//! 版によって挙動が揺れていた2点を明示的な設定にする:
//! - 空の検索語を送信できるか
//! - 0件を失敗扱いにするか

use serde::{Deserialize, Serialize};

/// 空の検索語（trim後）の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyTermPolicy {
    /// 絞り込みなしの既定結果を取得
    #[default]
    FetchDefault,
    /// 送信を拒否
    Reject,
}

/// 有効レコード0件の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroResultsPolicy {
    /// CatalogError::NoResults として失敗させる
    #[default]
    Error,
    /// 空の成功として扱う
    EmptySuccess,
}

/// 検索ポリシー一式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPolicy {
    pub empty_term: EmptyTermPolicy,
    pub zero_results: ZeroResultsPolicy,
}

impl std::str::FromStr for EmptyTermPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fetch-default" | "fetch" | "default" => Ok(EmptyTermPolicy::FetchDefault),
            "reject" => Ok(EmptyTermPolicy::Reject),
            _ => Err(format!("Unknown empty-term policy: {}. Use fetch-default or reject", s)),
        }
    }
}

impl std::str::FromStr for ZeroResultsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(ZeroResultsPolicy::Error),
            "empty-success" | "empty" => Ok(ZeroResultsPolicy::EmptySuccess),
            _ => Err(format!("Unknown zero-results policy: {}. Use error or empty-success", s)),
        }
    }
}

impl std::fmt::Display for EmptyTermPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyTermPolicy::FetchDefault => write!(f, "fetch-default"),
            EmptyTermPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::fmt::Display for ZeroResultsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeroResultsPolicy::Error => write!(f, "error"),
            ZeroResultsPolicy::EmptySuccess => write!(f, "empty-success"),
        }
    }
}
