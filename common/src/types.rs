//! カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CatalogItem: 検索結果1件（正規化済み）
//! - DetailRecord: ID指定で取得した詳細
//! - NasaResponse: 画像検索APIの生レスポンス（形が揺れるので全フィールド任意）

use serde::{Deserialize, Serialize};

/// 説明が無い場合の既定文言
pub const NO_DESCRIPTION: &str = "No description available";

/// 検索結果1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// 選択ストアに入るエントリ（検索結果と同じ形）
pub type SelectionEntry = CatalogItem;

/// 詳細レコード
///
/// 画像は解決済み（リンクが無ければサムネイルURLを合成）なので必須
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl From<DetailRecord> for CatalogItem {
    fn from(detail: DetailRecord) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            description: detail.description,
            image: Some(detail.image),
        }
    }
}

// =============================================
// APIレスポンス（生データ）
// =============================================

/// 画像検索APIレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NasaResponse {
    pub collection: Option<NasaCollection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NasaCollection {
    pub items: Option<Vec<NasaRecord>>,
}

/// レコード1件: dataが空・欠落しているものは捨てる
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NasaRecord {
    #[serde(default)]
    pub data: Option<Vec<NasaRecordData>>,
    #[serde(default)]
    pub links: Option<Vec<NasaLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NasaRecordData {
    #[serde(default)]
    pub nasa_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NasaLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub rel: Option<String>,
    #[serde(default)]
    pub render: Option<String>,
}

impl NasaRecord {
    /// 先頭のdataエントリ
    pub fn first_data(&self) -> Option<&NasaRecordData> {
        self.data.as_ref().and_then(|d| d.first())
    }

    /// 先頭リンクのhref
    pub fn first_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.first())
            .and_then(|l| l.href.as_deref())
            .filter(|h| !h.is_empty())
    }
}
