//! APIレスポンスの正規化
//!
//! 画像検索APIは形が揺れるため、明示的なパース処理で
//! `Ok(Vec<CatalogItem>)` か `Err(CatalogError)` に落とす。

use crate::error::CatalogError;
use crate::policy::ZeroResultsPolicy;
use crate::types::{CatalogItem, NasaRecord, NasaResponse, NO_DESCRIPTION};

/// 既定のAPIベースURL
pub const DEFAULT_API_BASE_URL: &str = "https://images-api.nasa.gov";

/// 検索エンドポイントのパス
pub const SEARCH_PATH: &str = "/search";

/// 固定のメディア種別フィルタ
pub const MEDIA_TYPE: &str = "image";

/// 検索リクエストのクエリパラメータを組み立てる
///
/// 検索語はtrimし、空なら `q` を付けない（既定の結果セット）。
/// エンコードは呼び出し側のHTTP層に任せる。
pub fn search_query(term: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![("media_type", MEDIA_TYPE.to_string())];
    let term = term.trim();
    if !term.is_empty() {
        params.push(("q", term.to_string()));
    }
    params
}

/// 詳細リクエストのクエリパラメータ
pub fn detail_query(id: &str) -> Vec<(&'static str, String)> {
    vec![("nasa_id", id.to_string())]
}

/// ベースURLとパスを連結（末尾スラッシュを吸収）
pub fn endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH)
}

/// レスポンス本文をパース
///
/// JSONでない、または `collection.items` が無い場合は MalformedResponse
pub fn parse_body(body: &str) -> Result<Vec<NasaRecord>, CatalogError> {
    let response: NasaResponse = serde_json::from_str(body)
        .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;
    response
        .collection
        .and_then(|c| c.items)
        .ok_or_else(|| CatalogError::MalformedResponse("collection.items missing".into()))
}

/// レコード1件を正規化（dataが無い・IDが空なら None）
pub fn normalize_record(record: &NasaRecord) -> Option<CatalogItem> {
    let data = record.first_data()?;
    let id = data.nasa_id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;

    Some(CatalogItem {
        id: id.to_string(),
        title: data.title.clone().unwrap_or_default(),
        description: data
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        image: record.first_href().map(str::to_string),
    })
}

/// レコード一覧を正規化
pub fn normalize_records(
    records: &[NasaRecord],
    zero_results: ZeroResultsPolicy,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let items: Vec<CatalogItem> = records.iter().filter_map(normalize_record).collect();

    if items.is_empty() && zero_results == ZeroResultsPolicy::Error {
        return Err(CatalogError::NoResults);
    }
    Ok(items)
}

/// 検索レスポンスのHTTPステータスと本文から結果を得る
///
/// # Arguments
/// * `status` - HTTPステータス
/// * `body` - レスポンス本文
/// * `zero_results` - 0件時のポリシー
pub fn parse_search_response(
    status: u16,
    body: &str,
    zero_results: ZeroResultsPolicy,
) -> Result<Vec<CatalogItem>, CatalogError> {
    if let Some(err) = CatalogError::from_status(status) {
        return Err(err);
    }
    let records = parse_body(body)?;
    normalize_records(&records, zero_results)
}
