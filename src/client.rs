//! 画像検索APIクライアント
//!
//! HTTP層はreqwest、レスポンスの解釈は nasa_gallery_common に任せる。
//! リトライ・キャッシュはしない（同じ語でも毎回取得）。

use crate::config::Config;
use crate::error::Result;
use nasa_gallery_common::{
    detail_query, endpoint, parse_search_response, resolve_detail, search_query, CatalogError,
    CatalogItem, DetailOutcome, ZeroResultsPolicy,
};
use std::time::Duration;

/// 検索・詳細取得の窓口
///
/// セッションはこのトレイト越しに呼ぶ（テストでは差し替える）
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn search(&self, term: &str) -> std::result::Result<Vec<CatalogItem>, CatalogError>;

    async fn fetch_detail(&self, id: &str) -> DetailOutcome;
}

pub struct NasaClient {
    http: reqwest::Client,
    base_url: String,
    zero_results: ZeroResultsPolicy,
}

impl NasaClient {
    pub fn new(base_url: &str, timeout: Duration, zero_results: ZeroResultsPolicy) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            zero_results,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.base_url(),
            Duration::from_secs(config.timeout_seconds),
            config.policy.zero_results,
        )
    }

    /// GETしてステータスと本文を返す（通信失敗は Network）
    async fn get(&self, params: &[(&'static str, String)]) -> std::result::Result<(u16, String), CatalogError> {
        let url = endpoint(&self.base_url);
        tracing::debug!(%url, ?params, "リクエスト送信");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "レスポンス受信");
        Ok((status, body))
    }
}

impl CatalogApi for NasaClient {
    async fn search(&self, term: &str) -> std::result::Result<Vec<CatalogItem>, CatalogError> {
        let (status, body) = self.get(&search_query(term)).await?;
        parse_search_response(status, &body, self.zero_results)
    }

    async fn fetch_detail(&self, id: &str) -> DetailOutcome {
        match self.get(&detail_query(id)).await {
            Ok((status, body)) => resolve_detail(id, status, &body),
            Err(e) => {
                tracing::debug!(id, error = %e, "詳細取得に失敗");
                DetailOutcome::NotAvailable
            }
        }
    }
}
