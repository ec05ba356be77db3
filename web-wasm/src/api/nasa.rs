//! 画像検索API（window.fetch）
//!
//! URL組み立てとエンコードは web_sys::Url に任せ、
//! レスポンスの解釈は nasa_gallery_common に任せる。

use nasa_gallery_common::{
    detail_query, endpoint, parse_search_response, resolve_detail, search_query, CatalogError,
    CatalogItem, DetailOutcome, ZeroResultsPolicy, DEFAULT_API_BASE_URL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Url};

fn network(err: JsValue) -> CatalogError {
    CatalogError::Network(format!("{:?}", err))
}

/// エンドポイントにクエリを付けたURL
fn request_url(params: &[(&'static str, String)]) -> Result<String, CatalogError> {
    let url = Url::new(&endpoint(DEFAULT_API_BASE_URL)).map_err(network)?;
    let search = url.search_params();
    for (key, value) in params {
        search.append(key, value);
    }
    Ok(url.href())
}

/// GETしてステータスと本文を返す（通信失敗は Network）
async fn fetch_text(url: &str) -> Result<(u16, String), CatalogError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network)?;
    let window = web_sys::window()
        .ok_or_else(|| CatalogError::Network("window is not available".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let resp: Response = resp_value.dyn_into().map_err(network)?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?;

    Ok((status, text.as_string().unwrap_or_default()))
}

/// 検索（空の検索語は既定セット）
pub async fn search(
    term: &str,
    zero_results: ZeroResultsPolicy,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let url = request_url(&search_query(term))?;
    gloo::console::log!(format!("検索リクエスト: {}", url));

    let (status, body) = fetch_text(&url).await?;
    parse_search_response(status, &body, zero_results)
}

/// IDで詳細を取得（失敗はすべて NotAvailable）
pub async fn fetch_detail(id: &str) -> DetailOutcome {
    let url = match request_url(&detail_query(id)) {
        Ok(url) => url,
        Err(_) => return DetailOutcome::NotAvailable,
    };
    match fetch_text(&url).await {
        Ok((status, body)) => resolve_detail(id, status, &body),
        Err(e) => {
            gloo::console::warn!(format!("詳細取得に失敗: {}", e));
            DetailOutcome::NotAvailable
        }
    }
}
