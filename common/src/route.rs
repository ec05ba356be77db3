//! URLクエリに載せる状態
//!
//! - `page`: 結果ページ（1始まり）
//! - `frontpage`: 詳細から戻るときのページ
//! - `id`: 単独表示する詳細のID

use crate::pagination::parse_page_param;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub page: Option<usize>,
    pub frontpage: Option<usize>,
    pub id: Option<String>,
}

impl RouteParams {
    /// キー→値の検索関数から組み立てる（URLSearchParams等のラッパ用）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| lookup(key).map(|v| parse_page_param(Some(&v)));
        Self {
            page: number("page"),
            frontpage: number("frontpage"),
            id: lookup("id").filter(|id| !id.trim().is_empty()),
        }
    }

    /// `?page=2&frontpage=1` 形式（先頭の?は任意）を解釈
    ///
    /// 値はパーセントデコードする（`Apollo%2011` → `Apollo 11`）
    pub fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        Self::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    /// 結果一覧で表示するページ
    ///
    /// `page` を優先し、無ければ詳細から戻ってきた `frontpage`、どちらも無ければ1
    pub fn results_page(&self) -> usize {
        self.page.or(self.frontpage).unwrap_or(1)
    }

    /// クエリ文字列に戻す（空なら空文字、値はエンコード済み）
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(page) = self.page {
            query.append_pair("page", &page.to_string());
        }
        if let Some(frontpage) = self.frontpage {
            query.append_pair("frontpage", &frontpage.to_string());
        }
        if let Some(id) = &self.id {
            query.append_pair("id", id);
        }

        let query = query.finish();
        if query.is_empty() {
            String::new()
        } else {
            format!("?{}", query)
        }
    }

    /// 結果ページ用のルート
    pub fn for_page(page: usize) -> Self {
        Self {
            page: Some(page.max(1)),
            ..Default::default()
        }
    }

    /// 単独詳細ページ用のルート
    pub fn for_detail(id: &str, frontpage: usize) -> Self {
        Self {
            id: Some(id.to_string()),
            frontpage: Some(frontpage.max(1)),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let params = RouteParams::parse("?page=3&frontpage=2&id=PIA001");
        assert_eq!(params.page, Some(3));
        assert_eq!(params.frontpage, Some(2));
        assert_eq!(params.id.as_deref(), Some("PIA001"));
    }

    #[test]
    fn test_parse_invalid_page_defaults_to_one() {
        let params = RouteParams::parse("page=abc");
        assert_eq!(params.page, Some(1));
        assert_eq!(params.results_page(), 1);
    }

    #[test]
    fn test_results_page_falls_back_to_frontpage() {
        assert_eq!(RouteParams::parse("frontpage=4").results_page(), 4);
        assert_eq!(RouteParams::parse("page=2&frontpage=4").results_page(), 2);
        assert_eq!(RouteParams::parse("").results_page(), 1);
    }

    #[test]
    fn test_to_query() {
        assert_eq!(RouteParams::for_page(2).to_query(), "?page=2");
        assert_eq!(RouteParams::for_detail("x", 3).to_query(), "?frontpage=3&id=x");
        assert_eq!(RouteParams::default().to_query(), "");
    }

    #[test]
    fn test_detail_id_with_reserved_characters_round_trips() {
        for id in ["a&b", "Apollo 11", "50%#off", "x=y+z"] {
            let query = RouteParams::for_detail(id, 2).to_query();
            let parsed = RouteParams::parse(&query);
            assert_eq!(parsed.id.as_deref(), Some(id), "query: {}", query);
            assert_eq!(parsed.frontpage, Some(2));
        }
        assert_eq!(RouteParams::for_detail("a&b", 2).to_query(), "?frontpage=2&id=a%26b");
    }

    #[test]
    fn test_parse_decodes_browser_encoded_id() {
        let params = RouteParams::parse("?id=Apollo%2011&frontpage=2");
        assert_eq!(params.id.as_deref(), Some("Apollo 11"));
    }
}
