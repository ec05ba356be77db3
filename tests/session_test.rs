//! 検索セッションの統合テスト
//!
//! 遅延を設定できる偽APIで、古いレスポンスの破棄・検索語の保存・
//! ページと選択の振る舞いを検証

use nasa_gallery::client::CatalogApi;
use nasa_gallery::error::GalleryError;
use nasa_gallery::session::SearchSession;
use nasa_gallery_common::storage::stored_term;
use nasa_gallery_common::{
    CatalogError, CatalogItem, DetailOutcome, EmptyTermPolicy, MemoryStore, SearchPhase,
    SearchPolicy,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

fn items(prefix: &str, count: usize) -> Vec<CatalogItem> {
    (1..=count)
        .map(|i| CatalogItem {
            id: format!("{}-{:02}", prefix, i),
            title: format!("{} {}", prefix, i),
            description: "desc".into(),
            image: None,
        })
        .collect()
}

/// 検索語ごとに遅延と結果を返す偽API
#[derive(Default)]
struct FakeApi {
    responses: HashMap<String, (u64, Result<Vec<CatalogItem>, CatalogError>)>,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    fn respond(mut self, term: &str, delay_ms: u64, result: Result<Vec<CatalogItem>, CatalogError>) -> Self {
        self.responses.insert(term.to_string(), (delay_ms, result));
        self
    }
}

impl CatalogApi for FakeApi {
    async fn search(&self, term: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        self.calls.borrow_mut().push(term.to_string());
        let (delay, result) = self
            .responses
            .get(term)
            .cloned()
            .unwrap_or((0, Err(CatalogError::NoResults)));
        tokio::time::sleep(Duration::from_millis(delay)).await;
        result
    }

    async fn fetch_detail(&self, _id: &str) -> DetailOutcome {
        DetailOutcome::NotAvailable
    }
}

// ==============================
// 古いレスポンスの破棄
// ==============================

#[tokio::test]
async fn test_late_response_from_older_search_is_discarded() {
    let api = FakeApi::default()
        .respond("A", 80, Ok(items("a", 3)))
        .respond("B", 5, Ok(items("b", 2)));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    let (first, second) = tokio::join!(session.submit("A"), session.submit("B"));
    assert!(!first.unwrap(), "Aは追い越されたので反映されない");
    assert!(second.unwrap());

    let state = session.state();
    assert_eq!(state.term, "B");
    assert_eq!(state.phase, SearchPhase::Success);
    assert_eq!(state.results, items("b", 2));
}

#[tokio::test]
async fn test_early_response_from_older_search_is_discarded() {
    let api = FakeApi::default()
        .respond("A", 5, Ok(items("a", 3)))
        .respond("B", 40, Ok(items("b", 2)));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    let (first, second) = tokio::join!(session.submit("A"), session.submit("B"));
    assert!(!first.unwrap());
    assert!(second.unwrap());
    assert_eq!(session.state().results, items("b", 2));
    assert_eq!(session.pagination().total_items, 2);
}

#[tokio::test]
async fn test_stale_error_does_not_override_results() {
    let api = FakeApi::default()
        .respond("A", 60, Err(CatalogError::Api { code: 500 }))
        .respond("B", 5, Ok(items("b", 1)));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    let _ = tokio::join!(session.submit("A"), session.submit("B"));
    let state = session.state();
    assert_eq!(state.error, None);
    assert_eq!(state.results.len(), 1);
}

// ==============================
// 検索語の保存
// ==============================

#[tokio::test]
async fn test_submit_persists_trimmed_term() {
    let api = FakeApi::default().respond("Orion", 0, Ok(items("o", 1)));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    assert!(session.submit("  Orion  ").await.unwrap());
    assert_eq!(session.with_store(|s| stored_term(s)), "Orion");
    assert_eq!(session.state().term, "Orion");
}

#[tokio::test]
async fn test_mount_searches_stored_term() {
    let api = FakeApi::default().respond("Mars", 0, Ok(items("m", 4)));
    let session =
        SearchSession::mount(api, MemoryStore::with_term("Mars"), SearchPolicy::default()).await;

    let state = session.state();
    assert_eq!(state.term, "Mars");
    assert_eq!(state.results.len(), 4);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_mount_without_stored_term_fetches_default_set() {
    let api = FakeApi::default().respond("", 0, Ok(items("d", 12)));
    let policy = SearchPolicy {
        empty_term: EmptyTermPolicy::Reject,
        ..Default::default()
    };
    let session = SearchSession::mount(api, MemoryStore::new(), policy).await;

    // 初回は拒否ポリシーでも既定セットを取得する
    assert_eq!(session.state().results.len(), 12);
}

#[tokio::test]
async fn test_reject_policy_refuses_blank_submit() {
    let api = FakeApi::default();
    let policy = SearchPolicy {
        empty_term: EmptyTermPolicy::Reject,
        ..Default::default()
    };
    let session = SearchSession::new(api, MemoryStore::with_term("Keep"), policy);

    let err = session.submit("   ").await.unwrap_err();
    assert!(matches!(err, GalleryError::Catalog(CatalogError::EmptyTerm)));
    assert_eq!(session.with_store(|s| stored_term(s)), "Keep");
}

// ==============================
// エラー表示
// ==============================

#[tokio::test]
async fn test_failure_clears_results() {
    let api = FakeApi::default()
        .respond("ok", 0, Ok(items("k", 3)))
        .respond("bad", 0, Err(CatalogError::Api { code: 503 }));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    session.submit("ok").await.unwrap();
    session.submit("bad").await.unwrap();

    let state = session.state();
    assert_eq!(state.phase, SearchPhase::Error);
    assert!(state.results.is_empty());
    assert_eq!(state.error.as_deref(), Some("Request failed (Code: 503)"));
}

// ==============================
// ページと選択
// ==============================

#[tokio::test]
async fn test_new_search_resets_page() {
    let api = FakeApi::default()
        .respond("first", 0, Ok(items("f", 25)))
        .respond("second", 0, Ok(items("s", 25)));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    session.submit("first").await.unwrap();
    session.go_to_page(3);
    assert_eq!(session.page_items().len(), 5);

    session.submit("second").await.unwrap();
    assert_eq!(session.pagination().current_page, 1);
    assert_eq!(session.page_items().first().map(|i| i.id.as_str()), Some("s-01"));
}

#[tokio::test]
async fn test_out_of_range_page_is_empty_without_clamp() {
    let api = FakeApi::default().respond("few", 0, Ok(items("f", 4)));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    session.submit("few").await.unwrap();
    session.go_to_page(5);
    assert_eq!(session.pagination().current_page, 5);
    assert!(session.page_items().is_empty());
}

#[tokio::test]
async fn test_selection_survives_new_search() {
    let api = FakeApi::default()
        .respond("first", 0, Ok(items("f", 3)))
        .respond("second", 0, Ok(items("s", 3)));
    let session = SearchSession::new(api, MemoryStore::new(), SearchPolicy::default());

    session.submit("first").await.unwrap();
    session.select("f-02").unwrap();
    session.submit("second").await.unwrap();

    assert!(session.is_selected("f-02"));
    assert_eq!(session.selected().len(), 1);

    let err = session.select("f-01").unwrap_err();
    assert!(matches!(err, GalleryError::UnknownItem(_)));

    session.select("s-01").unwrap();
    session.unselect("f-02");
    assert_eq!(session.selected().len(), 1);

    session.clear_selection();
    assert!(session.selected().is_empty());
}
