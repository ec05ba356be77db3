//! 検索セッション
//!
//! SearchController / Pagination / SelectionStore をそれぞれ1つずつ所有し、
//! APIクライアントと検索語ストアをつなぐ。
//!
//! シングルスレッド前提（RefCell）。借用は `.await` をまたがない:
//! チケット発行 → ロック解放 → 取得待ち → 再借用して反映。
//! 古いチケットの結果はコントローラ側で捨てられる。

use crate::client::CatalogApi;
use crate::error::{GalleryError, Result};
use nasa_gallery_common::{
    CatalogItem, DetailOutcome, KeyValueStore, Pagination, SearchController, SearchPolicy,
    SearchState, SearchTicket, SelectionEntry, SelectionStore,
};
use std::cell::RefCell;

pub struct SearchSession<A, S> {
    api: A,
    store: RefCell<S>,
    controller: RefCell<SearchController>,
    pagination: RefCell<Pagination>,
    selection: RefCell<SelectionStore>,
}

impl<A: CatalogApi, S: KeyValueStore> SearchSession<A, S> {
    /// 検索せずに作る（最初の検索は `submit` で）
    pub fn new(api: A, store: S, policy: SearchPolicy) -> Self {
        Self::with_controller(api, store, SearchController::new(policy))
    }

    /// 保存済みの検索語で初回検索まで行う
    pub async fn mount(api: A, store: S, policy: SearchPolicy) -> Self {
        let (controller, ticket) = SearchController::mount(&store, policy);
        let session = Self::with_controller(api, store, controller);
        session.run(ticket).await;
        session
    }

    fn with_controller(api: A, store: S, controller: SearchController) -> Self {
        Self {
            api,
            store: RefCell::new(store),
            controller: RefCell::new(controller),
            pagination: RefCell::new(Pagination::default()),
            selection: RefCell::new(SelectionStore::new()),
        }
    }

    /// 新しい検索を送信
    ///
    /// # Returns
    /// 結果を反映したら true、より新しい検索に追い越されたら false
    pub async fn submit(&self, raw_term: &str) -> Result<bool> {
        let ticket = {
            let mut store = self.store.borrow_mut();
            self.controller.borrow_mut().submit(raw_term, &mut *store)?
        };
        self.pagination.borrow_mut().reset();
        Ok(self.run(ticket).await)
    }

    async fn run(&self, ticket: SearchTicket) -> bool {
        tracing::info!(seq = ticket.seq, term = %ticket.term, "検索開始");
        let outcome = self.api.search(&ticket.term).await;

        let applied = self.controller.borrow_mut().resolve(&ticket, outcome);
        if applied {
            let total = self.controller.borrow().results().len();
            self.pagination.borrow_mut().set_total_items(total);
            tracing::info!(seq = ticket.seq, total, "検索結果を反映");
        } else {
            tracing::debug!(seq = ticket.seq, term = %ticket.term, "古いレスポンスを破棄");
        }
        applied
    }

    pub fn state(&self) -> SearchState {
        self.controller.borrow().state().clone()
    }

    pub fn pagination(&self) -> Pagination {
        *self.pagination.borrow()
    }

    /// 現在ページのアイテム
    pub fn page_items(&self) -> Vec<CatalogItem> {
        let controller = self.controller.borrow();
        self.pagination.borrow().slice(controller.results()).to_vec()
    }

    pub fn go_to_page(&self, page: usize) {
        self.pagination.borrow_mut().on_page_change(page);
    }

    /// 現在の結果からIDで選択
    pub fn select(&self, id: &str) -> Result<()> {
        let controller = self.controller.borrow();
        let item = controller
            .find(id)
            .ok_or_else(|| GalleryError::UnknownItem(id.to_string()))?;
        self.selection.borrow_mut().select(item);
        Ok(())
    }

    pub fn unselect(&self, id: &str) {
        self.selection.borrow_mut().unselect(id);
    }

    pub fn clear_selection(&self) {
        self.selection.borrow_mut().clear_all();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.borrow().is_selected(id)
    }

    pub fn selected(&self) -> Vec<SelectionEntry> {
        self.selection.borrow().list_selected()
    }

    pub async fn detail(&self, id: &str) -> DetailOutcome {
        self.api.fetch_detail(id).await
    }

    /// 保存ストアの参照（テスト・表示用）
    pub fn with_store<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.store.borrow())
    }
}
