//! 検索コントローラ
//!
//! 状態遷移: Idle → Loading → (Success | Error)
//!
//! 送信ごとに単調増加のシーケンス番号を振ったチケットを返し、
//! 最新チケット以外の解決は捨てる（後から届いた古いレスポンスで
//! 新しい結果を上書きしない）。

use crate::error::CatalogError;
use crate::policy::{EmptyTermPolicy, SearchPolicy};
use crate::storage::{stored_term, KeyValueStore, SEARCH_TERM_KEY};
use crate::types::CatalogItem;

/// 検索の状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// 画面に見せる検索状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub term: String,
    pub results: Vec<CatalogItem>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// エラーの分類（0件と失敗を区別するため）
    pub failure: Option<CatalogError>,
    pub phase: SearchPhase,
}

/// 実行中リクエストのタグ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub term: String,
}

/// 検索状態の唯一の所有者
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    state: SearchState,
    policy: SearchPolicy,
    latest_seq: u64,
}

impl SearchController {
    pub fn new(policy: SearchPolicy) -> Self {
        Self {
            state: SearchState::default(),
            policy,
            latest_seq: 0,
        }
    }

    /// マウント時: 保存済みの検索語を読み、最初の検索を開始する
    ///
    /// 初回検索は空語ポリシーで拒否しない（保存語が無ければ既定セット）
    pub fn mount<S: KeyValueStore + ?Sized>(store: &S, policy: SearchPolicy) -> (Self, SearchTicket) {
        let mut controller = Self::new(policy);
        let term = stored_term(store).trim().to_string();
        let ticket = controller.begin(term);
        (controller, ticket)
    }

    /// 新しい検索を送信
    ///
    /// trim後の語を保存し、Loadingに遷移してチケットを返す。
    /// 呼び出し側はページを1に戻すこと。
    pub fn submit<S: KeyValueStore + ?Sized>(
        &mut self,
        raw_term: &str,
        store: &mut S,
    ) -> Result<SearchTicket, CatalogError> {
        let term = raw_term.trim();
        if term.is_empty() && self.policy.empty_term == EmptyTermPolicy::Reject {
            return Err(CatalogError::EmptyTerm);
        }

        store.set_string(SEARCH_TERM_KEY, term);
        Ok(self.begin(term.to_string()))
    }

    fn begin(&mut self, term: String) -> SearchTicket {
        self.latest_seq += 1;
        self.state.term = term.clone();
        self.state.is_loading = true;
        self.state.error = None;
        self.state.failure = None;
        self.state.phase = SearchPhase::Loading;

        SearchTicket {
            seq: self.latest_seq,
            term,
        }
    }

    /// チケットが最新かどうか
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// リクエスト結果を反映
    ///
    /// # Returns
    /// 反映したら true、古いチケットで破棄したら false
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<CatalogItem>, CatalogError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.state.is_loading = false;
        match outcome {
            Ok(results) => {
                self.state.results = results;
                self.state.error = None;
                self.state.failure = None;
                self.state.phase = SearchPhase::Success;
            }
            Err(err) => {
                // 前回の成功結果は残さない
                self.state.results.clear();
                self.state.error = Some(err.user_message());
                self.state.failure = Some(err);
                self.state.phase = SearchPhase::Error;
            }
        }
        true
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    pub fn results(&self) -> &[CatalogItem] {
        &self.state.results
    }

    /// IDで現在の結果から探す
    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.state.results.iter().find(|item| item.id == id)
    }
}
