//! 永続化された文字列ストア
//!
//! 前回の検索語だけを保存する。実体はCLIではJSONファイル、
//! Webでは localStorage。

use std::collections::HashMap;

/// 検索語の保存キー
pub const SEARCH_TERM_KEY: &str = "searchTerm";

/// キー/値で文字列を読み書きするストア
pub trait KeyValueStore {
    /// 値を取得（無ければ None）
    fn get_string(&self, key: &str) -> Option<String>;

    /// 値を保存（失敗は実装側で記録し、呼び出し側には伝えない）
    fn set_string(&mut self, key: &str, value: &str);
}

/// 保存済みの検索語（無ければ空文字）
pub fn stored_term<S: KeyValueStore + ?Sized>(store: &S) -> String {
    store.get_string(SEARCH_TERM_KEY).unwrap_or_default()
}

/// メモリ上のストア（テスト・一時セッション用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 検索語を入れた状態で作る
    pub fn with_term(term: &str) -> Self {
        let mut store = Self::new();
        store.set_string(SEARCH_TERM_KEY, term);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
