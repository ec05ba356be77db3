//! 選択ストア
//!
//! IDをキーにした選択済みアイテムの集合。グローバルにはせず、
//! 所有者（CLIセッション / Webのコンテキスト）から注入して使う。

use crate::types::{CatalogItem, SelectionEntry};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    items: BTreeMap<String, SelectionEntry>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択（同じIDは上書き）
    pub fn select(&mut self, item: &CatalogItem) {
        self.items.insert(item.id.clone(), item.clone());
    }

    /// 選択解除（無ければ何もしない）
    pub fn unselect(&mut self, id: &str) {
        self.items.remove(id);
    }

    /// 全解除
    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// 選択状態を切り替え、切り替え後に選択されていれば true
    pub fn toggle(&mut self, item: &CatalogItem) -> bool {
        if self.is_selected(&item.id) {
            self.unselect(&item.id);
            false
        } else {
            self.select(item);
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// 選択一覧（順序はマップのキー順で、選択順ではない）
    pub fn list_selected(&self) -> Vec<SelectionEntry> {
        self.items.values().cloned().collect()
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// フライアウトの件数表示（"1 item selected" / "3 items selected"）
pub fn selection_summary(count: usize) -> String {
    format!("{} item{} selected", count, if count > 1 { "s" } else { "" })
}
