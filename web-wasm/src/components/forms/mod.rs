//! デモフォーム（制御・非制御の2種類と一覧）

pub mod controlled_form;
pub mod country_autocomplete;
pub mod entry_list;
pub mod image_input;
pub mod uncontrolled_form;

use leptos::prelude::*;
use nasa_gallery_common::{FormEntry, FormStore};
use crate::route::Router;

/// 直近に送信されたエントリID（一覧ページで3秒ハイライト）
#[derive(Debug, Clone, Copy)]
pub struct FreshEntry(pub RwSignal<Option<String>>);

/// フォームから使うコンテキスト一式（コンポーネント生成時に取得する）
#[derive(Debug, Clone, Copy)]
pub struct FormHandles {
    pub store: RwSignal<FormStore>,
    fresh: FreshEntry,
    router: Router,
}

impl FormHandles {
    pub fn from_context() -> Self {
        Self {
            store: expect_context::<RwSignal<FormStore>>(),
            fresh: expect_context::<FreshEntry>(),
            router: expect_context::<Router>(),
        }
    }

    /// 検証済みエントリをストアに追加し、一覧ページへ遷移
    pub fn commit(&self, entry: FormEntry) {
        let id = self.store.try_update(|s| s.add(entry));
        self.fresh.0.set(id);
        self.router.navigate("/forms");
    }
}

/// エントリIDを採番（送信時刻のミリ秒）
pub fn next_entry_id() -> String {
    format!("{}", js_sys::Date::now() as u64)
}
