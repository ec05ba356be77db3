//! 選択フライアウト（件数・全解除・CSVダウンロード）
//!
//! 選択が空のときは何も描画しない。

use leptos::prelude::*;
use nasa_gallery_common::selection::selection_summary;
use nasa_gallery_common::SelectionStore;
use crate::export::download::download_csv;

#[component]
pub fn Flyout() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionStore>>();

    let on_download = move |_: leptos::ev::MouseEvent| {
        let entries = selection.with_untracked(|s| s.list_selected());
        if let Err(e) = download_csv(&entries) {
            gloo::console::error!(format!("CSVをダウンロードできませんでした: {:?}", e));
        }
    };

    view! {
        <Show when=move || !selection.with(|s| s.is_empty())>
            <div class="flyout">
                <p>{move || selection_summary(selection.with(|s| s.len()))}</p>
                <button on:click=move |_| selection.update(|s| s.clear_all())>"Unselect all"</button>
                <button on:click=on_download>"Download"</button>
            </div>
        </Show>
    }
}
