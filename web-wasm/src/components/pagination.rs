//! ページボタン

use leptos::prelude::*;
use nasa_gallery_common::Pagination;

#[component]
pub fn PaginationBar<F>(pagination: Signal<Pagination>, on_page_change: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="pagination">
            <For
                each=move || pagination.get().buttons()
                key=|button| (button.page, button.disabled)
                children=move |button| {
                    let on_page_change = on_page_change.clone();
                    view! {
                        <button
                            class:active=button.disabled
                            disabled=button.disabled
                            on:click=move |_| {
                                // 現在ページのボタンは何もしない
                                if let Some(page) = button.click() {
                                    on_page_change(page);
                                }
                            }
                        >
                            {button.page}
                        </button>
                    }
                }
            />
        </div>
    }
}
