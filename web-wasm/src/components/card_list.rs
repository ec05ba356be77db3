//! 結果カード一覧
//!
//! カード本体のクリックで詳細を開き、チェックボックスで選択を切り替える。
//! 選択はコンテキストの RwSignal<SelectionStore> に直接書く。

use leptos::prelude::*;
use nasa_gallery_common::{CatalogItem, SelectionStore};

#[component]
pub fn CardList<F>(items: Signal<Vec<CatalogItem>>, on_card_click: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <Show
            when=move || !items.with(|items| items.is_empty())
            fallback=|| view! { <div>"No results found."</div> }
        >
            <div class="card-list">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children={
                        let on_card_click = on_card_click.clone();
                        move |item| {
                            let on_card_click = on_card_click.clone();
                            view! { <Card item=item on_click=on_card_click /> }
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn Card<F>(item: CatalogItem, on_click: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let selection = expect_context::<RwSignal<SelectionStore>>();

    let is_selected = {
        let id = item.id.clone();
        move || selection.with(|s| s.is_selected(&id))
    };

    let on_toggle = {
        let item = item.clone();
        move |ev: leptos::ev::Event| {
            ev.stop_propagation();
            let checked = event_target_checked(&ev);
            selection.update(|s| {
                if checked {
                    s.select(&item);
                } else {
                    s.unselect(&item.id);
                }
            });
        }
    };

    let image = match item.image.clone() {
        Some(src) => view! { <img src=src alt=item.title.clone() class="card-image" /> }.into_any(),
        None => view! { <div class="card-placeholder">"No Image Available"</div> }.into_any(),
    };

    let id = item.id.clone();
    view! {
        <div
            class="card"
            class:selected=is_selected.clone()
            on:click=move |_| on_click(id.clone())
        >
            <label class="select-pill" on:click=|ev| ev.stop_propagation()>
                <input type="checkbox" prop:checked=is_selected.clone() on:change=on_toggle />
                "Select"
            </label>
            {image}
            <h3>{item.title.clone()}</h3>
            <h4>"Description:"</h4>
            <p>{item.description.clone()}</p>
        </div>
    }
}
