//! 送信済みエントリ一覧
//!
//! 直前に送信されたエントリは3秒間ハイライトする。

use leptos::prelude::*;
use gloo::timers::callback::Timeout;
use nasa_gallery_common::FormEntry;
use super::{FormHandles, FreshEntry};

const HIGHLIGHT_MS: u32 = 3_000;

#[component]
pub fn EntryList() -> impl IntoView {
    let handles = FormHandles::from_context();
    let fresh = expect_context::<FreshEntry>();

    // 一度表示したら次の訪問ではハイライトしない
    let (highlight, set_highlight) = signal(fresh.0.get_untracked());
    fresh.0.set(None);

    if highlight.get_untracked().is_some() {
        Timeout::new(HIGHLIGHT_MS, move || {
            let _ = set_highlight.try_set(None);
        })
        .forget();
    }

    view! {
        <div class="entry-list">
            <h2>"Submitted Forms"</h2>
            <Show
                when=move || !handles.store.with(|s| s.entries().is_empty())
                fallback=|| view! { <p class="text-muted">"No entries yet."</p> }
            >
                <For
                    each=move || handles.store.with(|s| s.entries().to_vec())
                    key=|entry| entry.id.clone()
                    children=move |entry: FormEntry| {
                        let id = entry.id.clone();
                        view! {
                            <div
                                class="entry-card"
                                class:highlight=move || highlight.get().as_deref() == Some(id.as_str())
                            >
                                <p><strong>"Name: "</strong>{entry.name.clone()}</p>
                                <p><strong>"Age: "</strong>{entry.age}</p>
                                <p><strong>"Email: "</strong>{entry.email.clone()}</p>
                                <p><strong>"Gender: "</strong>{entry.gender.clone()}</p>
                                <p><strong>"Country: "</strong>{entry.country.clone()}</p>
                                <p>
                                    <strong>"Image: "</strong>
                                    {(!entry.image.is_empty()).then(|| view! {
                                        <img src=entry.image.clone() alt="uploaded" width="100" />
                                    })}
                                </p>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
