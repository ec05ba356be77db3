//! 検索バー
//!
//! 入力はtrimして送信。空のときはボタンを無効にする。

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(initial: String, on_submit: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let (term, set_term) = signal(initial);
    let is_blank = move || term.get().trim().is_empty();

    let submit = move || {
        let trimmed = term.get_untracked().trim().to_string();
        set_term.set(trimmed.clone());
        on_submit(trimmed);
    };

    let on_keydown = {
        let submit = submit.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                submit();
            }
        }
    };

    view! {
        <div class="search-container">
            <input
                type="text"
                placeholder="Search for ... (e.g. \"Orion\")"
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="search-button"
                disabled=is_blank
                on:click=move |_| submit()
            >
                "Search"
            </button>
        </div>
    }
}
