//! テーマ切替（コンテキストの RwSignal<Theme> を書き換える）

use leptos::prelude::*;
use nasa_gallery_common::Theme;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class="theme-switcher">
            <label for="theme-select">"Select Theme: "</label>
            <select
                id="theme-select"
                prop:value=move || theme.get().as_str()
                on:change=move |ev| {
                    if let Ok(selected) = event_target_value(&ev).parse::<Theme>() {
                        theme.set(selected);
                    }
                }
            >
                {Theme::ALL
                    .iter()
                    .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
