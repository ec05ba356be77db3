//! 国名オートコンプリート
//!
//! 空入力なら全件、それ以外は部分一致。候補はストアの国名リストから。

use leptos::prelude::*;
use nasa_gallery_common::FormStore;

#[component]
pub fn CountryAutocomplete<F>(
    id: &'static str,
    value: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let store = expect_context::<RwSignal<FormStore>>();
    let (open, set_open) = signal(false);

    let suggestions = move || store.with(|s| s.suggest(&value.get()));

    let on_input = {
        let on_change = on_change.clone();
        move |ev: leptos::ev::Event| {
            on_change(event_target_value(&ev));
            set_open.set(true);
        }
    };

    view! {
        <div class="autocomplete-container">
            <input
                id=id
                type="text"
                class="autocomplete-input"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=on_input
                on:focus=move |_| set_open.set(true)
                on:blur=move |_| set_open.set(false)
            />
            <Show when=move || open.get() && !suggestions().is_empty()>
                <ul class="suggestions">
                    <For
                        each=suggestions
                        key=|country| country.clone()
                        children={
                            let on_change = on_change.clone();
                            move |country: String| {
                                let on_change = on_change.clone();
                                let label = country.clone();
                                view! {
                                    // blurより先に確定させる
                                    <li on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        on_change(country.clone());
                                        set_open.set(false);
                                    }>
                                        {label}
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
