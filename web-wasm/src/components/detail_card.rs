//! 詳細カード
//!
//! マウント時にIDで取得する。閉じるボタンは、コールバックがあれば呼び、
//! 無ければフロントページへ戻る（frontpageパラメータを引き継ぐ）。

use leptos::prelude::*;
use nasa_gallery_common::{close_action, CloseAction, DetailOutcome, RouteParams};
use wasm_bindgen_futures::spawn_local;
use crate::api::nasa;
use crate::components::spinner::Spinner;
use crate::route::Router;

#[component]
pub fn DetailCard(
    id: String,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let router = expect_context::<Router>();
    let (outcome, set_outcome) = signal(None::<DetailOutcome>);

    {
        let id = id.clone();
        spawn_local(async move {
            let fetched = nasa::fetch_detail(&id).await;
            // 閉じた後に届いた結果は捨てる
            let _ = set_outcome.try_set(Some(fetched));
        });
    }

    let handle_close = move |_: leptos::ev::MouseEvent| {
        let frontpage = router.params_untracked().frontpage.map(|p| p.to_string());
        match close_action(on_close.is_some(), frontpage.as_deref()) {
            CloseAction::Callback => {
                if let Some(callback) = on_close {
                    callback.run(());
                }
            }
            CloseAction::Navigate(url) => router.navigate(&url),
        }
    };

    let standalone_link = RouteParams::for_detail(
        &id,
        router.params_untracked().results_page(),
    )
    .to_query();

    view! {
        {move || match outcome.get() {
            None => view! { <Spinner /> }.into_any(),
            Some(DetailOutcome::NotAvailable) => view! {
                <div class="detail-card">
                    <button class="close-button" on:click=handle_close>"Close"</button>
                    <p>"No details available."</p>
                </div>
            }
            .into_any(),
            Some(DetailOutcome::Available(detail)) => {
                let link = format!("/{}", standalone_link);
                view! {
                    <div class="detail-card">
                        <button class="close-button" on:click=handle_close>"Close"</button>
                        <img src=detail.image.clone() alt=detail.title.clone() class="card-image" />
                        <h3>{detail.title.clone()}</h3>
                        <h4>"Description:"</h4>
                        <p>{detail.description.clone()}</p>
                        <Show when=move || on_close.is_some()>
                            <a
                                href=link.clone()
                                on:click={
                                    let link = link.clone();
                                    move |ev| {
                                        ev.prevent_default();
                                        router.navigate(&link);
                                    }
                                }
                            >
                                "Open as page"
                            </a>
                        </Show>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
