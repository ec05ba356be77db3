//! 検索ページ
//!
//! SearchController を RwSignal に持ち、検索ごとのチケットで
//! 古いレスポンスを捨てる。ページ番号はURLの `page`（無ければ `frontpage`）。

use leptos::prelude::*;
use nasa_gallery_common::{
    CatalogError, CatalogItem, Pagination, RouteParams, SearchController, SearchPhase, SearchPolicy,
    SearchState, SearchTicket,
};
use nasa_gallery_common::storage::stored_term;
use wasm_bindgen_futures::spawn_local;
use crate::api::nasa;
use crate::components::card_list::CardList;
use crate::components::detail_card::DetailCard;
use crate::components::fallback_boundary::FaultTrigger;
use crate::components::pagination::PaginationBar;
use crate::components::search_bar::SearchBar;
use crate::components::spinner::Spinner;
use crate::route::Router;
use crate::storage::LocalStore;

/// 結果エリアに出すもの
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Idle,
    Loading,
    /// 0件（エラーとは別表示）
    Empty,
    Failed(String),
    Items,
}

impl ResultsView {
    pub fn from_state(state: &SearchState) -> Self {
        match state.phase {
            SearchPhase::Idle => ResultsView::Idle,
            SearchPhase::Loading => ResultsView::Loading,
            SearchPhase::Success if state.results.is_empty() => ResultsView::Empty,
            SearchPhase::Success => ResultsView::Items,
            SearchPhase::Error => match &state.failure {
                Some(failure) if failure.is_no_results() => ResultsView::Empty,
                _ => ResultsView::Failed(state.error.clone().unwrap_or_default()),
            },
        }
    }
}

/// 送信を拒否したときに出すメッセージ（受け付けたら None）
pub fn submit_notice(outcome: &Result<SearchTicket, CatalogError>) -> Option<String> {
    outcome.as_ref().err().map(CatalogError::user_message)
}

/// チケットの検索を実行して結果を反映
fn run_search(controller: RwSignal<SearchController>, ticket: SearchTicket, policy: SearchPolicy) {
    spawn_local(async move {
        let outcome = nasa::search(&ticket.term, policy.zero_results).await;
        let applied = controller
            .try_update(|c| c.resolve(&ticket, outcome))
            .unwrap_or(false);
        if !applied {
            gloo::console::log!(format!("古いレスポンスを破棄: #{} {}", ticket.seq, ticket.term));
        }
    });
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let router = expect_context::<Router>();
    let fault = expect_context::<FaultTrigger>();
    let policy = SearchPolicy::default();

    let (initial, ticket) = SearchController::mount(&LocalStore, policy);
    let controller = RwSignal::new(initial);
    run_search(controller, ticket, policy);

    let (show_detail, set_show_detail) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    let pagination = Signal::derive(move || {
        let page = router.params().results_page();
        Pagination::new(page, controller.with(|c| c.results().len()))
    });
    let page_items: Signal<Vec<CatalogItem>> = Signal::derive(move || {
        let pagination = pagination.get();
        controller.with(|c| pagination.slice(c.results()).to_vec())
    });

    let on_search_submit = move |term: String| {
        let mut store = LocalStore;
        let Some(outcome) = controller.try_update(|c| c.submit(&term, &mut store)) else {
            return;
        };
        set_notice.set(submit_notice(&outcome));
        match outcome {
            Ok(ticket) => {
                router.push_params(&RouteParams::for_page(1));
                run_search(controller, ticket, policy);
            }
            Err(e) => gloo::console::warn!(e.user_message()),
        }
    };

    let on_page_change = move |page: usize| router.push_params(&RouteParams::for_page(page));
    let on_card_click = move |id: String| set_show_detail.set(Some(id));
    let close_detail = Callback::new(move |_: ()| set_show_detail.set(None));

    let results_view = move || controller.with(|c| ResultsView::from_state(c.state()));
    let is_loading = move || controller.with(|c| c.state().is_loading);

    view! {
        <div class="home-container">
            // 「Throw Error」後は Err を描画して境界に拾わせる
            {move || fault.check()}

            <SearchBar initial=stored_term(&LocalStore) on_submit=on_search_submit />

            {move || notice.get().map(|message| view! {
                <div class="error-message">"Error: "{message}</div>
            })}

            <Show when=is_loading>
                <Spinner />
            </Show>

            {move || match results_view() {
                ResultsView::Idle => ().into_any(),
                ResultsView::Loading => view! { <div>"Loading..."</div> }.into_any(),
                ResultsView::Empty => view! { <div>"No results found."</div> }.into_any(),
                ResultsView::Failed(message) => view! {
                    <div class="error-message">"Error: "{message}</div>
                }
                .into_any(),
                ResultsView::Items => view! {
                    <CardList items=page_items on_card_click=on_card_click />
                    <PaginationBar pagination=pagination on_page_change=on_page_change />
                }
                .into_any(),
            }}

            <Show when=move || show_detail.get().is_some()>
                <div class="overlay" on:click=move |_| set_show_detail.set(None)>
                    <div class="side-panel" on:click=|ev| ev.stop_propagation()>
                        {move || show_detail.get().map(|id| view! {
                            <DetailCard id=id on_close=close_detail />
                        })}
                    </div>
                </div>
            </Show>

            <button
                class="error-button"
                data-testid="throw-error-button"
                on:click=move |_| fault.raise()
            >
                "Throw Error"
            </button>
        </div>
    }
}
