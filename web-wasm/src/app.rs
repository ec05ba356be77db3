//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use nasa_gallery_common::{FormStore, SelectionStore, Theme};
use crate::components::{
    fallback_boundary::FallbackBoundary,
    flyout::Flyout,
    forms::FreshEntry,
    header::Header,
};
use crate::pages::{
    detail::DetailPage,
    forms::{ControlledFormPage, FormsPage, UncontrolledFormPage},
    not_found::NotFound,
    search::SearchPage,
};
use crate::route::{AppRoute, Router};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画面をまたいで共有する状態
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    provide_context(RwSignal::new(SelectionStore::new()));
    provide_context(RwSignal::new(FormStore::new()));
    provide_context(FreshEntry(RwSignal::new(None)));

    let router = Router::new();
    router.listen_popstate();
    provide_context(router);

    // ページ番号の変化では画面を作り直さない
    let route = Memo::new(move |_| router.route());
    let page = move || match route.get() {
        AppRoute::Search => view! {
            <FallbackBoundary>
                <SearchPage />
            </FallbackBoundary>
        }
        .into_any(),
        AppRoute::Detail(id) => view! { <DetailPage id=id /> }.into_any(),
        AppRoute::Forms => view! { <FormsPage /> }.into_any(),
        AppRoute::ControlledForm => view! { <ControlledFormPage /> }.into_any(),
        AppRoute::UncontrolledForm => view! { <UncontrolledFormPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFound /> }.into_any(),
    };

    view! {
        <div class=move || format!("app {}", theme.get().class_name())>
            <Header />
            <main class="container">{page}</main>
            <Flyout />
        </div>
    }
}
