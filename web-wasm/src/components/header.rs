//! ヘッダーコンポーネント（ナビゲーション + テーマ切替）

use leptos::prelude::*;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::route::Router;

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let router = expect_context::<Router>();
    view! {
        <a
            href=href
            on:click=move |ev| {
                ev.prevent_default();
                router.navigate(href);
            }
        >
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"NASA Image Gallery"</h1>
            <nav class="nav">
                <NavLink href="/" label="Search" />
                " | "
                <NavLink href="/forms" label="Forms" />
                " | "
                <NavLink href="/forms/uncontrolled" label="Uncontrolled Form" />
                " | "
                <NavLink href="/forms/controlled" label="Controlled Form" />
            </nav>
            <ThemeSwitcher />
        </header>
    }
}
