//! 単独の詳細ページ（`/?id=...&frontpage=...`）

use leptos::prelude::*;
use crate::components::detail_card::DetailCard;

#[component]
pub fn DetailPage(id: String) -> impl IntoView {
    view! {
        <div class="detail-page">
            <DetailCard id=id />
        </div>
    }
}
