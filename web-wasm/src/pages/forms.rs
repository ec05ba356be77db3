//! フォーム関連ページ

use leptos::prelude::*;
use crate::components::forms::controlled_form::ControlledForm;
use crate::components::forms::entry_list::EntryList;
use crate::components::forms::uncontrolled_form::UncontrolledForm;

#[component]
pub fn FormsPage() -> impl IntoView {
    view! {
        <div class="forms-page">
            <h1>"Forms - Main Page"</h1>
            <EntryList />
        </div>
    }
}

#[component]
pub fn UncontrolledFormPage() -> impl IntoView {
    view! {
        <div class="forms-page">
            <h1>"Uncontrolled Form"</h1>
            <UncontrolledForm />
        </div>
    }
}

#[component]
pub fn ControlledFormPage() -> impl IntoView {
    view! {
        <div class="forms-page">
            <h1>"Controlled Form"</h1>
            <ControlledForm />
        </div>
    }
}
