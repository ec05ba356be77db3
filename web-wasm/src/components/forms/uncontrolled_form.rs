//! 非制御フォーム
//!
//! 入力中は何もせず、送信時にDOMから値を読んで全項目を一括検証する。
//! エラーはすべてフォーム上部に並べる。

use leptos::html;
use leptos::prelude::*;
use nasa_gallery_common::forms::{validate_form, GENDERS};
use nasa_gallery_common::FormInput;
use super::country_autocomplete::CountryAutocomplete;
use super::image_input::{first_file, read_image};
use super::{next_entry_id, FormHandles};

fn input_value(node: NodeRef<html::Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

#[component]
pub fn UncontrolledForm() -> impl IntoView {
    let handles = FormHandles::from_context();

    let name_ref = NodeRef::<html::Input>::new();
    let age_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let password_ref = NodeRef::<html::Input>::new();
    let confirm_ref = NodeRef::<html::Input>::new();
    let gender_ref = NodeRef::<html::Select>::new();
    let terms_ref = NodeRef::<html::Input>::new();
    let image_ref = NodeRef::<html::Input>::new();

    let country = RwSignal::new(String::new());
    let (errors, set_errors) = signal(Vec::<String>::new());

    let finish = move |input: FormInput| match validate_form(&input, &next_entry_id()) {
        Ok(entry) => handles.commit(entry),
        Err(field_errors) => {
            set_errors.set(field_errors.into_iter().map(|e| e.message).collect());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_errors.set(Vec::new());

        let input = FormInput {
            name: input_value(name_ref),
            age: input_value(age_ref),
            email: input_value(email_ref),
            password: input_value(password_ref),
            confirm_password: input_value(confirm_ref),
            gender: gender_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            terms_accepted: terms_ref.get_untracked().map(|el| el.checked()).unwrap_or(false),
            country: country.get_untracked(),
            image: None,
        };

        match image_ref.get_untracked().as_ref().and_then(first_file) {
            Some(file) => read_image(file, move |image| {
                let mut input = input.clone();
                input.image = Some(image);
                finish(input);
            }),
            None => finish(input),
        }
    };

    view! {
        <form class="demo-form" on:submit=on_submit>
            <Show when=move || !errors.get().is_empty()>
                <div class="form-errors">
                    {move || errors.get().into_iter().map(|err| view! { <p>{err}</p> }).collect_view()}
                </div>
            </Show>

            <div>
                <label for="name">"Name:"</label>
                <input id="name" name="name" type="text" autocomplete="name" node_ref=name_ref />
            </div>
            <div>
                <label for="age">"Age:"</label>
                <input id="age" name="age" type="number" autocomplete="off" node_ref=age_ref />
            </div>
            <div>
                <label for="email">"Email:"</label>
                <input id="email" name="email" type="email" autocomplete="email" node_ref=email_ref />
            </div>
            <div>
                <label for="password">"Password:"</label>
                <input id="password" name="password" type="password" autocomplete="new-password" node_ref=password_ref />
            </div>
            <div>
                <label for="confirmPassword">"Confirm Password:"</label>
                <input id="confirmPassword" name="confirmPassword" type="password" autocomplete="new-password" node_ref=confirm_ref />
            </div>
            <div>
                <label for="gender">"Gender:"</label>
                <select id="gender" name="gender" node_ref=gender_ref>
                    <option value="">"Select Gender"</option>
                    {GENDERS.iter().map(|g| view! { <option value=*g>{*g}</option> }).collect_view()}
                </select>
            </div>
            <div>
                <label for="termsAccepted">
                    <input id="termsAccepted" name="termsAccepted" type="checkbox" node_ref=terms_ref />
                    " Accept Terms and Conditions"
                </label>
            </div>
            <div>
                <label for="image">"Upload Picture:"</label>
                <input id="image" name="image" type="file" accept="image/jpeg, image/png" node_ref=image_ref />
            </div>
            <div>
                <label for="country">"Country:"</label>
                <CountryAutocomplete
                    id="country"
                    value=Signal::from(country)
                    on_change=move |value| country.set(value)
                />
            </div>

            <button type="submit">"Submit"</button>
        </form>
    }
}
