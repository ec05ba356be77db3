//! 制御フォーム
//!
//! 入力ごとに該当項目を検証し、触った項目のエラーだけ表示する。
//! 全項目が通るまで送信ボタンは無効。

use leptos::prelude::*;
use nasa_gallery_common::forms::{validate_field, validate_form, FormField, GENDERS};
use nasa_gallery_common::FormInput;
use super::country_autocomplete::CountryAutocomplete;
use super::image_input::{first_file, read_image};
use super::{next_entry_id, FormHandles};

fn is_valid(input: &FormInput) -> bool {
    FormField::ALL.iter().all(|&field| validate_field(field, input).is_none())
}

#[component]
fn FieldError(
    field: FormField,
    input: RwSignal<FormInput>,
    touched: RwSignal<Vec<FormField>>,
) -> impl IntoView {
    let message = move || {
        if !touched.with(|t| t.contains(&field)) {
            return None;
        }
        input.with(|i| validate_field(field, i))
    };
    view! {
        {move || message().map(|m| view! { <p class="field-error">{m}</p> })}
    }
}

#[component]
pub fn ControlledForm() -> impl IntoView {
    let handles = FormHandles::from_context();
    let input = RwSignal::new(FormInput::default());
    let touched = RwSignal::new(Vec::<FormField>::new());

    // 値を書き換えて、その項目を「触った」扱いにする
    let edit = move |field: FormField, apply: &dyn Fn(&mut FormInput)| {
        input.update(|i| apply(i));
        touched.update(|t| {
            if !t.contains(&field) {
                t.push(field);
            }
        });
    };

    let text_handler = move |field: FormField, set: fn(&mut FormInput, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            edit(field, &|i| set(i, value.clone()));
        }
    };

    let on_image = move |ev: leptos::ev::Event| {
        let target = event_target::<web_sys::HtmlInputElement>(&ev);
        match first_file(&target) {
            Some(file) => read_image(file, move |image| {
                edit(FormField::Image, &|i| i.image = Some(image.clone()));
            }),
            None => edit(FormField::Image, &|i| i.image = None),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        touched.set(FormField::ALL.to_vec());
        let current = input.get_untracked();
        if let Ok(entry) = validate_form(&current, &next_entry_id()) {
            handles.commit(entry);
        }
    };

    let country = Signal::derive(move || input.with(|i| i.country.clone()));

    view! {
        <form class="demo-form" on:submit=on_submit>
            <div>
                <label for="c-name">"Name:"</label>
                <input id="c-name" type="text"
                    prop:value=move || input.with(|i| i.name.clone())
                    on:input=text_handler(FormField::Name, |i, v| i.name = v) />
                <FieldError field=FormField::Name input=input touched=touched />
            </div>
            <div>
                <label for="c-age">"Age:"</label>
                <input id="c-age" type="number"
                    prop:value=move || input.with(|i| i.age.clone())
                    on:input=text_handler(FormField::Age, |i, v| i.age = v) />
                <FieldError field=FormField::Age input=input touched=touched />
            </div>
            <div>
                <label for="c-email">"Email:"</label>
                <input id="c-email" type="email"
                    prop:value=move || input.with(|i| i.email.clone())
                    on:input=text_handler(FormField::Email, |i, v| i.email = v) />
                <FieldError field=FormField::Email input=input touched=touched />
            </div>
            <div>
                <label for="c-password">"Password:"</label>
                <input id="c-password" type="password" autocomplete="new-password"
                    prop:value=move || input.with(|i| i.password.clone())
                    on:input=text_handler(FormField::Password, |i, v| i.password = v) />
                <FieldError field=FormField::Password input=input touched=touched />
            </div>
            <div>
                <label for="c-confirm">"Confirm Password:"</label>
                <input id="c-confirm" type="password" autocomplete="new-password"
                    prop:value=move || input.with(|i| i.confirm_password.clone())
                    on:input=text_handler(FormField::ConfirmPassword, |i, v| i.confirm_password = v) />
                <FieldError field=FormField::ConfirmPassword input=input touched=touched />
            </div>
            <div>
                <label for="c-gender">"Gender:"</label>
                <select id="c-gender"
                    prop:value=move || input.with(|i| i.gender.clone())
                    on:change=text_handler(FormField::Gender, |i, v| i.gender = v)
                >
                    <option value="">"Select Gender"</option>
                    {GENDERS.iter().map(|g| view! { <option value=*g>{*g}</option> }).collect_view()}
                </select>
                <FieldError field=FormField::Gender input=input touched=touched />
            </div>
            <div>
                <label for="c-terms">
                    <input id="c-terms" type="checkbox"
                        prop:checked=move || input.with(|i| i.terms_accepted)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            edit(FormField::TermsAccepted, &|i| i.terms_accepted = checked);
                        } />
                    " Accept Terms and Conditions"
                </label>
                <FieldError field=FormField::TermsAccepted input=input touched=touched />
            </div>
            <div>
                <label for="c-image">"Upload Picture:"</label>
                <input id="c-image" type="file" accept="image/jpeg, image/png" on:change=on_image />
                <FieldError field=FormField::Image input=input touched=touched />
            </div>
            <div>
                <label for="c-country">"Country:"</label>
                <CountryAutocomplete
                    id="c-country"
                    value=country
                    on_change=move |value: String| edit(FormField::Country, &|i| i.country = value.clone())
                />
                <FieldError field=FormField::Country input=input touched=touched />
            </div>

            <button type="submit" disabled=move || !input.with(is_valid)>"Submit"</button>
        </form>
    }
}
