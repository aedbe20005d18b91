use crate::shared::date_utils::{parse_input_date, to_input_value};
use chrono::NaiveDate;
use leptos::prelude::*;

/// DateInput component with native date picker; an empty field means `None`
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional, into)]
    id: String,
) -> impl IntoView {
    view! {
        <input
            class="form__input"
            type="date"
            id=id
            prop:value=move || to_input_value(value.get())
            on:input=move |ev| on_change.run(parse_input_date(&event_target_value(&ev)))
        />
    }
}
