use super::input::FieldLabel;
use leptos::prelude::*;

/// Select component with label support
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = Signal::derive(move || id.get().unwrap_or_default());

    view! {
        <div class="form__group">
            <FieldLabel label=label for_id=select_id />
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Опции "все" + элементы перечисления
pub fn options_with_all<T: Copy>(
    all_label: &str,
    items: &[T],
    code: impl Fn(&T) -> &'static str,
    label: impl Fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    std::iter::once((String::new(), all_label.to_string()))
        .chain(
            items
                .iter()
                .map(|item| (code(item).to_string(), label(item).to_string())),
        )
        .collect()
}
