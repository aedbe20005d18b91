use leptos::prelude::*;

/// Подпись поля; не рендерится, если label не задан
#[component]
pub(super) fn FieldLabel(
    label: MaybeProp<String>,
    #[prop(into)]
    for_id: Signal<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    move || {
        label.get().map(|text| {
            view! {
                <label class="form__label" for=for_id>
                    {text}
                    {required.then_some(view! { <span class="form__required">" *"</span> })}
                </label>
            }
        })
    }
}

/// Input component with label and inline error
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Unit shown after the field, e.g. "cm"
    #[prop(optional, into)]
    suffix: MaybeProp<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let input_id = Signal::derive(move || id.get().unwrap_or_default());
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group" class:form__group--error=move || error.get().is_some()>
            <FieldLabel label=label for_id=input_id required=required />
            <div class="form__input-wrap">
                <input
                    id=input_id
                    class="form__input"
                    type=input_t
                    step=move || (input_t() == "number").then_some("0.1")
                    placeholder=input_placeholder
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                {move || suffix.get().map(|s| view! { <span class="form__suffix">{s}</span> })}
            </div>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
