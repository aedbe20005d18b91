use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::DateInput;
use crate::shared::icons::icon;
use contracts::domain::a002_measurement::schema::sections_for;
use contracts::enums::Priority;
use contracts::usecases::u101_new_measurement::WizardSession;
use leptos::prelude::*;

/// Шаг 3: ввод значений по схеме выбранного типа и общих атрибутов
#[component]
pub fn StepMeasurements(session: RwSignal<WizardSession>, error: RwSignal<Option<String>>) -> impl IntoView {
    let garment_type = Memo::new(move |_| session.with(|s| s.garment_type()));
    let filled = Signal::derive(move || {
        session.with(|s| format!("{} of {} fields filled", s.filled_count(), s.fields().len()))
    });

    let priority_options: Vec<(String, String)> = Priority::ALL
        .iter()
        .map(|p| (p.code().to_string(), p.label().to_string()))
        .collect();

    view! {
        <div class="wizard-step">
            {move || {
                let garment = garment_type.get();
                let sections = sections_for(garment);
                if sections.is_empty() {
                    return view! {
                        <div class="alert alert--info">
                            {icon("info")}
                            {format!(
                                " {} has no standard measurement fields. Describe the measurements in the notes below.",
                                garment.label()
                            )}
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="text-muted wizard-step__counter">{move || filled.get()}</div>
                    {sections.into_iter().map(|section| view! {
                        <div class="card">
                            <h3 class="card__title">{section.title}</h3>
                            <div class="form__grid">
                                {section.fields.iter().map(|field| {
                                    let key = field.key;
                                    view! {
                                        <Input
                                            label=field.label
                                            id=format!("wizard-{}", key)
                                            input_type="text"
                                            placeholder="0.0"
                                            suffix=field.unit.symbol()
                                            value=Signal::derive(move || session.with(|s| s.value(key).to_string()))
                                            on_input=Callback::new(move |v: String| {
                                                let result = session
                                                    .try_update(|s| s.set_value(key, v))
                                                    .unwrap_or(Ok(()));
                                                if let Err(e) = result {
                                                    error.set(Some(e.to_string()));
                                                }
                                            })
                                        />
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }).collect_view()}
                }
                .into_any()
            }}

            <div class="card">
                <h3 class="card__title">"Order Details"</h3>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="wizard-due-date">"Due date"</label>
                        <DateInput
                            id="wizard-due-date"
                            value=Signal::derive(move || session.with(|s| s.due_date()))
                            on_change=Callback::new(move |d| session.update(|s| s.set_due_date(d)))
                        />
                    </div>
                    <Select
                        label="Priority"
                        id="wizard-priority"
                        value=Signal::derive(move || session.with(|s| s.priority().code().to_string()))
                        on_change=Callback::new(move |code: String| {
                            if let Some(priority) = Priority::from_code(&code) {
                                session.update(|s| s.set_priority(priority));
                            }
                        })
                        options=priority_options
                    />
                </div>
                <Textarea
                    label="Notes"
                    id="wizard-notes"
                    rows=4
                    placeholder="Fit preferences, fabric, special instructions..."
                    value=Signal::derive(move || session.with(|s| s.notes().to_string()))
                    on_input=Callback::new(move |v: String| session.update(|s| s.set_notes(v)))
                />
            </div>
        </div>
    }
}
