use crate::shared::components::ui::Badge;
use contracts::domain::a002_measurement::schema::preview_fields;
use contracts::enums::GarmentType;
use contracts::usecases::u101_new_measurement::WizardSession;
use leptos::prelude::*;

/// Шаг 2: выбор типа изделия
#[component]
pub fn StepSelectType(session: RwSignal<WizardSession>) -> impl IntoView {
    let selected = Memo::new(move |_| session.with(|s| s.garment_type()));

    view! {
        <div class="wizard-step type-grid">
            {GarmentType::ALL.into_iter().map(|garment| {
                let preview = preview_fields(garment);
                view! {
                    <button
                        class="type-card"
                        class:type-card--selected=move || selected.get() == garment
                        on:click=move |_| session.update(|s| s.select_garment_type(garment))
                    >
                        <div class="type-card__header">
                            <span class="type-card__icon">{garment.icon()}</span>
                            <span class="type-card__title">{garment.label()}</span>
                            {garment.is_popular().then(|| view! { <Badge variant="primary">"Popular"</Badge> })}
                        </div>
                        <p class="type-card__description text-muted">{garment.description()}</p>
                        {(!preview.is_empty()).then(|| view! {
                            <ul class="type-card__preview">
                                {preview.into_iter().map(|f| view! { <li>{f.label}</li> }).collect_view()}
                            </ul>
                        })}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
