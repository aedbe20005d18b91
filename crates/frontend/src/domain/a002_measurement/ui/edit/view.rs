use super::view_model::MeasurementEditViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::routes::AppRoute;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::{DateInput, PageHeader};
use crate::shared::data::use_store;
use crate::shared::icons::icon;
use contracts::domain::a002_measurement::aggregate::MeasurementId;
use contracts::domain::a002_measurement::schema::sections_for;
use contracts::enums::{MeasurementStatus, Priority};
use leptos::prelude::*;

#[component]
pub fn MeasurementEdit(id: MeasurementId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let store = use_store();

    let vm = MeasurementEditViewModel::new(id);
    vm.load(&store);

    let on_back = Callback::new(move |_: ()| ctx.navigate(AppRoute::MeasurementDetails(id)));
    let on_save = move |_| {
        if let Some(saved) = vm.save_command(&store) {
            notifications.success(format!("{} measurement updated", saved.garment_type.label()));
            ctx.navigate(AppRoute::MeasurementDetails(id));
        }
    };

    let status_options: Vec<(String, String)> = MeasurementStatus::ALL
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();
    let priority_options: Vec<(String, String)> = Priority::ALL
        .iter()
        .map(|p| (p.code().to_string(), p.label().to_string()))
        .collect();

    view! {
        <div class="page page--narrow">
            <PageHeader
                title=Signal::derive(move || {
                    vm.form.with(|f| {
                        f.as_ref()
                            .map(|f| format!("Edit {} Measurement", f.garment_type.label()))
                            .unwrap_or_else(|| "Edit Measurement".to_string())
                    })
                })
                on_back=on_back
            >
                {()}
            </PageHeader>

            {move || vm.error.get().map(|e| view! {
                <div class="alert alert--error">{icon("alert")} " " {e}</div>
            })}

            <Show when=move || vm.form.with(Option::is_some)>
                <div class="card">
                    {move || {
                        let garment_type = vm.form.with_untracked(|f| f.as_ref().map(|f| f.garment_type))?;
                        let sections = sections_for(garment_type);
                        if sections.is_empty() {
                            return Some(view! {
                                <div class="alert alert--info">
                                    {icon("info")}
                                    {format!(" {} has no standard fields. Use the notes below.", garment_type.label())}
                                </div>
                            }.into_any());
                        }
                        Some(sections.into_iter().map(|section| view! {
                            <h2 class="card__title">{section.title}</h2>
                            <div class="form__grid">
                                {section.fields.iter().map(|field| {
                                    let key = field.key;
                                    view! {
                                        <Input
                                            label=field.label
                                            id=format!("edit-{}", key)
                                            input_type="text"
                                            suffix=field.unit.symbol()
                                            value=Signal::derive(move || {
                                                vm.form.with(|f| f.as_ref().map(|f| f.value(key)).unwrap_or_default())
                                            })
                                            on_input=Callback::new(move |v: String| {
                                                vm.edit(|f| {
                                                    f.raw_values.insert(key.to_string(), v);
                                                })
                                            })
                                        />
                                    }
                                }).collect_view()}
                            </div>
                        }).collect_view().into_any())
                    }}
                </div>

                <div class="card">
                    <h2 class="card__title">"Details"</h2>
                    <div class="form__row">
                        <Select
                            label="Status"
                            value=Signal::derive(move || {
                                vm.form.with(|f| f.as_ref().map(|f| f.status.code().to_string()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |code: String| {
                                if let Some(status) = MeasurementStatus::from_code(&code) {
                                    vm.edit(|f| f.status = status);
                                }
                            })
                            options=status_options.clone()
                        />
                        <Select
                            label="Priority"
                            value=Signal::derive(move || {
                                vm.form.with(|f| f.as_ref().map(|f| f.priority.code().to_string()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |code: String| {
                                if let Some(priority) = Priority::from_code(&code) {
                                    vm.edit(|f| f.priority = priority);
                                }
                            })
                            options=priority_options.clone()
                        />
                        <div class="form__group">
                            <label class="form__label" for="edit-due-date">"Due date"</label>
                            <DateInput
                                id="edit-due-date"
                                value=Signal::derive(move || vm.form.with(|f| f.as_ref().and_then(|f| f.due_date)))
                                on_change=Callback::new(move |d| vm.edit(|f| f.due_date = d))
                            />
                        </div>
                    </div>
                    <Textarea
                        label="Notes"
                        id="edit-notes"
                        rows=4
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.as_ref().map(|f| f.notes.clone()).unwrap_or_default())
                        })
                        on_input=Callback::new(move |v: String| vm.edit(|f| f.notes = v))
                    />
                </div>

                <div class="details-actions">
                    <button class="button button--secondary" on:click=move |_| on_back.run(())>
                        "Cancel"
                    </button>
                    <button class="button button--primary" on:click=on_save>
                        {icon("check")}
                        " Save Changes"
                    </button>
                </div>
            </Show>
        </div>
    }
}
