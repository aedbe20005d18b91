use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::routes::AppRoute;
use crate::shared::components::ui::{PriorityBadge, StatusBadge};
use crate::shared::components::PageHeader;
use crate::shared::data::use_store;
use crate::shared::date_utils;
use crate::shared::export::print_page;
use crate::shared::icons::icon;
use contracts::domain::a002_measurement::aggregate::{Measurement, MeasurementId, MeasurementPatch};
use contracts::domain::a002_measurement::schema::sections_for;
use contracts::enums::MeasurementStatus;
use contracts::shared::list_filter::UNKNOWN_CUSTOMER;
use leptos::prelude::*;

/// Следующий шаг жизненного цикла мерки, доступный со страницы просмотра
fn next_status(status: MeasurementStatus) -> Option<(MeasurementStatus, &'static str)> {
    match status {
        MeasurementStatus::Draft => Some((MeasurementStatus::Confirmed, "Confirm")),
        MeasurementStatus::Confirmed => Some((MeasurementStatus::Completed, "Mark Completed")),
        MeasurementStatus::Completed => None,
    }
}

#[component]
pub fn MeasurementDetails(id: MeasurementId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let store = use_store();

    let measurement = Memo::new(move |_| store.measurement(id).map_err(|e| e.to_string()));
    let customer_name = Memo::new(move |_| {
        measurement
            .get()
            .ok()
            .and_then(|m| store.customer(m.customer_id).ok())
            .map(|c| c.name)
            .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string())
    });

    let on_back = Callback::new(move |_: ()| ctx.navigate(AppRoute::Measurements));
    let advance = Callback::new(move |status: MeasurementStatus| {
        match store.update_measurement(id, &MeasurementPatch::status(status)) {
            Ok(_) => notifications.success(format!("Measurement marked as {}", status.label())),
            Err(e) => notifications.error(e.to_string()),
        }
    });

    view! {
        <div class="page">
            {move || match measurement.get() {
                Err(e) => view! {
                    <div class="empty-state">
                        {icon("alert")}
                        <p>{e}</p>
                        <button class="button button--secondary" on:click=move |_| on_back.run(())>
                            "Back to Measurements"
                        </button>
                    </div>
                }.into_any(),
                Ok(m) => {
                    let customer_id = m.customer_id;
                    let next = next_status(m.status);
                    view! {
                        <PageHeader
                            title=format!("{} {}", m.garment_type.icon(), m.garment_type.label())
                            subtitle=Signal::derive(move || customer_name.get())
                            on_back=on_back
                        >
                            <button
                                class="button button--secondary no-print"
                                on:click=move |_| ctx.navigate(AppRoute::CustomerDetails(customer_id))
                            >
                                {icon("user")}
                                " Customer"
                            </button>
                            <button
                                class="button button--secondary no-print"
                                on:click=move |_| {
                                    if let Err(e) = print_page() {
                                        notifications.error(e);
                                    }
                                }
                            >
                                {icon("printer")}
                                " Print"
                            </button>
                            <button
                                class="button button--secondary no-print"
                                on:click=move |_| ctx.navigate(AppRoute::EditMeasurement(id))
                            >
                                {icon("edit")}
                                " Edit"
                            </button>
                            {next.map(|(status, label)| view! {
                                <button class="button button--primary no-print" on:click=move |_| advance.run(status)>
                                    {icon("check")}
                                    " "
                                    {label}
                                </button>
                            })}
                        </PageHeader>
                        <div class="details-grid">
                            <SummaryCard measurement=m.clone() />
                            <ValuesCard measurement=m />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SummaryCard(measurement: Measurement) -> impl IntoView {
    let due = measurement
        .due_date
        .map(date_utils::format_date)
        .unwrap_or_else(|| "Not set".to_string());
    let notes = (!measurement.notes.is_empty()).then(|| measurement.notes.clone());

    view! {
        <div class="card">
            <h2 class="card__title">"Summary"</h2>
            <div class="info-row">
                <span class="text-muted">"Status"</span>
                <StatusBadge status=measurement.status />
                <PriorityBadge priority=measurement.priority />
            </div>
            <div class="info-row">
                {icon("calendar")}
                <span class="text-muted">"Taken"</span>
                <span>{date_utils::format_date(measurement.date)}</span>
            </div>
            <div class="info-row">
                {icon("clock")}
                <span class="text-muted">"Due"</span>
                <span>{due}</span>
            </div>
            <div class="info-row">
                <span class="text-muted">"Updated"</span>
                <span>{date_utils::format_datetime(measurement.metadata.updated_at)}</span>
            </div>
            {notes.map(|n| view! {
                <div class="notes-block">
                    <div class="text-muted">"Notes"</div>
                    <p>{n}</p>
                </div>
            })}
        </div>
    }
}

/// Значения по разделам схемы; ключи вне схемы не выводятся
#[component]
fn ValuesCard(measurement: Measurement) -> impl IntoView {
    let sections = sections_for(measurement.garment_type);

    if sections.is_empty() {
        return view! {
            <div class="card">
                <h2 class="card__title">"Measurements"</h2>
                <div class="alert alert--info">
                    {icon("info")}
                    {format!(
                        " {} has no standard fields. See the notes for details.",
                        measurement.garment_type.label()
                    )}
                </div>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="card">
            {sections.into_iter().map(|section| {
                let rows = section.fields.iter().map(|field| {
                    let value = measurement
                        .value(field.key)
                        .map(|v| format!("{} {}", v, field.unit.symbol()))
                        .unwrap_or_else(|| "-".to_string());
                    view! {
                        <div class="value-grid__item">
                            <span class="text-muted">{field.label}</span>
                            <strong>{value}</strong>
                        </div>
                    }
                }).collect_view();
                view! {
                    <h2 class="card__title">{section.title}</h2>
                    <div class="value-grid">{rows}</div>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_advances_until_completed() {
        assert_eq!(
            next_status(MeasurementStatus::Draft).map(|(s, _)| s),
            Some(MeasurementStatus::Confirmed)
        );
        assert_eq!(
            next_status(MeasurementStatus::Confirmed).map(|(s, _)| s),
            Some(MeasurementStatus::Completed)
        );
        assert_eq!(next_status(MeasurementStatus::Completed), None);
    }
}
