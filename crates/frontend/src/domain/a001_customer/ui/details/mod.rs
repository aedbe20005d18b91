use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::{Badge, PriorityBadge, StatusBadge};
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::config::AppConfig;
use crate::shared::data::use_store;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use contracts::shared::list_filter::{
    join_customers, sort_records, summarize_customers, CustomerListItem, MeasurementListItem,
    MeasurementQuery, SortOrder,
};
use leptos::prelude::*;
use thaw::*;

/// Карточка клиента с историей мерок
#[component]
pub fn CustomerDetails(id: CustomerId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let store = use_store();
    let active_window_days = config.customers.active_window_days;

    let customer = Memo::new(move |_| store.customer(id).map_err(|e| e.to_string()));

    let summary = Memo::new(move |_| {
        let customer = customer.get().ok()?;
        summarize_customers(
            std::slice::from_ref(&customer),
            &store.measurements(),
            date_utils::today(),
            active_window_days,
        )
        .into_iter()
        .next()
    });

    let history = Memo::new(move |_| {
        let Ok(customer) = customer.get() else {
            return Vec::new();
        };
        let query = MeasurementQuery {
            customer_id: Some(id),
            ..Default::default()
        };
        let mut items = join_customers(store.query_measurements(&query), std::slice::from_ref(&customer));
        sort_records(&mut items, SortOrder::Newest);
        items
    });

    let on_back = Callback::new(move |_: ()| ctx.navigate(AppRoute::Customers));

    view! {
        <div class="page">
            {move || match customer.get() {
                Err(e) => view! {
                    <div class="empty-state">
                        {icon("alert")}
                        <p>{e}</p>
                        <button class="button button--secondary" on:click=move |_| on_back.run(())>
                            "Back to Customers"
                        </button>
                    </div>
                }.into_any(),
                Ok(c) => view! {
                    <PageHeader
                        title=c.name.clone()
                        subtitle=format!("Customer since {}", date_utils::format_date(c.metadata.created_at.date_naive()))
                        on_back=on_back
                    >
                        <button
                            class="button button--primary"
                            on:click=move |_| ctx.navigate(AppRoute::NewMeasurement { customer: Some(id) })
                        >
                            {icon("plus")}
                            " New Measurement"
                        </button>
                    </PageHeader>
                    <div class="details-grid">
                        <ContactCard customer=c />
                        <ActivityCard summary=summary.into() />
                    </div>
                }.into_any(),
            }}

            <div class="card">
                <h2 class="card__title">"Measurement History"</h2>
                <HistoryTable rows=history.into() />
            </div>
        </div>
    }
}

#[component]
fn ContactCard(customer: Customer) -> impl IntoView {
    let optional_row = |icon_name: &'static str, value: Option<String>| {
        value.map(|v| view! { <div class="info-row">{icon(icon_name)} <span>{v}</span></div> })
    };

    view! {
        <div class="card">
            <div class="customer-card__header">
                <div class="avatar avatar--large">{customer.initials()}</div>
                <h2 class="card__title">"Contact"</h2>
            </div>
            <div class="info-row">{icon("phone")} <span>{customer.phone.clone()}</span></div>
            {optional_row("mail", customer.email.clone())}
            {optional_row("info", customer.address.clone())}
            {customer.notes.clone().map(|notes| view! {
                <div class="notes-block">
                    <div class="text-muted">"Notes"</div>
                    <p>{notes}</p>
                </div>
            })}
        </div>
    }
}

#[component]
fn ActivityCard(summary: Signal<Option<CustomerListItem>>) -> impl IntoView {
    let count = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.measurement_count.to_string())
            .unwrap_or_default()
    });
    let last_visit = Signal::derive(move || {
        summary
            .get()
            .and_then(|s| s.last_visit)
            .map(|d| date_utils::relative_day(d, date_utils::today()))
            .unwrap_or_else(|| "Never".to_string())
    });

    view! {
        <div class="stat-grid stat-grid--compact">
            <StatCard label="Measurements" icon_name="ruler" tone=StatTone::Primary value=count />
            <StatCard label="Last visit" icon_name="calendar" value=last_visit />
            <div class="stat-card">
                <div class="stat-card__label">"Status"</div>
                {move || summary.get().map(|s| {
                    let variant = if s.active { "success" } else { "neutral" };
                    view! { <Badge variant=variant>{s.activity_label()}</Badge> }
                })}
            </div>
        </div>
    }
}

#[component]
fn HistoryTable(rows: Signal<Vec<MeasurementListItem>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=|| view! { <div class="empty-state text-muted">"No measurements yet"</div> }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Fields"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Due"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows.get().into_iter().map(|row| {
                        let m = row.measurement;
                        let id = m.id;
                        let due = m.due_date.map(date_utils::format_date).unwrap_or_else(|| "-".to_string());
                        let garment = format!("{} {}", m.garment_type.icon(), m.garment_type.label());
                        let date = date_utils::format_date(m.date);
                        let filled = m.filled_count();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        {garment}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{date}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{filled}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <StatusBadge status=m.status />
                                    <PriorityBadge priority=m.priority />
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{due}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <div class="table__actions">
                                        <button
                                            class="button button--icon"
                                            title="View"
                                            on:click=move |_| ctx.navigate(AppRoute::MeasurementDetails(id))
                                        >
                                            {icon("eye")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| ctx.navigate(AppRoute::EditMeasurement(id))
                                        >
                                            {icon("edit")}
                                        </button>
                                    </div>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </Show>
    }
}
