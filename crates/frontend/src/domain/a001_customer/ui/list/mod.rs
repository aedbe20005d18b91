use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::data::use_store;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::shared::list_filter::{
    filter_customers, sort_records, summarize_customers, ActivityFilter, CustomerFilter,
    CustomerListItem, SortOrder,
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const FORM_KEY: &str = "a001_customer_list";

/// Customers sort by newest or by name only
const SORT_ORDERS: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Name];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CustomerListState {
    filter: CustomerFilter,
    sort: SortOrder,
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let store = use_store();
    let active_window_days = config.customers.active_window_days;

    // Try to restore state from AppGlobalContext
    let restored: CustomerListState = ctx
        .get_form_state(FORM_KEY)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    let (search, set_search) = signal(restored.filter.text);
    let (activity, set_activity) = signal(restored.filter.activity);
    let (sort, set_sort) = signal(restored.sort);

    Effect::new(move |_| {
        let state = CustomerListState {
            filter: CustomerFilter {
                text: search.get(),
                activity: activity.get(),
            },
            sort: sort.get(),
        };
        if let Ok(value) = serde_json::to_value(&state) {
            ctx.set_form_state(FORM_KEY.to_string(), value);
        }
    });

    let total = Memo::new(move |_| store.customers().len());

    let rows = Memo::new(move |_| {
        let summaries = summarize_customers(
            &store.customers(),
            &store.measurements(),
            date_utils::today(),
            active_window_days,
        );
        let filter = CustomerFilter {
            text: search.get(),
            activity: activity.get(),
        };
        let mut view = filter_customers(&summaries, &filter);
        sort_records(&mut view, sort.get());
        view
    });

    let activity_options: Vec<(String, String)> = ActivityFilter::ALL
        .iter()
        .map(|a| (a.code().to_string(), a.label().to_string()))
        .collect();
    let sort_options: Vec<(String, String)> = SORT_ORDERS
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();

    view! {
        <div class="page">
            <PageHeader
                title="Customers".to_string()
                subtitle=Signal::derive(move || format!("{} total customers", total.get()))
            >
                <button class="button button--primary" on:click=move |_| ctx.navigate(AppRoute::NewCustomer)>
                    {icon("user-plus")}
                    " Add Customer"
                </button>
            </PageHeader>

            <div class="toolbar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v| set_search.set(v))
                    placeholder="Search by name, phone or email..."
                />
                <Select
                    value=Signal::derive(move || activity.get().code().to_string())
                    on_change=Callback::new(move |code: String| {
                        set_activity.set(ActivityFilter::from_code(&code).unwrap_or_default())
                    })
                    options=activity_options
                />
                <Select
                    value=Signal::derive(move || sort.get().code().to_string())
                    on_change=Callback::new(move |code: String| {
                        set_sort.set(SortOrder::from_code(&code).unwrap_or_default())
                    })
                    options=sort_options
                />
            </div>

            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        {icon("customers")}
                        <p>"No customers found"</p>
                    </div>
                }
            >
                <div class="card-grid">
                    {move || {
                        let text = search.get();
                        rows.get()
                            .into_iter()
                            .map(|row| view! { <CustomerCard row=row search=text.clone() /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CustomerCard(row: CustomerListItem, search: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let activity_label = row.activity_label();
    let measurement_count = row.measurement_count;
    let customer = row.customer;
    let id = customer.id;
    let last_visit = row
        .last_visit
        .map(date_utils::format_date)
        .unwrap_or_else(|| "Never".to_string());
    let activity_variant = if row.active { "success" } else { "neutral" };

    view! {
        <div class="customer-card">
            <div class="customer-card__header">
                <div class="avatar">{customer.initials()}</div>
                <div class="customer-card__title">
                    <div class="customer-card__name">{highlight_matches(&customer.name, &search)}</div>
                    <Badge variant=activity_variant>{activity_label}</Badge>
                </div>
            </div>
            <div class="customer-card__contacts">
                <div>{icon("phone")} {highlight_matches(&customer.phone, &search)}</div>
                {customer.email.clone().map(|email| view! {
                    <div>{icon("mail")} {highlight_matches(&email, &search)}</div>
                })}
            </div>
            <div class="customer-card__stats">
                <div>
                    <span class="text-muted">"Measurements"</span>
                    <strong>{measurement_count}</strong>
                </div>
                <div>
                    <span class="text-muted">"Last visit"</span>
                    <strong>{last_visit}</strong>
                </div>
            </div>
            <div class="customer-card__actions">
                <button class="button button--secondary" on:click=move |_| ctx.navigate(AppRoute::CustomerDetails(id))>
                    {icon("eye")}
                    " View"
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| ctx.navigate(AppRoute::NewMeasurement { customer: Some(id) })
                >
                    {icon("ruler")}
                    " Measure"
                </button>
            </div>
        </div>
    }
}
