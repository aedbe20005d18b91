use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{CardAnimated, PageHeader, StatCard, StatTone};
use crate::shared::config::AppConfig;
use crate::shared::data::use_store;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::dashboards::d100_overview::summary::OverviewSummary;
use contracts::shared::list_filter::{
    derive_measurement_view, join_customers, MeasurementFilter, MeasurementListItem, SortOrder,
};
use leptos::prelude::*;
use thaw::*;

/// Overview dashboard: key figures, quick actions and the latest measurements
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let store = use_store();
    let recent_count = config.lists.recent_count;

    let (search, set_search) = signal(String::new());

    let summary = Memo::new(move |_| {
        OverviewSummary::compute(
            store.customers().len(),
            &store.measurements(),
            date_utils::today(),
        )
    });

    let recent = Memo::new(move |_| {
        let items = join_customers(store.measurements(), &store.customers());
        let filter = MeasurementFilter {
            text: search.get(),
            ..Default::default()
        };
        let mut view = derive_measurement_view(&items, &filter, SortOrder::Newest, date_utils::today());
        view.truncate(recent_count);
        view
    });

    let go = move |route: AppRoute| move |_: leptos::ev::MouseEvent| ctx.navigate(route.clone());

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard".to_string()
                subtitle="Welcome back! Here's what's happening today.".to_string()
            >
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Customers"
                    icon_name="customers"
                    value=Signal::derive(move || summary.get().total_customers.to_string())
                />
                <StatCard
                    label="Measurements Today"
                    icon_name="ruler"
                    tone=StatTone::Primary
                    value=Signal::derive(move || summary.get().measurements_today.to_string())
                />
                <StatCard
                    label="Pending"
                    icon_name="clock"
                    tone=StatTone::Warning
                    value=Signal::derive(move || summary.get().pending.to_string())
                />
                <StatCard
                    label="Completion Rate"
                    icon_name="check-circle"
                    tone=StatTone::Success
                    value=Signal::derive(move || format!("{}%", summary.get().completion_rate))
                />
            </div>

            <div class="dashboard-grid">
                <CardAnimated delay_ms=0>
                    <div class="card__header">
                        <h2 class="card__title">"Recent Measurements"</h2>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |v| set_search.set(v))
                            placeholder="Search customers or types..."
                        />
                    </div>
                    <RecentTable rows=recent.into() search=search.into() />
                </CardAnimated>

                <CardAnimated delay_ms=80>
                    <h2 class="card__title">"Quick Actions"</h2>
                    <div class="quick-actions">
                        <button class="quick-action" on:click=go(AppRoute::NewCustomer)>
                            {icon("user-plus")}
                            <span>"New Customer"</span>
                        </button>
                        <button class="quick-action" on:click=go(AppRoute::NewMeasurement { customer: None })>
                            {icon("ruler")}
                            <span>"New Measurement"</span>
                        </button>
                        <button class="quick-action" on:click=go(AppRoute::Measurements)>
                            {icon("file-text")}
                            <span>"All Measurements"</span>
                        </button>
                    </div>
                </CardAnimated>
            </div>
        </div>
    }
}

#[component]
fn RecentTable(rows: Signal<Vec<MeasurementListItem>>, search: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=|| view! { <div class="empty-state text-muted">"No measurements found"</div> }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Customer"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows.get().into_iter().map(|row| {
                        let m = row.measurement;
                        let id = m.id;
                        let name = row.customer_name;
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <a
                                            href=AppRoute::MeasurementDetails(id).to_path()
                                            class="table__link"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                ctx.navigate(AppRoute::MeasurementDetails(id));
                                            }
                                        >
                                            {highlight_matches(&name, &search.get_untracked())}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        {format!("{} {}", m.garment_type.icon(), m.garment_type.label())}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{date_utils::format_date(m.date)}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <StatusBadge status=m.status />
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </Show>
    }
}
