mod export;
mod stats;

use self::export::{export_file_name, MeasurementExportRow};
use self::stats::{MeasurementStats, RecentActivity, TypeBreakdown};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::routes::AppRoute;
use crate::shared::components::ui::{options_with_all, PriorityBadge, Select, StatusBadge};
use crate::shared::components::{FilterPanel, PageHeader, PaginationControls};
use crate::shared::config::AppConfig;
use crate::shared::data::use_store;
use crate::shared::date_utils;
use crate::shared::export::{export_to_excel, print_page};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::dashboards::d100_overview::summary::{recent_activity, type_distribution, OverviewSummary};
use contracts::domain::a001_customer::aggregate::CustomerId;
use contracts::domain::common::AggregateId;
use contracts::domain::a002_measurement::aggregate::MeasurementId;
use contracts::enums::{GarmentType, MeasurementStatus};
use contracts::shared::list_filter::{
    derive_measurement_view, join_customers, paginate, MeasurementFilter, Period, SortOrder,
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thaw::*;

const FORM_KEY: &str = "a002_measurement_list";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct MeasurementListState {
    filter: MeasurementFilter,
    sort: SortOrder,
    page: usize,
}

/// Изменение фильтра всегда возвращает список на первую страницу
fn apply_filter(
    filter: RwSignal<MeasurementFilter>,
    page: RwSignal<usize>,
    change: impl FnOnce(&mut MeasurementFilter),
) {
    filter.update(change);
    page.set(0);
}

fn active_filters_count(filter: &MeasurementFilter) -> usize {
    [
        !filter.text.trim().is_empty(),
        filter.query.customer_id.is_some(),
        filter.query.garment_type.is_some(),
        filter.query.status.is_some(),
        filter.period != Period::All,
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

#[component]
#[allow(non_snake_case)]
pub fn MeasurementList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let store = use_store();
    let page_size = config.lists.page_size;
    let recent_count = config.lists.recent_count;

    // Try to restore state from AppGlobalContext
    let restored: MeasurementListState = ctx
        .get_form_state(FORM_KEY)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    let is_expanded = RwSignal::new(restored.filter.is_active());
    let filter = RwSignal::new(restored.filter);
    let sort = RwSignal::new(restored.sort);
    let page = RwSignal::new(restored.page);
    let pending_delete = RwSignal::new(None::<MeasurementId>);

    Effect::new(move |_| {
        let state = MeasurementListState {
            filter: filter.get(),
            sort: sort.get(),
            page: page.get(),
        };
        if let Ok(value) = serde_json::to_value(&state) {
            ctx.set_form_state(FORM_KEY.to_string(), value);
        }
    });

    let summary = Memo::new(move |_| {
        OverviewSummary::compute(
            store.customers().len(),
            &store.measurements(),
            date_utils::today(),
        )
    });
    let shares = Memo::new(move |_| type_distribution(&store.measurements()));
    let recent = Memo::new(move |_| {
        join_customers(
            recent_activity(&store.measurements(), recent_count),
            &store.customers(),
        )
    });

    let rows = Memo::new(move |_| {
        let items = join_customers(store.measurements(), &store.customers());
        filter.with(|f| derive_measurement_view(&items, f, sort.get(), date_utils::today()))
    });
    let paged = Memo::new(move |_| rows.with(|r| paginate(r, page.get(), page_size)));

    let customer_options = Signal::derive(move || {
        std::iter::once((String::new(), "All customers".to_string()))
            .chain(
                store
                    .customers()
                    .into_iter()
                    .map(|c| (c.id.to_string(), c.name)),
            )
            .collect::<Vec<_>>()
    });
    let type_options = options_with_all("All types", &GarmentType::ALL, GarmentType::code, GarmentType::label);
    let status_options = options_with_all(
        "All statuses",
        &MeasurementStatus::ALL,
        MeasurementStatus::code,
        MeasurementStatus::label,
    );
    let period_options: Vec<(String, String)> = Period::ALL
        .iter()
        .map(|p| (p.code().to_string(), p.label().to_string()))
        .collect();
    let sort_options: Vec<(String, String)> = SortOrder::ALL
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();

    let on_export = move |_| {
        let items = rows.get_untracked();
        let export: Vec<MeasurementExportRow> = items.iter().map(MeasurementExportRow).collect();
        match export_to_excel(&export, &export_file_name(date_utils::today())) {
            Ok(()) => notifications.success(format!("Exported {} measurements", export.len())),
            Err(e) => notifications.error(e),
        }
    };
    let on_print = move |_| {
        if let Err(e) = print_page() {
            notifications.error(e);
        }
    };

    let confirm_delete = Callback::new(move |id: MeasurementId| {
        pending_delete.set(None);
        match store.delete_measurement(id) {
            Ok(()) => notifications.success("Measurement deleted"),
            Err(e) => notifications.error(e.to_string()),
        }
    });

    view! {
        <div class="page">
            <PageHeader
                title="Measurements".to_string()
                subtitle=Signal::derive(move || {
                    format!("{} of {} measurements", rows.with(Vec::len), summary.get().total_measurements)
                })
            >
                <button class="button button--secondary no-print" on:click=on_export>
                    {icon("download")}
                    " Export CSV"
                </button>
                <button class="button button--secondary no-print" on:click=on_print>
                    {icon("printer")}
                    " Print"
                </button>
                <button
                    class="button button--primary no-print"
                    on:click=move |_| ctx.navigate(AppRoute::NewMeasurement { customer: None })
                >
                    {icon("plus")}
                    " New Measurement"
                </button>
            </PageHeader>

            <MeasurementStats summary=summary.into() />

            <div class="list-layout">
                <div class="list-layout__main">
                    <div class="toolbar no-print">
                        <SearchInput
                            value=Signal::derive(move || filter.with(|f| f.text.clone()))
                            on_change=Callback::new(move |v: String| apply_filter(filter, page, |f| f.text = v))
                            placeholder="Search customers or types..."
                        />
                        <Select
                            value=Signal::derive(move || sort.get().code().to_string())
                            on_change=Callback::new(move |code: String| {
                                sort.set(SortOrder::from_code(&code).unwrap_or_default())
                            })
                            options=sort_options
                        />
                    </div>

                    <FilterPanel
                        is_expanded=is_expanded
                        active_filters_count=Signal::derive(move || filter.with(active_filters_count))
                        on_clear=Callback::new(move |_: ()| apply_filter(filter, page, |f| *f = MeasurementFilter::default()))
                    >
                        <Select
                            label="Customer"
                            value=Signal::derive(move || {
                                filter.with(|f| f.query.customer_id.map(|id| id.to_string()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |code: String| {
                                let id = CustomerId::from_string(&code).ok();
                                apply_filter(filter, page, |f| f.query.customer_id = id)
                            })
                            options=customer_options
                        />
                        <Select
                            label="Type"
                            value=Signal::derive(move || {
                                filter.with(|f| f.query.garment_type.map(|t| t.code().to_string()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |code: String| {
                                apply_filter(filter, page, |f| f.query.garment_type = GarmentType::from_code(&code))
                            })
                            options=type_options.clone()
                        />
                        <Select
                            label="Status"
                            value=Signal::derive(move || {
                                filter.with(|f| f.query.status.map(|s| s.code().to_string()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |code: String| {
                                apply_filter(filter, page, |f| f.query.status = MeasurementStatus::from_code(&code))
                            })
                            options=status_options.clone()
                        />
                        <Select
                            label="Period"
                            value=Signal::derive(move || filter.with(|f| f.period.code().to_string()))
                            on_change=Callback::new(move |code: String| {
                                apply_filter(filter, page, |f| f.period = Period::from_code(&code).unwrap_or_default())
                            })
                            options=period_options.clone()
                        />
                    </FilterPanel>

                    <div class="card">
                        <Show
                            when=move || !paged.with(|p| p.items.is_empty())
                            fallback=move || view! {
                                <div class="empty-state">
                                    {icon("ruler")}
                                    <p>"No measurements found"</p>
                                    {move || filter.with(MeasurementFilter::is_active).then(|| view! {
                                        <p class="text-muted">"Try adjusting the filters"</p>
                                    })}
                                </div>
                            }
                        >
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Customer"</TableHeaderCell>
                                        <TableHeaderCell>"Type"</TableHeaderCell>
                                        <TableHeaderCell>"Date"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>"Due"</TableHeaderCell>
                                        <TableHeaderCell>"Fields"</TableHeaderCell>
                                        <TableHeaderCell class="no-print">"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || {
                                        let search = filter.with_untracked(|f| f.text.clone());
                                        paged.get().items.into_iter().map(|row| {
                                            let m = row.measurement;
                                            let id = m.id;
                                            let due = m
                                                .due_date
                                                .map(date_utils::format_date)
                                                .unwrap_or_else(|| "-".to_string());
                                            let customer_cell = highlight_matches(&row.customer_name, &search);
                                            let garment_cell = highlight_matches(m.garment_type.label(), &search);
                                            let garment_icon = m.garment_type.icon();
                                            let date = date_utils::format_date(m.date);
                                            let filled = m.filled_count();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {customer_cell}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {garment_icon} " "
                                                            {garment_cell}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{date}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <StatusBadge status=m.status />
                                                        <PriorityBadge priority=m.priority />
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{due}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{filled}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="no-print">
                                                        <RowActions id=id pending_delete=pending_delete on_confirm=confirm_delete />
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()
                                    }}
                                </TableBody>
                            </Table>
                        </Show>

                        <PaginationControls
                            current_page=Signal::derive(move || paged.with(|p| p.page))
                            total_pages=Signal::derive(move || paged.with(|p| p.total_pages))
                            total_count=Signal::derive(move || paged.with(|p| p.total_count))
                            page_size=Signal::derive(move || paged.with(|p| p.page_size))
                            on_page_change=Callback::new(move |p| page.set(p))
                        />
                    </div>
                </div>

                <div class="list-layout__side no-print">
                    <TypeBreakdown shares=shares.into() />
                    <RecentActivity items=recent.into() />
                </div>
            </div>
        </div>
    }
}

/// Кнопки строки; удаление подтверждается вторым нажатием
#[component]
fn RowActions(
    id: MeasurementId,
    pending_delete: RwSignal<Option<MeasurementId>>,
    on_confirm: Callback<MeasurementId>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let is_pending = move || pending_delete.get() == Some(id);

    view! {
        <div class="table__actions">
            <Show
                when=is_pending
                fallback=move || view! {
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
                    <button
                        class="button button--icon button--danger"
                        title="Delete"
                        on:click=move |_| pending_delete.set(Some(id))
                    >
                        {icon("trash")}
                    </button>
                }
            >
                <span class="text-muted">"Delete?"</span>
                <button class="button button--danger button--small" on:click=move |_| on_confirm.run(id)>
                    {icon("check")}
                </button>
                <button class="button button--secondary button--small" on:click=move |_| pending_delete.set(None)>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_filter::MeasurementQuery;

    #[test]
    fn test_active_filters_count() {
        let mut filter = MeasurementFilter::default();
        assert_eq!(active_filters_count(&filter), 0);

        filter.text = "  ".to_string();
        assert_eq!(active_filters_count(&filter), 0);

        filter.text = "jane".to_string();
        filter.query.status = Some(MeasurementStatus::Draft);
        filter.period = Period::Week;
        assert_eq!(active_filters_count(&filter), 3);
    }

    #[test]
    fn test_list_state_restores_from_saved_json() {
        let state = MeasurementListState {
            filter: MeasurementFilter {
                text: "shirt".to_string(),
                query: MeasurementQuery {
                    garment_type: Some(GarmentType::Shirt),
                    ..Default::default()
                },
                period: Period::Month,
            },
            sort: SortOrder::Name,
            page: 2,
        };
        let value = serde_json::to_value(&state).unwrap();
        let restored: MeasurementListState = serde_json::from_value(value).unwrap();
        assert_eq!(restored.filter, state.filter);
        assert_eq!(restored.sort, SortOrder::Name);
        assert_eq!(restored.page, 2);
    }
}
