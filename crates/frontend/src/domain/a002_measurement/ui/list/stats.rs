use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{StatCard, StatTone};
use crate::shared::date_utils;
use contracts::dashboards::d100_overview::summary::{OverviewSummary, TypeShare};
use contracts::shared::list_filter::MeasurementListItem;
use leptos::prelude::*;

#[component]
pub fn MeasurementStats(summary: Signal<OverviewSummary>) -> impl IntoView {
    let figure = move |f: fn(&OverviewSummary) -> usize| {
        Signal::derive(move || f(&summary.get()).to_string())
    };

    view! {
        <div class="stat-grid">
            <StatCard label="Total" icon_name="file-text" value=figure(|s| s.total_measurements) />
            <StatCard
                label="This Month"
                icon_name="calendar"
                tone=StatTone::Primary
                value=figure(|s| s.this_month)
            />
            <StatCard label="Drafts" icon_name="edit" tone=StatTone::Warning value=figure(|s| s.draft) />
            <StatCard
                label="Completed"
                icon_name="check-circle"
                tone=StatTone::Success
                value=figure(|s| s.completed)
                subtitle=Signal::derive(move || Some(format!("{}% completion", summary.get().completion_rate)))
            />
        </div>
    }
}

/// Распределение по типам изделий
#[component]
pub fn TypeBreakdown(shares: Signal<Vec<TypeShare>>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card__title">"By Type"</h2>
            <Show
                when=move || !shares.get().is_empty()
                fallback=|| view! { <p class="text-muted">"No data yet"</p> }
            >
                <div class="type-breakdown">
                    {move || shares.get().into_iter().map(|share| {
                        let width = format!("width: {}%", share.percent);
                        view! {
                            <div class="type-breakdown__row">
                                <span class="type-breakdown__label">
                                    {share.garment_type.icon()} " " {share.garment_type.plural_label()}
                                </span>
                                <div class="progress">
                                    <div class="progress__bar" style=width></div>
                                </div>
                                <span class="type-breakdown__count">
                                    {format!("{} ({}%)", share.count, share.percent)}
                                </span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Последние изменения мерок
#[component]
pub fn RecentActivity(items: Signal<Vec<MeasurementListItem>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="card">
            <h2 class="card__title">"Recent Activity"</h2>
            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! { <p class="text-muted">"Nothing yet"</p> }
            >
                <ul class="activity-list">
                    {move || items.get().into_iter().map(|item| {
                        let m = item.measurement;
                        let id = m.id;
                        view! {
                            <li class="activity-list__item" on:click=move |_| ctx.navigate(AppRoute::MeasurementDetails(id))>
                                <div>
                                    <strong>{item.customer_name}</strong>
                                    <span class="text-muted">{format!(" · {}", m.garment_type.label())}</span>
                                </div>
                                <div class="activity-list__meta">
                                    <StatusBadge status=m.status />
                                    <span class="text-muted">{date_utils::format_datetime(m.metadata.updated_at)}</span>
                                </div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
