//! Sidebar: навигация и блок быстрой статистики

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::data::use_store;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::dashboards::d100_overview::summary::OverviewSummary;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    nav_key: &'static str,
    label: &'static str,
    icon: &'static str,
    route: AppRoute,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            nav_key: "dashboard",
            label: "Dashboard",
            icon: "dashboard",
            route: AppRoute::Dashboard,
        },
        MenuItem {
            nav_key: "customers",
            label: "Customers",
            icon: "customers",
            route: AppRoute::Customers,
        },
        MenuItem {
            nav_key: "measurements",
            label: "Measurements",
            icon: "ruler",
            route: AppRoute::Measurements,
        },
        MenuItem {
            nav_key: "new_measurement",
            label: "New Measurement",
            icon: "plus",
            route: AppRoute::NewMeasurement { customer: None },
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_store();

    let summary = Memo::new(move |_| {
        OverviewSummary::compute(
            store.customers().len(),
            &store.measurements(),
            date_utils::today(),
        )
    });

    view! {
        <nav class="app-sidebar__content">
            {get_menu_items().into_iter().map(|item| {
                let nav_key = item.nav_key;
                let route = item.route.clone();
                view! {
                    <a
                        href=item.route.to_path()
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.is_active(nav_key)
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(route.clone());
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </a>
                }
            }).collect_view()}
        </nav>

        <div class="app-sidebar__stats">
            <div class="app-sidebar__stats-title">"Quick Stats"</div>
            <div class="app-sidebar__stat">
                <span>"Total Customers"</span>
                <strong>{move || summary.get().total_customers}</strong>
            </div>
            <div class="app-sidebar__stat">
                <span>"This Month"</span>
                <strong>{move || summary.get().this_month}</strong>
            </div>
        </div>
    }
}
