use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::domain::a001_customer::ui::form::NewCustomerPage;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_measurement::ui::details::MeasurementDetails;
use crate::domain::a002_measurement::ui::edit::MeasurementEdit;
use crate::domain::a002_measurement::ui::list::MeasurementList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::AppRoute;
use crate::usecases::u101_new_measurement::ui::NewMeasurementWizard;
use leptos::prelude::*;

/// Страница для текущего маршрута
fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        AppRoute::Customers => view! { <CustomerList /> }.into_any(),
        AppRoute::NewCustomer => view! { <NewCustomerPage /> }.into_any(),
        AppRoute::CustomerDetails(id) => view! { <CustomerDetails id=id /> }.into_any(),
        AppRoute::Measurements => view! { <MeasurementList /> }.into_any(),
        AppRoute::NewMeasurement { customer } => {
            view! { <NewMeasurementWizard preselected=customer /> }.into_any()
        }
        AppRoute::MeasurementDetails(id) => view! { <MeasurementDetails id=id /> }.into_any(),
        AppRoute::EditMeasurement(id) => view! { <MeasurementEdit id=id /> }.into_any(),
        AppRoute::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
    }
}

#[component]
fn NotFound(path: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    view! {
        <div class="empty-state">
            <h2>"Page not found"</h2>
            <p class="text-muted">{path}</p>
            <button class="button button--primary" on:click=move |_| ctx.navigate(AppRoute::Dashboard)>
                "Back to Dashboard"
            </button>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // Pages are recreated only when the route itself changes
                let route = Memo::new(move |_| ctx.route.get());
                (move || render_route(route.get())).into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
