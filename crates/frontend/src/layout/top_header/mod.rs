//! TopHeader component - application top bar: sidebar toggle, brand, quick action

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__logo">{icon("scissors")}</span>
                <div>
                    <div class="top-header__title">{config.app.title.clone()}</div>
                    <div class="top-header__subtitle">{config.app.subtitle.clone()}</div>
                </div>
            </div>

            <div class="top-header__actions">
                <button
                    class="button button--primary"
                    on:click=move |_| ctx.navigate(AppRoute::NewMeasurement { customer: None })
                >
                    {icon("plus")}
                    " New Measurement"
                </button>
            </div>
        </header>
    }
}
