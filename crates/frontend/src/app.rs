use crate::layout::global_context::AppGlobalContext;
use crate::layout::NotificationService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::data::AppStore;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    provide_context(AppGlobalContext::new());
    provide_context(AppStore::new());
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
