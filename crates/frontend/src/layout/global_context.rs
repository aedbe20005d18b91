use crate::routes::AppRoute;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    pub left_open: RwSignal<bool>,
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::Dashboard),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    /// Синхронизирует маршрут с адресной строкой: читает текущий путь
    /// и подписывается на `popstate` (кнопки "назад"/"вперёд" браузера).
    pub fn init_router_integration(&self) {
        self.route.set(current_location_route());

        let route = self.route;
        let on_popstate = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let next = current_location_route();
            log::debug!("popstate -> {}", next.to_path());
            route.set(next);
        }) as Box<dyn FnMut(_)>);

        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
        }
        on_popstate.forget();
    }

    pub fn navigate(&self, route: AppRoute) {
        let path = route.to_path();
        log::info!("navigate: {}", path);

        let current = window()
            .and_then(|w| {
                let location = w.location();
                Some(format!("{}{}", location.pathname().ok()?, location.search().ok()?))
            })
            .unwrap_or_default();

        // Only push a history entry if the URL actually changed
        if current != path {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&path),
                    );
                }
            }
        }
        self.route.set(route);
    }

    pub fn is_active(&self, nav_key: &str) -> bool {
        self.route.with(|route| route.nav_key() == nav_key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

fn current_location_route() -> AppRoute {
    let Some(w) = window() else {
        return AppRoute::Dashboard;
    };
    let location = w.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    AppRoute::parse(&path, &search)
}
