use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible row of list filters
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Called by the "Clear" button
    on_clear: Callback<()>,

    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <Show when=move || { active_filters_count.get() > 0 }>
                    <button class="button button--ghost" on:click=move |_| on_clear.run(())>
                        "Clear filters"
                    </button>
                </Show>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-panel__content">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
