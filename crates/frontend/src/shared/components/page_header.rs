use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - reusable header for pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Back arrow before the title
    #[prop(optional)]
    on_back: Option<Callback<()>>,

    /// Action buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {on_back.map(|cb| view! {
                    <button class="button button--icon page-header__back" on:click=move |_| cb.run(()) title="Back">
                        {icon("arrow-left")}
                    </button>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
