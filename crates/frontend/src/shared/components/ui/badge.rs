use contracts::enums::{MeasurementStatus, Priority};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {children()}
        </span>
    }
}

pub fn status_variant(status: MeasurementStatus) -> &'static str {
    match status {
        MeasurementStatus::Draft => "warning",
        MeasurementStatus::Confirmed => "primary",
        MeasurementStatus::Completed => "success",
    }
}

/// Measurement status badge: draft / confirmed / completed
#[component]
pub fn StatusBadge(status: MeasurementStatus) -> impl IntoView {
    view! {
        <Badge variant=status_variant(status)>{status.label()}</Badge>
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    match priority {
        Priority::Urgent => view! { <Badge variant="error">{priority.label()}</Badge> }.into_any(),
        Priority::Normal => ().into_any(),
    }
}
