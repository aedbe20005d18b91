use crate::shared::icons::icon;
use leptos::prelude::*;

fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "No results".to_string();
    }
    let size = page_size.max(1);
    let first = (page * size + 1).min(total);
    let last = (first + size - 1).min(total);
    format!("Showing {} to {} of {} results", first, last, total)
}

/// PaginationControls component - footer with page navigation
///
/// Pages are 0-indexed; the label shows "Showing X to Y of Z results"
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let label = move || range_label(current_page.get(), page_size.get(), total_count.get());
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{label}</span>
            <div class="pagination-buttons">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(0)
                    disabled=is_first
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 0 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=is_first
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-page">
                    {move || format!("{} / {}", current_page.get() + 1, total_pages.get().max(1))}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if !is_last() {
                            on_page_change.run(current_page.get() + 1);
                        }
                    }
                    disabled=is_last
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let total = total_pages.get();
                        if total > 0 {
                            on_page_change.run(total - 1);
                        }
                    }
                    disabled=is_last
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(0, 10, 0), "No results");
        assert_eq!(range_label(0, 10, 25), "Showing 1 to 10 of 25 results");
        assert_eq!(range_label(2, 10, 25), "Showing 21 to 25 of 25 results");
        assert_eq!(range_label(0, 25, 25), "Showing 1 to 25 of 25 results");
    }
}
