/// Утилиты для списков: поле поиска и подсветка совпадений.
/// Сама фильтрация и сортировка живут в `contracts::shared::list_filter`.
use leptos::prelude::*;

/// Разбивает текст на фрагменты `(фрагмент, совпадение)` по запросу без учёта регистра
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let needle = filter.trim().to_lowercase();
    let haystack = text.to_lowercase();
    // Смещения байтов совпадают только если нижний регистр не меняет длину
    if needle.is_empty() || haystack.len() != text.len() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        if start > last_pos {
            parts.push((&text[last_pos..start], false));
        }
        parts.push((&text[start..end], true));
        last_pos = end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((&text[last_pos..], false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(part, hit)| {
            let part = part.to_string();
            if hit {
                view! { <mark class="search-hit">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect();
    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки; фильтр обновляется на каждое нажатие
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Jane Smith", "jane"),
            vec![("Jane", true), (" Smith", false)]
        );
        assert_eq!(
            split_matches("anna", "n"),
            vec![("a", false), ("n", true), ("n", true), ("a", false)]
        );
        assert_eq!(split_matches("John", ""), vec![("John", false)]);
        assert_eq!(split_matches("John", "zz"), vec![("John", false)]);
    }
}
