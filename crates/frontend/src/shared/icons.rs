use leptos::prelude::*;

/// SVG-иконка по имени; неизвестное имя даёт нейтральный кружок
pub fn icon(name: &str) -> AnyView {
    match name {
        "dashboard" => stroked(view! {
            <rect x="3" y="3" width="7" height="9" rx="1"/>
            <rect x="14" y="3" width="7" height="5" rx="1"/>
            <rect x="14" y="12" width="7" height="9" rx="1"/>
            <rect x="3" y="16" width="7" height="5" rx="1"/>
        }),
        "customers" => stroked(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }),
        "user" => stroked(view! {
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        }),
        "user-plus" => stroked(view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M19 8v6"/>
            <path d="M22 11h-6"/>
        }),
        "ruler" => stroked(view! {
            <path d="M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.4 2.4 0 0 1 0-3.4l2.6-2.6a2.4 2.4 0 0 1 3.4 0z"/>
            <path d="m14.5 12.5 2-2"/>
            <path d="m11.5 9.5 2-2"/>
            <path d="m8.5 6.5 2-2"/>
            <path d="m17.5 15.5 2-2"/>
        }),
        "scissors" => stroked(view! {
            <circle cx="6" cy="6" r="3"/>
            <circle cx="6" cy="18" r="3"/>
            <path d="M20 4 8.12 15.88"/>
            <path d="M14.47 14.48 20 20"/>
            <path d="M8.12 8.12 12 12"/>
        }),
        "plus" => small(view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }),
        "search" => small(view! {
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.3-4.3"/>
        }),
        "x" => small(view! {
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        }),
        "check" => small(view! {
            <polyline points="20 6 9 17 4 12"/>
        }),
        "info" => small(view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 16v-4"/>
            <path d="M12 8h.01"/>
        }),
        "alert" => small(view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4"/>
            <path d="M12 16h.01"/>
        }),
        "download" => small(view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="7 10 12 15 17 10"/>
            <path d="M12 15V3"/>
        }),
        "printer" => small(view! {
            <polyline points="6 9 6 2 18 2 18 9"/>
            <path d="M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2"/>
            <rect x="6" y="14" width="12" height="8"/>
        }),
        "trash" => small(view! {
            <path d="M3 6h18"/>
            <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/>
            <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>
        }),
        "edit" => small(view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
        }),
        "eye" => small(view! {
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
            <circle cx="12" cy="12" r="3"/>
        }),
        "calendar" => small(view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
        }),
        "clock" => small(view! {
            <circle cx="12" cy="12" r="10"/>
            <polyline points="12 6 12 12 16 14"/>
        }),
        "phone" => small(view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>
        }),
        "mail" => small(view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="m22 7-10 6L2 7"/>
        }),
        "arrow-left" => small(view! {
            <path d="m12 19-7-7 7-7"/>
            <path d="M19 12H5"/>
        }),
        "panel-left-close" => medium(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m16 15-3-3 3-3"/>
        }),
        "panel-left-open" => medium(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m14 9 3 3-3 3"/>
        }),
        "chevron-left" => small(view! {
            <polyline points="15 18 9 12 15 6"/>
        }),
        "chevron-right" => small(view! {
            <polyline points="9 18 15 12 9 6"/>
        }),
        "chevrons-left" => small(view! {
            <polyline points="11 17 6 12 11 7"/>
            <polyline points="18 17 13 12 18 7"/>
        }),
        "chevrons-right" => small(view! {
            <polyline points="13 17 18 12 13 7"/>
            <polyline points="6 17 11 12 6 7"/>
        }),
        "check-circle" => stroked(view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
            <polyline points="22 4 12 14.01 9 11.01"/>
        }),
        "file-text" => stroked(view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <path d="M14 2v6h6"/>
            <path d="M16 13H8"/>
            <path d="M16 17H8"/>
        }),
        "activity" => stroked(view! {
            <polyline points="22 12 18 12 15 21 9 3 6 12 2 12"/>
        }),
        _ => stroked(view! {
            <circle cx="12" cy="12" r="10"/>
        }),
    }
}

fn sized(size: u32, shapes: AnyView) -> AnyView {
    let size = size.to_string();
    view! {
        <svg
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shapes}
        </svg>
    }
    .into_any()
}

/// Обычный размер: навигация, кнопки, карточки
fn stroked(shapes: impl IntoView + 'static) -> AnyView {
    sized(20, shapes.into_any())
}

fn medium(shapes: impl IntoView + 'static) -> AnyView {
    sized(18, shapes.into_any())
}

/// Для плотных мест: пагинация, шевроны
fn small(shapes: impl IntoView + 'static) -> AnyView {
    sized(16, shapes.into_any())
}
