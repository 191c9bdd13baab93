//! 内联 SVG 图标组件（Lucide 风格线条图标）。

use leptos::prelude::*;

macro_rules! icon {
    ($(#[$meta:meta])* $name:ident, $body:expr) => {
        $(#[$meta])*
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    inner_html=$body
                ></svg>
            }
        }
    };
}

icon!(Plus, r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#);

icon!(Pencil, r#"<path d="M17 3a2.828 2.828 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5L17 3z"/>"#);

icon!(
    Trash2,
    r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/><line x1="10" x2="10" y1="11" y2="17"/><line x1="14" x2="14" y1="11" y2="17"/>"#
);

icon!(
    LogOut,
    r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><polyline points="16 17 21 12 16 7"/><line x1="21" x2="9" y1="12" y2="12"/>"#
);

icon!(ChevronLeft, r#"<path d="m15 18-6-6 6-6"/>"#);

icon!(ChevronRight, r#"<path d="m9 18 6-6-6-6"/>"#);

icon!(
    /// 站点标志
    GraduationCap,
    r#"<path d="M22 10 12 5 2 10l10 5 10-5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
);
