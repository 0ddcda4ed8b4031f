//! Mobile header with the navigation-drawer toggle.

use dioxus::prelude::*;

use crate::app::controller::use_app;

#[component]
pub fn Header() -> Element {
    let mut app = use_app();

    rsx! {
        header { class: "md:hidden flex justify-between items-center px-4 py-3 bg-white shadow sticky top-0 z-20",
            span { class: "text-[#1E1E1E] font-semibold text-lg", "Admin Stay" }
            button {
                onclick: move |_| app.toggle_menu(),
                span { class: "sr-only", "Abrir menu" }
                // Hamburger icon
                svg {
                    class: "h-6 w-6 text-zinc-700",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    "stroke-width": "2",
                    path {
                        "stroke-linecap": "round",
                        "stroke-linejoin": "round",
                        d: "M4 6h16M4 12h16M4 18h16",
                    }
                }
            }
        }
    }
}
