//! Navigation sidebar shown on every protected page.

use dioxus::prelude::*;

use crate::app::controller::use_app;
use crate::app::state::Page;

/// Sidebar with brand, nav entries and logout. Fixed on desktop; the mobile
/// drawer variant is handled by `Layout`.
#[component]
pub fn Sidebar() -> Element {
    let app = use_app();
    let user_name = app.user_name().unwrap_or_default();

    rsx! {
        aside { class: "w-64 bg-white shadow-xl rounded-r-3xl z-50 flex flex-col min-h-full",
            div { class: "p-6 border-b border-gray-200",
                h1 { class: "text-xl font-bold text-[#FF4293]", "Admin Stay" }
                if !user_name.is_empty() {
                    p { class: "text-xs text-gray-500 mt-1", "Olá, {user_name}" }
                }
            }

            nav { class: "flex flex-col gap-2 p-4 text-gray-700 font-medium text-sm",
                SidebarButton { label: "Painel", page: Page::Dashboard }
                SidebarButton { label: "Clientes", page: Page::CustomerList }
                SidebarButton { label: "Quartos", page: Page::RoomList }
                SidebarButton { label: "Reservas", page: Page::ReservationList }
            }

            div { class: "mt-auto px-4 py-6 border-t border-gray-100",
                button {
                    class: "flex items-center gap-2 text-red-500 hover:text-red-700 text-sm font-medium transition",
                    onclick: {
                        let mut app = app;
                        move |_| app.logout()
                    },
                    "Sair"
                }
            }
        }
    }
}

#[component]
fn SidebarButton(label: &'static str, page: Page) -> Element {
    let mut app = use_app();

    rsx! {
        button {
            class: "flex items-center gap-3 px-4 py-2 rounded-full hover:bg-[#F4F1FD] transition w-full text-left",
            onclick: move |_| app.navigate(page),
            "{label}"
        }
    }
}
