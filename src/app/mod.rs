//! Dioxus application root.
//!
//! Holds the single `AppState` snapshot (via the controller context) and the
//! exhaustive page renderer: every `Page` variant maps to exactly one screen
//! component, checked at compile time.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod controller;
pub mod format;
pub mod pages;
pub mod session;
pub mod state;
pub mod validate;

use controller::use_app_provider;
use state::Page;

/// Root app component.
#[component]
pub fn App() -> Element {
    let app = use_app_provider();

    let body = match app.page() {
        Page::Login => rsx! { pages::Login {} },
        Page::Register => rsx! { pages::Register {} },
        Page::Dashboard => rsx! { pages::Dashboard {} },
        Page::CustomerList => rsx! { pages::CustomerList {} },
        Page::CustomerForm => rsx! { pages::CustomerForm {} },
        Page::RoomList => rsx! { pages::RoomList {} },
        Page::RoomForm => rsx! { pages::RoomForm {} },
        Page::ReservationList => rsx! { pages::ReservationList {} },
        Page::ReservationForm => rsx! { pages::ReservationForm {} },
    };

    rsx! {
        document::Title { "Admin Stay" }
        document::Script { src: "https://cdn.tailwindcss.com" }

        div { class: "flex bg-[#FAF8F5] min-h-screen relative font-sans text-zinc-800",
            {body}
        }
    }
}
