//! Layout wrapping the protected screens: fixed sidebar on desktop, drawer
//! with overlay on mobile, mobile header, and the page content slot.

use dioxus::prelude::*;

use super::{Header, Sidebar};
use crate::app::controller::use_app;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    pub children: Element,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let mut app = use_app();
    let menu_open = app.menu_open();

    rsx! {
        // Mobile header with drawer toggle
        div { class: "md:hidden fixed top-0 left-0 w-full z-50",
            Header {}
        }

        // Desktop sidebar, always visible
        div { class: "hidden md:block w-64 fixed top-0 left-0 h-full z-40",
            Sidebar {}
        }

        // Mobile drawer + overlay, driven by the menu_open snapshot
        if menu_open {
            div { class: "md:hidden fixed inset-0 z-50 bg-black bg-opacity-40",
                onclick: move |_| app.close_menu(),
                div {
                    class: "w-64 h-full",
                    onclick: move |evt| evt.stop_propagation(),
                    Sidebar {}
                }
            }
        }

        main { class: "flex-1 w-full md:ml-64 pt-20 md:pt-8 px-4 md:px-8 pb-10",
            {props.children}
        }
    }
}
