//! Registered rooms listing.

use dioxus::prelude::*;

use super::{confirm, remove_by_id, LoadState};
use crate::app::api::resources::rooms;
use crate::app::api::Room;
use crate::app::components::Layout;
use crate::app::controller::use_app;
use crate::app::format;
use crate::app::state::{EditTarget, Page};

#[component]
pub fn RoomList() -> Element {
    let mut app = use_app();

    let mut items = use_signal(Vec::<Room>::new);
    let mut load_state = use_signal(|| LoadState::Loading);
    let mut deleting = use_signal(|| None::<i64>);
    let mut page_error = use_signal(|| None::<String>);

    let mut load = use_future(move || async move {
        load_state.set(LoadState::Loading);
        match rooms::list().await {
            Ok(list) => {
                items.set(list);
                load_state.set(LoadState::Loaded);
            }
            Err(err) => load_state.set(LoadState::Failed(err.to_string())),
        }
    });

    let mut delete = move |room: Room| {
        if !confirm(&format!("Deseja excluir o quarto {}?", room.number)) {
            return;
        }
        deleting.set(Some(room.id));
        page_error.set(None);
        spawn(async move {
            match rooms::delete(room.id).await {
                Ok(()) => remove_by_id(&mut items.write(), room.id, |r| r.id),
                Err(err) => page_error.set(Some(format!("Erro ao excluir quarto: {err}"))),
            }
            deleting.set(None);
        });
    };

    let body = match load_state() {
        LoadState::Loading => rsx! {
            p { class: "text-[#555]", "Carregando quartos..." }
        },
        LoadState::Failed(msg) => rsx! {
            div { class: "bg-red-100 border border-red-400 text-red-700 rounded-xl p-4",
                p { class: "text-sm", "{msg}" }
                button {
                    class: "mt-3 px-4 py-2 text-sm text-white bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg",
                    onclick: move |_| load.restart(),
                    "Tentar novamente"
                }
            }
        },
        LoadState::Loaded => {
            let list = items();
            if list.is_empty() {
                rsx! {
                    p { class: "text-sm text-[#333] text-center", "Nenhum quarto cadastrado." }
                }
            } else {
                rsx! {
                    ul { class: "grid gap-6 sm:grid-cols-1 md:grid-cols-2",
                        for room in list {
                            RoomCard {
                                key: "{room.id}",
                                room: room.clone(),
                                deleting: deleting() == Some(room.id),
                                on_edit: move |r: Room| app.edit(EditTarget::Room(r)),
                                on_delete: move |r: Room| delete(r),
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            div { class: "max-w-5xl mx-auto w-full",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold tracking-widest text-[#1E1E1E]", "Quartos" }
                    button {
                        class: "px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-purple-500 to-pink-500 rounded-full shadow-md hover:brightness-110 transition",
                        onclick: move |_| app.navigate(Page::RoomForm),
                        "+ Novo Quarto"
                    }
                }
                hr { class: "my-4 border-t border-gray-300" }

                if let Some(msg) = page_error() {
                    div { class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm",
                        "{msg}"
                    }
                }

                {body}

                div { class: "pt-10 flex justify-center",
                    button {
                        class: "px-6 py-2 text-sm font-medium text-white bg-gradient-to-r from-purple-500 to-pink-500 rounded-full shadow-md hover:brightness-110 transition",
                        onclick: move |_| app.navigate(Page::Dashboard),
                        "Voltar para o Dashboard"
                    }
                }
            }
        }
    }
}

#[component]
fn RoomCard(
    room: Room,
    deleting: bool,
    on_edit: EventHandler<Room>,
    on_delete: EventHandler<Room>,
) -> Element {
    let edit_copy = room.clone();
    let delete_copy = room.clone();
    let rate = format::currency(room.daily_rate);
    let room_type = room.room_type.as_str();
    let status = room.status.label();

    rsx! {
        li { class: "bg-white rounded-xl shadow p-4 flex flex-col justify-between",
            div {
                p { class: "text-[#1E1E1E] font-semibold mb-1", "Quarto {room.number}" }
                p { class: "text-sm text-[#555]", "Tipo: {room_type}" }
                p { class: "text-sm text-[#555]", "Valor diária: {rate}" }
                p { class: "text-sm text-[#555]", "Status: {status}" }
            }
            div { class: "flex gap-3 mt-4",
                button {
                    class: "flex-1 px-4 py-2 rounded-full text-sm font-medium bg-[#D2C3F5] text-[#1E1E1E] shadow hover:bg-[#c3b2eb]",
                    onclick: move |_| on_edit.call(edit_copy.clone()),
                    "Editar"
                }
                button {
                    class: "flex-1 px-4 py-2 rounded-full text-sm font-medium bg-[#FFD4D4] text-[#1E1E1E] shadow hover:bg-[#ffc2c2] disabled:opacity-50",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(delete_copy.clone()),
                    if deleting { "Excluindo..." } else { "Excluir" }
                }
            }
        }
    }
}
