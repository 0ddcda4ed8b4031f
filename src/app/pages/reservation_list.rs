//! Reservations listing with an inline detail expansion.

use dioxus::prelude::*;

use super::{confirm, remove_by_id, selection_after_delete, LoadState};
use crate::app::api::resources::reservations;
use crate::app::api::Reservation;
use crate::app::components::Layout;
use crate::app::controller::use_app;
use crate::app::format;
use crate::app::state::Page;

#[component]
pub fn ReservationList() -> Element {
    let mut app = use_app();

    let mut items = use_signal(Vec::<Reservation>::new);
    let mut load_state = use_signal(|| LoadState::Loading);
    let mut deleting = use_signal(|| None::<i64>);
    let mut page_error = use_signal(|| None::<String>);
    // Inline detail expansion: purely local, cleared on reload.
    let mut selected = use_signal(|| None::<i64>);

    let mut load = use_future(move || async move {
        load_state.set(LoadState::Loading);
        selected.set(None);
        match reservations::list().await {
            Ok(list) => {
                items.set(list);
                load_state.set(LoadState::Loaded);
            }
            Err(err) => load_state.set(LoadState::Failed(err.to_string())),
        }
    });

    let mut delete = move |reservation: Reservation| {
        if !confirm("Deseja realmente excluir esta reserva?") {
            return;
        }
        deleting.set(Some(reservation.id));
        page_error.set(None);
        spawn(async move {
            match reservations::delete(reservation.id).await {
                Ok(()) => {
                    remove_by_id(&mut items.write(), reservation.id, |r| r.id);
                    let remaining = selection_after_delete(*selected.peek(), reservation.id);
                    selected.set(remaining);
                }
                Err(err) => page_error.set(Some(format!("Erro ao excluir reserva: {err}"))),
            }
            deleting.set(None);
        });
    };

    let mut toggle_selected = move |id: i64| {
        if selected() == Some(id) {
            selected.set(None);
        } else {
            selected.set(Some(id));
        }
    };

    let body = match load_state() {
        LoadState::Loading => rsx! {
            p { class: "text-[#555]", "Carregando reservas..." }
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
                    p { class: "text-gray-500 text-center", "Nenhuma reserva cadastrada." }
                }
            } else {
                let detail = selected().and_then(|id| list.iter().find(|r| r.id == id).cloned());
                rsx! {
                    div { class: "overflow-x-auto rounded-xl shadow bg-white",
                        table { class: "min-w-full text-left text-sm",
                            thead { class: "bg-[#DDD3FA] text-[#4B3CA4]",
                                tr {
                                    th { class: "px-4 py-3", "ID" }
                                    th { class: "px-4 py-3", "Cliente" }
                                    th { class: "px-4 py-3", "Quarto" }
                                    th { class: "px-4 py-3", "Check-in" }
                                    th { class: "px-4 py-3", "Check-out" }
                                    th { class: "px-4 py-3", "Valor Total" }
                                    th { class: "px-4 py-3", "Status" }
                                    th { class: "px-4 py-3 text-right", "Ações" }
                                }
                            }
                            tbody {
                                for (index, reservation) in list.iter().cloned().enumerate() {
                                    ReservationRow {
                                        key: "{reservation.id}",
                                        reservation: reservation.clone(),
                                        striped: index % 2 == 0,
                                        deleting: deleting() == Some(reservation.id),
                                        on_select: move |id: i64| toggle_selected(id),
                                        on_delete: move |r: Reservation| delete(r),
                                    }
                                }
                            }
                        }
                    }

                    if let Some(r) = detail {
                        ReservationDetail { reservation: r }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            div { class: "max-w-6xl mx-auto w-full",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold text-[#1E1E1E] tracking-widest", "Reservas" }
                    button {
                        class: "px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-purple-500 to-pink-500 rounded-full shadow-md hover:brightness-110 transition",
                        onclick: move |_| app.navigate(Page::ReservationForm),
                        "+ Nova Reserva"
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
fn ReservationRow(
    reservation: Reservation,
    striped: bool,
    deleting: bool,
    on_select: EventHandler<i64>,
    on_delete: EventHandler<Reservation>,
) -> Element {
    let id = reservation.id;
    let delete_copy = reservation.clone();
    let customer_label = reservation
        .customer
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let room_label = reservation
        .room
        .as_ref()
        .map(|r| r.number.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let row_class = if striped { "bg-[#F4F0FF]" } else { "bg-white" };

    rsx! {
        tr {
            class: "cursor-pointer hover:bg-purple-50 {row_class}",
            onclick: move |_| on_select.call(id),
            td { class: "px-4 py-3", "{reservation.id}" }
            td { class: "px-4 py-3", "{customer_label}" }
            td { class: "px-4 py-3", "{room_label}" }
            td { class: "px-4 py-3", {format::display_datetime(&reservation.checkin)} }
            td { class: "px-4 py-3", {format::display_datetime(&reservation.checkout)} }
            td { class: "px-4 py-3", {format::currency(reservation.total_value)} }
            td { class: "px-4 py-3",
                span {
                    class: "px-2 py-1 rounded-full text-xs",
                    class: "{reservation.status.badge_class()}",
                    {reservation.status.label()}
                }
            }
            td { class: "px-4 py-3 text-right",
                button {
                    class: "text-red-500 hover:text-red-700 underline disabled:opacity-50",
                    disabled: deleting,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(delete_copy.clone());
                    },
                    if deleting { "Excluindo..." } else { "Excluir" }
                }
            }
        }
    }
}

#[component]
fn ReservationDetail(reservation: Reservation) -> Element {
    rsx! {
        div { class: "mt-8 p-6 bg-white rounded-xl shadow max-w-2xl mx-auto",
            h2 { class: "text-lg font-semibold mb-4 text-[#4B3CA4]", "Detalhes da Reserva" }
            p { strong { "ID: " } "{reservation.id}" }
            if let Some(customer) = reservation.customer.as_ref() {
                p { strong { "Cliente: " } "{customer.name}" }
                if !customer.cpf.is_empty() {
                    p { strong { "CPF: " } "{customer.cpf}" }
                }
                if !customer.phone.is_empty() {
                    p { strong { "Telefone: " } "{customer.phone}" }
                }
                if !customer.email.is_empty() {
                    p { strong { "E-mail: " } "{customer.email}" }
                }
            }
            hr { class: "my-3" }
            if let Some(room) = reservation.room.as_ref() {
                p { strong { "Quarto: " } "{room.number}" }
                p { strong { "Tipo: " } {room.room_type.as_str()} }
                p { strong { "Diária: " } {format::currency(room.daily_rate)} }
            }
            p { strong { "Check-in: " } {format::display_datetime(&reservation.checkin)} }
            p { strong { "Check-out: " } {format::display_datetime(&reservation.checkout)} }
            p { strong { "Valor total: " } {format::currency(reservation.total_value)} }
            if let Some(created) = reservation.created_at.as_ref() {
                p { strong { "Criada em: " } {format::display_datetime(created)} }
            }
        }
    }
}
