//! New reservation form.
//!
//! Customer and room options load on mount; only available rooms are
//! offered. The backend keys the room by number and expects
//! `DD/MM/YYYY HH:mm` timestamps.

use dioxus::prelude::*;

use crate::app::api::resources::{customers, reservations, rooms};
use crate::app::api::{Customer, ReservationPayload, Room};
use crate::app::components::Layout;
use crate::app::controller::use_app;
use crate::app::format;
use crate::app::state::Page;
use crate::app::validate;

#[component]
pub fn ReservationForm() -> Element {
    let mut app = use_app();

    let mut customer_options = use_signal(Vec::<Customer>::new);
    let mut room_options = use_signal(Vec::<Room>::new);
    let mut loading_customers = use_signal(|| true);
    let mut loading_rooms = use_signal(|| true);

    let mut customer_id = use_signal(String::new);
    let mut room_number = use_signal(String::new);
    let mut checkin = use_signal(String::new);
    let mut checkout = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_future(move || async move {
        match customers::list().await {
            Ok(list) => customer_options.set(list),
            Err(err) => error.set(Some(format!("Erro ao buscar clientes: {err}"))),
        }
        loading_customers.set(false);
    });

    use_future(move || async move {
        match rooms::list().await {
            Ok(list) => {
                room_options.set(list.into_iter().filter(Room::is_available).collect());
            }
            Err(err) => error.set(Some(format!("Erro ao buscar quartos: {err}"))),
        }
        loading_rooms.set(false);
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        error.set(None);

        let customer_value = customer_id.peek().clone();
        let room_value = room_number.peek().clone();
        let checkin_value = checkin.peek().clone();
        let checkout_value = checkout.peek().clone();

        if let Err(msg) = validate::required(&[
            &customer_value,
            &room_value,
            &checkin_value,
            &checkout_value,
        ]) {
            error.set(Some(msg));
            return;
        }
        let (start, end) = match validate::stay_period(&checkin_value, &checkout_value) {
            Ok(period) => period,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let Ok(customer_id_value) = customer_value.parse::<i64>() else {
            error.set(Some("Selecione o cliente.".to_string()));
            return;
        };

        let payload = ReservationPayload {
            customer_id: customer_id_value,
            room_number: room_value,
            checkin: format::to_backend_datetime(start),
            checkout: format::to_backend_datetime(end),
        };

        submitting.set(true);
        spawn(async move {
            match reservations::create(&payload).await {
                Ok(_) => app.navigate(Page::ReservationList),
                Err(err) => {
                    error.set(Some(format!("Erro ao criar reserva: {err}")));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        Layout {
            div { class: "w-full max-w-2xl mx-auto",
                h1 { class: "text-2xl md:text-3xl font-semibold mb-1 text-[#1E1E1E]", "Nova reserva" }
                hr { class: "my-4 border-t border-gray-300" }
                p { class: "text-sm md:text-base mb-6 text-gray-600",
                    "Preencha os detalhes abaixo para adicionar uma nova reserva ao sistema"
                }

                if let Some(msg) = error() {
                    div { class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm",
                        "{msg}"
                    }
                }

                form { class: "space-y-4", onsubmit: submit,
                    div {
                        label { class: "font-bold block mb-1",
                            "Cliente "
                            span { class: "text-red-500", "*" }
                        }
                        select {
                            value: "{customer_id}",
                            disabled: loading_customers() || submitting(),
                            class: "w-full p-2 rounded-lg shadow bg-[#e8e4f4] focus:outline-none",
                            onchange: move |evt| {
                                customer_id.set(evt.value());
                                error.set(None);
                            },
                            option { value: "",
                                if loading_customers() { "Carregando clientes..." } else { "Selecione o cliente" }
                            }
                            for customer in customer_options() {
                                option { value: "{customer.id}", "{customer.name} (ID: {customer.id})" }
                            }
                        }
                    }

                    div {
                        label { class: "font-bold block mb-1",
                            "Número do Quarto "
                            span { class: "text-red-500", "*" }
                        }
                        select {
                            value: "{room_number}",
                            disabled: loading_rooms() || submitting(),
                            class: "w-full p-2 rounded-lg shadow bg-[#e8e4f4] focus:outline-none",
                            onchange: move |evt| {
                                room_number.set(evt.value());
                                error.set(None);
                            },
                            option { value: "",
                                if loading_rooms() { "Carregando quartos..." } else { "Selecione o quarto" }
                            }
                            for room in room_options() {
                                option {
                                    value: "{room.number}",
                                    {format!(
                                        "{} - {} ({}/diária)",
                                        room.number,
                                        room.room_type.as_str(),
                                        format::currency(room.daily_rate)
                                    )}
                                }
                            }
                        }
                    }

                    div {
                        label { class: "font-bold block mb-1",
                            "Check-in "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            r#type: "datetime-local",
                            value: "{checkin}",
                            disabled: submitting(),
                            class: "w-full p-2 rounded-lg shadow bg-[#e8e4f4] focus:outline-none",
                            oninput: move |evt| {
                                checkin.set(evt.value());
                                error.set(None);
                            },
                        }
                    }

                    div {
                        label { class: "font-bold block mb-1",
                            "Check-out "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            r#type: "datetime-local",
                            value: "{checkout}",
                            disabled: submitting(),
                            class: "w-full p-2 rounded-lg shadow bg-[#e8e4f4] focus:outline-none",
                            oninput: move |evt| {
                                checkout.set(evt.value());
                                error.set(None);
                            },
                        }
                    }

                    div { class: "flex flex-col gap-3 mt-6",
                        button {
                            r#type: "submit",
                            disabled: submitting(),
                            class: "w-full py-2 rounded-full bg-gradient-to-r from-[#FF66B2] to-[#FF3380] text-white font-semibold text-base shadow-xl hover:brightness-110 transition disabled:opacity-50",
                            if submitting() { "Salvando..." } else { "Salvar" }
                        }
                        button {
                            r#type: "button",
                            disabled: submitting(),
                            class: "w-full text-sm py-2 font-medium text-[#666] bg-[#F1EDF8] rounded-full hover:bg-[#e2dbee] transition shadow",
                            onclick: move |_| app.navigate(Page::Dashboard),
                            "Cancelar / Voltar"
                        }
                    }
                }
            }
        }
    }
}
