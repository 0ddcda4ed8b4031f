//! Room create/edit form.

use dioxus::prelude::*;

use crate::app::api::resources::rooms;
use crate::app::api::{RoomPayload, RoomStatus, RoomType};
use crate::app::components::{Layout, TextField};
use crate::app::controller::use_app;
use crate::app::state::Page;
use crate::app::validate;

#[component]
pub fn RoomForm() -> Element {
    let mut app = use_app();
    let editing = app.editing_room();
    let editing_id = editing.as_ref().map(|r| r.id);
    let is_edit = editing_id.is_some();
    // Edits keep the room's current occupancy; new rooms start available.
    let mut status = use_signal(|| {
        editing
            .as_ref()
            .map(|r| r.status)
            .unwrap_or(RoomStatus::Available)
    });

    let mut number = use_signal(|| editing.as_ref().map(|r| r.number.clone()).unwrap_or_default());
    let mut rate = use_signal(|| {
        editing
            .as_ref()
            .map(|r| format!("{:.2}", r.daily_rate))
            .unwrap_or_default()
    });
    let mut room_type = use_signal(|| {
        editing
            .as_ref()
            .map(|r| r.room_type.as_str().to_string())
            .unwrap_or_default()
    });
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Edits start from fresh backend state; the list copy seeds the form and
    // is replaced once the fetch lands.
    use_future(move || async move {
        let Some(id) = editing_id else { return };
        match rooms::get(id).await {
            Ok(fresh) => {
                number.set(fresh.number);
                rate.set(format!("{:.2}", fresh.daily_rate));
                room_type.set(fresh.room_type.as_str().to_string());
                status.set(fresh.status);
            }
            Err(err) => tracing::debug!(%err, "room refresh failed, keeping list copy"),
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        error.set(None);

        let number_value = number.peek().clone();
        let rate_value = rate.peek().clone();
        let type_value = room_type.peek().clone();
        if let Err(msg) = validate::required(&[&number_value, &rate_value, &type_value]) {
            error.set(Some(msg));
            return;
        }
        let daily_rate = match validate::daily_rate(&rate_value) {
            Ok(value) => value,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let Some(parsed_type) = RoomType::parse(&type_value) else {
            error.set(Some("Selecione o tipo de quarto.".to_string()));
            return;
        };

        let payload = RoomPayload {
            id: editing_id.unwrap_or(0),
            number: number_value,
            room_type: parsed_type,
            daily_rate,
            status: *status.peek(),
        };

        submitting.set(true);
        spawn(async move {
            let result = match editing_id {
                Some(id) => rooms::update(id, &payload).await.map(|_| ()),
                None => rooms::create(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => app.navigate(Page::RoomList),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let title = if is_edit { "Editar quarto" } else { "Novo quarto" };
    let hint = if is_edit { "editar" } else { "adicionar" };

    rsx! {
        Layout {
            div { class: "w-full max-w-2xl mx-auto",
                h1 { class: "text-2xl font-bold tracking-widest text-[#1E1E1E] mb-1", "{title}" }
                hr { class: "my-4 border-t border-gray-300" }
                p { class: "text-sm text-[#333] mb-6",
                    "Preencha os detalhes abaixo para {hint} um quarto"
                }

                if let Some(msg) = error() {
                    div { class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm",
                        "{msg}"
                    }
                }

                form { class: "space-y-5", onsubmit: submit,
                    TextField {
                        label: "Número do quarto",
                        value: number(),
                        disabled: submitting(),
                        placeholder: "ex, 101",
                        oninput: move |evt: FormEvent| {
                            number.set(evt.value());
                            error.set(None);
                        },
                    }
                    TextField {
                        label: "Valor da diária",
                        value: rate(),
                        input_type: "number",
                        disabled: submitting(),
                        placeholder: "ex, 150.00",
                        oninput: move |evt: FormEvent| {
                            rate.set(evt.value());
                            error.set(None);
                        },
                    }

                    div {
                        label { class: "block font-bold text-[#1E1E1E] mb-1",
                            "Tipo do quarto "
                            span { class: "text-red-500", "*" }
                        }
                        select {
                            value: "{room_type}",
                            disabled: submitting(),
                            class: "w-full px-4 py-2 rounded-lg bg-[#E5E2F5] shadow-md text-[#1E1E1E] focus:outline-none",
                            onchange: move |evt| {
                                room_type.set(evt.value());
                                error.set(None);
                            },
                            option { value: "", "Selecione o tipo de quarto" }
                            for t in RoomType::ALL {
                                option { value: t.as_str(), {t.as_str()} }
                            }
                        }
                    }

                    div { class: "flex flex-col gap-3 mt-6",
                        button {
                            r#type: "submit",
                            disabled: submitting(),
                            class: "w-full py-2 rounded-full bg-gradient-to-r from-[#FF66B2] to-[#FF3380] text-white font-semibold text-base shadow-xl hover:brightness-110 transition disabled:opacity-50",
                            if submitting() {
                                "Salvando..."
                            } else if is_edit {
                                "Salvar alterações"
                            } else {
                                "Salvar"
                            }
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
