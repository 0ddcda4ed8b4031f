//! Customer create/edit form. Edit mode is driven solely by the presence of
//! a customer edit target in the app state.

use dioxus::prelude::*;

use crate::app::api::resources::customers;
use crate::app::api::CustomerPayload;
use crate::app::components::{Layout, TextField};
use crate::app::controller::use_app;
use crate::app::state::Page;
use crate::app::validate;

#[component]
pub fn CustomerForm() -> Element {
    let mut app = use_app();
    let editing = app.editing_customer();
    let editing_id = editing.as_ref().map(|c| c.id);
    let is_edit = editing_id.is_some();

    let mut name = use_signal(|| editing.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let mut cpf = use_signal(|| editing.as_ref().map(|c| c.cpf.clone()).unwrap_or_default());
    let mut email = use_signal(|| editing.as_ref().map(|c| c.email.clone()).unwrap_or_default());
    let mut phone = use_signal(|| editing.as_ref().map(|c| c.phone.clone()).unwrap_or_default());
    let mut notes = use_signal(|| editing.as_ref().map(|c| c.notes.clone()).unwrap_or_default());
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Edits start from fresh backend state; the list copy seeds the form and
    // is replaced once the fetch lands.
    use_future(move || async move {
        let Some(id) = editing_id else { return };
        match customers::get(id).await {
            Ok(fresh) => {
                name.set(fresh.name);
                cpf.set(fresh.cpf);
                email.set(fresh.email);
                phone.set(fresh.phone);
                notes.set(fresh.notes);
            }
            Err(err) => tracing::debug!(%err, "customer refresh failed, keeping list copy"),
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        error.set(None);

        let payload = CustomerPayload {
            name: name.peek().clone(),
            cpf: cpf.peek().clone(),
            email: email.peek().clone(),
            phone: phone.peek().clone(),
            notes: notes.peek().clone(),
        };
        if let Err(msg) =
            validate::required(&[&payload.name, &payload.cpf, &payload.email, &payload.phone])
        {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        spawn(async move {
            let result = match editing_id {
                Some(id) => customers::update(id, &payload).await.map(|_| ()),
                None => customers::create(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => app.navigate(Page::CustomerList),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let title = if is_edit { "Editar cliente" } else { "Novo cliente" };
    let hint = if is_edit { "editar" } else { "adicionar" };

    rsx! {
        Layout {
            div { class: "w-full max-w-2xl mx-auto",
                h1 { class: "text-2xl font-bold tracking-widest text-[#1E1E1E] mb-1", "{title}" }
                hr { class: "my-4 border-t border-gray-300" }
                p { class: "text-sm text-[#333] mb-6",
                    "Preencha os detalhes abaixo para {hint} um cliente"
                }

                if let Some(msg) = error() {
                    div { class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm",
                        "{msg}"
                    }
                }

                form { class: "space-y-4", onsubmit: submit,
                    TextField {
                        label: "Nome completo",
                        value: name(),
                        disabled: submitting(),
                        placeholder: "ex, Maria da Silva",
                        oninput: move |evt: FormEvent| {
                            name.set(evt.value());
                            error.set(None);
                        },
                    }
                    TextField {
                        label: "CPF",
                        value: cpf(),
                        disabled: submitting(),
                        placeholder: "000.000.000-00",
                        oninput: move |evt: FormEvent| {
                            cpf.set(validate::mask_cpf(&evt.value()));
                            error.set(None);
                        },
                    }
                    TextField {
                        label: "E-mail",
                        value: email(),
                        input_type: "email",
                        disabled: submitting(),
                        placeholder: "ex, maria@email.com",
                        oninput: move |evt: FormEvent| {
                            email.set(evt.value());
                            error.set(None);
                        },
                    }
                    TextField {
                        label: "Telefone",
                        value: phone(),
                        input_type: "tel",
                        disabled: submitting(),
                        placeholder: "ex, (11) 99999-0000",
                        oninput: move |evt: FormEvent| {
                            phone.set(evt.value());
                            error.set(None);
                        },
                    }

                    div {
                        label { class: "block font-bold text-[#1E1E1E] mb-1", "Observações" }
                        textarea {
                            value: "{notes}",
                            disabled: submitting(),
                            rows: "3",
                            class: "w-full px-4 py-2 rounded-lg bg-[#E5E2F5] shadow-md placeholder:text-[#888] text-[#1E1E1E] focus:outline-none",
                            oninput: move |evt| {
                                notes.set(evt.value());
                                error.set(None);
                            },
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
