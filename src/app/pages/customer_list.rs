//! Registered customers listing.

use dioxus::prelude::*;

use super::{confirm, remove_by_id, LoadState};
use crate::app::api::resources::customers;
use crate::app::api::Customer;
use crate::app::components::Layout;
use crate::app::controller::use_app;
use crate::app::state::{EditTarget, Page};

#[component]
pub fn CustomerList() -> Element {
    let mut app = use_app();

    let mut items = use_signal(Vec::<Customer>::new);
    let mut load_state = use_signal(|| LoadState::Loading);
    let mut deleting = use_signal(|| None::<i64>);
    let mut page_error = use_signal(|| None::<String>);

    let mut load = use_future(move || async move {
        load_state.set(LoadState::Loading);
        match customers::list().await {
            Ok(list) => {
                items.set(list);
                load_state.set(LoadState::Loaded);
            }
            Err(err) => load_state.set(LoadState::Failed(err.to_string())),
        }
    });

    let mut delete = move |customer: Customer| {
        if !confirm(&format!("Deseja excluir {}?", customer.name)) {
            return;
        }
        deleting.set(Some(customer.id));
        page_error.set(None);
        spawn(async move {
            match customers::delete(customer.id).await {
                Ok(()) => remove_by_id(&mut items.write(), customer.id, |c| c.id),
                Err(err) => page_error.set(Some(format!("Erro ao excluir cliente: {err}"))),
            }
            deleting.set(None);
        });
    };

    let body = match load_state() {
        LoadState::Loading => rsx! {
            p { class: "text-[#555]", "Carregando clientes..." }
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
                    p { class: "text-[#555]", "Nenhum cliente cadastrado." }
                }
            } else {
                rsx! {
                    div { class: "grid gap-4 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3",
                        for customer in list {
                            CustomerCard {
                                key: "{customer.id}",
                                customer: customer.clone(),
                                deleting: deleting() == Some(customer.id),
                                on_edit: move |c: Customer| app.edit(EditTarget::Customer(c)),
                                on_delete: move |c: Customer| delete(c),
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            div { class: "max-w-6xl mx-auto w-full",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold text-[#1E1E1E] tracking-widest", "Clientes cadastrados" }
                    button {
                        class: "px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-purple-500 to-pink-500 rounded-full shadow-md hover:brightness-110 transition",
                        onclick: move |_| app.navigate(Page::CustomerForm),
                        "+ Novo Cliente"
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
fn CustomerCard(
    customer: Customer,
    deleting: bool,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    let edit_copy = customer.clone();
    let delete_copy = customer.clone();

    rsx! {
        div { class: "bg-white rounded-xl shadow p-4 flex flex-col justify-between",
            div {
                p { class: "text-[#1E1E1E] font-semibold mb-1", "{customer.name}" }
                p { class: "text-sm text-[#555]", "CPF: {customer.cpf}" }
                p { class: "text-sm text-[#555]", "E-mail: {customer.email}" }
                p { class: "text-sm text-[#555]", "Telefone: {customer.phone}" }
                if !customer.notes.is_empty() {
                    p { class: "text-sm text-[#555]", "Obs: {customer.notes}" }
                }
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
