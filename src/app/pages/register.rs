//! Registration screen. On success the new user is logged straight in
//! (ephemeral session, same as the original flow).

use dioxus::prelude::*;

use crate::app::api::resources::auth;
use crate::app::controller::use_app;
use crate::app::state::Page;
use crate::app::validate;

#[component]
pub fn Register() -> Element {
    let mut app = use_app();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        error.set(None);

        let name_value = name.peek().clone();
        let email_value = email.peek().clone();
        let password_value = password.peek().clone();
        if let Err(msg) = validate::required(&[&name_value, &email_value, &password_value]) {
            error.set(Some(msg));
            return;
        }
        if let Err(msg) = validate::password(&password_value) {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match auth::register(&name_value, &email_value, &password_value).await {
                Ok(user) => app.register_login(user),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "min-h-screen w-full flex items-center justify-center bg-[#E5E2F5] px-4",
            div { class: "w-full max-w-md rounded-[28px] bg-[#f8f8f8] shadow-lg p-8 pt-10 text-center",
                h1 { class: "font-bold text-2xl text-black", "Admin Stay" }
                p { class: "text-[13px] text-[#212121] opacity-60 mb-8",
                    "Crie sua conta para começar."
                }

                h2 { class: "tracking-[0.2em] text-[#212121] text-sm font-semibold mb-4", "CADASTRO" }

                if let Some(msg) = error() {
                    div { class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm",
                        "{msg}"
                    }
                }

                form { class: "space-y-4", onsubmit: submit,
                    input {
                        r#type: "text",
                        placeholder: "NOME",
                        value: "{name}",
                        disabled: submitting(),
                        class: "w-full bg-white rounded-full px-4 py-2 shadow text-sm focus:outline-none text-[#212121] placeholder-[#A49A9A]",
                        oninput: move |evt| {
                            name.set(evt.value());
                            error.set(None);
                        },
                    }
                    input {
                        r#type: "email",
                        placeholder: "E-MAIL",
                        value: "{email}",
                        disabled: submitting(),
                        class: "w-full bg-white rounded-full px-4 py-2 shadow text-sm focus:outline-none text-[#212121] placeholder-[#A49A9A]",
                        oninput: move |evt| {
                            email.set(evt.value());
                            error.set(None);
                        },
                    }
                    input {
                        r#type: "password",
                        placeholder: "SENHA (mín. 6 caracteres)",
                        value: "{password}",
                        disabled: submitting(),
                        class: "w-full bg-white rounded-full px-4 py-2 shadow text-sm focus:outline-none text-[#212121] placeholder-[#A49A9A]",
                        oninput: move |evt| {
                            password.set(evt.value());
                            error.set(None);
                        },
                    }

                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        class: "mt-6 w-full bg-[#FF5C8A] text-white py-2 rounded-full shadow-md font-semibold text-sm disabled:opacity-50 disabled:cursor-not-allowed",
                        if submitting() { "Cadastrando..." } else { "Cadastrar" }
                    }
                }

                p { class: "mt-4 text-[12px] text-[#212121] opacity-60",
                    "Já tem uma conta? "
                    button {
                        class: "text-[#FF5C8A] font-semibold",
                        disabled: submitting(),
                        onclick: move |_| app.navigate(Page::Login),
                        "Entrar"
                    }
                }
            }
        }
    }
}
