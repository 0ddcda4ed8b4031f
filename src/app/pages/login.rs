//! Login screen.

use dioxus::prelude::*;

use crate::app::api::resources::auth;
use crate::app::controller::use_app;
use crate::app::state::Page;
use crate::app::validate;

#[component]
pub fn Login() -> Element {
    let mut app = use_app();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        error.set(None);

        let email_value = email.peek().clone();
        let password_value = password.peek().clone();
        if let Err(msg) = validate::required(&[&email_value, &password_value]) {
            error.set(Some(msg));
            return;
        }
        if let Err(msg) = validate::password(&password_value) {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        let remember_value = remember();
        spawn(async move {
            match auth::login(&email_value, &password_value).await {
                Ok(user) => app.login(user, remember_value),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "min-h-screen w-full flex items-center justify-center bg-[#f1edf9] px-4",
            div { class: "w-full max-w-md rounded-[28px] bg-[#f8f8f8] shadow-lg p-8 pt-10 text-center",
                h1 { class: "font-bold text-2xl text-black", "Admin Stay" }
                p { class: "text-[13px] text-[#212121] opacity-60 mb-8",
                    "Tecnologia que hospeda soluções."
                }

                h2 { class: "tracking-[0.2em] text-[#212121] text-sm font-semibold mb-4", "LOGIN" }

                if let Some(msg) = error() {
                    div { class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm",
                        "{msg}"
                    }
                }

                form { class: "space-y-4", onsubmit: submit,
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
                        placeholder: "**********",
                        value: "{password}",
                        disabled: submitting(),
                        class: "w-full bg-white rounded-full px-4 py-2 shadow text-sm focus:outline-none text-[#212121] placeholder-[#A49A9A]",
                        oninput: move |evt| {
                            password.set(evt.value());
                            error.set(None);
                        },
                    }

                    label { class: "flex items-center gap-1 text-xs text-[#212121] opacity-60",
                        input {
                            r#type: "checkbox",
                            checked: remember(),
                            disabled: submitting(),
                            onchange: move |_| remember.toggle(),
                        }
                        "Lembrar meu usuário"
                    }

                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        class: "mt-6 w-full bg-[#FF5C8A] text-white py-2 rounded-full shadow-md font-semibold text-sm disabled:opacity-50 disabled:cursor-not-allowed",
                        if submitting() { "Entrando..." } else { "Entrar" }
                    }
                }

                p { class: "mt-4 text-[12px] text-[#212121] opacity-60",
                    "Não tem uma conta? "
                    button {
                        class: "text-[#FF5C8A] font-semibold",
                        disabled: submitting(),
                        onclick: move |_| app.navigate(Page::Register),
                        "Cadastre-se"
                    }
                }
            }
        }
    }
}
