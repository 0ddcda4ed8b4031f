//! Labeled text input used by the entity forms.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: &'static str,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(default = "text")]
    pub input_type: &'static str,
    #[props(default = "")]
    pub placeholder: &'static str,
    #[props(default = true)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let TextFieldProps {
        label,
        value,
        oninput,
        input_type,
        placeholder,
        required,
        disabled,
    } = props;

    rsx! {
        div {
            label { class: "block font-bold text-[#1E1E1E] mb-1",
                "{label} "
                if required {
                    span { class: "text-red-500", "*" }
                }
            }
            input {
                r#type: input_type,
                value: "{value}",
                placeholder,
                disabled,
                oninput: move |evt| oninput.call(evt),
                class: "w-full px-4 py-2 rounded-lg bg-[#E5E2F5] shadow-md placeholder:text-[#888] text-[#1E1E1E] focus:outline-none",
            }
        }
    }
}
