//! Form controls shared by the filter bars, dialogs and auth pages

use dioxus::prelude::*;

/// Props for the TextField component
#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    #[props(default = None)]
    pub label: Option<String>,
    /// Input type (text, password, email, number)
    #[props(default = "text".to_string(), into)]
    pub input_type: String,
    pub value: String,
    #[props(default = String::new(), into)]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    pub oninput: EventHandler<String>,
}

/// Labelled text input
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let oninput = props.oninput;

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }
            input {
                r#type: "{props.input_type}",
                class: "form-input w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |evt| oninput.call(evt.value())
            }
        }
    }
}

/// Props for the TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    #[props(default = None)]
    pub label: Option<String>,
    pub value: String,
    #[props(default = String::new(), into)]
    pub placeholder: String,
    #[props(default = 4)]
    pub rows: u32,
    pub oninput: EventHandler<String>,
}

/// Labelled multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let oninput = props.oninput;

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: false }
            }
            textarea {
                class: "form-textarea w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent resize-none",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                rows: "{props.rows}",
                oninput: move |evt| oninput.call(evt.value())
            }
        }
    }
}

/// Props for the Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    #[props(default = None)]
    pub label: Option<String>,
    pub value: String,
    /// (value, label) pairs
    pub options: Vec<(String, String)>,
    /// Leading option with an empty value, e.g. "All Genders"
    #[props(default = None)]
    pub empty_option: Option<String>,
    pub onchange: EventHandler<String>,
}

/// Labelled dropdown. Selecting the empty option yields `""`.
#[component]
pub fn Select(props: SelectProps) -> Element {
    let onchange = props.onchange;

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: false }
            }
            select {
                class: "form-select w-full px-3 py-2 border border-gray-300 rounded-md sm:text-sm",
                value: "{props.value}",
                onchange: move |evt| onchange.call(evt.value()),
                if let Some(empty) = &props.empty_option {
                    option { value: "", selected: props.value.is_empty(), "{empty}" }
                }
                for (value, label) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.value,
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
fn FieldLabel(text: String, required: bool) -> Element {
    rsx! {
        label { class: "block text-xs font-medium text-gray-500 mb-1.5",
            "{text}"
            if required {
                span { class: "text-red-500", " *" }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Props for the Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    pub children: Element,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Disables the button and shows `loading_label` instead of the children
    #[props(default = false)]
    pub loading: bool,
    #[props(default = "Saving...".to_string(), into)]
    pub loading_label: String,
    /// Button type (button, submit)
    #[props(default = "button".to_string(), into)]
    pub button_type: String,
    #[props(default = EventHandler::default())]
    pub onclick: EventHandler<MouseEvent>,
}

/// Button with variants and a busy state
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let is_disabled = props.disabled || props.loading;
    let class = props.variant.class();
    let onclick = props.onclick;

    rsx! {
        button {
            r#type: "{props.button_type}",
            class: "{class}",
            disabled: is_disabled,
            onclick: move |evt| {
                if !is_disabled {
                    onclick.call(evt)
                }
            },
            if props.loading {
                span { class: "btn-spinner" }
                "{props.loading_label}"
            } else {
                {props.children}
            }
        }
    }
}
