//! Plain `<button>` primitive.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

/// Value of the `type` attribute on a rendered button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
        }
    }
}

#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional)] disabled: bool,
    #[prop(into, optional)] name: Option<String>,
    #[prop(into, optional)] value: Option<String>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] test_id: Option<String>,
) -> impl IntoView {
    view! {
        <button
            type=button_type.as_str()
            class=class
            name=name
            value=value
            disabled=disabled
            data-testid=test_id
        >
            {label}
        </button>
    }
}
