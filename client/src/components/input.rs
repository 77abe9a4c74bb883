//! Labelled `<input>` primitive.
//!
//! DESIGN
//! ======
//! The label is always bound to the input through `for`/`id`. When the caller
//! supplies neither an id nor a name, the id is derived from the label so two
//! differently-labelled inputs on one page never collide.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

/// Supported values for the input `type` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Search,
}

impl InputType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
        }
    }
}

/// Resolve the element id: explicit `id`, then `name`, then `input-<label>`.
///
/// The label is lower-cased and every run of whitespace becomes one `-`.
#[must_use]
pub fn input_id(id: Option<&str>, name: Option<&str>, label: &str) -> String {
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        return id.to_owned();
    }
    if let Some(name) = name.filter(|name| !name.is_empty()) {
        return name.to_owned();
    }

    let mut slug = String::with_capacity(label.len());
    let mut in_space = false;
    for ch in label.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(ch);
            in_space = false;
        }
    }
    format!("input-{slug}")
}

#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into, optional)] value: String,
    #[prop(optional)] input_type: InputType,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] read_only: bool,
    #[prop(into, optional)] name: Option<String>,
    #[prop(into, optional)] id: Option<String>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] test_id: Option<String>,
) -> impl IntoView {
    let resolved_id = input_id(id.as_deref(), name.as_deref(), &label);

    view! {
        <div class=class>
            <label for=resolved_id.clone()>
                {label}
                {required.then(|| view! { <span aria-label="required">" *"</span> })}
            </label>
            <input
                type=input_type.as_str()
                value=value
                placeholder=placeholder
                disabled=disabled
                required=required
                readonly=read_only
                name=name
                id=resolved_id
                data-testid=test_id
            />
        </div>
    }
}
