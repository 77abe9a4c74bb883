//! Email + password sign-in / sign-up page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::components::{Button, ButtonType, Input, InputType, Link};

/// Path of the login route; the form posts back to it.
pub const AUTH_PATH: &str = "/auth";
/// Where sign-out lands: the login route with a confirmation notice.
pub const SIGNED_OUT_HREF: &str = "/auth?status=signed-out";

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Create Account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }

    /// Link target that switches to the other mode.
    #[must_use]
    pub fn toggle_href(self) -> &'static str {
        match self {
            Self::SignIn => "/auth?mode=sign-up",
            Self::SignUp => AUTH_PATH,
        }
    }
}

/// Trim the submitted credentials and require both to be present.
///
/// The password keeps inner and edge whitespace; only an all-blank password
/// is rejected.
///
/// # Errors
///
/// Returns the inline message to show when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Notice shown for a `?status=` value on the login route.
#[must_use]
pub fn status_message(status: &str) -> Option<&'static str> {
    match status {
        "signed-out" => Some("You have been signed out."),
        _ => None,
    }
}

#[component]
pub fn AuthPage(
    #[prop(optional)] mode: AuthMode,
    #[prop(into, optional)] email: String,
    #[prop(optional_no_strip)] error: Option<String>,
    #[prop(optional_no_strip)] message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="page">
            <main class="main">
                <h1 class="title">"Restaurant Notes"</h1>
                <h2 class="subtitle">{mode.subtitle()}</h2>

                {error.map(|error| view! { <div class="error" role="alert">{error}</div> })}
                {message.map(|message| view! { <div class="message">{message}</div> })}

                <form class="form" method="post" action=AUTH_PATH>
                    <input type="hidden" name="mode" value=mode.as_str() />
                    <Input
                        label="Email"
                        input_type=InputType::Email
                        name="email"
                        value=email
                        placeholder="you@example.com"
                        required=true
                    />
                    <Input
                        label="Password"
                        input_type=InputType::Password
                        name="password"
                        placeholder="••••••••"
                        required=true
                    />
                    <Button label=mode.submit_label() button_type=ButtonType::Submit />
                </form>

                <Link label=mode.toggle_label() href=mode.toggle_href() class="toggle-button" />
            </main>
        </div>
    }
}
