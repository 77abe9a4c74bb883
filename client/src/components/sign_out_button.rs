//! Sign-out control.
//!
//! Sign-out is a state change, so it is a `POST` form rather than a link; the
//! server destroys the session and redirects to the login route.

use leptos::prelude::*;

use super::{Button, ButtonType};

/// Form action handled by the server's sign-out route.
pub const SIGN_OUT_ACTION: &str = "/auth/sign-out";

#[component]
pub fn SignOutButton() -> impl IntoView {
    view! {
        <form class="sign-out" method="post" action=SIGN_OUT_ACTION>
            <Button label="Sign Out" button_type=ButtonType::Submit />
        </form>
    }
}
