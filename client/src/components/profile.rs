//! Placeholder profile picture shown on the dashboard.

use leptos::prelude::*;

use super::Image;

pub const PROFILE_PLACEHOLDER_SRC: &str = "https://placehold.co/500x500";
pub const PROFILE_PLACEHOLDER_ALT: &str = "Placeholder image";
const PROFILE_SIZE: u32 = 500;

#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <Image
            src=PROFILE_PLACEHOLDER_SRC
            alt=PROFILE_PLACEHOLDER_ALT
            width=PROFILE_SIZE
            height=PROFILE_SIZE
        />
    }
}
