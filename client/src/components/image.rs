//! `<img>` primitive.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use leptos::prelude::*;

/// Pick the source actually rendered: a non-empty override wins.
#[must_use]
pub fn effective_src(src: String, override_src: Option<String>) -> String {
    override_src.filter(|o| !o.is_empty()).unwrap_or(src)
}

#[component]
pub fn Image(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(into, optional)] override_src: Option<String>,
    #[prop(into, optional)] test_id: Option<String>,
) -> impl IntoView {
    view! {
        <img
            src=effective_src(src, override_src)
            alt=alt
            width=width.map(|w| w.to_string())
            height=height.map(|h| h.to_string())
            data-testid=test_id
        />
    }
}
