//! Anchor primitive.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use leptos::prelude::*;

/// Browsing context for a followed link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    Blank,
    SelfFrame,
    Parent,
    Top,
}

impl LinkTarget {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SelfFrame => "_self",
            Self::Parent => "_parent",
            Self::Top => "_top",
        }
    }
}

#[component]
pub fn Link(
    #[prop(into)] label: String,
    #[prop(into)] href: String,
    #[prop(optional)] target: Option<LinkTarget>,
    #[prop(into, optional)] rel: Option<String>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] test_id: Option<String>,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=target.map(LinkTarget::as_str)
            rel=rel
            class=class
            data-testid=test_id
        >
            {label}
        </a>
    }
}
