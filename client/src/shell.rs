//! HTML document shell shared by every page.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

/// Stylesheet served by the server from its static directory.
pub const STYLESHEET_HREF: &str = "/static/app.css";
/// Icon font referenced by every page.
pub const ICON_FONT_HREF: &str = "https://fonts.googleapis.com/icon?family=Material+Icons";

/// Render `body` inside a complete HTML document titled `title`.
pub fn render_document(title: &str, body: impl IntoView + 'static) -> String {
    let title = format!("{title} | Restaurant Notes");
    let html = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href=STYLESHEET_HREF />
                <link rel="stylesheet" href=ICON_FONT_HREF />
            </head>
            <body>{body}</body>
        </html>
    }
    .to_html();
    format!("<!DOCTYPE html>{html}")
}
