//! Restaurant search page.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use crate::components::{Button, ButtonType, Input, InputType, Link};

/// Path of a restaurant's detail page, with the name percent-encoded.
#[must_use]
pub fn restaurant_href(name: &str) -> String {
    format!("/restaurant/{}", urlencoding::encode(name))
}

#[component]
pub fn SearchPage(
    #[prop(into, optional)] query: String,
    #[prop(optional)] results: Vec<String>,
) -> impl IntoView {
    let searched = !query.trim().is_empty();
    let empty = results.is_empty();

    view! {
        <div class="page">
            <main class="main">
                <h1 class="title">"Search for a restaurant"</h1>
                <form class="form" method="get" action="/search">
                    <Input label="Restaurant" input_type=InputType::Search name="q" value=query />
                    <Button label="Search" button_type=ButtonType::Submit />
                </form>
                {(searched && empty).then(|| view! { <p class="message">"No restaurants found."</p> })}
                <ul class="results">
                    {results
                        .into_iter()
                        .map(|name| {
                            let href = restaurant_href(&name);
                            view! {
                                <li>
                                    <Link label=name href=href />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </main>
        </div>
    }
}
