//! Restaurant detail page listing its reviews.

use leptos::prelude::*;

use crate::components::Review;
use crate::types::Review as ReviewData;

#[component]
pub fn RestaurantPage(#[prop(into)] name: String, #[prop(optional)] reviews: Vec<ReviewData>) -> impl IntoView {
    let empty = reviews.is_empty();

    view! {
        <div class="page">
            <main class="main">
                <h1 class="title">{name}</h1>
                {empty.then(|| view! { <p class="message">"No reviews yet."</p> })}
                <ul class="reviews">
                    {reviews
                        .into_iter()
                        .map(|review| view! { <li><Review review=review /></li> })
                        .collect_view()}
                </ul>
            </main>
        </div>
    }
}
