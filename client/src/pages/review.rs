//! "Leave a review" page.

use leptos::prelude::*;

#[component]
pub fn ReviewPage() -> impl IntoView {
    view! {
        <div class="page">
            <main class="main">
                <h1 class="title">"Leave a review"</h1>
            </main>
        </div>
    }
}
