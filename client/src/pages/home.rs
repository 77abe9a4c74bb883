//! Public landing page.

use leptos::prelude::*;

use crate::components::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <main class="main">
                <h1 class="title">"Restaurant Notes"</h1>
                <p>"Keep track of your favorite restaurants and dining experiences"</p>

                <div class="ctas">
                    <Link label="Get Started" href="/dashboard" class="primary" />
                    <Link label="Search Restaurants" href="/search" class="secondary" />
                </div>

                <div class="ctas">
                    <Link label="Login" href="/auth" class="secondary" />
                </div>
            </main>
        </div>
    }
}
