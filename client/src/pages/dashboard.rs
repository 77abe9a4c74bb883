//! Signed-in landing page.

use leptos::prelude::*;

use crate::components::{Link, Profile, SignOutButton};
use crate::types::User;

#[component]
pub fn DashboardPage(user: User) -> impl IntoView {
    view! {
        <div class="page">
            <main class="main">
                <h1 class="title">"Dashboard"</h1>
                <p class="welcome">{format!("Welcome, {}!", user.email)}</p>
                <Profile />
                <div class="ctas">
                    <Link label="Search Restaurants" href="/search" class="secondary" />
                    <Link label="Leave a review" href="/review" class="secondary" />
                </div>
                <SignOutButton />
            </main>
        </div>
    }
}
