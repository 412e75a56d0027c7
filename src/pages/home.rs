//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Health Risk Predictor"</h1>
            <nav class="home-page__links">
                <a href="/predict">"Predict"</a>
                <a href="/history">"History"</a>
                <a href="/profile">"Profile"</a>
                <a href="/login">"Sign in"</a>
            </nav>
        </div>
    }
}
