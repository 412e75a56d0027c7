//! Login page. Sign-in itself is handled by the hosted auth provider.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <p class="login-page__hint">"Sign in to run predictions and view your history."</p>
        </div>
    }
}
