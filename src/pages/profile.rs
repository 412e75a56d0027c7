use leptos::prelude::*;

/// Profile placeholder (requires a session).
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
        </div>
    }
}
