use leptos::prelude::*;

/// Past predictions placeholder (requires a session).
#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <div class="history-page">
            <h1>"History"</h1>
        </div>
    }
}
