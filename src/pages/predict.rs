use leptos::prelude::*;

/// Prediction form placeholder (requires a session).
#[component]
pub fn PredictPage() -> impl IntoView {
    view! {
        <div class="predict-page">
            <h1>"Predict"</h1>
        </div>
    }
}
