use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="main-header">
            <h1>{"🏥 Medical Data Analyzer"}</h1>
            <p class="subtitle">{"AI-Powered Medical Document Analysis & Disease Prediction Platform"}</p>
        </header>
    }
}
