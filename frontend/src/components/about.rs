use yew::prelude::*;

/// Renders the about page
pub fn render_about_page() -> Html {
    html! {
        <section class="about">
            <h2>{"ℹ️ About Medical Data Analyzer"}</h2>
            <div class="columns">
                <div>
                    <div class="feature-card">
                        <h4>{"🎯 Purpose"}</h4>
                        <p>{"This application combines machine learning with a web interface to provide disease risk prediction and a preview of medical document analysis."}</p>
                    </div>
                    <div class="feature-card">
                        <h4>{"🔬 Technology"}</h4>
                        <ul>
                            <li>{"External diabetes prediction service"}</li>
                            <li>{"Yew WebAssembly interface"}</li>
                            <li>{"Actix Web backend"}</li>
                        </ul>
                    </div>
                </div>
                <div>
                    <div class="feature-card">
                        <h4>{"📋 Features"}</h4>
                        <ul>
                            <li>{"Diabetes risk prediction"}</li>
                            <li>{"Medical document analysis (preview)"}</li>
                            <li>{"Personalized recommendations"}</li>
                        </ul>
                    </div>
                    <div class="feature-card">
                        <h4>{"🔒 Privacy"}</h4>
                        <p>{"Patient data is only used to answer the current request. Nothing is stored."}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
