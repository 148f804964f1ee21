use super::super::Model;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(bundle) = &model.bundle else {
        return html! {};
    };
    let risk_width = format!("width: {:.1}%", bundle.risk_fraction * 100.0);

    html! {
        <>
            <div class={classes!("prediction-result", bundle.css_class.clone())}>
                <h3>{"Prediction Result"}</h3>
                <p><strong>{"Diagnosis: "}</strong>{ &bundle.diagnosis }</p>
                <p><strong>{"Risk Level: "}</strong>{ &bundle.tier_label }</p>
                <p><strong>{"Confidence: "}</strong>{ &bundle.confidence }</p>
                <div class="confidence-meter">
                    <div class="meter-label">{"Risk Score:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={risk_width}></div>
                    </div>
                    <div class="meter-value">{ &bundle.risk_score }</div>
                </div>
            </div>

            <div class="recommendations">
                <h3>{"📋 Personalized Recommendations"}</h3>
                {
                    if bundle.recommendations.is_empty() {
                        html! { <p class="no-results-message">{"No recommendations for this patient."}</p> }
                    } else {
                        html! {
                            <ul class="recommendation-list">
                                { for bundle.recommendations.iter().map(|line| html! { <li>{ line }</li> }) }
                            </ul>
                        }
                    }
                }
            </div>
        </>
    }
}
