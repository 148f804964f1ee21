use super::super::{Model, Msg, Page};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_sidebar(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <aside class="sidebar">
            <h2>{"🎛️ Navigation"}</h2>
            { render_navigation(model, ctx) }
            <hr />
            { render_quick_stats(model) }
            <hr />
            { render_sample_data(model, ctx) }
        </aside>
    }
}

fn render_navigation(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <fieldset class="navigation">
            <legend>{"Select Feature:"}</legend>
            { for Page::ALL.iter().map(|&page| {
                html! {
                    <label key={page.title()}>
                        <input
                            type="radio"
                            name="page"
                            checked={model.page == page}
                            onchange={ctx.link().callback(move |_| Msg::SelectPage(page))}
                        />
                        { page.title() }
                    </label>
                }
            })}
        </fieldset>
    }
}

fn render_quick_stats(model: &Model) -> Html {
    let stats = &model.stats;
    html! {
        <div class="quick-stats">
            <h2>{"📊 Quick Stats"}</h2>
            <div class="metric">
                <span class="metric-label">{"Model Accuracy"}</span>
                <span class="metric-value">{ &stats.model_accuracy }</span>
            </div>
            <div class="metric">
                <span class="metric-label">{"Features Used"}</span>
                <span class="metric-value">{ stats.features_used.to_string() }</span>
            </div>
            <div class="metric">
                <span class="metric-label">{"Training Data"}</span>
                <span class="metric-value">{ &stats.training_data }</span>
            </div>
        </div>
    }
}

fn render_sample_data(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    html! {
        <div class="sample-data">
            <button
                class="analyze-btn"
                onclick={debounce(300, move || link.send_message(Msg::LoadSample))}
            >
                {"🧪 Test with Sample Data"}
            </button>
            {
                match (&model.sample, model.sample_unavailable) {
                    (_, true) => html! { <p class="error-message">{"Sample data not available"}</p> },
                    (Some(sample), false) => html! {
                        <pre class="sample-json">
                            { serde_json::to_string_pretty(sample).unwrap_or_default() }
                        </pre>
                    },
                    (None, false) => html! {},
                }
            }
        </div>
    }
}
