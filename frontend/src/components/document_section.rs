use super::super::{Model, Msg};
use super::utils::{debounce, render_error_message};
use shared::{upload_notice, DocumentKind};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Renders the document analysis interface
pub fn render_document_analyzer(model: &Model, ctx: &Context<Model>) -> Html {
    let handle_change = ctx.link().callback(|e: Event| {
        let file = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.item(0));
        Msg::DocumentSelected(file)
    });

    html! {
        <section class="document-analyzer">
            <h2>{"📄 Medical Document Analysis"}</h2>
            <div class="info-message">
                <p>{"📝 Note: Document analysis is a placeholder interface; uploaded files are not read."}</p>
            </div>

            <label class="upload-area" title="Upload medical reports, lab results, or clinical notes">
                <span>{"Upload Medical Document"}</span>
                <input
                    type="file"
                    id="document-input"
                    accept={DocumentKind::accept_attribute()}
                    onchange={handle_change}
                />
                <p class="file-types">{"Supported formats: PDF, TXT, DOCX"}</p>
            </label>

            { render_selected_document(model, ctx) }
            { render_error_message(model) }
            { render_summary(model) }
        </section>
    }
}

fn render_selected_document(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(file) = &model.document else {
        return html! {};
    };
    let link = ctx.link().clone();

    html! {
        <>
            <div class="success-message">
                <p>{ upload_notice(&file.name()) }</p>
            </div>
            <button
                class="analyze-btn primary"
                disabled={model.loading}
                onclick={debounce(300, move || link.send_message(Msg::AnalyzeDocument))}
            >
                { if model.loading { "Analyzing document..." } else { "Analyze Document" } }
            </button>
        </>
    }
}

fn render_summary(model: &Model) -> Html {
    let Some(summary) = &model.document_summary else {
        return html! {};
    };

    html! {
        <div class="feature-card">
            <h4>{"📊 Analysis Summary"}</h4>
            <p><strong>{"Document Type: "}</strong>{ &summary.document_type }</p>
            <p><strong>{"Key Findings: "}</strong>{ &summary.key_findings }</p>
            <p><strong>{"Critical Alerts: "}</strong>{ &summary.critical_alerts }</p>
            <p><strong>{"Recommendations: "}</strong>{ &summary.recommendations }</p>
        </div>
    }
}
