mod api;
mod components;

use components::predictor_form::Field;
use shared::{DisplayBundle, DocumentSummary, ErrorResponse, PatientRecord, QuickStats};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Prediction,
    Documents,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Prediction, Page::Documents, Page::About];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Prediction => "🩺 Diabetes Prediction",
            Page::Documents => "📄 Document Analysis",
            Page::About => "ℹ️ About",
        }
    }
}

// Yew msg components
pub enum Msg {
    // Navigation
    SelectPage(Page),

    // Prediction
    FieldChanged(Field, String),
    Predict,
    PredictionReady(DisplayBundle),

    // Sidebar
    StatsLoaded(QuickStats),
    LoadSample,
    SampleReady(PatientRecord),
    SampleUnavailable,

    // Documents
    DocumentSelected(Option<File>),
    AnalyzeDocument,
    DocumentAnalyzed(DocumentSummary),

    // UI states
    SetError(Option<ErrorResponse>),
    ToggleTheme,
}

// Main component
pub struct Model {
    page: Page,
    record: PatientRecord,
    bundle: Option<DisplayBundle>,
    loading: bool,
    error: Option<ErrorResponse>,
    stats: QuickStats,
    sample: Option<PatientRecord>,
    sample_unavailable: bool,
    document: Option<File>,
    document_summary: Option<DocumentSummary>,
    theme: String,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(stats) => link.send_message(Msg::StatsLoaded(stats)),
                Err(e) => log::warn!("Quick stats unavailable: {}", e.error),
            }
        });

        Self {
            page: Page::Prediction,
            record: PatientRecord::default(),
            bundle: None,
            loading: false,
            error: None,
            stats: QuickStats::default(),
            sample: None,
            sample_unavailable: false,
            document: None,
            document_summary: None,
            theme: "light".to_string(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectPage(page) => {
                self.page = page;
                self.error = None;
                true
            }

            Msg::FieldChanged(field, raw) => field.apply(&mut self.record, &raw),
            Msg::Predict => self.handle_predict(ctx),
            Msg::PredictionReady(bundle) => {
                self.bundle = Some(bundle);
                self.loading = false;
                true
            }

            Msg::StatsLoaded(stats) => {
                self.stats = stats;
                true
            }
            Msg::LoadSample => self.handle_load_sample(ctx),
            Msg::SampleReady(record) => {
                self.sample = Some(record);
                self.sample_unavailable = false;
                true
            }
            Msg::SampleUnavailable => {
                self.sample = None;
                self.sample_unavailable = true;
                true
            }

            Msg::DocumentSelected(file) => {
                self.document = file;
                self.document_summary = None;
                self.error = None;
                true
            }
            Msg::AnalyzeDocument => self.handle_analyze_document(ctx),
            Msg::DocumentAnalyzed(summary) => {
                self.document_summary = Some(summary);
                self.loading = false;
                true
            }

            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
            Msg::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header() }
                { components::theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <div class="layout">
                    { components::sidebar::render_sidebar(self, ctx) }

                    <main class="main-content">
                    {
                        match self.page {
                            Page::Prediction => components::predictor_form::render_predictor(self, ctx),
                            Page::Documents => components::document_section::render_document_analyzer(self, ctx),
                            Page::About => components::about::render_about_page(),
                        }
                    }
                    </main>
                </div>

                <footer class="app-footer">
                    <p>{"Medical Data Analyzer | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_predict(&mut self, ctx: &Context<Self>) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.bundle = None;

        let record = self.record.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::predict(&record).await {
                Ok(bundle) => link.send_message(Msg::PredictionReady(bundle)),
                Err(e) => {
                    gloo_console::error!(format!("Prediction failed: {}", e.error));
                    link.send_message(Msg::SetError(Some(e)));
                }
            }
        });
        true
    }

    fn handle_load_sample(&mut self, ctx: &Context<Self>) -> bool {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_sample().await {
                Ok(record) => link.send_message(Msg::SampleReady(record)),
                Err(e) => {
                    log::warn!("Sample data unavailable: {}", e.error);
                    link.send_message(Msg::SampleUnavailable);
                }
            }
        });
        false
    }

    fn handle_analyze_document(&mut self, ctx: &Context<Self>) -> bool {
        let Some(file) = self.document.clone() else {
            ctx.link().send_message(Msg::SetError(Some(ErrorResponse {
                error: "No document selected for analysis.".to_string(),
                hint: None,
            })));
            return false;
        };

        self.loading = true;
        self.error = None;
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::analyze_document(&file).await {
                Ok(summary) => link.send_message(Msg::DocumentAnalyzed(summary)),
                Err(e) => link.send_message(Msg::SetError(Some(e))),
            }
        });
        true
    }

    fn handle_toggle_theme(&mut self) -> bool {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return false;
        };

        let next = next_theme(&self.theme);
        let classes = body.class_list();
        let applied = if next == "dark" {
            classes.add_1("dark-mode")
        } else {
            classes.remove_1("dark-mode")
        };

        match applied {
            Ok(()) => {
                self.theme = next.to_string();
                true
            }
            Err(e) => {
                log::warn!("Could not switch to {} theme: {:?}", next, e);
                false
            }
        }
    }
}

fn next_theme(current: &str) -> &'static str {
    if current == "light" { "dark" } else { "light" }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_alternates() {
        assert_eq!(next_theme("light"), "dark");
        assert_eq!(next_theme("dark"), "light");
        assert_eq!(next_theme(next_theme("light")), "light");
    }
}
