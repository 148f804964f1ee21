use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde_json::json;
use shared::{ErrorResponse, PatientRecord};
use uuid::Uuid;

use crate::assessment::RiskAssessor;
use crate::config::AppConfig;
use crate::documents;
use crate::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/stats").route(web::get().to(stats)))
        .service(web::resource("/api/predict").route(web::post().to(predict)))
        .service(web::resource("/api/sample").route(web::get().to(sample)))
        .service(
            web::resource("/api/documents/analyze").route(web::post().to(analyze_document)),
        );
}

/// Malformed or incomplete form bodies answer with the same JSON error
/// shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected prediction request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: format!("Invalid patient record: {}", err),
            hint: None,
        });
        InternalError::from_response(err, response).into()
    })
}

async fn health(assessor: web::Data<RiskAssessor>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "predictor": assessor.predictor_name(),
        "time": chrono::Utc::now(),
    }))
}

async fn stats(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(&config.stats)
}

async fn predict(
    assessor: web::Data<RiskAssessor>,
    record: web::Json<PatientRecord>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let record = record.into_inner();

    if let Err(e) = record.validate() {
        warn!("[{}] Rejected patient record: {}", request_id, e);
        return Err(e.into());
    }

    info!(
        "[{}] Prediction requested: age={}, bmi={:.1}, glucose={}, family_history={}",
        request_id,
        record.age,
        record.bmi,
        record.glucose_level,
        record.has_family_history()
    );

    let bundle = assessor.assess(&record).await?;
    info!(
        "[{}] Prediction complete: {} ({})",
        request_id, bundle.diagnosis, bundle.tier_label
    );

    Ok(HttpResponse::Ok()
        .insert_header((REQUEST_ID_HEADER, request_id.to_string()))
        .json(bundle))
}

async fn sample(assessor: web::Data<RiskAssessor>) -> Result<HttpResponse, ApiError> {
    let record = assessor.sample().await?;
    Ok(HttpResponse::Ok().json(record))
}

async fn analyze_document(
    config: web::Data<AppConfig>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let document = documents::read_first_file(&mut payload, config.documents.max_size_bytes)
        .await
        .inspect_err(|e| warn!("Document upload rejected: {}", e))?;

    Ok(HttpResponse::Ok().json(documents::analyze(&document)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::tests::{non_diabetic, StubPredictor};
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use shared::{DisplayBundle, DocumentSummary, QuickStats, RiskTier};
    use std::sync::Arc;

    const BOUNDARY: &str = "----riskform";

    fn multipart_body(file_name: &str, contents: &str) -> String {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"document\"; filename=\"{f}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n{c}\r\n--{b}--\r\n",
            b = BOUNDARY,
            f = file_name,
            c = contents
        )
    }

    fn form_request(body: String) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/documents/analyze")
            .insert_header((
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    fn document_request(file_name: &str, contents: &str) -> test::TestRequest {
        form_request(multipart_body(file_name, contents))
    }

    macro_rules! app {
        ($stub:expr, $config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(RiskAssessor::new(Arc::new($stub))))
                    .app_data(web::Data::new($config))
                    .configure(configure_api),
            )
            .await
        };
        ($stub:expr) => {
            app!($stub, AppConfig::default())
        };
    }

    #[actix_web::test]
    async fn predict_returns_display_bundle() {
        let app = app!(StubPredictor::answering(non_diabetic()));
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(PatientRecord::default())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

        let bundle: DisplayBundle = test::read_body_json(resp).await;
        assert_eq!(bundle.tier, RiskTier::Low);
        assert_eq!(bundle.tier_label, "Low Risk");
        assert_eq!(bundle.confidence, "84.0%");
        assert_eq!(bundle.risk_score, "30.0%");
        assert_eq!(bundle.recommendations, ["1. Maintain current diet"]);
    }

    #[actix_web::test]
    async fn predictor_failure_is_service_unavailable() {
        let app = app!(StubPredictor::failing());
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(PatientRecord::default())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("Error making prediction"));
        assert!(body.hint.unwrap().contains("PREDICTOR_URL"));
    }

    #[actix_web::test]
    async fn out_of_range_record_is_rejected_before_prediction() {
        let app = app!(StubPredictor::answering(non_diabetic()));
        let record = PatientRecord {
            stress_level: 9,
            ..PatientRecord::default()
        };
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(record)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("stress_level"));
    }

    #[actix_web::test]
    async fn incomplete_record_is_a_json_bad_request() {
        let app = app!(StubPredictor::answering(non_diabetic()));
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({ "age": 45, "bmi": 25.0 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("Invalid patient record"));
    }

    #[actix_web::test]
    async fn sample_endpoint() {
        let app = app!(StubPredictor::answering(non_diabetic()));
        let req = test::TestRequest::get().uri("/api/sample").to_request();
        let record: PatientRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record, PatientRecord::default());

        let app = app!(StubPredictor::failing());
        let req = test::TestRequest::get().uri("/api/sample").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Sample data not available");
        assert_eq!(body.hint, None);
    }

    #[actix_web::test]
    async fn health_and_stats() {
        let app = app!(StubPredictor::failing());

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health["status"], "ok");
        assert_eq!(health["predictor"], "stub");

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let stats: QuickStats = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stats.features_used, 9);
    }

    #[actix_web::test]
    async fn document_summary_ignores_contents() {
        let app = app!(StubPredictor::failing());

        let req = document_request("labs.pdf", "%PDF-1.4 glucose 310 mg/dL").to_request();
        let first: DocumentSummary = test::call_and_read_body_json(&app, req).await;
        let req = document_request("notes.txt", "nothing remarkable").to_request();
        let second: DocumentSummary = test::call_and_read_body_json(&app, req).await;

        assert_eq!(first.file_name, "labs.pdf");
        assert_eq!(first.document_type, "Medical Report");
        assert_eq!(first.key_findings, second.key_findings);
        assert_eq!(second.critical_alerts, "None detected");
    }

    #[actix_web::test]
    async fn empty_document_still_gets_summary() {
        let app = app!(StubPredictor::failing());
        let req = document_request("empty.txt", "").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let summary: DocumentSummary = test::read_body_json(resp).await;
        assert_eq!(summary, DocumentSummary::placeholder("empty.txt"));
    }

    #[actix_web::test]
    async fn text_fields_before_the_file_are_skipped() {
        let app = app!(StubPredictor::failing());
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nfollow-up visit\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"document\"; filename=\"visit.docx\"\r\n\
             Content-Type: application/octet-stream\r\n\r\ncontents\r\n--{b}--\r\n",
            b = BOUNDARY
        );
        let req = form_request(body).to_request();

        let summary: DocumentSummary = test::call_and_read_body_json(&app, req).await;
        assert_eq!(summary.file_name, "visit.docx");
    }

    #[actix_web::test]
    async fn form_without_file_is_rejected() {
        let app = app!(StubPredictor::failing());
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nno attachment\r\n--{b}--\r\n",
            b = BOUNDARY
        );
        let req = form_request(body).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "No document was uploaded");
    }

    #[actix_web::test]
    async fn truncated_multipart_body_is_rejected() {
        let app = app!(StubPredictor::failing());
        let req = form_request(format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"document\"; filename=\"cut.pdf\"\r\n\r\n%PDF",
            b = BOUNDARY
        ))
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("Malformed upload"));
    }

    #[actix_web::test]
    async fn document_with_unsupported_type_is_rejected() {
        let app = app!(StubPredictor::failing());
        let req = document_request("scan.png", "binary").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("scan.png"));
    }

    #[actix_web::test]
    async fn oversized_document_is_rejected() {
        let mut config = AppConfig::default();
        config.documents.max_size_bytes = 8;
        let app = app!(StubPredictor::failing(), config);

        let req = document_request("report.docx", "far more than eight bytes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
