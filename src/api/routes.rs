//! Axum router and handlers for the generation API

use crate::api::error_response::ApiError;
use crate::api::types::{GenerateRequest, GenerateSummary};
use crate::application::latest::LatestResult;
use crate::domain::generator::RecordGenerator;
use crate::domain::record::GeneratedBatch;
use crate::domain::rng::StdRngSource;
use crate::render::series::RecordSeries;
use crate::render::xml;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

/// Shared state for the API handlers
#[derive(Clone)]
pub struct ApiState {
    pub latest: LatestResult,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/generate", post(generate_records))
        .route("/api/records/concurrent.xml", get(concurrent_xml))
        .route("/api/records/denial.xml", get(denial_xml))
        .route("/api/records/series", get(record_series))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[instrument(skip_all)]
async fn generate_records(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateSummary>, ApiError> {
    let config = request.into_config()?;
    let records = RecordGenerator::new(StdRngSource::from_entropy()).generate(&config)?;
    let batch = GeneratedBatch::new(records);
    let summary = GenerateSummary::from(&batch);

    info!(
        generation_id = %batch.id,
        total_records = summary.total_records,
        concurrent_records = summary.concurrent_records,
        denial_records = summary.denial_records,
        "generated record batch"
    );
    state.latest.store(batch);

    Ok(Json(summary))
}

async fn concurrent_xml(State(state): State<ApiState>) -> Result<Response, ApiError> {
    let batch = state.latest.load().ok_or(ApiError::NoGeneratedRecords)?;
    Ok(xml_download(
        "concurrent_records.xml",
        xml::concurrent_records_xml(batch.concurrent()),
    ))
}

async fn denial_xml(State(state): State<ApiState>) -> Result<Response, ApiError> {
    let batch = state.latest.load().ok_or(ApiError::NoGeneratedRecords)?;
    Ok(xml_download(
        "denial_records.xml",
        xml::denial_records_xml(batch.denial()),
    ))
}

async fn record_series(State(state): State<ApiState>) -> Result<Json<RecordSeries>, ApiError> {
    let batch = state.latest.load().ok_or(ApiError::NoGeneratedRecords)?;
    Ok(Json(RecordSeries::from_batch(&batch)))
}

fn xml_download(filename: &str, document: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/xml".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        document,
    )
        .into_response()
}
