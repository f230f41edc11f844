use crate::configs::ServiceConfig;
use crate::error::IngestError;
use crate::experian::ExtractOptions;
use crate::ingest::ingest_report;
use crate::runtime::logging::{log_event, LogLevel};
use crate::runtime::store::ReportStore;
use axum::{
    extract::{DefaultBodyLimit, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub struct AppState {
    pub store: Arc<dyn ReportStore>,
    pub options: ExtractOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadParams {
    pub file_name: Option<String>,
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

fn is_valid_id(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}

async fn handle_upload(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UploadParams>,
    body: String,
) -> Response {
    if body.trim().is_empty() {
        return message(StatusCode::BAD_REQUEST, "No file uploaded");
    }

    let file_name = params.file_name.unwrap_or_default().trim().to_string();
    if !file_name.to_ascii_lowercase().ends_with(".xml") {
        return message(StatusCode::BAD_REQUEST, "Only XML files are allowed");
    }
    log_event(
        LogLevel::Debug,
        "upload_received",
        Some(json!({ "fileName": file_name, "bytes": body.len() })),
    );

    let report = match ingest_report(body, file_name.clone(), state.options).await {
        Ok(report) => report,
        Err(IngestError::Parse(details)) => {
            log_event(
                LogLevel::Warn,
                "upload_rejected_invalid_xml",
                Some(json!({ "fileName": file_name, "error": details })),
            );
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "Invalid XML", "details": details })),
            )
                .into_response();
        }
        Err(IngestError::Validation(details)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid report", "details": details })),
            )
                .into_response();
        }
    };

    match state.store.insert(report).await {
        Ok(stored) => {
            log_event(
                LogLevel::Info,
                "report_saved",
                Some(json!({ "id": stored.id, "accounts": stored.report.accounts.len() })),
            );
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "File processed and saved successfully",
                    "reportId": stored.id,
                })),
            )
                .into_response()
        }
        Err(err) => {
            log_event(
                LogLevel::Error,
                "report_save_failed",
                Some(json!({ "error": err })),
            );
            message(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save report")
        }
    }
}

async fn handle_list(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list().await {
        Ok(listings) => Json(listings).into_response(),
        Err(err) => {
            log_event(LogLevel::Error, "report_list_failed", Some(json!({ "error": err })));
            message(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch reports")
        }
    }
}

async fn handle_get(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    if !is_valid_id(&id) {
        return message(StatusCode::BAD_REQUEST, "Invalid ID");
    }
    match state.store.get(&id).await {
        Ok(Some(stored)) => Json(stored).into_response(),
        Ok(None) => message(StatusCode::NOT_FOUND, "Report not found"),
        Err(err) => {
            log_event(LogLevel::Error, "report_fetch_failed", Some(json!({ "id": id, "error": err })));
            message(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch report")
        }
    }
}

async fn handle_delete(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    if !is_valid_id(&id) {
        log_event(LogLevel::Warn, "delete_invalid_id", Some(json!({ "id": id })));
        return message(StatusCode::BAD_REQUEST, "Invalid ID");
    }
    match state.store.delete(&id).await {
        Ok(true) => {
            log_event(LogLevel::Info, "report_deleted", Some(json!({ "id": id })));
            Json(json!({ "message": "Report deleted successfully", "id": id })).into_response()
        }
        Ok(false) => message(StatusCode::NOT_FOUND, "Report not found"),
        Err(err) => {
            log_event(LogLevel::Error, "report_delete_failed", Some(json!({ "id": id, "error": err })));
            message(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete report")
        }
    }
}

async fn handle_health() -> &'static str {
    "ok"
}

pub fn build_router(store: Arc<dyn ReportStore>, config: &ServiceConfig) -> Router {
    let state = Arc::new(AppState {
        store,
        options: config.extract_options(),
    });

    Router::new()
        .route("/api/reports/upload", post(handle_upload))
        .route("/api/reports", get(handle_list))
        .route("/api/reports/{id}", get(handle_get).delete(handle_delete))
        .fallback(handle_health)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(state)
}
