use crate::common::{load_fixture, FailingReportStore};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use bureau_ingest::configs::ServiceConfig;
use bureau_ingest::runtime::store::MemoryReportStore;
use bureau_ingest::server::build_router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(MemoryReportStore::new()), &ServiceConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/xml")
        .body(body.into())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn upload(app: &Router, file_name: &str, xml: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/api/reports/upload?fileName={file_name}"),
        xml.to_string(),
    )
    .await
}

#[tokio::test]
async fn test_upload_then_fetch_report() {
    let app = app();
    let (status, body) = upload(&app, "ravi.xml", &load_fixture("inprofile_full.xml")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "File processed and saved successfully");
    let id = body["reportId"].as_str().expect("reportId should be a string").to_string();

    let (status, report) = send(&app, Method::GET, &format!("/api/reports/{id}"), Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["id"], id.as_str());
    assert_eq!(report["fileName"], "ravi.xml");
    assert_eq!(report["basicDetails"]["name"], "Ravi Sharma");
    assert_eq!(report["accounts"].as_array().map(Vec::len), Some(3));
    assert!(report["uploadedAt"].is_string());
}

#[tokio::test]
async fn test_list_returns_projections_newest_first() {
    let app = app();
    let (_, first) = upload(&app, "anita.xml", &load_fixture("experian_simple.xml")).await;
    let (_, second) = upload(&app, "ravi.xml", &load_fixture("inprofile_full.xml")).await;

    let (status, listing) = send(&app, Method::GET, "/api/reports", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    let items = listing.as_array().expect("listing should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], second["reportId"]);
    assert_eq!(items[1]["id"], first["reportId"]);
    assert_eq!(items[1]["basicDetails"]["pan"], "PQRSD6789Z");
    assert!(items[0].get("accounts").is_none());
    assert!(items[0].get("summary").is_none());
}

#[tokio::test]
async fn test_upload_rejects_missing_or_non_xml_files() {
    let app = app();

    let (status, body) = upload(&app, "report.xml", "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No file uploaded");

    let (status, body) = upload(&app, "report.pdf", "<Report/>").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Only XML files are allowed");

    let (status, _) = send(&app, Method::POST, "/api/reports/upload", "<Report/>".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_accepts_uppercase_extension() {
    let app = app();
    let (status, _) = upload(&app, "REPORT.XML", "<Report><Accounts/></Report>").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_upload_malformed_xml_is_unprocessable() {
    let app = app();
    let (status, body) = upload(&app, "broken.xml", &load_fixture("malformed.xml")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Invalid XML");
    assert!(body["details"].is_string());

    let (_, listing) = send(&app, Method::GET, "/api/reports", Body::empty()).await;
    assert_eq!(listing.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_get_and_delete_validate_ids() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/reports/not-an-id", Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid ID");

    let missing = "3f2b8c1e-4d5a-4b6c-8d7e-9f0a1b2c3d4e";
    let (status, body) = send(&app, Method::GET, &format!("/api/reports/{missing}"), Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Report not found");

    let (status, _) = send(&app, Method::DELETE, "/api/reports/42", Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_removes_report() {
    let app = app();
    let (_, created) = upload(&app, "anita.xml", &load_fixture("experian_simple.xml")).await;
    let id = created["reportId"].as_str().unwrap().to_string();
    let uri = format!("/api/reports/{id}");

    let (status, body) = send(&app, Method::DELETE, &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Report deleted successfully");
    assert_eq!(body["id"], id.as_str());

    let (status, _) = send(&app, Method::GET, &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failures_surface_as_server_errors() {
    let app = build_router(Arc::new(FailingReportStore), &ServiceConfig::default());

    let (status, body) = upload(&app, "anita.xml", &load_fixture("experian_simple.xml")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to save report");

    let (status, _) = send(&app, Method::GET, "/api/reports", Body::empty()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_upload_over_body_limit_is_rejected() {
    let config = ServiceConfig {
        max_upload_bytes: 64,
        ..ServiceConfig::default()
    };
    let app = build_router(Arc::new(MemoryReportStore::new()), &config);

    let (status, _) = upload(&app, "big.xml", &load_fixture("inprofile_full.xml")).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_unknown_path_answers_health_check() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}
