//! Integration tests for the Tonematch Web API.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

use tonematch::capture::CapturedImage;
use tonematch::catalog::{OutfitCatalog, ProductCatalog};
use tonematch::classifier::{ClassifyFuture, ToneClassifier, UnconfiguredClassifier};
use tonematch::config::Config;
use tonematch::error::Error;
use tonematch::models::ToneClassification;
use tonematch::web::{create_router, AppState};

const JPEG_DATA_URL: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

/// Classifier that always succeeds with a fixed result.
struct FixedClassifier;

impl ToneClassifier for FixedClassifier {
    fn classify<'a>(&'a self, _image: &'a CapturedImage) -> ClassifyFuture<'a> {
        Box::pin(async {
            Ok(ToneClassification {
                label: "Monk 5".to_string(),
                derived_hex: "#c9a178".to_string(),
                matched_hex: "#d7bd96".to_string(),
            })
        })
    }
}

/// Classifier that always fails with a retryable service error.
struct FailingClassifier;

impl ToneClassifier for FailingClassifier {
    fn classify<'a>(&'a self, _image: &'a CapturedImage) -> ClassifyFuture<'a> {
        Box::pin(async { Err(Error::classification("upstream timed out")) })
    }
}

/// Writes catalog fixtures with deliberately mixed field names.
fn write_catalog_fixtures(temp_dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let products = json!([
        {"product": "Silk Liquid Foundation", "brand": "Arbelle", "price": "$24.99", "imgSrc": "https://img.example/f.jpg", "mst": "Monk 3"},
        {"product_name": "Velvet Lipstick", "Brand": "Tonal", "Price": "$18.50", "image_url": "https://img.example/l.jpg", "mst": "Monk 3"},
        {"Product Name": "Hydra Makeup Primer", "mst": "Monk 7"},
        {"product": "Matte Lipstick Duo"},
        {"product": "Garden Trowel", "brand": "Toolco"}
    ]);
    let outfits = json!([
        {"Product Name": "Linen Shirt", "Price": "$19.99", "Image URL": "https://img.example/s.jpg", "Product Type": "shirt"},
        {"Product Name": "Denim Jacket", "Price": "$49.99", "Image URL": "https://img.example/j.jpg", "Product Type": "jacket"},
        {"Product Name": "Summer Dress", "Price": "$39.99", "Image URL": "https://img.example/d.jpg", "Product Type": "dress"}
    ]);

    let products_path = temp_dir.path().join("products.json");
    let outfits_path = temp_dir.path().join("outfits.json");
    fs::write(&products_path, serde_json::to_string_pretty(&products).unwrap()).unwrap();
    fs::write(&outfits_path, serde_json::to_string_pretty(&outfits).unwrap()).unwrap();

    (products_path, outfits_path)
}

/// Creates a test AppState with catalogs loaded and a fixed classifier.
fn create_test_state(classifier: Arc<dyn ToneClassifier>) -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (products_path, outfits_path) = write_catalog_fixtures(&temp_dir);

    let products = ProductCatalog::load(&products_path).expect("Failed to load products");
    let outfits = OutfitCatalog::load(&outfits_path).expect("Failed to load outfits");

    let state = AppState::new(Config::default(), Some(products), Some(outfits), classifier);
    (state, temp_dir)
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a request with a JSON body.
async fn send_json(app: &axum::Router, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a bodyless request (POST/DELETE).
async fn send_empty(app: &axum::Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert_eq!(body["classifier_configured"], false);
}

#[tokio::test]
async fn test_health_reports_configured_classifier() {
    let mut config = Config::default();
    config.classifier.endpoint = Some("https://tone.example/api".to_string());
    let state = AppState::new(config, None, None, Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classifier_configured"], true);
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_list_products_filters_non_makeup() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/data/").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 4, "trowel must be filtered out: {body}");
    assert!(data.iter().all(|p| p["name"] != "Garden Trowel"));
    assert_eq!(body["total_items"], 4);
}

#[tokio::test]
async fn test_list_products_normalizes_fields_and_fallbacks() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (_, body) = get_json(&app, "/data/").await;
    let data = body["data"].as_array().unwrap();

    let foundation = data
        .iter()
        .find(|p| p["name"] == "Silk Liquid Foundation")
        .unwrap();
    assert_eq!(foundation["brand"], "Arbelle");
    assert_eq!(foundation["image_url"], "https://img.example/f.jpg");

    let primer = data
        .iter()
        .find(|p| p["name"] == "Hydra Makeup Primer")
        .unwrap();
    assert_eq!(primer["brand"], "Unknown");
    assert_eq!(primer["price"], "$29.99");
}

#[tokio::test]
async fn test_list_products_mst_filter() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/data/?mst=Monk%203").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 2);

    let (_, body) = get_json(&app, "/data/?mst=monk%203").await;
    assert_eq!(body["total_items"], 2, "mst filter is case-insensitive");

    let (status, body) = get_json(&app, "/data/?mst=Monk%209").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 0);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_products_pagination_clamps_limit() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (_, body) = get_json(&app, "/data/?page=1&limit=100").await;
    assert_eq!(body["limit"], 15);

    let (_, body) = get_json(&app, "/data/?page=2&limit=2").await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_pages"], 2);

    let (status, body) = get_json(&app, "/data/?page=99&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["total_items"], 4);
}

#[tokio::test]
async fn test_list_products_without_catalog_is_unavailable() {
    let state = AppState::new(Config::default(), None, None, Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/data/").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

// ============================================================================
// Outfits
// ============================================================================

#[tokio::test]
async fn test_random_outfits_sample() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/api/random-outfits?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 2);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    for outfit in data {
        assert!(outfit["Product Name"].is_string());
        assert!(outfit["Image URL"].is_string());
        assert!(outfit["Product Type"].is_string());
    }
}

#[tokio::test]
async fn test_random_outfits_limit_capped_at_catalog_size() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/api/random-outfits?limit=50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 3);
}

#[tokio::test]
async fn test_random_outfits_failure_is_http_200_with_error() {
    let state = AppState::new(Config::default(), None, None, Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/api/random-outfits").await;
    assert_eq!(status, StatusCode::OK, "failures are reported in-band");
    assert!(body["error"].is_string());
    assert!(body.get("data").is_none());
}

// ============================================================================
// Color recommendations
// ============================================================================

#[tokio::test]
async fn test_color_recommendations_lightest_tone() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/api/colors/FFF3E1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], "#FFF3E1");
    assert_eq!(body["monk_index"], 1);
    assert_eq!(body["tier"], "light");
    assert_eq!(body["context"], "general");
    assert_eq!(body["recommended"][0]["name"], "Coral Red");
}

#[tokio::test]
async fn test_color_recommendations_outfit_context() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/api/colors/FF5C00?context=outfit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["monk_index"], 10);
    assert_eq!(body["tier"], "deep");
    assert_eq!(body["context"], "outfit");
    assert_eq!(body["recommended"][0]["name"], "Gold");
}

#[tokio::test]
async fn test_color_recommendations_rejects_bad_input() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let (status, body) = get_json(&app, "/api/colors/notacolor").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get_json(&app, "/api/colors/FFF3E1?context=makeup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Sessions
// ============================================================================

#[tokio::test]
async fn test_session_create_and_get() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": JPEG_DATA_URL});
    let (status, created) = send_json(&app, "POST", "/api/sessions", &request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["capturedImage"], JPEG_DATA_URL);
    assert_eq!(created["source"], "camera");
    assert!(created["skinAnalysis"].is_null());

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get_json(&app, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
}

#[tokio::test]
async fn test_session_create_with_upload_source() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": JPEG_DATA_URL, "source": "upload"});
    let (status, created) = send_json(&app, "POST", "/api/sessions", &request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["source"], "upload");
}

#[tokio::test]
async fn test_session_create_rejects_bad_image() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": ""});
    let (status, _) = send_json(&app, "POST", "/api/sessions", &request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = json!({"capturedImage": "data:image/tiff;base64,AAAA"});
    let (status, body) = send_json(&app, "POST", "/api/sessions", &request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("tiff"));
}

#[tokio::test]
async fn test_session_classify_success() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": JPEG_DATA_URL});
    let (_, created) = send_json(&app, "POST", "/api/sessions", &request).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, classified) =
        send_empty(&app, "POST", &format!("/api/sessions/{id}/classify")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(classified["skinAnalysis"]["label"], "Monk 5");
    assert_eq!(classified["skinAnalysis"]["derived_hex"], "#c9a178");
    assert_eq!(classified["skinAnalysis"]["matched_hex"], "#d7bd96");
}

#[tokio::test]
async fn test_session_classify_failure_leaves_session_intact() {
    let (state, _temp) = create_test_state(Arc::new(FailingClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": JPEG_DATA_URL});
    let (_, created) = send_json(&app, "POST", "/api/sessions", &request).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send_empty(&app, "POST", &format!("/api/sessions/{id}/classify")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());

    // Session is still there, image unchanged, no analysis.
    let (status, fetched) = get_json(&app, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["capturedImage"], JPEG_DATA_URL);
    assert!(fetched["skinAnalysis"].is_null());
}

#[tokio::test]
async fn test_session_unconfigured_classifier_is_bad_gateway() {
    let (state, _temp) = create_test_state(Arc::new(UnconfiguredClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": JPEG_DATA_URL});
    let (_, created) = send_json(&app, "POST", "/api/sessions", &request).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send_empty(&app, "POST", &format!("/api/sessions/{id}/classify")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_session_retake_replaces_image_and_clears_analysis() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": JPEG_DATA_URL});
    let (_, created) = send_json(&app, "POST", "/api/sessions", &request).await;
    let id = created["id"].as_str().unwrap().to_string();

    send_empty(&app, "POST", &format!("/api/sessions/{id}/classify")).await;

    let retake = json!({"capturedImage": "data:image/png;base64,iVBORw0KGgo=", "source": "upload"});
    let (status, updated) = send_json(&app, "PUT", &format!("/api/sessions/{id}"), &retake).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["capturedImage"], "data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(updated["source"], "upload");
    assert!(
        updated["skinAnalysis"].is_null(),
        "retake must clear the previous analysis"
    );
}

#[tokio::test]
async fn test_session_delete() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let request = json!({"capturedImage": JPEG_DATA_URL});
    let (_, created) = send_json(&app, "POST", "/api/sessions", &request).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send_empty(&app, "DELETE", &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get_json(&app, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_unknown_id_is_not_found() {
    let (state, _temp) = create_test_state(Arc::new(FixedClassifier));
    let app = create_router(state);

    let id = "00000000-0000-4000-8000-000000000000";
    let (status, _) = get_json(&app, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_empty(&app, "DELETE", &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_empty(&app, "POST", &format!("/api/sessions/{id}/classify")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
