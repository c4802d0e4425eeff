//! Web API module for Tonematch.
//!
//! This module provides the REST API consumed by the web frontend,
//! covering color recommendations, product and outfit catalogs, and
//! capture sessions with skin tone classification.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /data/` - Paginated makeup products (optional ?mst=, ?page=, ?limit=)
//! - `GET /api/random-outfits` - Random outfit sample (optional ?limit=)
//! - `GET /api/colors/{hex}` - Color recommendations (optional ?context=)
//! - `POST /api/sessions` - Create a capture session
//! - `GET /api/sessions/{id}` - Fetch a session
//! - `PUT /api/sessions/{id}` - Retake: replace the session image
//! - `DELETE /api/sessions/{id}` - Delete a session
//! - `POST /api/sessions/{id}/classify` - Run skin tone classification

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::capture::{CaptureSource, CapturedImage};
use crate::catalog::{
    paginate, OutfitCatalog, Page, ProductCatalog, DEFAULT_OUTFIT_SAMPLE, DEFAULT_PAGE_LIMIT,
};
use crate::classifier::ToneClassifier;
use crate::config::Config;
use crate::error::Error;
use crate::matcher::{self, Context, Tier};
use crate::models::{OutfitRecord, ProductRecord, Swatch};
use crate::session::{SessionSnapshot, SessionStore};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Product catalog, when one was loaded at startup
    products: Option<Arc<ProductCatalog>>,
    /// Outfit catalog, when one was loaded at startup
    outfits: Option<Arc<OutfitCatalog>>,
    /// Live capture sessions
    sessions: Arc<SessionStore>,
    /// Classification backend
    classifier: Arc<dyn ToneClassifier>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        config: Config,
        products: Option<ProductCatalog>,
        outfits: Option<OutfitCatalog>,
        classifier: Arc<dyn ToneClassifier>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            products: products.map(Arc::new),
            outfits: outfits.map(Arc::new),
            sessions: Arc::new(SessionStore::new()),
            classifier,
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
    /// Whether a classifier endpoint is configured.
    pub classifier_configured: bool,
}

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// Monk skin tone tag to filter by (exact, case-insensitive).
    pub mst: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size, clamped server-side.
    pub limit: Option<usize>,
}

/// Query parameters for the outfit sample.
#[derive(Debug, Deserialize)]
pub struct OutfitQuery {
    /// Number of outfits to sample.
    pub limit: Option<usize>,
}

/// Random outfit sample response.
#[derive(Debug, Serialize)]
pub struct OutfitSampleResponse {
    /// The sampled outfits.
    pub data: Vec<OutfitRecord>,
    /// Size of the sample.
    pub total_items: usize,
}

/// Outfit failure response.
///
/// The established client treats any non-200 from this endpoint as a network
/// fault and retries, so catalog failures are reported in-band.
#[derive(Debug, Serialize)]
pub struct OutfitErrorResponse {
    /// What went wrong.
    pub error: String,
}

/// Query parameters for color recommendations.
#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    /// Recommendation context ("general" or "outfit").
    pub context: Option<String>,
}

/// Color recommendation response.
#[derive(Debug, Serialize)]
pub struct ColorRecommendationResponse {
    /// Normalized form of the queried color.
    pub input: String,
    /// Closest Monk scale index (1-10).
    pub monk_index: u8,
    /// Tier the index falls in.
    pub tier: Tier,
    /// Context the bundle was selected for.
    pub context: Context,
    /// Colors to recommend.
    pub recommended: &'static [Swatch],
    /// Colors to avoid.
    pub avoid: &'static [Swatch],
}

/// Session creation request.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// The captured image as a `data:image/...;base64,...` URL.
    #[serde(rename = "capturedImage")]
    pub captured_image: String,
    /// Where the image came from; defaults to the camera.
    #[serde(default)]
    pub source: CaptureSource,
}

/// Retake request: same body as creation.
pub type RetakeRequest = CreateSessionRequest;

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Maps a library error to the HTTP status and payload it should produce.
fn error_response(err: &Error) -> (StatusCode, Json<ApiError>) {
    let status = match err {
        Error::InvalidColorFormat { .. }
        | Error::EmptyCapture
        | Error::UnsupportedEncoding { .. }
        | Error::CameraAccessDenied
        | Error::CameraNotFound
        | Error::CameraInUse => StatusCode::BAD_REQUEST,
        Error::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        Error::ClassificationUnavailable { .. } => StatusCode::BAD_GATEWAY,
        Error::RecommendationUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(ApiError::with_details(err.user_message(), err.to_string())),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        classifier_configured: state.config.classifier.endpoint.is_some(),
    })
}

/// GET /data/ - Paginated makeup products.
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Page<ProductRecord>>, (StatusCode, Json<ApiError>)> {
    let catalog = state.products.as_ref().ok_or_else(|| {
        error_response(&Error::recommendation("no product catalog loaded", None))
    })?;

    let matches = catalog.query(query.mst.as_deref());
    let page = paginate(
        &matches,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );

    Ok(Json(page))
}

/// GET /api/random-outfits - Random outfit sample.
///
/// Failures are reported with HTTP 200 and an `error` field; see
/// [`OutfitErrorResponse`].
async fn random_outfits(
    State(state): State<AppState>,
    Query(query): Query<OutfitQuery>,
) -> Json<serde_json::Value> {
    let limit = query.limit.unwrap_or(DEFAULT_OUTFIT_SAMPLE);

    let sample = state
        .outfits
        .as_ref()
        .ok_or_else(|| Error::recommendation("no outfit catalog loaded", None))
        .and_then(|catalog| catalog.sample(limit));

    match sample {
        Ok(data) => {
            let total_items = data.len();
            Json(serde_json::json!(OutfitSampleResponse { data, total_items }))
        }
        Err(err) => Json(serde_json::json!(OutfitErrorResponse {
            error: err.user_message(),
        })),
    }
}

/// GET /api/colors/{hex} - Color recommendations for a skin tone color.
async fn color_recommendations(
    Path(hex): Path<String>,
    Query(query): Query<ColorQuery>,
) -> Result<Json<ColorRecommendationResponse>, (StatusCode, Json<ApiError>)> {
    let context: Context = match query.context.as_deref() {
        Some(raw) => raw
            .parse()
            .map_err(|e: String| (StatusCode::BAD_REQUEST, Json(ApiError::new(e))))?,
        None => Context::default(),
    };

    let color =
        crate::models::RgbColor::from_hex(&hex).map_err(|e| error_response(&e))?;
    let monk_index = matcher::nearest_reference_index(&hex).map_err(|e| error_response(&e))?;
    let tier = Tier::for_index(monk_index);
    let bundle = matcher::bundle_for(tier, context);

    Ok(Json(ColorRecommendationResponse {
        input: color.to_hex(),
        monk_index,
        tier,
        context,
        recommended: bundle.recommended,
        avoid: bundle.avoid,
    }))
}

/// POST /api/sessions - Create a capture session.
async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), (StatusCode, Json<ApiError>)> {
    let image = CapturedImage::from_data_url(&request.captured_image, request.source)
        .map_err(|e| error_response(&e))?;

    let snapshot = state.sessions.create(image);
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/sessions/{id} - Fetch a session.
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, (StatusCode, Json<ApiError>)> {
    let snapshot = state.sessions.get(id).map_err(|e| error_response(&e))?;
    Ok(Json(snapshot))
}

/// PUT /api/sessions/{id} - Retake: replace the image, clearing any analysis.
async fn retake_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RetakeRequest>,
) -> Result<Json<SessionSnapshot>, (StatusCode, Json<ApiError>)> {
    let image = CapturedImage::from_data_url(&request.captured_image, request.source)
        .map_err(|e| error_response(&e))?;

    let snapshot = state
        .sessions
        .retake(id, image)
        .map_err(|e| error_response(&e))?;
    Ok(Json(snapshot))
}

/// DELETE /api/sessions/{id} - Delete a session.
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    state.sessions.clear(id).map_err(|e| error_response(&e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/{id}/classify - Run skin tone classification.
///
/// On failure the session is left untouched, so the client can retry or
/// retake without losing the captured image. The capture generation taken
/// before the classifier call lets the store discard a result that belongs
/// to an image a concurrent retake has already replaced.
async fn classify_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, (StatusCode, Json<ApiError>)> {
    let (image, generation) = state.sessions.capture(id).map_err(|e| error_response(&e))?;

    let analysis = state
        .classifier
        .classify(&image)
        .await
        .map_err(|e| error_response(&e))?;

    let snapshot = state
        .sessions
        .set_analysis(id, generation, analysis)
        .map_err(|e| error_response(&e))?;
    Ok(Json(snapshot))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // The server is designed to run locally alongside the frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog endpoints
        .route("/data/", get(list_products))
        .route("/api/random-outfits", get(random_outfits))
        // Color recommendations
        .route("/api/colors/{hex}", get(color_recommendations))
        // Session endpoints
        .route("/api/sessions", axum::routing::post(create_session))
        .route(
            "/api/sessions/{id}",
            get(get_session).put(retake_session).delete(delete_session),
        )
        .route(
            "/api/sessions/{id}/classify",
            axum::routing::post(classify_session),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);

    info!("Starting Tonematch web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
