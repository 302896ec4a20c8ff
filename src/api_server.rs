// Axum API Server Module
//
// Purpose: JSON endpoints over a single shared UsageEstimator
// The estimator is immutable after start-up, so handlers share it without locks.

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use serde::Deserialize;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::config::EstimatorConfig;

#[cfg(feature = "api")]
use crate::error::EstimatorError;

#[cfg(feature = "api")]
use crate::estimator::{UsageEstimator, SAMPLE_PREVIEW_ROWS};

#[cfg(feature = "api")]
use crate::report::{ChartData, Estimate, EstimateOptions, ModelSummary};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<UsageEstimator>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: EstimatorConfig) -> anyhow::Result<Self> {
        let estimator = UsageEstimator::new(config)?;
        Ok(Self {
            estimator: Arc::new(estimator),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/estimate", get(get_estimate))
        .route("/api/model", get(get_model))
        .route("/api/sample", get(get_sample))
        .route("/api/chart", get(get_chart))
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    pub residents: u32,
    #[serde(default)]
    pub sample: bool,
    #[serde(default)]
    pub chart: bool,
}

#[cfg(feature = "api")]
async fn get_estimate(
    State(state): State<AppState>,
    query: Result<Query<EstimateQuery>, QueryRejection>,
) -> Result<Json<Estimate>, AppError> {
    let Query(query) = query?;
    let options = EstimateOptions {
        show_sample: query.sample,
        show_chart: query.chart,
        ..EstimateOptions::default()
    };
    let estimate = state.estimator.estimate_with(query.residents, options)?;
    Ok(Json(estimate))
}

#[cfg(feature = "api")]
async fn get_model(State(state): State<AppState>) -> Json<ModelSummary> {
    Json(state.estimator.model_summary())
}

#[cfg(feature = "api")]
#[derive(Debug, Deserialize)]
pub struct SampleQuery {
    pub limit: Option<usize>,
}

#[cfg(feature = "api")]
async fn get_sample(
    State(state): State<AppState>,
    query: Result<Query<SampleQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(query) = query?;
    let total = state.estimator.sample().len();
    let limit = query.limit.unwrap_or(SAMPLE_PREVIEW_ROWS).min(total);
    let rows = state.estimator.sample_preview(limit);

    Ok(Json(serde_json::json!({
        "rows": rows.len(),
        "total": total,
        "data": rows,
    })))
}

#[cfg(feature = "api")]
async fn get_chart(State(state): State<AppState>) -> Json<ChartData> {
    Json(state.estimator.chart_data())
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<EstimatorError> for AppError {
    fn from(err: EstimatorError) -> Self {
        if err.is_invalid_input() {
            AppError::BadRequest(err.to_string())
        } else {
            tracing::error!(error = %err, "Estimate failed");
            AppError::Internal(err.to_string())
        }
    }
}

// Missing or malformed query parameters get the same JSON body as invalid values
#[cfg(feature = "api")]
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
