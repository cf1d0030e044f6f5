//! API request handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::error::FilterError;
use crate::filter::{Email, SpamFilter, Verdict, VerdictLabel};

/// Shared application state
pub struct AppState {
    pub filter: SpamFilter,
}

/// Classification response body.
///
/// Confidence is rounded to two decimals here, at the boundary; the
/// pipeline decides on the unrounded probability.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub label: VerdictLabel,
    pub confidence: f64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl PredictResponse {
    pub fn from_verdict(verdict: Verdict, model_version: Option<&str>) -> Self {
        // Only model-layer verdicts carry an analysis, and only those
        // report which model produced them.
        let model_version = verdict
            .analysis
            .is_some()
            .then(|| model_version.map(str::to_string))
            .flatten();

        Self {
            label: verdict.label,
            confidence: round2(verdict.confidence),
            reason: verdict.reason,
            analysis: verdict.analysis,
            model_version,
        }
    }
}

/// Health/readiness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub trusted_domains: usize,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// POST /predict - Classify one email
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(email): Json<Email>,
) -> impl IntoResponse {
    match state.filter.classify(&email) {
        Ok(verdict) => (
            StatusCode::OK,
            Json(PredictResponse::from_verdict(
                verdict,
                state.filter.model_version(),
            )),
        )
            .into_response(),
        Err(FilterError::ModelUnavailable) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new("Model not loaded")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(&e.to_string())),
        )
            .into_response(),
    }
}

/// GET /health - Service and model status
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.filter.model_loaded(),
        model_version: state.filter.model_version().map(str::to_string),
        trusted_domains: state.filter.trusted_domain_count(),
    })
}
