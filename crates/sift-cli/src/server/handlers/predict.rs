//! Column prediction handler.

use std::path::PathBuf;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for column prediction.
#[derive(Deserialize)]
pub struct PredictionRequest {
    /// Path to the data file.
    pub file_path: PathBuf,
    /// Name of the column to classify.
    pub column_name: String,
}

/// Response for a column prediction.
#[derive(Serialize)]
pub struct PredictionResponse {
    pub success: bool,
    /// Winning label, e.g. "Phone Number".
    pub classification: String,
    /// Fraction of sampled values matching the label.
    pub confidence: f64,
    pub column: String,
    pub file: PathBuf,
}

/// Classify one column of a data file.
pub async fn column_prediction(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let (classification, _) = state
        .engine
        .classify_file(&request.file_path, &request.column_name)?;

    Ok(Json(PredictionResponse {
        success: true,
        classification: classification.label.as_str().to_string(),
        confidence: classification.confidence,
        column: request.column_name,
        file: request.file_path,
    }))
}
