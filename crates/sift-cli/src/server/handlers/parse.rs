//! Parser and combined-process handlers.

use std::path::{Path, PathBuf};

use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for the parser and process endpoints.
#[derive(Deserialize)]
pub struct ParserRequest {
    /// Path to the input data file.
    pub file_path: PathBuf,
}

/// Response for a parser invocation.
#[derive(Serialize)]
pub struct ParserResponse {
    pub success: bool,
    /// Where the augmented table was written.
    pub output_file: PathBuf,
    /// Original name of the selected Phone Number column.
    pub phone_column: Option<String>,
    /// Original name of the selected Company Name column.
    pub company_column: Option<String>,
    pub rows_processed: usize,
}

/// One column's prediction in the combined process response.
#[derive(Serialize)]
pub struct PredictionEntry {
    pub classification: String,
    pub confidence: f64,
}

/// Response for the combined process endpoint.
#[derive(Serialize)]
pub struct ProcessResponse {
    pub file: PathBuf,
    /// Per-column classifications in original column order.
    pub predictions: IndexMap<String, PredictionEntry>,
    pub parsing: ParserResponse,
}

/// Parse a file: classify all columns, decompose the winners, and write
/// the augmented table next to the input.
pub async fn run_parser(
    State(state): State<AppState>,
    Json(request): Json<ParserRequest>,
) -> Result<Json<ParserResponse>, ApiError> {
    let (response, _) = parse_to_output(&state, &request.file_path)?;
    Ok(Json(response))
}

/// Combined endpoint: per-column predictions plus the parser result.
pub async fn process_file(
    State(state): State<AppState>,
    Json(request): Json<ParserRequest>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let (parsing, classifications) = parse_to_output(&state, &request.file_path)?;

    let predictions = classifications
        .into_iter()
        .map(|(name, c)| {
            (
                name,
                PredictionEntry {
                    classification: c.label.as_str().to_string(),
                    confidence: c.confidence,
                },
            )
        })
        .collect();

    Ok(Json(ProcessResponse {
        file: request.file_path,
        predictions,
        parsing,
    }))
}

fn parse_to_output(
    state: &AppState,
    file_path: &Path,
) -> Result<(ParserResponse, IndexMap<String, sift::Classification>), ApiError> {
    let (result, _) = state.engine.process_file(file_path)?;

    let output_file = file_path
        .parent()
        .map(|p| p.join("output.csv"))
        .unwrap_or_else(|| PathBuf::from("output.csv"));
    result.table.write_csv(&output_file)?;

    let response = ParserResponse {
        success: true,
        output_file,
        phone_column: result.phone_column,
        company_column: result.company_column,
        rows_processed: result.table.row_count(),
    };

    Ok((response, result.classifications))
}
