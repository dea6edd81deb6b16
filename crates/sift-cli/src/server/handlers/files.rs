//! Data-directory listing handler.

use std::fs;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the files endpoint.
#[derive(Serialize)]
pub struct FilesResponse {
    /// Paths of available CSV files.
    pub files: Vec<String>,
}

/// List the CSV files available in the configured data directory.
/// A missing directory yields an empty list rather than an error.
pub async fn list_files(State(state): State<AppState>) -> Json<FilesResponse> {
    let mut files = Vec::new();

    if let Ok(entries) = fs::read_dir(&state.data_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let is_csv = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);
            if is_csv {
                files.push(path.display().to_string());
            }
        }
    }

    files.sort();
    Json(FilesResponse { files })
}
