//! Application state for the tool server.

use std::path::PathBuf;
use std::sync::Arc;

use sift::Sift;

/// Shared application state.
///
/// The engine's reference data is loaded once at startup; request
/// handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    /// The classification and decomposition engine.
    pub engine: Arc<Sift>,
    /// Directory listed by the files endpoint.
    pub data_dir: PathBuf,
}

impl AppState {
    /// Create new application state.
    pub fn new(engine: Arc<Sift>, data_dir: PathBuf) -> Self {
        Self { engine, data_dir }
    }
}
