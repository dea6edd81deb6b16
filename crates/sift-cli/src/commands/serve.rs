//! Serve command - start the HTTP tool server.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;

use super::build_engine;
use crate::server::{app, state::AppState};

pub fn run(
    port: u16,
    data_dir: PathBuf,
    countries: Option<PathBuf>,
    legal: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sift = build_engine(countries, legal);

    if verbose {
        println!("Serving files from {}", data_dir.display());
    }

    println!(
        "{} on port {}",
        "Starting tool server".cyan().bold(),
        port.to_string().white().bold()
    );

    let state = AppState::new(Arc::new(sift), data_dir);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { app::run_server(state, port).await })
}
