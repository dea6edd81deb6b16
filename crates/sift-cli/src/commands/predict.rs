//! Predict command - classify the semantic type of one column.

use std::path::PathBuf;

use colored::Colorize;
use serde_json::json;

use super::build_engine;

pub fn run(
    file: PathBuf,
    column: String,
    json_output: bool,
    countries: Option<PathBuf>,
    legal: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let sift = build_engine(countries, legal);
    let (classification, source) = sift.classify_file(&file, &column)?;

    if verbose {
        eprintln!(
            "{} {} rows, {} columns ({})",
            "Read".cyan().bold(),
            source.row_count,
            source.column_count,
            source.format
        );
    }

    if json_output {
        let payload = json!({
            "classification": classification.label.as_str(),
            "confidence": classification.confidence,
            "column": column,
            "file": file,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", classification.label.slug());
    }

    Ok(())
}
