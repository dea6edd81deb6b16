//! Example: classify and decompose the columns of a data file.
//!
//! Usage:
//!   cargo run --example classify -- <file_path>

use std::env;
use std::path::Path;

use sift::Sift;

fn main() -> sift::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example classify -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let sift = Sift::new();
    for warning in sift.reference_warnings() {
        eprintln!("Warning: {}", warning);
    }

    let (result, source) = sift.process_file(path)?;

    println!("## Source");
    println!("  File: {}", source.file);
    println!("  Format: {}", source.format);
    println!("  Rows: {}", source.row_count);
    println!("  Columns: {}", source.column_count);
    println!();

    println!("## Classifications");
    for (column, classification) in &result.classifications {
        println!(
            "  {:20} {:14} {:.1}%",
            column,
            classification.label.to_string(),
            classification.confidence * 100.0
        );
    }
    println!();

    if let Some(column) = &result.phone_column {
        println!("Phone Number column: {}", column);
    }
    if let Some(column) = &result.company_column {
        println!("Company Name column: {}", column);
    }

    println!();
    println!("## Augmented headers");
    println!("  {}", result.table.headers.join(", "));

    Ok(())
}
