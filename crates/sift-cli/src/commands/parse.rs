//! Parse command - classify all columns and write the augmented table.

use std::path::PathBuf;

use colored::Colorize;

use super::build_engine;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    countries: Option<PathBuf>,
    legal: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Parsing".cyan().bold(),
        file.display().to_string().white()
    );

    let sift = build_engine(countries, legal);
    let (result, source) = sift.process_file(&file)?;

    if verbose {
        println!();
        println!("{}", "Classifications:".yellow().bold());
        for (name, classification) in &result.classifications {
            println!(
                "  {:20} {:14} {:.0}%",
                name,
                classification.label.to_string(),
                classification.confidence * 100.0
            );
        }
        println!();
    }

    match &result.phone_column {
        Some(column) => println!(
            "Phone Number column: {}",
            column.to_string().white().bold()
        ),
        None => println!("{}", "No Phone Number column detected".yellow()),
    }
    match &result.company_column {
        Some(column) => println!(
            "Company Name column: {}",
            column.to_string().white().bold()
        ),
        None => println!("{}", "No Company Name column detected".yellow()),
    }

    let output_path = output.unwrap_or_else(|| {
        file.parent()
            .map(|p| p.join("output.csv"))
            .unwrap_or_else(|| PathBuf::from("output.csv"))
    });

    result.table.write_csv(&output_path)?;

    println!();
    println!(
        "{} {} ({} rows)",
        "Saved to".green().bold(),
        output_path.display().to_string().white(),
        source.row_count
    );

    Ok(())
}
