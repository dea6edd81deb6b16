//! Sift CLI - semantic column classification and field decomposition.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            file,
            column,
            json,
            countries,
            legal,
        } => commands::predict::run(file, column, json, countries, legal, cli.verbose),

        Commands::Parse {
            file,
            output,
            countries,
            legal,
        } => commands::parse::run(file, output, countries, legal, cli.verbose),

        Commands::Sample { dir } => commands::sample::run(dir, cli.verbose),

        Commands::Serve {
            port,
            data_dir,
            countries,
            legal,
        } => commands::serve::run(port, data_dir, countries, legal, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
