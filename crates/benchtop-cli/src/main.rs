//! Benchtop CLI - probe-mode explanations for curriculum diagrams.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Classify { text, json } => commands::classify::run(text, json, cli.verbose),

        Commands::Defaults { class, json } => commands::defaults::run(class, json, cli.verbose),

        Commands::Probe {
            file,
            module,
            element,
            category,
            element_type,
            json,
        } => commands::probe::run(
            file,
            module,
            element,
            category,
            element_type,
            json,
            cli.verbose,
        ),

        Commands::Check { file, json } => commands::check::run(file, json, cli.verbose),

        Commands::Audit {
            file,
            output,
            format,
        } => commands::audit::run(file, output, format, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
