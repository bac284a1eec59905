//! Audit command - export how every element is classified.

use std::path::PathBuf;

use benchtop::{AuditFormat, Benchtop};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: AuditFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Curriculum file not found: {}", file.display()).into());
    }

    let bench = Benchtop::open(&file)?;
    let report = bench.audit();

    match output {
        Some(path) => {
            report.save(&path, format)?;
            eprintln!(
                "{} {} rows to {}",
                "Wrote".green().bold(),
                report.rows.len(),
                path.display()
            );
            if verbose {
                for (class, count) in &report.class_counts {
                    eprintln!("  {:<10} {}", class.as_str(), count);
                }
                eprintln!("  {:<10} {}", "override", report.override_count);
            }
        }
        None => {
            let stdout = std::io::stdout();
            report.write_to(stdout.lock(), format)?;
        }
    }

    Ok(())
}
