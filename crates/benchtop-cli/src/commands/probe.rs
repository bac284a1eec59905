//! Probe command - resolve the panel shown when an element is clicked.

use std::path::PathBuf;

use benchtop::{Benchtop, ProbePanel, ProbeTarget};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    module: String,
    element: Option<String>,
    category: Option<String>,
    element_type: Option<String>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Curriculum file not found: {}", file.display()).into());
    }

    let bench = Benchtop::open(&file)?;

    let mut target = ProbeTarget::new(module);
    if let Some(element) = element {
        target = target.with_element(element);
    }
    if let Some(category) = category {
        target = target.with_category(category);
    }
    if let Some(element_type) = element_type {
        target = target.with_element_type(element_type);
    }

    let selection = bench.probe(&target)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&selection.bundle)?);
        return Ok(());
    }

    let panel = ProbePanel::from_selection(&selection, &bench.config().panel);
    let class = panel
        .header
        .class
        .map(|c| c.as_str().to_string())
        .unwrap_or_else(|| "override".to_string());

    println!(
        "{} {}  {} {}",
        panel.header.icon,
        panel.header.title.white().bold(),
        format!("[{}]", class).yellow(),
        format!("({})", panel.header.element_type).dimmed()
    );
    for column in &panel.columns {
        println!("  {}", column.heading.cyan());
        for item in &column.items {
            println!("    - {}", item);
        }
    }
    if let Some(tip) = &panel.footer_tip {
        println!();
        println!("{}", tip.dimmed());
    }

    if verbose && !selection.bundle.meta.extra.is_empty() {
        println!();
        println!("{}", "Meta:".cyan());
        for (key, value) in &selection.bundle.meta.extra {
            println!("  {}: {}", key, value);
        }
    }

    Ok(())
}
