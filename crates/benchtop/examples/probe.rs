//! Example: Resolve the probe panel for every element of a curriculum file.
//!
//! Usage:
//!   cargo run --example probe -- <curriculum.json>

use std::env;
use std::path::Path;

use benchtop::{Benchtop, ProbeTarget};

fn main() -> benchtop::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example probe -- <curriculum.json>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let bench = Benchtop::open(path)?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Probe panels: {}", file_path);
    println!("{}", separator);

    for issue in bench.issues() {
        println!("  ! {}", issue);
    }

    for (category, module, element) in bench.curriculum().elements() {
        let target = ProbeTarget::new(&module.id)
            .with_category(&category.id)
            .with_element(&element.id);
        let panel = bench.panel(&target)?;

        println!();
        println!(
            "{} {}  [{}] ({})",
            panel.header.icon,
            panel.header.title,
            panel.header.class.map(|c| c.as_str()).unwrap_or("override"),
            panel.header.element_type
        );
        for column in &panel.columns {
            println!("  {}:", column.heading);
            for item in &column.items {
                println!("    - {}", item);
            }
        }
        if let Some(tip) = &panel.footer_tip {
            println!("  {}", tip);
        }
    }

    Ok(())
}
