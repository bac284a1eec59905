//! Check command - report structural problems in a curriculum file.

use std::path::PathBuf;

use benchtop::Curriculum;
use colored::Colorize;

pub fn run(
    file: PathBuf,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Curriculum file not found: {}", file.display()).into());
    }

    let curriculum = Curriculum::load(&file)?;
    let issues = curriculum.validate();

    if json_output {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "source": curriculum.source,
            "categories": curriculum.categories.len(),
            "modules": curriculum.module_count(),
            "elements": curriculum.element_count(),
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {}",
            "Checking".cyan().bold(),
            file.display().to_string().white()
        );
        println!(
            "  {} categories, {} modules, {} elements",
            curriculum.categories.len(),
            curriculum.module_count(),
            curriculum.element_count()
        );

        if issues.is_empty() {
            println!("{}", "✓ No issues found".green());
        } else {
            println!();
            for issue in &issues {
                println!("  {} {}", "✗".red(), issue);
            }
        }
    }

    if !issues.is_empty() {
        return Err(format!("{} issue(s) found", issues.len()).into());
    }

    Ok(())
}
