//! Classify command - show which probe class a piece of text lands in.

use benchtop::probe::default_classifier;
use benchtop::ProbeClass;
use colored::Colorize;

pub fn run(
    text: Vec<String>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = text.join(" ");
    let matched = default_classifier().explain(&text);
    let class = matched.map(|m| m.class).unwrap_or(ProbeClass::Generic);

    if json_output {
        let result = serde_json::json!({
            "text": text,
            "class": class,
            "keyword": matched.map(|m| m.keyword),
            "exact": matched.map(|m| m.exact).unwrap_or(false),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", class.as_str().green().bold());
    if verbose {
        match matched {
            Some(m) if m.exact => println!("  whole text is {:?}", m.keyword),
            Some(m) => println!("  matched keyword {:?}", m.keyword),
            None => println!("  {}", "no keyword matched".dimmed()),
        }
    }

    Ok(())
}
