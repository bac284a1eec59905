//! Defaults command - print the built-in explanation for each probe class.

use benchtop::{default_probe_by_class, ProbeClass};
use colored::Colorize;

use super::print_bundle;

pub fn run(
    class: Option<ProbeClass>,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let classes: Vec<ProbeClass> = match class {
        Some(class) => vec![class],
        None => ProbeClass::ALL.to_vec(),
    };

    if json_output {
        let bundles: Vec<_> = classes.iter().map(|c| default_probe_by_class(*c)).collect();
        let output = match class {
            Some(_) => serde_json::to_string_pretty(&bundles[0])?,
            None => serde_json::to_string_pretty(&bundles)?,
        };
        println!("{}", output);
        return Ok(());
    }

    for (i, class) in classes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("[{}]", class).yellow());
        print_bundle(default_probe_by_class(*class));
    }

    Ok(())
}
