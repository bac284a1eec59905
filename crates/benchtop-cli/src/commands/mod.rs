//! CLI command implementations.

pub mod audit;
pub mod check;
pub mod classify;
pub mod defaults;
pub mod probe;

use benchtop::probe::NO_NOTES;
use benchtop::ExplanationBundle;
use colored::Colorize;

/// Print a bundle as three labelled lists under its header line.
pub(crate) fn print_bundle(bundle: &ExplanationBundle) {
    println!("{} {}", bundle.icon, bundle.title.white().bold());
    print_list("What to expect", &bundle.expect);
    print_list("Clues", &bundle.clues);
    print_list("Next steps", &bundle.next);
}

fn print_list(heading: &str, items: &[String]) {
    println!("  {}", heading.cyan());
    if items.is_empty() {
        println!("    {}", NO_NOTES.dimmed());
    }
    for item in items {
        println!("    - {}", item);
    }
}
