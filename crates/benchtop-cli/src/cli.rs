//! CLI argument definitions using clap.

use benchtop::{AuditFormat, ProbeClass};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Benchtop: probe-mode explanations for curriculum diagrams
#[derive(Parser)]
#[command(name = "benchtop")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify free text into a probe class
    Classify {
        /// Text to classify (joined with spaces)
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the default explanation for one or all probe classes
    Defaults {
        /// Probe class (ground, rail, pwm, analog, inductive, bus, floating, generic)
        #[arg(value_name = "CLASS", value_parser = parse_class)]
        class: Option<ProbeClass>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the probe panel for an element of a curriculum file
    Probe {
        /// Path to the curriculum file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Module id
        #[arg(short, long)]
        module: String,

        /// Element id (omit to probe the module itself)
        #[arg(short, long)]
        element: Option<String>,

        /// Category id to report (default: the module's own category)
        #[arg(short, long)]
        category: Option<String>,

        /// Element type tag (default: the element's kind, else "node")
        #[arg(short = 't', long)]
        element_type: Option<String>,

        /// Output the resolved bundle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a curriculum file for structural problems
    Check {
        /// Path to the curriculum file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export how every element of a curriculum is classified
    Audit {
        /// Path to the curriculum file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "tsv", value_parser = parse_format)]
        format: AuditFormat,
    },
}

fn parse_class(s: &str) -> Result<ProbeClass, String> {
    s.parse().map_err(|e: benchtop::BenchtopError| e.to_string())
}

fn parse_format(s: &str) -> Result<AuditFormat, String> {
    s.parse().map_err(|e: benchtop::BenchtopError| e.to_string())
}
