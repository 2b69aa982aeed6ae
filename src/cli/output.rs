use crate::Conversion;
use crate::convert::Case;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    case: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    values_converted: usize,
    conversions: Vec<JsonConversion>,
}

pub fn print_conversions(
    conversions: &[Conversion],
    values_converted: usize,
    grouped: bool,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            if grouped {
                print_report(conversions, colored_output);
            } else {
                print_plain(conversions);
            }
        }
        OutputFormat::Json => print_json(conversions, values_converted),
    }
}

/// One converted value per line, nothing else. Pipe-friendly.
fn print_plain(conversions: &[Conversion]) {
    for conversion in conversions {
        println!("{}", conversion.output);
    }
}

/// Every convention for each input, grouped under the input itself.
fn print_report(conversions: &[Conversion], colored_output: bool) {
    // One chunk per value: the caller pushes every convention for each value
    // in order, so identical adjacent values still get separate blocks.
    for (i, group) in conversions.chunks(Case::ALL.len()).enumerate() {
        if i > 0 {
            println!();
        }

        if let Some(first) = group.first() {
            if colored_output {
                println!("{}", first.input.bold());
            } else {
                println!("{}", first.input);
            }
        }

        for conversion in group {
            let label = format!("{:<10}", conversion.case.label());
            if colored_output {
                println!("  {} {}", label.cyan(), conversion.output);
            } else {
                println!("  {} {}", label, conversion.output);
            }
        }
    }
}

fn print_json(conversions: &[Conversion], values_converted: usize) {
    let json_conversions: Vec<JsonConversion> = conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            case: c.case.to_string(),
            output: c.output.clone(),
        })
        .collect();

    let output = JsonOutput {
        values_converted,
        conversions: json_conversions,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
