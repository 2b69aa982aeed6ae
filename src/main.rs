use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::{Case, Config, Conversion};
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert strings between naming conventions", long_about = None)]
struct Cli {
    /// Values to convert; pass "-" to read them from stdin, one per line
    #[arg(value_name = "VALUES")]
    values: Vec<String>,

    /// Target convention: kebab, camel or dot (defaults to the configured one)
    #[arg(short, long)]
    to: Option<Case>,

    /// Print every convention for each value
    #[arg(long, conflicts_with = "to")]
    all: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.to)?;

    // Validate input values
    if cli.values.is_empty() {
        anyhow::bail!("No values given. Use --help for usage information.");
    }

    let values = gather_values(&cli.values)?;
    let colored_output = config.color && !cli.no_color;

    let mut conversions = Vec::new();

    if cli.all {
        for value in &values {
            for case in Case::ALL {
                conversions.push(Conversion {
                    input: value.clone(),
                    case,
                    output: case.convert(value),
                });
            }
        }
    } else {
        let case = config.target_case()?;
        for value in &values {
            conversions.push(Conversion {
                input: value.clone(),
                case,
                output: case.convert(value),
            });
        }
    }

    output::print_conversions(
        &conversions,
        values.len(),
        cli.all,
        colored_output,
        &cli.format,
    );

    Ok(())
}

/// Expand a lone "-" into values read from stdin, one per line.
fn gather_values(values: &[String]) -> Result<Vec<String>> {
    if values.len() == 1 && values[0] == "-" {
        let stdin = io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            lines.push(line?);
        }
        return Ok(lines);
    }

    Ok(values.to_vec())
}
