#![deny(unsafe_code)]
//! CLI binary for the terragen noise-field system.
//!
//! Subcommands:
//! - `sample <source>` — sample a noise source over a bounding box, write the
//!   dataset as JSON
//! - `list` — print registered noise sources
//! - `page` — render the browser client shell

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::fs;
use std::path::PathBuf;
use std::process;
use terragen_core::Dataset;
use terragen_shell::{render_index, ShellConfig};
use terragen_sources::SourceKind;

#[derive(Parser)]
#[command(name = "terragen", about = "Noise-field dataset CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample a noise source over a bounding box and write the dataset.
    Sample {
        /// Source name (e.g. "perlin").
        source: String,

        /// Lower bound per dimension, comma separated.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        from: Vec<f64>,

        /// Upper bound per dimension, comma separated.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        to: Vec<f64>,

        /// Samples per unit distance along every axis.
        #[arg(short, long, default_value_t = 10)]
        resolution: u32,

        /// Source parameters as a JSON string (e.g. '{"seed": 42}').
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path; the dataset goes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List registered noise sources.
    List,
    /// Render the browser client shell page.
    Page {
        /// Content hash of the deployed client bundle.
        #[arg(long)]
        bundle: Option<String>,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sources = SourceKind::list_sources();
            if cli.json {
                let info = serde_json::json!({ "sources": sources });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sources:");
                for name in sources {
                    println!("  {name}");
                }
            }
        }
        Command::Page { bundle } => {
            let config = ShellConfig {
                bundle_hash: bundle,
            };
            print!("{}", render_index(&config));
        }
        Command::Sample {
            source,
            from,
            to,
            resolution,
            params,
            output,
        } => {
            // The core treats these as contract violations and panics;
            // turn user input into reportable errors before it gets there.
            if from.len() != to.len() {
                return Err(CliError::Input(format!(
                    "--from has {} dimensions but --to has {}",
                    from.len(),
                    to.len()
                )));
            }
            if resolution == 0 {
                return Err(CliError::Input("--resolution must be positive".into()));
            }
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let kind = SourceKind::from_name(&source, &params)?;
            let identifier = format!("{source}:{}d", from.len());
            log::info!("sampling {identifier} at resolution {resolution}");

            let mut dataset = Dataset::new(identifier);
            dataset.generate(&from, &to, resolution, &kind);
            log::debug!("generated {} samples", dataset.sample_count());

            let body = serde_json::to_string_pretty(&dataset)?;
            match &output {
                Some(path) => {
                    fs::write(path, body)
                        .map_err(|e| CliError::Io(format!("writing {}: {e}", path.display())))?;
                    if cli.json {
                        let info = serde_json::json!({
                            "source": source,
                            "dimensions": from.len(),
                            "resolution": resolution,
                            "samples": dataset.sample_count(),
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!(
                            "sampled {} points of {} -> {}",
                            dataset.sample_count(),
                            dataset.noise_function,
                            path.display()
                        );
                    }
                }
                None => println!("{body}"),
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
