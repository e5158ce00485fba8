//! ebcdic-kana-gen - builds the static codec tables from UCM mapping files and
//! renders them as Markdown code charts.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use ebcdic_kana_gen::{Ucm, render, tables};
use tracing::info;

#[derive(Parser)]
#[command(name = "ebcdic-kana-gen", version, about = "EBCDIC-Kana table generator")]
struct Cli {
    /// Raise the log level (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the Rust source of the static tables
    Tables {
        /// UCM mapping files, one table each
        #[arg(required = true)]
        ucm: Vec<PathBuf>,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print Markdown code charts
    Show {
        /// UCM mapping files
        #[arg(required = true)]
        ucm: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: -v flags, then RUST_LOG, then "warn"
    let log_level = match cli.verbose {
        0 => std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(&log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Tables { ucm, output } => {
            let charmaps = ucm.iter().map(|p| load(p)).collect::<Result<Vec<_>>>()?;
            let src = tables(&charmaps)?;
            match output {
                Some(path) => {
                    fs::write(&path, src)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("wrote {}", path.display());
                }
                None => io::stdout().write_all(src.as_bytes())?,
            }
        }
        Command::Show { ucm } => {
            let mut out = io::stdout().lock();
            for path in &ucm {
                let chart = render::markdown(&load(path)?);
                writeln!(out, "{chart}")?;
            }
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<Ucm> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file = path.to_string_lossy();
    Ok(Ucm::parse(&file, &text)?)
}
