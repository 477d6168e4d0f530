mod render;
mod session;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use owo_colors::OwoColorize;

use lexis_analyzer::{analyze, log_file_name, render_log, Analysis};

use crate::render::{render_diagnostic, render_summary, render_tokens};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Annotated diagnostics for people
    Text,
    /// The full analysis as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "lexis", version, about = "Analyze Lexis programs for lexical, syntactic and semantic errors")]
struct Cli {
    /// Source file to analyze; reads standard input when omitted
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, env = "LEXIS_FORMAT", default_value = "text")]
    format: Format,

    /// Print the token table before the diagnostics (text format only)
    #[arg(long)]
    tokens: bool,

    /// Write a log report to this file, or into this directory under a generated name
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Start an interactive session that re-analyzes the program after every line
    #[arg(short, long, conflicts_with = "file")]
    interactive: bool,
}

/// Writes the log report for `analysis` and returns the file written.
pub(crate) fn write_log(analysis: &Analysis, source_name: &str, path: &Path) -> Result<PathBuf> {
    let now = Local::now();
    let target = if path.is_dir() {
        path.join(log_file_name(&now))
    } else {
        path.to_path_buf()
    };
    fs::write(&target, render_log(analysis, source_name, &now))
        .with_context(|| format!("failed to write log file {}", target.display()))?;
    info!("log written to {}", target.display());
    Ok(target)
}

fn read_source(file: Option<&Path>) -> Result<(String, String)> {
    match file {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read standard input")?;
            Ok((source, "<stdin>".to_string()))
        }
    }
}

fn execute(cli: Cli) -> Result<ExitCode> {
    if cli.interactive {
        session::run(io::stdin().lock(), &mut io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    }

    let (source, source_name) = read_source(cli.file.as_deref())?;
    debug!("read {} bytes from {}", source.len(), source_name);
    let analysis = analyze(&source);

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&analysis).context("failed to serialize the analysis")?;
            println!("{}", json);
        }
        Format::Text => {
            if cli.tokens {
                print!("{}", render_tokens(&analysis.tokens));
            }
            for diag in &analysis.diagnostics {
                eprint!("{}", render_diagnostic(&source, diag));
            }
            println!("{}", render_summary(&analysis, &source_name));
        }
    }

    if let Some(path) = &cli.log {
        let written = write_log(&analysis, &source_name, path)?;
        if cli.format == Format::Text {
            println!("log written to {}", written.display());
        }
    }

    Ok(if analysis.has_errors() { ExitCode::from(1) } else { ExitCode::SUCCESS })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("LEXIS_LOG", "warn")).init();

    match execute(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), format!("{:#}", e).red());
            ExitCode::from(2)
        }
    }
}
