use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use wordfreq::config::{Config, OutputFormat};
use wordfreq::{AnalyzerError, analyze_file, report};

/// Ask for a filename and take the first whitespace-delimited token of the reply.
fn prompt_filename<R: BufRead, W: Write>(mut input: R, out: &mut W) -> wordfreq::Result<PathBuf> {
    write!(out, "Enter the filename to analyze: ").map_err(AnalyzerError::Prompt)?;
    out.flush().map_err(AnalyzerError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(AnalyzerError::Prompt)?;
    line.split_whitespace()
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| {
            AnalyzerError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no filename given",
            ))
        })
}

/// Use the configured file or prompt for one. JSON mode prompts on `err` so
/// `out` carries nothing but the report.
fn input_path<R: BufRead, W: Write, E: Write>(
    config: &Config,
    input: R,
    out: &mut W,
    err: &mut E,
) -> wordfreq::Result<PathBuf> {
    match (&config.file, config.format) {
        (Some(path), _) => Ok(path.clone()),
        (None, OutputFormat::Text) => prompt_filename(input, out),
        (None, OutputFormat::Json) => prompt_filename(input, err),
    }
}

fn run(config: &Config) -> wordfreq::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.format == OutputFormat::Text {
        writeln!(out, "=== File Word Counter ===\n")?;
    }
    let path = input_path(config, io::stdin().lock(), &mut out, &mut io::stderr())?;

    let result = analyze_file(&path, &config.analyzer_options())?;

    match config.format {
        OutputFormat::Text => report::write_text(&mut out, &result, config.top)?,
        OutputFormat::Json => report::write_json(&mut out, &result, config.top)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::WARN })
        .compact()
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
