//! Support triage CLI
//!
//! Runs the prompt chain over a query from the arguments, an interactive
//! prompt, or stdin (one query per line), and prints the stage trace.

mod args;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use support_triage_agent::TriagePipeline;
use support_triage_config::{OutputFormat, Settings};

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    logging::init_logging(&settings.logging, args.log_override());

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(settings.output.format);
    let pretty = args.pretty || settings.output.pretty;
    let pipeline = TriagePipeline::from_settings(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.stdin_batch {
        let stdin = io::stdin();
        let mut count = 0usize;
        for line in stdin.lock().lines() {
            let query = line.context("Failed to read query from stdin")?;
            let trace = pipeline.run(&query);
            let rendered = render::render(&trace, format, pretty)?;
            if format == OutputFormat::Human && count > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", rendered)?;
            count += 1;
        }
        tracing::info!(count, "Processed batch");
        return Ok(());
    }

    let query = match args.joined_query() {
        Some(query) => query,
        None => prompt_for_query()?,
    };

    let trace = pipeline.run(&query);
    tracing::info!(category = %trace.category, "Query classified");
    writeln!(out, "{}", render::render(&trace, format, pretty)?)?;
    Ok(())
}

/// Ask for a single query on stderr and read it from stdin
fn prompt_for_query() -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "Enter your query: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read query")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
