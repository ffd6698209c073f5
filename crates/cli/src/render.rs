//! Trace rendering

use std::fmt::Write as _;
use support_triage_config::OutputFormat;
use support_triage_core::{PipelineTrace, Result, StageOutput};

/// Render a trace in the requested format
pub fn render(trace: &PipelineTrace, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Human => render_human(trace),
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(trace)?),
        OutputFormat::Json => Ok(serde_json::to_string(trace)?),
    }
}

/// One block per step; text as-is, structured outputs as indented JSON
fn render_human(trace: &PipelineTrace) -> Result<String> {
    let mut out = String::new();

    for (i, record) in trace.records().iter().enumerate() {
        let body = match &record.output {
            StageOutput::Text(text) => text.to_string(),
            StageOutput::Category(category) => category.to_string(),
            other => serde_json::to_string_pretty(other)?,
        };
        // Writing to a String cannot fail
        let _ = writeln!(out, "Step {}: {}", i + 1, record.step);
        for line in body.lines() {
            let _ = writeln!(out, "  {}", line);
        }
        out.push('\n');
    }

    Ok(out.trim_end().to_string())
}
