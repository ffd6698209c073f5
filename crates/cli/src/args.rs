//! Command line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use support_triage_config::OutputFormat;

/// Classify a customer support query and draft a short reply
#[derive(Parser, Debug, Clone)]
#[command(name = "support-triage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Args {
    /// Query words; prompts interactively when omitted
    pub query: Vec<String>,

    /// Read one query per line from stdin
    #[arg(long, conflicts_with = "query")]
    pub stdin_batch: bool,

    /// Output format (overrides config)
    #[arg(short = 'f', long = "format")]
    pub format: Option<FormatArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Settings file (yaml, toml or json)
    #[arg(short, long, env = "SUPPORT_TRIAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Human,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    /// Positional words joined back into one query
    pub fn joined_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }

    /// Log filter implied by -v/-q, if any
    pub fn log_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_words_are_joined() {
        let args = Args::parse_from(["support-triage", "open", "a", "new", "account"]);
        assert_eq!(args.joined_query().as_deref(), Some("open a new account"));
        assert!(!args.stdin_batch);
    }

    #[test]
    fn test_no_query_means_interactive() {
        let args = Args::parse_from(["support-triage"]);
        assert_eq!(args.joined_query(), None);
    }

    #[test]
    fn test_format_and_verbosity() {
        let args = Args::parse_from(["support-triage", "-f", "json", "--pretty", "-vv", "hi"]);
        assert_eq!(args.format, Some(FormatArg::Json));
        assert!(args.pretty);
        assert_eq!(args.log_override(), Some("debug"));
    }

    #[test]
    fn test_quiet() {
        let args = Args::parse_from(["support-triage", "-q", "hi"]);
        assert_eq!(args.log_override(), Some("error"));
    }

    #[test]
    fn test_batch_conflicts_with_query() {
        assert!(Args::try_parse_from(["support-triage", "--stdin-batch", "hi"]).is_err());
    }
}
