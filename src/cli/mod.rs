//! CLI command definitions and handlers

mod config;
mod score;

use crate::logger::Logger;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a score bar (0-100)
fn parse_score_bar(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n > crate::scoring::PERFECT_SCORE {
        Err(format!(
            "score bar cannot exceed {}",
            crate::scoring::PERFECT_SCORE
        ))
    } else {
        Ok(n)
    }
}

/// vue-doctor - health score for Vue project diagnostics
#[derive(Parser, Debug)]
#[command(name = "vue-doctor")]
#[command(
    version,
    about = "Score Vue project diagnostics and inspect vue-doctor configuration",
    after_help = "\
Examples:
  vue-doctor score diagnostics.json               Score a diagnostics file
  vue-doctor score - --format json < diags.json   Read from stdin, JSON output
  vue-doctor score diags.json --fail-under 75     Exit code 1 below 75 (CI mode)
  vue-doctor config .                             Show the resolved project config"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Disable colored output
    #[arg(long, global = true, env = "VUE_DOCTOR_NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a JSON array of diagnostics
    #[command(after_help = "\
Examples:
  vue-doctor score diagnostics.json                   Text summary
  vue-doctor score diagnostics.json --format json     JSON output for scripting
  vue-doctor score diagnostics.json --root app/       Use app/ for config lookup")]
    Score {
        /// Diagnostics file (JSON array), or `-` for stdin
        diagnostics: PathBuf,

        /// Project root used to look up vue-doctor config
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Exit with code 1 if the score is below this value
        #[arg(long, value_parser = parse_score_bar)]
        fail_under: Option<u32>,
    },

    /// Show the resolved project configuration
    Config {
        /// Project root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show version information
    Version,
}

/// `NO_COLOR` (https://no-color.org) disables colour when set to anything
/// non-empty
fn no_color_requested(flag: bool) -> bool {
    flag || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let mut logger = Logger::for_terminal(no_color_requested(cli.no_color));

    match cli.command {
        Commands::Score {
            diagnostics,
            root,
            format,
            fail_under,
        } => score::run(&mut logger, &diagnostics, &root, &format, fail_under),

        Commands::Config { path } => config::run(&mut logger, &path),

        Commands::Version => {
            logger.log(&format!("vue-doctor {}", env!("CARGO_PKG_VERSION")));
            Ok(())
        }
    }
}
