//! Score command - read diagnostics, apply project config, report the score

use crate::config::load_config;
use crate::logger::{Category, Logger};
use crate::models::{Diagnostic, Severity};
use crate::scoring::{apply_ignores, calculate_score, ScoreLabel, ScoreResult, PERFECT_SCORE};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// JSON payload for `--format json`
#[derive(Debug, Serialize)]
struct ScoreReport {
    score: u32,
    label: ScoreLabel,
    diagnostics: usize,
}

/// Run the score command
pub fn run(
    logger: &mut Logger,
    diagnostics_path: &Path,
    root: &Path,
    format: &str,
    fail_under: Option<u32>,
) -> Result<()> {
    let diagnostics = read_diagnostics(diagnostics_path)?;
    debug!("Read {} diagnostics", diagnostics.len());

    let config = load_config(root)
        .with_context(|| format!("Failed to load vue-doctor config from {}", root.display()))?;
    let diagnostics = match &config {
        Some(config) => apply_ignores(diagnostics, config),
        None => diagnostics,
    };

    let result = calculate_score(&diagnostics);

    match format {
        "json" => {
            let report = ScoreReport {
                score: result.score,
                label: result.label,
                diagnostics: diagnostics.len(),
            };
            logger.log(&serde_json::to_string_pretty(&report)?);
        }
        _ => render_text(logger, &result, &diagnostics),
    }

    if let Some(bar) = fail_under {
        if result.score < bar {
            logger.error(&format!(
                "Score {} is below the required {}",
                result.score, bar
            ));
            std::process::exit(1);
        }
    }

    Ok(())
}

fn read_diagnostics(path: &Path) -> Result<Vec<Diagnostic>> {
    let content = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read diagnostics from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read diagnostics file {}", path.display()))?
    };
    serde_json::from_str(&content).with_context(|| {
        format!(
            "Diagnostics must be a JSON array of objects: {}",
            path.display()
        )
    })
}

fn render_text(logger: &mut Logger, result: &ScoreResult, diagnostics: &[Diagnostic]) {
    let headline = format!(
        "Vue Doctor score: {}/{} ({})",
        result.score, PERFECT_SCORE, result.label
    );
    logger.break_line();
    // the headline is the command's output, so it stays on stdout at any score
    logger.styled(headline_category(result.label), &headline);
    logger.dim(&summarize(diagnostics));
    logger.break_line();
}

fn headline_category(label: ScoreLabel) -> Category {
    match label {
        ScoreLabel::Perfect | ScoreLabel::Good => Category::Success,
        ScoreLabel::Ok => Category::Warn,
        ScoreLabel::NeedsWork => Category::Error,
    }
}

/// "3 diagnostics (1 error, 2 warnings)"
fn summarize(diagnostics: &[Diagnostic]) -> String {
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    let other = diagnostics.len() - errors - warnings;

    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(plural(errors, "error"));
    }
    if warnings > 0 {
        parts.push(plural(warnings, "warning"));
    }
    if other > 0 {
        parts.push(format!("{} other", other));
    }

    let total = plural(diagnostics.len(), "diagnostic");
    if parts.is_empty() {
        total
    } else {
        format!("{} ({})", total, parts.join(", "))
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(&[]), "0 diagnostics");
        let diags: Vec<Diagnostic> = ["error", "warning", "warning", "info"]
            .into_iter()
            .map(Diagnostic::from)
            .collect();
        assert_eq!(
            summarize(&diags),
            "4 diagnostics (1 error, 2 warnings, 1 other)"
        );
        assert_eq!(summarize(&diags[..1]), "1 diagnostic (1 error)");
    }

    #[test]
    fn test_headline_category_follows_label() {
        assert_eq!(headline_category(ScoreLabel::Perfect), Category::Success);
        assert_eq!(headline_category(ScoreLabel::Good), Category::Success);
        assert_eq!(headline_category(ScoreLabel::Ok), Category::Warn);
        assert_eq!(headline_category(ScoreLabel::NeedsWork), Category::Error);
    }

    #[test]
    fn test_read_diagnostics_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        std::fs::write(&path, r#"[{"severity":"error"},{"severity":"warning","weight":5}]"#)
            .unwrap();
        let diags = read_diagnostics(&path).unwrap();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[1].weight, Some(5.0));
    }

    #[test]
    fn test_read_diagnostics_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        std::fs::write(&path, r#"{"severity":"error"}"#).unwrap();
        let err = read_diagnostics(&path).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }
}
