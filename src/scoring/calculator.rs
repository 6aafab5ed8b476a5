//! Penalty-based score calculator

use crate::models::{Diagnostic, Severity};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score of a project with no diagnostics
pub const PERFECT_SCORE: u32 = 100;
/// Lowest score still labelled "Good"
pub const GOOD_THRESHOLD: u32 = 75;
/// Lowest score still labelled "OK"
pub const OK_THRESHOLD: u32 = 50;
/// Each penalty point costs this many score points
pub const PENALTY_MULTIPLIER: f64 = 0.5;
/// Weight for severities missing from [`SEVERITY_WEIGHTS`]
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Severity → penalty weight
pub const SEVERITY_WEIGHTS: &[(&str, f64)] = &[("error", 3.0), ("warning", 1.0)];

/// Qualitative bucket for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    Perfect,
    Good,
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Perfect => "Perfect",
            ScoreLabel::Good => "Good",
            ScoreLabel::Ok => "OK",
            ScoreLabel::NeedsWork => "Needs Work",
        }
    }
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a diagnostic list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub label: ScoreLabel,
}

fn severity_weight(severity: &Severity) -> Option<f64> {
    SEVERITY_WEIGHTS
        .iter()
        .find(|(name, _)| *name == severity.as_str())
        .map(|(_, weight)| *weight)
}

/// Penalty a single diagnostic contributes.
///
/// Explicit `weight` beats the severity table, which beats [`DEFAULT_WEIGHT`].
pub fn penalty_for(diagnostic: &Diagnostic) -> f64 {
    diagnostic
        .weight
        .or_else(|| severity_weight(&diagnostic.severity))
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Label for a score produced by the general formula
pub fn label_for(score: u32) -> ScoreLabel {
    if score >= GOOD_THRESHOLD {
        ScoreLabel::Good
    } else if score >= OK_THRESHOLD {
        ScoreLabel::Ok
    } else {
        ScoreLabel::NeedsWork
    }
}

/// Score a list of diagnostics. Never fails.
pub fn calculate_score(diagnostics: &[Diagnostic]) -> ScoreResult {
    if diagnostics.is_empty() {
        return ScoreResult {
            score: PERFECT_SCORE,
            label: ScoreLabel::Perfect,
        };
    }

    let total_penalty: f64 = diagnostics.iter().map(penalty_for).sum();

    let perfect = PERFECT_SCORE as f64;
    let raw = (perfect - total_penalty * PENALTY_MULTIPLIER).round();
    // NaN only comes from non-finite weights; treat it as the floor.
    let score = if raw.is_nan() {
        0
    } else {
        raw.clamp(0.0, perfect) as u32
    };

    let label = label_for(score);
    debug!(
        "Scored {} diagnostics: penalty={:.1}, score={} ({})",
        diagnostics.len(),
        total_penalty,
        score,
        label
    );

    ScoreResult { score, label }
}
