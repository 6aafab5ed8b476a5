//! Diagnostic Health Scoring
//!
//! Reduces a list of diagnostics to a single 0-100 score and a label.
//!
//! # Scoring Formula
//!
//! ```text
//! penalty(d)    = d.weight ?? SEVERITY_WEIGHTS[d.severity] ?? 1
//! total_penalty = Σ penalty(d)
//! score         = clamp(round(100 - total_penalty × 0.5), 0, 100)
//! ```
//!
//! Rounding is half away from zero, so `99.5` becomes `100`.
//!
//! # Severity Weights
//!
//! - error: 3
//! - warning: 1
//! - anything else: 1
//!
//! # Labels
//!
//! - no diagnostics at all: Perfect
//! - score ≥ 75: Good
//! - score ≥ 50: OK
//! - otherwise: Needs Work
//!
//! # Example
//!
//! One error and one warning → penalty 4 → `100 - 2` → 98 (Good).

mod calculator;
mod ignores;

pub use calculator::{
    calculate_score, label_for, penalty_for, ScoreLabel, ScoreResult, DEFAULT_WEIGHT,
    GOOD_THRESHOLD, OK_THRESHOLD, PENALTY_MULTIPLIER, PERFECT_SCORE, SEVERITY_WEIGHTS,
};
pub use ignores::apply_ignores;
