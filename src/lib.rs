//! vue-doctor - diagnostic health scoring for Vue projects
//!
//! Scores a pre-computed list of diagnostics, loads the project's
//! `vue-doctor` configuration, and prints colorized results.

pub mod cli;
pub mod config;
pub mod logger;
pub mod models;
pub mod scoring;
