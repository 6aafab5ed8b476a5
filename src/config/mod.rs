//! Configuration module for vue-doctor
//!
//! This module handles:
//! - Project-level configuration (`vue-doctor.config.json`, `.vue-doctor.json`)
//! - The `package.json` manifest fallback
//! - Read-only accessors over the otherwise opaque config object

mod project_config;

pub use project_config::{
    load_config, ConfigError, VueDoctorConfig, CONFIG_FILENAMES, MANIFEST_FIELD, MANIFEST_FILENAME,
};
