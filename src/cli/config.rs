//! Config command - show the resolved project configuration

use crate::config::{load_config, CONFIG_FILENAMES, MANIFEST_FIELD, MANIFEST_FILENAME};
use crate::logger::Logger;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(logger: &mut Logger, path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    let config = load_config(path)
        .with_context(|| format!("Failed to load vue-doctor config from {}", path.display()))?;

    match config {
        Some(config) => {
            logger.log(&serde_json::to_string_pretty(config.as_value())?);
        }
        None => {
            logger.dim(&format!(
                "No vue-doctor configuration found in {}",
                path.display()
            ));
            logger.dim(&format!(
                "Looked for: {}, and \"{}\" in {}",
                CONFIG_FILENAMES.join(", "),
                MANIFEST_FIELD,
                MANIFEST_FILENAME
            ));
        }
    }

    Ok(())
}
