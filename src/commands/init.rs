//! Write a starter configuration file.

use crate::config::{LexiscoreConfig, CONFIG_FILE};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE);

    if path.exists() && !force {
        anyhow::bail!("{CONFIG_FILE} already exists. Use --force to overwrite.");
    }

    let contents = toml::to_string_pretty(&LexiscoreConfig::default())
        .context("failed to serialize default configuration")?;
    fs::write(&path, contents).with_context(|| format!("failed to write {CONFIG_FILE}"))?;
    println!("Created {CONFIG_FILE}");

    Ok(())
}
