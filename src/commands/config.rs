use std::path::Path;

use anyhow::{Context, Result};

use tkpass::configtool::{default_config_path, Settings};

/// Prints the effective settings as JSON, or where they are read from.
pub fn show_config(settings: &Settings, explicit: Option<&Path>, path_only: bool) -> Result<()> {
    if path_only {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };
        println!("{}", path.display());
        return Ok(());
    }
    let json = serde_json::to_string_pretty(settings)
        .context("Failed to serialize settings")?;
    println!("{}", json);
    Ok(())
}
