//! @acp:module "Settings Command"
//! @acp:summary "Show or update persisted user settings"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use console::style;

use crate::config::Settings;

/// Options for the settings command
#[derive(Debug, Clone)]
pub struct SettingsOptions {
    /// New value for the randomize flag; `None` only shows settings
    pub randomize: Option<bool>,
    /// Settings file (defaults to the user config directory)
    pub path: Option<PathBuf>,
}

/// Execute the settings command
pub fn execute_settings(options: SettingsOptions) -> Result<()> {
    let path = options
        .path
        .or_else(Settings::default_path)
        .ok_or_else(|| anyhow!("No user config directory on this platform; pass --path"))?;

    let mut settings = Settings::load(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    if let Some(randomize) = options.randomize {
        settings.randomize = randomize;
        settings
            .save(&path)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        println!("{} Settings saved.", style("✓").green());
    }

    println!("  File: {}", style(path.display()).dim());
    println!("  Randomize: {}", settings.randomize);

    Ok(())
}
