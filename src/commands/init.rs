//! `init` subcommand

use std::fs;

use anyhow::bail;
use colored::Colorize as _;

use super::config_file_path;
use crate::confirm_prompt;

/// Initialize the Rawgent config file
pub fn init(yes: bool) -> anyhow::Result<String> {
    let config_file_path = config_file_path()?;

    if config_file_path.exists()
        && !yes
        && !confirm_prompt!(
            "File {} already exists. Overwrite it?",
            config_file_path.to_string_lossy().bright_blue(),
        )?
    {
        bail!("Did not overwrite {}", config_file_path.display());
    }

    if let Some(config_path) = config_file_path.parent() {
        fs::create_dir_all(config_path)?;
    }

    fs::write(&config_file_path, include_str!("../../example-config.toml"))?;

    log::info!("Created config file {}", config_file_path.display());

    Ok(format!(
        "Created {}\nSet `base-url` to your Raw-Gent backend, then run `rawgent repos`\n",
        config_file_path.display()
    ))
}
