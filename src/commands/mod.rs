//! Commands for rawgent

use std::path::PathBuf;
use std::{env, fs};

use anyhow::anyhow;

use crate::api::ApiClient;
use crate::config::{BASE_URL_ENV, Config};
use crate::selector::Selector;
use crate::{CONFIG_FILE, CONFIG_ROOT};

pub mod branches;
pub mod help;
pub mod init;
pub mod install;
pub mod repos;
pub mod run;

pub use branches::branches;
pub use help::help;
pub use init::init;
pub use install::install;
pub use repos::repos;
pub use run::run;

/// Location of the configuration file, relative to the current directory
pub fn config_file_path() -> anyhow::Result<PathBuf> {
    Ok(env::current_dir()?.join(CONFIG_ROOT).join(CONFIG_FILE))
}

/// Read the configuration file. `RAWGENT_BASE_URL` takes precedence over its `base-url`
pub fn load_config() -> anyhow::Result<Config> {
    let config_file_path = config_file_path()?;

    let config_raw = fs::read_to_string(&config_file_path).map_err(|err| {
        anyhow!(
            "Could not read configuration file at {}: {err}\n\nYou can create it with `rawgent init`",
            config_file_path.display()
        )
    })?;

    log::trace!("Using configuration file {config_file_path:?}");

    let base_url_override = env::var(BASE_URL_ENV).ok();

    Config::parse(&config_raw, base_url_override.as_deref()).map_err(|err| {
        anyhow!("Could not parse `{CONFIG_ROOT}/{CONFIG_FILE}` configuration file:\n{err}")
    })
}

/// Selector talking to the backend of `config`
pub fn selector(config: &Config) -> anyhow::Result<Selector<ApiClient>> {
    let client = ApiClient::new(config)?;

    log::debug!("Using backend at {}", client.base_url());

    Ok(Selector::new(
        client,
        config.installation_id,
        config.install_url.clone(),
    ))
}
