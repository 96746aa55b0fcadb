//! Rawgent's config

use indexmap::IndexMap;
use serde::Deserialize;
use url::Url;

/// Where GitHub lets the user install the Raw-Gent app on their repositories
pub const DEFAULT_INSTALL_URL: &str = "https://github.com/apps/raw-gent/installations/new";

/// Overrides `base-url` of the config file
pub const BASE_URL_ENV: &str = "RAWGENT_BASE_URL";

/// Represents the TOML config
#[derive(Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Origin of the Raw-Gent backend, every endpoint is relative to it
    pub base_url: Url,
    /// GitHub App installation which grants access to the repositories.
    /// Sent to the backend as the `installation_id` session cookie
    #[serde(default)]
    pub installation_id: Option<u64>,
    /// Page which starts the GitHub App installation
    #[serde(default = "default_install_url")]
    pub install_url: Url,
    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: IndexMap<String, String>,
}

fn default_install_url() -> Url {
    Url::parse(DEFAULT_INSTALL_URL).expect("default install url is valid")
}

impl Config {
    /// Parse the config, replacing `base-url` with `base_url_override` if there is one
    pub fn parse(raw: &str, base_url_override: Option<&str>) -> anyhow::Result<Self> {
        let mut config = toml::from_str::<Self>(raw)?;

        if let Some(base_url) = base_url_override {
            config.base_url = Url::parse(base_url)
                .map_err(|err| anyhow::anyhow!("invalid base url `{base_url}`: {err}"))?;
        }

        Ok(config)
    }
}
