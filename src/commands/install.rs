//! `install` subcommand

use colored::Colorize as _;

use crate::config::Config;
use crate::utils::format_url;

/// Link to the installation of the GitHub App.
///
/// Once GitHub is done it sends the browser back with an `installation_id`,
/// which goes into the config as `installation-id`
pub fn install(config: &Config) -> String {
    let url = &config.install_url;

    format!(
        "Open this link to install the Raw-Gent app on your repositories:\n  {}\n",
        format_url(url.as_str().bright_blue(), url)
    )
}
