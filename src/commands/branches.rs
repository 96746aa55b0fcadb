//! `branches` subcommand

use anyhow::bail;

use super::repos::describe_branches;
use crate::config::Config;

/// List the branches of the installed repository `repo`
pub async fn branches(config: &Config, repo: &str) -> anyhow::Result<String> {
    let selector = super::selector(config)?;

    selector.initialize().await;

    let Some(repository) = selector.find_repository(repo) else {
        bail!("Repository `{repo}` is not installed. See `rawgent repos` for the installed ones");
    };

    selector.select_repository(repository.clone()).await;

    Ok(describe_branches(&repository.full_name, &selector.snapshot()))
}
