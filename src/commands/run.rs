//! `run` subcommand

use anyhow::bail;
use colored::Colorize as _;

use crate::cli::run::Run;
use crate::config::Config;

/// Start the agent on the chosen repository and branch
pub async fn run(config: &Config, args: Run) -> anyhow::Result<String> {
    let Run {
        prompt,
        repo,
        branch,
    } = args;

    let selector = super::selector(config)?;

    selector.initialize().await;

    if let Some(repo) = repo {
        let Some(repository) = selector.find_repository(&repo) else {
            bail!(
                "Repository `{repo}` is not installed. See `rawgent repos` for the installed ones"
            );
        };

        // initialization already selected the first repository
        if selector.snapshot().selected_repository.as_ref() != Some(&repository) {
            selector.select_repository(repository).await;
        }
    }

    if let Some(branch) = branch {
        selector.select_branch(&branch)?;
    }

    selector.set_prompt(prompt);

    let state = selector.snapshot();
    let response = selector.submit().await?;

    let repository = state
        .selected_repository
        .map(|repository| repository.full_name)
        .unwrap_or_default();

    Ok(format!(
        "Started agent on {} ({})\n  job: {}\n  status: {}\n",
        repository.bright_blue(),
        state.selected_branch.bright_cyan(),
        response.job_id.as_deref().unwrap_or("<unknown>"),
        response.status.as_deref().unwrap_or("<unknown>"),
    ))
}
