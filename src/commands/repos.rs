//! `repos` subcommand

use colored::Colorize as _;

use crate::api::{AgentRunner, BranchProvider, RepositoryProvider};
use crate::config::Config;
use crate::selector::{RepositoryControl, SelectionState, Selector};
use crate::utils::{format_choice, format_repo, format_url};

/// List the repositories of the installation, and the branches of the selected one
pub async fn repos(config: &Config) -> anyhow::Result<String> {
    let selector = super::selector(config)?;

    selector.initialize().await;

    Ok(describe(&selector))
}

/// Show the repository control and, if a repository is selected, its branches
pub fn describe<B>(selector: &Selector<B>) -> String
where
    B: RepositoryProvider + BranchProvider + AgentRunner,
{
    let state = selector.snapshot();

    match selector.control() {
        RepositoryControl::Loading => "Loading...\n".to_owned(),
        RepositoryControl::AddRepository(install_url) => format!(
            "No repositories found. Install the Raw-Gent app to add some: {}\n",
            format_url(install_url.as_str().bright_blue(), &install_url)
        ),
        RepositoryControl::Picker { selected, add_more, .. } => {
            let repositories: String = state
                .repositories
                .iter()
                .map(|repository| {
                    format!(
                        "{}\n",
                        format_choice(format_repo(repository), repository.id == selected.id)
                    )
                })
                .collect();

            format!(
                "Repositories:\n{repositories}    {}\n\n{}",
                format_url("+ Add more repositories".bright_blue(), &add_more),
                describe_branches(&selected.full_name, &state)
            )
        },
    }
}

/// Show the branches of the selected repository
pub fn describe_branches(full_name: &str, state: &SelectionState) -> String {
    let header = format!("Branches of {}:\n", full_name.bright_blue());

    if state.branches.is_empty() {
        return format!("{header}{}\n", format_choice(&state.selected_branch, true));
    }

    let branches: String = state
        .branches
        .iter()
        .map(|branch| {
            format!(
                "{}\n",
                format_choice(&branch.name, branch.name == state.selected_branch)
            )
        })
        .collect();

    format!("{header}{branches}")
}
