//! Data exchanged with the Raw-Gent backend

use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Branch shown for a repository that has no branches (no commits yet)
pub const EMPTY_REPO_BRANCH: &str = "(empty repo)";

/// Repository the user granted the GitHub App access to
///
/// The backend forwards GitHub's repository objects, we only keep what we use
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: u64,
    /// e.g. `helix`
    pub name: String,
    /// e.g. `helix-editor/helix`
    pub full_name: String,
}

/// Branch of a [`Repository`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
}

/// Data returned by `GET /installation-repos`
#[derive(Deserialize, Debug, Default)]
pub struct InstallationRepos {
    repositories: Option<Vec<Repository>>,
}

impl InstallationRepos {
    /// Repositories in the order the backend returned them. A missing field is
    /// the same as no repositories
    pub fn into_repositories(self) -> Vec<Repository> {
        self.repositories.unwrap_or_default()
    }
}

/// Data returned by `GET /branches/{repo_name}`
#[derive(Deserialize, Debug, Default)]
pub struct BranchList {
    /// The backend capitalizes this one. Any other spelling is not a branch list
    #[serde(rename = "Branches")]
    branches: Option<Vec<Branch>>,
}

impl BranchList {
    pub fn into_branches(self) -> Vec<Branch> {
        self.branches.unwrap_or_default()
    }
}

/// Instructions for the agent
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Display)
)]
pub struct Prompt(String);

/// Body of `POST /agent/run`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub prompt: String,
    pub repo_name: String,
    pub installation_id: u64,
    /// Branch the agent works on. The backend names this field in plural
    pub branches: String,
}

impl RunRequest {
    pub fn new(
        prompt: Prompt,
        repo_name: impl Into<String>,
        installation_id: u64,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into_inner(),
            repo_name: repo_name.into(),
            installation_id,
            branches: branch.into(),
        }
    }
}

/// Data returned by `POST /agent/run`
///
/// The backend queues a job and answers with its id, but nothing here is
/// guaranteed so every field is optional
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct RunResponse {
    pub job_id: Option<String>,
    pub status: Option<String>,
}
