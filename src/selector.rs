//! Repository and branch selection
//!
//! [`Selector`] owns the repositories of the installation, the branches of the
//! selected repository and the user's choices, and starts agent runs from them.
//!
//! Fetches never fail from the caller's point of view: errors are logged and the
//! state falls back to "nothing selected" / [`EMPTY_REPO_BRANCH`]. Branch lists
//! arrive asynchronously, and only the one requested by the most recent
//! repository selection is ever applied.

use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::{Context as _, anyhow, bail};
use url::Url;

use crate::api::{AgentRunner, BranchProvider, RepositoryProvider};
use crate::install;
use crate::types::{Branch, EMPTY_REPO_BRANCH, Prompt, Repository, RunRequest, RunResponse};

/// What the user currently sees and has chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Repositories from the last fetch, in the order the backend returned them
    pub repositories: Vec<Repository>,
    pub selected_repository: Option<Repository>,
    /// Branches of `selected_repository`
    pub branches: Vec<Branch>,
    /// One of `branches`, or [`EMPTY_REPO_BRANCH`] if there are none
    pub selected_branch: String,
    pub prompt: String,
    /// The repository list is being fetched
    pub pending: bool,
    /// The repository list has been fetched at least once, successfully or not
    pub initialized: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            repositories: Vec::new(),
            selected_repository: None,
            branches: Vec::new(),
            selected_branch: EMPTY_REPO_BRANCH.to_owned(),
            prompt: String::new(),
            pending: false,
            initialized: false,
        }
    }
}

/// How the repository control should be presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryControl {
    /// Repositories are being fetched, no selection possible
    Loading,
    /// There is nothing to pick from. Offer to install the app instead
    AddRepository(Url),
    /// Pick one of the repositories
    Picker {
        selected: Repository,
        /// Every other repository, in backend order
        others: Vec<Repository>,
        /// Install the app on more repositories
        add_more: Url,
    },
}

#[derive(Debug, Default)]
struct Inner {
    state: SelectionState,
    /// Ticket of the latest repository selection. Branch lists fetched for an
    /// older ticket are dropped
    latest_ticket: u64,
}

impl Inner {
    /// Forget the selected repository and its branches
    fn clear_selection(&mut self) {
        self.latest_ticket += 1;
        self.state.selected_repository = None;
        self.state.branches.clear();
        self.state.selected_branch = EMPTY_REPO_BRANCH.to_owned();
    }
}

/// Repository and branch selector backed by `B`
#[derive(Debug)]
pub struct Selector<B> {
    backend: B,
    installation_id: Option<u64>,
    install_url: Url,
    inner: Mutex<Inner>,
}

impl<B> Selector<B>
where
    B: RepositoryProvider + BranchProvider + AgentRunner,
{
    /// `installation_id` is sent along with every agent run. `install_url` is
    /// offered when there are no repositories
    pub fn new(backend: B, installation_id: Option<u64>, install_url: Url) -> Self {
        Self {
            backend,
            installation_id,
            install_url,
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SelectionState {
        self.lock().state.clone()
    }

    /// Prepare the selector for the page at `address`.
    ///
    /// If the installation flow just returned to `address`, its marker is removed
    /// first so that the callback is not processed twice
    pub async fn mount(&self, address: &mut Url) {
        if install::strip_installation_marker(address) {
            log::debug!("returned from the installation flow, address is now {address}");
        }

        self.initialize().await;
    }

    /// Fetch the repositories and select the first one
    pub async fn initialize(&self) {
        self.lock().state.pending = true;

        let repositories = self
            .backend
            .installation_repos()
            .await
            .inspect(|repositories| {
                log::debug!("fetched {} repositories", repositories.len());
            })
            .unwrap_or_else(|err| {
                log::error!("Failed to fetch repositories:\n{err}");
                Vec::new()
            });

        let first = repositories.first().cloned();

        {
            let mut inner = self.lock();
            inner.state.repositories = repositories;
            inner.state.initialized = true;
            if first.is_none() {
                inner.clear_selection();
            }
        }

        if let Some(first) = first {
            self.select(first).await;
        }

        self.lock().state.pending = false;
    }

    /// Select `repository` and fetch its branches.
    ///
    /// The selection is visible immediately, with no branches. If another
    /// repository is selected before the branches arrive they are discarded.
    ///
    /// Ignored while the repositories are being fetched, the first of them is
    /// selected once they arrive
    pub async fn select_repository(&self, repository: Repository) {
        if self.lock().state.pending {
            log::warn!(
                "Not selecting {} while the repositories are loading",
                repository.full_name
            );
            return;
        }

        self.select(repository).await;
    }

    async fn select(&self, repository: Repository) {
        let ticket = {
            let mut inner = self.lock();
            inner.clear_selection();
            inner.state.selected_repository = Some(repository.clone());
            inner.latest_ticket
        };

        let branches = self
            .backend
            .branches(&repository.name)
            .await
            .unwrap_or_else(|err| {
                log::error!("Failed to fetch branches of {}:\n{err}", repository.full_name);
                Vec::new()
            });

        let mut inner = self.lock();

        if inner.latest_ticket != ticket {
            log::debug!(
                "discarding branches of {}, another repository was selected since",
                repository.full_name
            );
            return;
        }

        inner.state.selected_branch = branches
            .first()
            .map_or_else(|| EMPTY_REPO_BRANCH.to_owned(), |branch| branch.name.clone());
        inner.state.branches = branches;
    }

    /// Select one of the branches of the selected repository
    pub fn select_branch(&self, name: &str) -> anyhow::Result<()> {
        let mut inner = self.lock();

        if !inner.state.branches.iter().any(|branch| branch.name == name) {
            let repository = inner
                .state
                .selected_repository
                .as_ref()
                .map_or("<none>", |repository| repository.full_name.as_str());
            bail!("Repository {repository} has no branch `{name}`");
        }

        name.clone_into(&mut inner.state.selected_branch);

        Ok(())
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.lock().state.prompt = prompt.into();
    }

    /// One of the fetched repositories, by `name` or `full_name`
    pub fn find_repository(&self, name: &str) -> Option<Repository> {
        self.lock()
            .state
            .repositories
            .iter()
            .find(|repository| repository.name == name || repository.full_name == name)
            .cloned()
    }

    /// How to present the repository control
    pub fn control(&self) -> RepositoryControl {
        let inner = self.lock();
        let state = &inner.state;

        if state.pending && !state.initialized {
            return RepositoryControl::Loading;
        }

        match &state.selected_repository {
            Some(selected) if !state.repositories.is_empty() => RepositoryControl::Picker {
                selected: selected.clone(),
                others: state
                    .repositories
                    .iter()
                    .filter(|repository| repository.id != selected.id)
                    .cloned()
                    .collect(),
                add_more: self.install_url.clone(),
            },
            Some(_) | None => RepositoryControl::AddRepository(self.install_url.clone()),
        }
    }

    /// Build the run request out of the current selection
    fn run_request(&self) -> anyhow::Result<RunRequest> {
        let inner = self.lock();
        let state = &inner.state;

        let prompt = Prompt::try_new(state.prompt.as_str())
            .map_err(|err| anyhow!("Tell the agent what to do: {err}"))?;

        let repository = state
            .selected_repository
            .as_ref()
            .context("No repository selected")?;

        let installation_id = self.installation_id.context(
            "No installation id configured. Set `installation-id` in the config \
             to the id GitHub assigned when the app was installed",
        )?;

        if state.branches.is_empty() {
            bail!(
                "Repository {} has no branches, push a commit to it first",
                repository.full_name
            );
        }

        Ok(RunRequest::new(
            prompt,
            repository.name.as_str(),
            installation_id,
            state.selected_branch.as_str(),
        ))
    }

    /// Ask the agent to carry out the prompt on the selected repository and branch.
    ///
    /// Fails without sending anything if the prompt is blank, no repository is
    /// selected, no installation id is configured, or the selected repository
    /// has no branches. The `(empty repo)` placeholder is never submitted
    pub async fn submit(&self) -> anyhow::Result<RunResponse> {
        let request = self.run_request()?;

        log::info!(
            "Starting agent on {} ({})",
            request.repo_name,
            request.branches
        );

        self.backend.run_agent(&request).await
    }
}
