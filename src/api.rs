//! Raw-Gent backend API

use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::APP_NAME;
use crate::config::Config;
use crate::types::{
    Branch, BranchList, InstallationRepos, Repository, RunRequest, RunResponse,
};

/// Lists the repositories the user installed the GitHub App on
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    async fn installation_repos(&self) -> Result<Vec<Repository>>;
}

/// Lists the branches of a repository
#[async_trait]
pub trait BranchProvider: Send + Sync {
    async fn branches(&self, repo_name: &str) -> Result<Vec<Branch>>;
}

/// Starts an agent run
#[async_trait]
pub trait AgentRunner: Send + Sync {
    async fn run_agent(&self, request: &RunRequest) -> Result<RunResponse>;
}

/// Client for the Raw-Gent backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the backend described by `config`
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| anyhow!("invalid header name `{name}`: {err}"))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|err| anyhow!("invalid value for header `{name}`: {err}"))?;
            headers.insert(header_name, header_value);
        }

        // the backend identifies the installation through this cookie
        let jar = Arc::new(Jar::default());
        if let Some(installation_id) = config.installation_id {
            jar.add_cookie_str(
                &format!("installation_id={installation_id}"),
                &config.base_url,
            );
        }

        let client = Client::builder()
            .user_agent(APP_NAME)
            .default_headers(headers)
            .cookie_provider(jar)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Origin every endpoint is relative to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the path of the base url
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("base url {} cannot have a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        log::trace!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| anyhow!("Error sending request to {url}: {err}"))?;

        parse_response(response, &url).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<T> {
        log::trace!("POST {url}");
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|err| anyhow!("Error sending request to {url}: {err}"))?;

        parse_response(response, &url).await
    }
}

/// Deserialize the body of a successful response
async fn parse_response<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        bail!("Request failed with status: {status}\nRequested URL: {url}\nResponse: {text}");
    }

    serde_json::from_str::<T>(&text).map_err(|err| {
        anyhow!("failed to parse response.\n{text}. failed to parse because: \n{err}")
    })
}

#[async_trait]
impl RepositoryProvider for ApiClient {
    async fn installation_repos(&self) -> Result<Vec<Repository>> {
        let url = self.endpoint(&["installation-repos"])?;
        let repos = self.get::<InstallationRepos>(url).await?;
        Ok(repos.into_repositories())
    }
}

#[async_trait]
impl BranchProvider for ApiClient {
    async fn branches(&self, repo_name: &str) -> Result<Vec<Branch>> {
        let url = self.endpoint(&["branches", repo_name])?;
        let branches = self.get::<BranchList>(url).await?;
        Ok(branches.into_branches())
    }
}

#[async_trait]
impl AgentRunner for ApiClient {
    async fn run_agent(&self, request: &RunRequest) -> Result<RunResponse> {
        let url = self.endpoint(&["agent", "run"])?;
        self.post(url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        let config = Config::parse(&format!("base-url = \"{base_url}\""), None).unwrap();
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn endpoints() {
        let api = client("https://rawgent.example.com");
        assert_eq!(
            api.endpoint(&["installation-repos"]).unwrap().as_str(),
            "https://rawgent.example.com/installation-repos"
        );
        assert_eq!(
            api.endpoint(&["agent", "run"]).unwrap().as_str(),
            "https://rawgent.example.com/agent/run"
        );
    }

    #[test]
    fn endpoints_keep_base_path() {
        let api = client("https://example.com/rawgent/");
        assert_eq!(
            api.endpoint(&["branches", "helix"]).unwrap().as_str(),
            "https://example.com/rawgent/branches/helix"
        );
    }

    #[test]
    fn repo_name_is_a_single_segment() {
        let api = client("https://rawgent.example.com");
        assert_eq!(
            api.endpoint(&["branches", "weird/name"]).unwrap().as_str(),
            "https://rawgent.example.com/branches/weird%2Fname"
        );
    }

    #[test]
    fn invalid_header() {
        let config = Config::parse(
            "base-url = \"https://rawgent.example.com\"\n[headers]\n\"bad header\" = \"x\"",
            None,
        )
        .unwrap();

        assert!(ApiClient::new(&config).is_err(), "header names cannot contain spaces");
    }
}
