//! HTTP mock tests for the backend client and the selector on top of it.

use rawgent::api::{AgentRunner as _, ApiClient, BranchProvider as _, RepositoryProvider as _};
use rawgent::config::Config;
use rawgent::selector::Selector;
use rawgent::types::{EMPTY_REPO_BRANCH, Prompt, RunRequest};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> Config {
    config_at(&server.uri())
}

fn config_at(base_url: &str) -> Config {
    Config::parse(
        &format!(
            "base-url = \"{base_url}\"\ninstallation-id = 7\n[headers]\nngrok-skip-browser-warning = \"true\""
        ),
        None,
    )
    .unwrap()
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&config(server)).unwrap()
}

async fn mock_repositories(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/installation-repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mock_branches(server: &MockServer, repo_name: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/branches/{repo_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// =============================================================================
// Client
// =============================================================================

#[tokio::test]
async fn installation_repos_sends_configured_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/installation-repos"))
        .and(header("content-type", "application/json"))
        .and(header("ngrok-skip-browser-warning", "true"))
        .and(header("cookie", "installation_id=7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "repositories": [
                {"id": 1, "name": "helix", "full_name": "helix-editor/helix"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client(&server).installation_repos().await.unwrap();

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].full_name, "helix-editor/helix");
}

#[tokio::test]
async fn installation_cookie_is_sent_below_base_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/installation-repos"))
        .and(header("cookie", "installation_id=7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"repositories": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/branches/helix"))
        .and(header("cookie", "installation_id=7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Branches": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/agent/run"))
        .and(header("cookie", "installation_id=7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(&config_at(&format!("{}/api", server.uri()))).unwrap();
    let request = RunRequest::new(Prompt::try_new("fix it").unwrap(), "helix", 7, "main");

    assert!(api.installation_repos().await.unwrap().is_empty());
    assert!(api.branches("helix").await.unwrap().is_empty());
    assert_eq!(
        api.run_agent(&request).await.unwrap().status.as_deref(),
        Some("queued")
    );
}

#[tokio::test]
async fn branches_require_exact_field_name() {
    let server = MockServer::start().await;
    mock_branches(&server, "helix", json!({"Branches": [{"name": "main"}]})).await;
    mock_branches(&server, "patchy", json!({"branches": [{"name": "main"}]})).await;

    let api = client(&server);

    let helix: Vec<_> = api
        .branches("helix")
        .await
        .unwrap()
        .into_iter()
        .map(|branch| branch.name)
        .collect();
    assert_eq!(helix, vec!["main".to_owned()]);

    assert!(
        api.branches("patchy").await.unwrap().is_empty(),
        "lowercase `branches` is not a branch list"
    );
}

#[tokio::test]
async fn server_error_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/installation-repos"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "GitHub App not installed or installation_id missing"
        })))
        .mount(&server)
        .await;

    let err = client(&server).installation_repos().await.unwrap_err();

    assert!(err.to_string().contains("400"), "{err}");
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/installation-repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ngrok</html>"))
        .mount(&server)
        .await;

    assert!(
        client(&server).installation_repos().await.is_err(),
        "html is not a repository list"
    );
}

#[tokio::test]
async fn run_agent_posts_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent/run"))
        .and(body_json(json!({
            "prompt": "fix the tests",
            "repo_name": "helix",
            "installation_id": 7,
            "branches": "master",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "3f1c",
            "status": "queued",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = RunRequest::new(Prompt::try_new("fix the tests").unwrap(), "helix", 7, "master");
    let response = client(&server).run_agent(&request).await.unwrap();

    assert_eq!(response.job_id.as_deref(), Some("3f1c"));
    assert_eq!(response.status.as_deref(), Some("queued"));
}

// =============================================================================
// Selector over HTTP
// =============================================================================

fn selector(server: &MockServer) -> Selector<ApiClient> {
    let config = config(server);
    Selector::new(
        ApiClient::new(&config).unwrap(),
        config.installation_id,
        config.install_url,
    )
}

#[tokio::test]
async fn initial_load_selects_first_repository() {
    let server = MockServer::start().await;
    mock_repositories(
        &server,
        json!({
            "repositories": [
                {"id": 2, "name": "zed", "full_name": "zed-industries/zed"},
                {"id": 1, "name": "helix", "full_name": "helix-editor/helix"}
            ]
        }),
    )
    .await;
    mock_branches(&server, "zed", json!({"Branches": [{"name": "main"}, {"name": "nightly"}]}))
        .await;

    let selector = selector(&server);
    let mut address = Url::parse("https://raw-gent.example.com/?installation_id=123").unwrap();
    selector.mount(&mut address).await;

    let state = selector.snapshot();
    assert_eq!(address.as_str(), "https://raw-gent.example.com/");
    assert_eq!(
        state.selected_repository.map(|repository| repository.name),
        Some("zed".to_owned()),
        "provider order, no sorting"
    );
    assert_eq!(state.selected_branch, "main");
    assert_eq!(state.branches.len(), 2);
}

#[tokio::test]
async fn initial_load_without_repositories() {
    let server = MockServer::start().await;
    mock_repositories(&server, json!({"repositories": []})).await;

    let selector = selector(&server);
    selector.initialize().await;

    let state = selector.snapshot();
    assert!(state.initialized, "initialization must complete");
    assert_eq!(state.selected_repository, None);
    assert_eq!(state.selected_branch, EMPTY_REPO_BRANCH);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "no branch fetch without a repository");
}

#[tokio::test]
async fn initial_load_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/installation-repos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let selector = selector(&server);
    selector.initialize().await;

    let state = selector.snapshot();
    assert!(state.initialized, "initialization must complete");
    assert!(!state.pending, "no endless loading state");
    assert_eq!(state.selected_repository, None);
    assert!(state.repositories.is_empty(), "failure is an empty list");
}

#[tokio::test]
async fn stale_branches_are_discarded() {
    let server = MockServer::start().await;
    mock_repositories(
        &server,
        json!({
            "repositories": [
                {"id": 1, "name": "slow", "full_name": "owner/slow"},
                {"id": 2, "name": "fast", "full_name": "owner/fast"}
            ]
        }),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/branches/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Branches": [{"name": "stale"}]}))
                .set_delay(std::time::Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    mock_branches(&server, "fast", json!({"Branches": [{"name": "fresh"}]})).await;

    let selector = selector(&server);
    selector.initialize().await;
    let slow = selector.find_repository("slow").unwrap();
    let fast = selector.find_repository("fast").unwrap();

    tokio::join!(
        selector.select_repository(slow),
        selector.select_repository(fast.clone()),
    );

    let state = selector.snapshot();
    assert_eq!(state.selected_repository, Some(fast));
    assert_eq!(state.selected_branch, "fresh");
    assert_eq!(state.branches.len(), 1);
}
