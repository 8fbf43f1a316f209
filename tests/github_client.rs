use repo_showcase::error::ShowcaseError;
use repo_showcase::github::GithubClient;

#[tokio::test]
async fn test_client_creation() {
    assert!(GithubClient::new().is_ok());
    assert!(GithubClient::with_base_url("http://localhost:9999").is_ok());
}

#[tokio::test]
async fn test_invalid_account_rejected_before_any_request() {
    let client = GithubClient::new().expect("failed to create client");

    let result = client.list_user_repos("").await;
    assert!(matches!(result, Err(ShowcaseError::InvalidAccount(_))));

    let result = client.list_user_repos("owner/repo").await;
    assert!(matches!(result, Err(ShowcaseError::InvalidAccount(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    let client =
        GithubClient::with_base_url("http://127.0.0.1:1").expect("failed to create client");

    let result = client.list_user_repos("someone").await;
    assert!(matches!(result, Err(ShowcaseError::Network(_))));
}

#[tokio::test]
#[ignore = "Hits the live GitHub API"]
async fn test_list_user_repos_live() {
    let client = GithubClient::new().expect("failed to create client");

    let repos = client
        .list_user_repos("octocat")
        .await
        .expect("failed to list repositories");

    assert!(!repos.is_empty());
    for repo in &repos {
        assert!(!repo.name.is_empty());
        assert!(!repo.html_url.is_empty());
    }
}

#[tokio::test]
#[ignore = "Hits the live GitHub API"]
async fn test_missing_account_is_a_remote_service_error() {
    let client = GithubClient::new().expect("failed to create client");

    let result = client
        .list_user_repos("this-account-does-not-exist-xyz123456")
        .await;

    match result.unwrap_err() {
        ShowcaseError::RemoteService { status } => assert_eq!(status, 404),
        other => panic!("Expected RemoteService error, got: {:?}", other),
    }
}
