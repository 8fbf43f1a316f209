use repo_showcase::app::run_showcase;
use repo_showcase::error::ShowcaseError;
use repo_showcase::github::GithubClient;
use repo_showcase::render::{CARDS_EMPTY_STATE, LANGUAGES_EMPTY_STATE};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Local listener that answers every request with the given status line and
/// an empty body.
async fn spawn_status_stub(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has no local address");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response =
                    format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}")
}

// A missing account answers 404; the client must surface the status and the
// widget must fall back to its empty states with a curated-only projects
// badge.
#[tokio::test]
async fn test_404_yields_empty_states_and_curated_badge() {
    let base = spawn_status_stub("HTTP/1.1 404 Not Found").await;
    let client = GithubClient::with_base_url(base).expect("failed to create client");

    let result = client.list_user_repos("someone").await;
    match result.unwrap_err() {
        ShowcaseError::RemoteService { status } => assert_eq!(status, 404),
        other => panic!("Expected RemoteService error, got: {:?}", other),
    }

    let page = run_showcase(&client, "someone", 4, 12).await;

    assert_eq!(page.rendered_cards, 0);
    assert_eq!(page.cards_html, CARDS_EMPTY_STATE);
    assert_eq!(page.languages_html, LANGUAGES_EMPTY_STATE);

    let projects = page
        .badge_updates
        .iter()
        .find(|u| u.label == "Projects")
        .expect("projects badge not reconciled");
    assert_eq!(projects.data_count, 4);
}

#[tokio::test]
async fn test_server_error_is_also_a_remote_service_error() {
    let base = spawn_status_stub("HTTP/1.1 503 Service Unavailable").await;
    let client = GithubClient::with_base_url(base).expect("failed to create client");

    let result = client.list_user_repos("someone").await;
    match result.unwrap_err() {
        ShowcaseError::RemoteService { status } => assert_eq!(status, 503),
        other => panic!("Expected RemoteService error, got: {:?}", other),
    }
}

// Both fetch arms fail fast against an unroutable host; the widget must
// degrade to its empty states and still reconcile the badges.
#[tokio::test]
async fn test_failed_fetches_degrade_to_empty_states() {
    let client =
        GithubClient::with_base_url("http://127.0.0.1:1").expect("failed to create client");

    let page = run_showcase(&client, "someone", 4, 12).await;

    assert_eq!(page.rendered_cards, 0);
    assert_eq!(page.cards_html, CARDS_EMPTY_STATE);
    assert_eq!(page.languages_html, LANGUAGES_EMPTY_STATE);

    let projects = page
        .badge_updates
        .iter()
        .find(|u| u.label == "Projects")
        .expect("projects badge not reconciled");
    assert_eq!(projects.data_count, 4);

    let technologies = page
        .badge_updates
        .iter()
        .find(|u| u.label == "Technologies")
        .expect("technologies badge not reconciled");
    assert_eq!(technologies.data_count, 12);
}
