//! Integration tests for the content API source against a mock server.

use mockito::{Matcher, Server};
use slideloader::error::Error;
use slideloader::{ContentRequestConfig, ContentSource, GitHubContentSource, HtmlDeck, SlideLoader};

fn config(host: &str, files: &[&str]) -> ContentRequestConfig {
    ContentRequestConfig::new("nodeguard", "curriculum")
        .with_host(host)
        .with_base_path("slides")
        .with_files(files.iter().copied())
}

fn file_body(name: &str, content: &str) -> String {
    serde_json::json!({
        "type": "file",
        "name": name,
        "path": format!("slides/{}", name),
        "encoding": "base64",
        "content": content,
    })
    .to_string()
}

#[tokio::test]
async fn test_fetch_decodes_wrapped_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/nodeguard/curriculum/contents/slides/intro.md")
        .match_header("accept", "application/vnd.github+json")
        .match_header("user-agent", Matcher::Regex("^slideloader/".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(file_body("intro.md", "IyBJbnRy\nbw==\n"))
        .create_async()
        .await;

    let config = config(&server.url(), &["intro.md"]);
    let docs = slideloader::fetch_documents(
        &config,
        &GitHubContentSource::new(),
        &Default::default(),
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(docs[0].text, "# Intro");
}

#[tokio::test]
async fn test_token_sent_as_bearer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/nodeguard/curriculum/contents/slides/a.md")
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_body(file_body("a.md", "aGVsbG8="))
        .create_async()
        .await;

    let source = GitHubContentSource::new().with_token("secret");
    let payload = source
        .fetch(&config(&server.url(), &["a.md"]), "a.md")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(payload.content, "aGVsbG8=");
}

#[tokio::test]
async fn test_not_found_aborts_remaining_fetches() {
    let mut server = Server::new_async().await;
    let intro = server
        .mock("GET", "/repos/nodeguard/curriculum/contents/slides/intro.md")
        .with_status(200)
        .with_body(file_body("intro.md", "IyBJbnRybw=="))
        .expect(1)
        .create_async()
        .await;
    let bad = server
        .mock("GET", "/repos/nodeguard/curriculum/contents/slides/bad.md")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .expect(1)
        .create_async()
        .await;
    let conclusion = server
        .mock("GET", "/repos/nodeguard/curriculum/contents/slides/conclusion.md")
        .with_status(200)
        .with_body(file_body("conclusion.md", "IyBFbmQ="))
        .expect(0)
        .create_async()
        .await;

    let mut target = HtmlDeck::new();
    let mut loader = SlideLoader::new(
        config(&server.url(), &["intro.md", "bad.md", "conclusion.md"]),
        GitHubContentSource::new(),
    );
    let err = loader.load(&mut target).await.unwrap_err();

    intro.assert_async().await;
    bad.assert_async().await;
    conclusion.assert_async().await;

    match err {
        Error::Fetch { filename, reason } => {
            assert_eq!(filename, "bad.md");
            assert!(reason.contains("404"));
            assert!(reason.contains("Not Found"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(target.deck().is_failed());
    assert!(!target.deck().is_initialized());
}

#[tokio::test]
async fn test_full_deck_from_server() {
    let mut server = Server::new_async().await;
    for (name, content) in [("intro.md", "IyBJbnRybw=="), ("conclusion.md", "IyBFbmQ=")] {
        server
            .mock("GET", format!("/repos/nodeguard/curriculum/contents/slides/{}", name).as_str())
            .with_status(200)
            .with_body(file_body(name, content))
            .create_async()
            .await;
    }

    let deck = slideloader::Slideloader::new("nodeguard", "curriculum")
        .with_host(server.url())
        .with_base_path("slides")
        .with_files(["intro.md", "conclusion.md"])
        .load()
        .await
        .unwrap();

    assert_eq!(deck.report.section_count, 2);
    assert_eq!(deck.markdown(), "# Intro\n\n---\n\n# End");
    let html = deck.to_html();
    assert!(html.find("# Intro").unwrap() < html.find("# End").unwrap());
    assert!(html.contains("Reveal.initialize("));
}

#[tokio::test]
async fn test_directory_listing_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/nodeguard/curriculum/contents/slides/nested")
        .with_status(200)
        .with_body(r#"[{"type": "file", "name": "a.md"}]"#)
        .create_async()
        .await;

    let err = GitHubContentSource::new()
        .fetch(&config(&server.url(), &["nested"]), "nested")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
