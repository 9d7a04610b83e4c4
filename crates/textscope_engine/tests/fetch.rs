use std::time::Duration;

use pretty_assertions::assert_eq;
use textscope_engine::{
    analyse_wiki, write_artifacts, ContentParagraphExtractor, FailureKind, FetchSettings, Fetcher,
    ReqwestFetcher, WikiClient, WikiError, DEFAULT_USER_AGENT,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE_HTML: &str = r#"<html><body><div id="mw-content-text">
<p>Rust is a systems language.</p>
<p>   </p>
<p>It has 3 major editions and RUST fans.</p>
<p>Unrelated paragraph.</p>
</div></body></html>"#;

fn wiki_client(server: &MockServer) -> WikiClient {
    WikiClient::with_parts(
        &format!("{}/wiki", server.uri()),
        ReqwestFetcher::new(FetchSettings::default()).unwrap(),
        ContentParagraphExtractor::new(),
    )
    .unwrap()
}

#[tokio::test]
async fn fetcher_returns_html_and_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).unwrap();
    let url = format!("{}/doc", server.uri());

    let page = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(page.url, url);
    assert!(page.content_type.unwrap().starts_with("text/html"));
    assert_eq!(page.bytes, b"<html>ok</html>");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).unwrap();
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).unwrap();
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_non_html_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/image"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("PNG", "image/png"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).unwrap();
    let err = fetcher
        .fetch(&format!("{}/image", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "image/png".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_caps_body_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("x".repeat(64), "text/html"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 16,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).unwrap();

    let err = fetcher
        .fetch(&format!("{}/big", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::TooLarge { max_bytes: 16 });
}

#[tokio::test]
async fn wiki_client_returns_trimmed_paragraphs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Rust_(langage)"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(ARTICLE_HTML, "text/html; charset=UTF-8"),
        )
        .mount(&server)
        .await;

    let client = wiki_client(&server);
    let paragraphs = client.fetch_paragraphs("Rust_(langage)").await.unwrap();
    assert_eq!(
        paragraphs,
        vec![
            "Rust is a systems language.",
            "It has 3 major editions and RUST fans.",
            "Unrelated paragraph.",
        ]
    );

    let summary = analyse_wiki("Rust_(langage)", &paragraphs, "rust");
    assert_eq!(summary.paragraph_count, 3);
    assert_eq!(summary.stats.total_words, 14);
    assert_eq!(
        summary.lines(),
        vec![
            "Article: Rust_(langage)",
            "Total paragraphs: 3",
            "Total words: 14",
            "Average word length: 5",
            "",
            "Paragraphs containing 'rust':",
            "Rust is a systems language.",
            "It has 3 major editions and RUST fans.",
        ]
    );

    let out = tempfile::TempDir::new().unwrap();
    let outcomes = write_artifacts(out.path(), &[summary.artifact()]);
    assert!(outcomes[0].is_ok());
    assert!(out.path().join("wiki_Rust_(langage).txt").is_file());
}

#[tokio::test]
async fn wiki_page_without_paragraphs_is_nothing_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Empty"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><div id="mw-content-text"><p> </p></div></body></html>"#,
            "text/html",
        ))
        .mount(&server)
        .await;

    let err = wiki_client(&server)
        .fetch_paragraphs("Empty")
        .await
        .unwrap_err();
    assert!(err.is_nothing_found());
}

#[tokio::test]
async fn wiki_upstream_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = wiki_client(&server)
        .fetch_paragraphs("Missing")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WikiError::Fetch(ref fetch) if fetch.kind == FailureKind::HttpStatus(404)
    ));
    assert!(!err.is_nothing_found());
}

#[test]
fn article_urls_are_built_under_the_wiki_base() {
    let client = WikiClient::new("fr", FetchSettings::default()).unwrap();
    assert_eq!(
        client.article_url("Go_(langage)").unwrap().as_str(),
        "https://fr.wikipedia.org/wiki/Go_(langage)"
    );
    assert!(matches!(
        client.article_url("   "),
        Err(WikiError::EmptyArticle)
    ));
}

#[test]
fn namespaced_articles_stay_under_the_wiki_base() {
    let client = WikiClient::new("fr", FetchSettings::default()).unwrap();
    assert_eq!(
        client.article_url("Portail:Informatique").unwrap().as_str(),
        "https://fr.wikipedia.org/wiki/Portail:Informatique"
    );
    assert_eq!(
        client.article_url("Halo:_Combat_Evolved").unwrap().as_str(),
        "https://fr.wikipedia.org/wiki/Halo:_Combat_Evolved"
    );
    assert_eq!(
        client.article_url("/Mission:Impossible").unwrap().as_str(),
        "https://fr.wikipedia.org/wiki/Mission:Impossible"
    );
}

#[tokio::test]
async fn wiki_client_fetches_articles_with_a_colon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Mission:Impossible"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(ARTICLE_HTML, "text/html; charset=UTF-8"),
        )
        .mount(&server)
        .await;

    let paragraphs = wiki_client(&server)
        .fetch_paragraphs("Mission:Impossible")
        .await
        .unwrap();
    assert_eq!(paragraphs.len(), 3);
}
