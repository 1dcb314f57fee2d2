use std::io::Write;
use std::sync::Arc;

use lexi_core::{LoadError, WordSearchHelper, WordSource};
use lexi_types::SearchOutcome;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::words::{FileWordSource, HttpWordSource};

const APPLE_JSON: &str = r#"[{"word":"apple","definition":"苹果","mnemonic_type":"sound","mnemonic_content":"...","example_sentence":"..."}]"#;

/// Answer one HTTP request per scripted response, in order
async fn serve(responses: Vec<(&'static str, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for (status_line, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/words.json", addr)
}

async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    serve(vec![(status_line, body)]).await
}

fn http_source(url: String) -> HttpWordSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpWordSource::with_client(client, url)
}

#[tokio::test]
async fn test_http_source_parses_word_list() {
    let url = serve_once("200 OK", APPLE_JSON).await;

    let words = http_source(url).fetch_words().await.unwrap();

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "apple");
    assert_eq!(words[0].definition, "苹果");
}

#[tokio::test]
async fn test_http_source_reports_status() {
    let url = serve_once("404 Not Found", "").await;

    let err = http_source(url).fetch_words().await.unwrap_err();

    assert!(matches!(err, LoadError::Status(404)));
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn test_http_source_rejects_malformed_payload() {
    let url = serve_once("200 OK", r#"{"word":"apple"}"#).await;

    let err = http_source(url).fetch_words().await.unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn test_failed_http_reload_keeps_words() {
    let url = serve(vec![
        ("200 OK", APPLE_JSON),
        ("500 Internal Server Error", ""),
    ])
    .await;
    let helper = WordSearchHelper::new(Arc::new(http_source(url)));

    helper.load_words_data().await;
    assert!(helper.search_word("Apple").is_found());

    helper.load_words_data().await;

    assert!(!helper.is_loading());
    assert_eq!(
        helper.last_error().as_deref(),
        Some("HTTP error! status: 500")
    );
    assert_eq!(helper.word_count(), 1);
    assert!(helper.search_word("apple").is_found());
}

#[tokio::test]
async fn test_file_source_loads_into_helper() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(APPLE_JSON.as_bytes()).unwrap();

    let helper = WordSearchHelper::new(Arc::new(FileWordSource::new(file.path())));
    helper.load_words_data().await;

    match helper.search_word("APPLE") {
        SearchOutcome::Found(entry) => assert_eq!(entry.mnemonic_type, "sound"),
        SearchOutcome::NotFound => panic!("apple should be found"),
    }
}

#[tokio::test]
async fn test_missing_file_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileWordSource::new(dir.path().join("missing.json"));

    let helper = WordSearchHelper::new(Arc::new(source));
    helper.load_words_data().await;

    assert!(!helper.is_loading());
    assert!(helper.last_error().unwrap().starts_with("IO error"));
}
