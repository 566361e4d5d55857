// File: crates/ascent-core/tests/source.rs
// Purpose: Loading rides over HTTP (against a local one-shot server) and from local files.

mod common;

use std::io::Write;
use std::time::Duration;

use ascent_core::source::{fetch_with, load_dataset};
use ascent_core::{ChartError, Source};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP/1.1 response and return the URL to hit.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let mut seen = Vec::new();
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
        }
        let resp = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(resp.as_bytes()).await.unwrap();
        sock.shutdown().await.ok();
    });
    format!("http://{addr}/cyclist-data.json")
}

fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder().no_proxy().timeout(timeout).build().unwrap()
}

#[tokio::test]
async fn fetches_and_parses_published_json() {
    let url = serve_once("200 OK", common::SAMPLE_JSON).await;
    let ds = fetch_with(&client(Duration::from_secs(5)), &url).await.expect("fetch");
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.rides()[2].name, "Nairo Quintana");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let url = serve_once("404 Not Found", "missing").await;
    match fetch_with(&client(Duration::from_secs(5)), &url).await {
        Err(ChartError::Status { status, url: u }) => {
            assert_eq!(status, 404);
            assert_eq!(u, url);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let url = serve_once("200 OK", "<html>not json</html>").await;
    let r = fetch_with(&client(Duration::from_secs(5)), &url).await;
    assert!(matches!(r, Err(ChartError::Json(_))));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let r = fetch_with(&client(Duration::from_secs(5)), &format!("http://{addr}/")).await;
    assert!(matches!(r, Err(ChartError::Http(_))));
}

#[tokio::test]
async fn silent_server_hits_the_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_sock, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });
    let r = fetch_with(&client(Duration::from_millis(200)), &format!("http://{addr}/")).await;
    match r {
        Err(ChartError::Http(e)) => assert!(e.is_timeout(), "{e}"),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[test]
fn loads_local_json_and_csv() {
    let dir = tempfile::tempdir().unwrap();

    let json = dir.path().join("rides.json");
    std::fs::write(&json, common::SAMPLE_JSON).unwrap();
    assert_eq!(load_dataset(&json).unwrap().len(), 3);

    let csv = dir.path().join("rides.CSV");
    let mut f = std::fs::File::create(&csv).unwrap();
    writeln!(f, "Time,Year,Name,Nationality,Doping").unwrap();
    writeln!(f, "36:50,1995,Marco Pantani,ITA,Alleged").unwrap();
    drop(f);
    let ds = load_dataset(&csv).unwrap();
    assert_eq!(ds.doping_count(), 1);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rides.txt");
    std::fs::write(&path, "whatever").unwrap();
    assert!(matches!(load_dataset(&path), Err(ChartError::UnsupportedInput(p)) if p == path));
}

#[tokio::test]
async fn file_source_loads_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rides.json");
    std::fs::write(&path, common::SAMPLE_JSON).unwrap();
    let source = Source::File(path.clone());
    assert_eq!(source.describe(), path.display().to_string());
    assert_eq!(source.load().await.unwrap().len(), 3);
    assert!(matches!(Source::default(), Source::Remote { .. }));
}
