//! Integration tests for the definition retriever.
//!
//! These tests serve canned HTTP responses from a one-shot listener so the
//! full fetch-decode-resolve path is exercised without an analytics server.

use cube_records_meta::DefinitionRetriever;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Spawns a listener that answers one HTTP request with the given status
/// line and body, returning the base URL to point the retriever at.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn retrieves_and_resolves_relations() {
    let base_url = serve_once(
        "200 OK",
        r#"{"cubes": [
            {"name": "Orders", "type": "cube", "title": "Orders", "connectedComponent": 1},
            {"name": "Users", "type": "cube", "title": "Users", "connectedComponent": 1},
            {"name": "Products", "type": "cube", "title": "Products", "connectedComponent": 2}
        ]}"#,
    )
    .await;

    let retriever = DefinitionRetriever::new(&base_url);
    let result = retriever.retrieve_definitions().await.unwrap();

    assert_eq!(result.len(), 3);

    let orders = result.iter().find(|c| c.name() == "Orders").unwrap();
    assert_eq!(orders.joins, vec!["Users"]);

    let users = result.iter().find(|c| c.name() == "Users").unwrap();
    assert_eq!(users.joins, vec!["Orders"]);

    let products = result.iter().find(|c| c.name() == "Products").unwrap();
    assert!(products.joins.is_empty());
}

#[tokio::test]
async fn handles_empty_cube_list() {
    let base_url = serve_once("200 OK", r#"{"cubes": []}"#).await;

    let retriever = DefinitionRetriever::new(&base_url);
    let result = retriever.retrieve_definitions().await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn cube_without_component_resolves_to_empty_joins() {
    let base_url = serve_once(
        "200 OK",
        r#"{"cubes": [{"name": "NoComponent", "type": "cube", "title": "No Component"}]}"#,
    )
    .await;

    let retriever = DefinitionRetriever::new(&base_url);
    let result = retriever.retrieve_definitions().await.unwrap();

    assert_eq!(result.len(), 1);
    assert!(result[0].joins.is_empty());
}

#[tokio::test]
async fn non_2xx_status_is_a_retrieval_error() {
    let base_url = serve_once("500 Internal Server Error", "{}").await;

    let retriever = DefinitionRetriever::new(&base_url);
    let err = retriever.retrieve_definitions().await.unwrap_err();

    assert!(err.is_retrieval_error());
}

#[tokio::test]
async fn malformed_json_is_a_retrieval_error() {
    let base_url = serve_once("200 OK", "<html>not json</html>").await;

    let retriever = DefinitionRetriever::new(&base_url);
    let err = retriever.retrieve_definitions().await.unwrap_err();

    assert!(err.is_retrieval_error());
    assert!(format!("{err}").contains("/v1/meta"));
}

#[tokio::test]
async fn connection_failure_is_a_retrieval_error() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let retriever = DefinitionRetriever::new(&format!("http://{addr}"));
    let err = retriever.retrieve_definitions().await.unwrap_err();

    assert!(err.is_retrieval_error());
}
