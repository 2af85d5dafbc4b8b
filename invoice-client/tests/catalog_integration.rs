// invoice-client/tests/catalog_integration.rs
// HTTP catalog against a local one-shot feed server

use invoice_client::{ClientConfig, ClientError, HttpCatalog, InMemoryCatalog, ProductLookup};
use shared::LineItem;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:g="http://base.google.com/ns/1.0" version="2.0">
  <channel>
    <item>
      <g:id>A-100</g:id>
      <g:title>Phone</g:title>
      <g:price>100.00 KZT</g:price>
      <g:brand>Acme</g:brand>
      <g:image_link>https://example.com/a.jpg</g:image_link>
    </item>
  </channel>
</rss>"#;

/// Serve `status` + `body` to every incoming connection, returns the base URL
async fn serve(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}/feed.xml", addr)
}

#[tokio::test]
async fn test_http_catalog_finds_product() {
    let url = serve("200 OK", FEED).await;
    let catalog = HttpCatalog::new(&ClientConfig::new(url).with_timeout_ms(5_000)).unwrap();

    let item = catalog.lookup("A-100").await.unwrap().unwrap();
    assert_eq!(item.title, "Phone");
    assert_eq!(item.price, "100.00 KZT");
    assert_eq!(item.quantity, 1);
}

#[tokio::test]
async fn test_http_catalog_not_found_is_none() {
    let url = serve("200 OK", FEED).await;
    let catalog = HttpCatalog::new(&ClientConfig::new(url)).unwrap();

    assert!(catalog.lookup("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_http_catalog_server_error_is_distinct_from_not_found() {
    let url = serve("500 Internal Server Error", "oops").await;
    let catalog = HttpCatalog::new(&ClientConfig::new(url)).unwrap();

    let result = catalog.lookup("A-100").await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn test_http_catalog_rejects_empty_url() {
    let result = HttpCatalog::new(&ClientConfig::new("  "));
    assert!(matches!(result, Err(ClientError::Config(_))));
}

#[tokio::test]
async fn test_in_memory_catalog_resets_quantity() {
    let item = LineItem {
        id: "X-1".to_string(),
        title: "Cable".to_string(),
        price: "5.00 KZT".to_string(),
        quantity: 9,
        brand: String::new(),
        image: String::new(),
    };
    let catalog = InMemoryCatalog::new().with_item(item);

    let found = catalog.lookup(" X-1 ").await.unwrap().unwrap();
    assert_eq!(found.quantity, 1);
    assert!(catalog.lookup("X-2").await.unwrap().is_none());
}
