//! Poster download tests.

mod common;

use common::closed_port;
use common::mock_api::{MockApi, MockResponse};
use movie_explorer::poster;

#[tokio::test]
async fn test_downloads_image_bytes() {
    let mock = MockApi::start().await;
    let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    mock.enqueue(MockResponse::bytes("image/png", &png)).await;

    let url = format!("{}poster.png", mock.base_url());
    let bytes = poster::fetch_poster(&url, Some(5)).await.expect("bytes");
    assert_eq!(bytes, png);
}

#[tokio::test]
async fn test_missing_poster_yields_none() {
    let mock = MockApi::start().await;

    let url = format!("{}missing.jpg", mock.base_url());
    assert!(poster::fetch_poster(&url, Some(5)).await.is_none());
}

#[tokio::test]
async fn test_unreachable_host_yields_none() {
    let url = format!("http://127.0.0.1:{}/poster.jpg", closed_port());
    assert!(poster::fetch_poster(&url, Some(5)).await.is_none());
}
