//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use std::net::TcpListener;

use movie_explorer::config::ApiConfig;

/// A port nothing is listening on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout_secs: Some(5),
    }
}

pub const INCEPTION: &str = r#"{"Title":"Inception","Year":"2010","Director":"Christopher Nolan","Plot":"A thief who steals corporate secrets through the use of dream-sharing technology.","Poster":"http://img.example/inception.jpg"}"#;
