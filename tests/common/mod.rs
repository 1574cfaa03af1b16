//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use mock_backend::{MockBackend, MockResponse};
use postboard::config::{ApiConfig, Config};
use postboard::model::{Post, Reactions};
use postboard::Store;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config pointing at a mock server with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 2,
            connect_timeout_seconds: 1,
            ..ApiConfig::default()
        },
        ..Config::default()
    }
}

/// A store wired to `mock`.
pub fn store_for(mock: &MockBackend) -> Store {
    Store::from_config(&test_config(&mock.base_url())).expect("Failed to build store")
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Remote representation of a post, as the placeholder API sends it.
pub fn remote_post(id: u64, title: &str, body: &str, user_id: u64) -> serde_json::Value {
    json!({ "id": id, "title": title, "body": body, "userId": user_id })
}

/// `GET /posts` answer with the given records.
pub fn posts_response(posts: &[serde_json::Value]) -> MockResponse {
    MockResponse::json_value(serde_json::Value::Array(posts.to_vec()))
}

/// `GET /users` answer with `(id, name)` pairs plus an opaque extra field.
pub fn users_response(users: &[(u64, &str)]) -> MockResponse {
    let users: Vec<_> = users
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name, "phone": "555-0100" }))
        .collect();
    MockResponse::json_value(serde_json::Value::Array(users))
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn post(id: u64, user_id: u64, minutes_ago: i64) -> Post {
    Post {
        id,
        title: format!("Post {}", id),
        body: format!("Body of post {}", id),
        user_id,
        date: fixed_now() - chrono::Duration::minutes(minutes_ago),
        reactions: Reactions::zeroed(),
    }
}
