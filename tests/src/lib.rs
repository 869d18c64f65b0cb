//! Shared fixtures for the account-check integration tests

use account_check::config::ProviderConfig;
use account_check::CheckerConfig;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Access key the mock provider expects
pub const TEST_TOKEN: &str = "test-access-key";

/// Provider configuration pointing at a mock server
pub fn provider_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        base_url: server.uri(),
        token: Some(TEST_TOKEN.to_string()),
        timeout_seconds: 5,
    }
}

/// Full configuration pointing at a mock server, without pauses
pub fn checker_config(server: &MockServer) -> CheckerConfig {
    let mut config = CheckerConfig::default();
    config.provider = provider_config(server);
    config.batch.min_delay_ms = 0;
    config.batch.max_delay_ms = 0;
    config.server.min_delay_ms = 0;
    config.server.max_delay_ms = 0;
    config
}

/// Provider payload of a regular public profile
pub fn profile_body(pk: u64, full_name: &str) -> Value {
    json!({
        "pk": pk.to_string(),
        "username": full_name.to_lowercase(),
        "full_name": full_name,
        "biography": format!("{full_name} on the internet"),
        "follower_count": 10,
        "following_count": 5,
        "is_private": false,
        "is_verified": true,
        "profile_pic_url": format!("https://cdn.example.com/{pk}.jpg")
    })
}

/// Mount a response for one username on the profile endpoint
pub async fn mount_profile(server: &MockServer, username: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/user/by/username"))
        .and(query_param("username", username))
        .and(header("x-access-key", TEST_TOKEN))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Write a newline-delimited username list
pub fn write_usernames(dir: &Path, usernames: &[&str]) -> std::io::Result<std::path::PathBuf> {
    let path = dir.join("usernames.txt");
    fs::write(&path, usernames.join("\n"))?;
    Ok(path)
}
