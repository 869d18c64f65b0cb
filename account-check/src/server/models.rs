//! Request and response bodies of the HTTP API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::config::normalize_username;
use crate::types::{BatchRun, Verdict};

/// Body of `POST /api/check-multiple`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckMultipleRequest {
    #[serde(default)]
    pub usernames: Option<Vec<String>>,
}

impl CheckMultipleRequest {
    /// Usernames with surrounding whitespace and a leading `@` removed,
    /// blank entries dropped
    pub fn normalized(&self) -> Vec<String> {
        self.usernames
            .iter()
            .flatten()
            .filter_map(|name| normalize_username(name))
            .map(str::to_string)
            .collect()
    }
}

/// Response of `POST /api/check-multiple`
#[derive(Debug, Clone, Serialize)]
pub struct CheckMultipleResponse {
    pub results: Vec<Verdict>,
    pub total_checked: usize,
    pub live_count: usize,
    pub dead_count: usize,
}

impl From<BatchRun> for CheckMultipleResponse {
    fn from(run: BatchRun) -> Self {
        let live_count = run.live_count();
        let dead_count = run.dead_count();
        let results = run.into_verdicts();
        Self {
            total_checked: results.len(),
            results,
            live_count,
            dead_count,
        }
    }
}

/// Response of `GET /api/status`
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            status: "online",
            service: "Account Live Checker API",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Error returned to API clients as `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
