//! Request handlers of the HTTP API

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{Html, Json};
use std::sync::Arc;
use tracing::{debug, info};

use super::models::{ApiError, CheckMultipleRequest, CheckMultipleResponse, StatusResponse};
use crate::config::normalize_username;
use crate::delay::NoDelay;
use crate::error::AccountCheckError;
use crate::runner::BatchRunner;
use crate::traits::{DelayPolicy, ProfileLookup};
use crate::types::Verdict;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Shared, read-only state of the API server
pub struct AppState<C, D> {
    /// Lookup client shared by every request
    pub client: Arc<C>,
    /// Pause policy between usernames of a multi-check
    pub delay: D,
    /// Base used for canonical profile links
    pub profile_url_base: String,
}

impl<C, D> AppState<C, D>
where
    C: ProfileLookup,
    D: DelayPolicy + Clone,
{
    pub fn new<S: Into<String>>(client: C, delay: D, profile_url_base: S) -> Self {
        Self {
            client: Arc::new(client),
            delay,
            profile_url_base: profile_url_base.into(),
        }
    }

    fn single_runner(&self) -> BatchRunner<C, NoDelay> {
        BatchRunner::with_shared_client(Arc::clone(&self.client), NoDelay)
            .with_profile_url_base(self.profile_url_base.clone())
    }

    fn batch_runner(&self) -> BatchRunner<C, D> {
        BatchRunner::with_shared_client(Arc::clone(&self.client), self.delay.clone())
            .with_profile_url_base(self.profile_url_base.clone())
    }
}

/// Embedded interactive page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Service liveness
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::default())
}

/// Classify a single username
pub async fn check_single<C, D>(
    State(state): State<Arc<AppState<C, D>>>,
    Path(username): Path<String>,
) -> Result<Json<Verdict>, ApiError>
where
    C: ProfileLookup + 'static,
    D: DelayPolicy + Clone + 'static,
{
    let username = normalize_username(&username)
        .ok_or_else(|| ApiError::bad_request("username must not be empty"))?;
    debug!(username, "single check requested");

    let verdict = state.single_runner().check_one(username).await;
    Ok(Json(verdict))
}

/// Classify a list of usernames sequentially, pausing between lookups
pub async fn check_multiple<C, D>(
    State(state): State<Arc<AppState<C, D>>>,
    payload: Result<Json<CheckMultipleRequest>, JsonRejection>,
) -> Result<Json<CheckMultipleResponse>, ApiError>
where
    C: ProfileLookup + 'static,
    D: DelayPolicy + Clone + 'static,
{
    let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let usernames = request.normalized();
    if usernames.is_empty() {
        return Err(ApiError::bad_request(AccountCheckError::NoUsernames.to_string()));
    }

    info!(count = usernames.len(), "multi-check requested");
    let run = state
        .batch_runner()
        .run(&usernames)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(CheckMultipleResponse::from(run)))
}
