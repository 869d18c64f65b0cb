//! Account Check - classify social-media usernames as live or unavailable
//!
//! This crate looks usernames up through a third-party profile provider,
//! classifies every lookup outcome into a [`Verdict`], runs sequential
//! batches with randomized pauses, exports CSV reports and serves a small
//! HTTP API over the same classifier.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Main functionality modules
pub mod classifier;
pub mod delay;
pub mod http;
pub mod report;
pub mod runner;
pub mod server;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use classifier::{classify, classify_record};
pub use config::{load_usernames, normalize_username, parse_usernames, CheckerConfig};
pub use delay::{FixedDelay, NoDelay, UniformDelay};
pub use error::{AccountCheckError, LookupError, Result};
pub use http::HikerClient;
pub use report::{render_summary, summarize, CsvReporter, ExportedFiles, SummaryReport};
pub use runner::BatchRunner;
pub use server::{ApiServer, AppState};
pub use traits::{DelayPolicy, ProfileLookup, ProgressCallback};
pub use types::{AccountStatus, BatchRun, LookupOutcome, LookupRecord, ProfileSnapshot, Verdict};

/// Build the production runner for a file-driven batch from configuration
pub fn batch_runner(config: &CheckerConfig) -> Result<BatchRunner<HikerClient, UniformDelay>> {
    let client = HikerClient::new(&config.provider)?;
    let (min, max) = config.batch.delay_bounds();
    let delay = UniformDelay::new(min, max)?;
    Ok(BatchRunner::new(client, delay).with_profile_url_base(config.profile_url_base.clone()))
}

/// Build the production API server from configuration
pub fn api_server(config: &CheckerConfig) -> Result<ApiServer<HikerClient, UniformDelay>> {
    let client = HikerClient::new(&config.provider)?;
    let (min, max) = config.server.delay_bounds();
    let delay = UniformDelay::new(min, max)?;
    let state = AppState::new(client, delay, config.profile_url_base.clone());
    Ok(ApiServer::new(config.server.clone(), state))
}
