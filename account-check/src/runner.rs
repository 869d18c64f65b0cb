use crate::classifier::classify;
use crate::config::DEFAULT_PROFILE_URL_BASE;
use crate::error::{AccountCheckError, Result};
use crate::traits::{DelayPolicy, ProfileLookup, ProgressCallback};
use crate::types::{AccountStatus, BatchRun, Verdict};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Sequential batch runner: one lookup per username, a pause in between
pub struct BatchRunner<C, D>
where
    C: ProfileLookup,
    D: DelayPolicy,
{
    client: Arc<C>,
    delay: D,
    profile_url_base: String,
    cancel: Option<CancellationToken>,
}

impl<C, D> BatchRunner<C, D>
where
    C: ProfileLookup,
    D: DelayPolicy,
{
    /// Create a new batch runner
    pub fn new(client: C, delay: D) -> Self {
        Self::with_shared_client(Arc::new(client), delay)
    }

    /// Create a batch runner around a client shared with other runners
    pub fn with_shared_client(client: Arc<C>, delay: D) -> Self {
        Self {
            client,
            delay,
            profile_url_base: DEFAULT_PROFILE_URL_BASE.to_string(),
            cancel: None,
        }
    }

    /// Configure the base used for canonical profile links
    pub fn with_profile_url_base<S: Into<String>>(mut self, base: S) -> Self {
        self.profile_url_base = base.into();
        self
    }

    /// Stop the batch early once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Look up and classify a single username
    pub async fn check_one(&self, username: &str) -> Verdict {
        let outcome = self.client.fetch_profile(username).await;
        let verdict = classify(username, &outcome, &self.profile_url_base);

        match verdict.status() {
            AccountStatus::Live => info!(username, "account is live"),
            AccountStatus::NotAvailable => info!(
                username,
                reason = verdict.error_message().unwrap_or_default(),
                "account not available"
            ),
            AccountStatus::Error => warn!(
                username,
                error = verdict.error_message().unwrap_or_default(),
                "lookup failed"
            ),
        }

        verdict
    }

    /// Check every username in order
    pub async fn run(&self, usernames: &[String]) -> Result<BatchRun> {
        self.run_with_progress(usernames, None).await
    }

    /// Check every username in order, reporting each verdict to `progress`.
    ///
    /// Returns [`AccountCheckError::NoUsernames`] without any lookup when
    /// `usernames` is empty. A cancelled run returns the verdicts collected so
    /// far.
    pub async fn run_with_progress(
        &self,
        usernames: &[String],
        progress: Option<ProgressCallback>,
    ) -> Result<BatchRun> {
        if usernames.is_empty() {
            return Err(AccountCheckError::NoUsernames);
        }

        let total = usernames.len();
        let mut run = BatchRun::new();

        for (index, username) in usernames.iter().enumerate() {
            if index > 0 {
                if self.is_cancelled() {
                    break;
                }
                let pause = self.delay.next_delay();
                if !pause.is_zero() {
                    debug!("pausing {:.1}s before next lookup", pause.as_secs_f64());
                    tokio::time::sleep(pause).await;
                }
            }

            if self.is_cancelled() {
                break;
            }

            let verdict = self.check_one(username).await;
            if let Some(ref callback) = progress {
                callback(index + 1, total, &verdict);
            }
            run.record(verdict);
        }

        if run.len() < total {
            warn!(
                completed = run.len(),
                total, "batch cancelled before all usernames were checked"
            );
        }

        Ok(run)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
