use crate::types::{LookupOutcome, Verdict};
use std::future::Future;
use std::time::Duration;

/// Trait for profile lookup clients
pub trait ProfileLookup: Send + Sync {
    /// Fetch the profile record for a username.
    ///
    /// `Ok(None)` means the provider has no record for the username.
    fn fetch_profile(&self, username: &str) -> impl Future<Output = LookupOutcome> + Send;
}

/// Trait for the pause inserted between consecutive lookups
pub trait DelayPolicy: Send + Sync {
    /// Duration to wait before the next lookup
    fn next_delay(&self) -> Duration;
}

/// Type alias for the per-verdict progress callback: `(position, total, verdict)`
/// with a 1-based position.
pub type ProgressCallback = Box<dyn Fn(usize, usize, &Verdict) + Send + Sync>;
