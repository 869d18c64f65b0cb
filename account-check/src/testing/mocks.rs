use crate::error::LookupError;
use crate::traits::{DelayPolicy, ProfileLookup};
use crate::types::{LookupOutcome, LookupRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock profile lookup client for testing.
///
/// Usernames without a configured outcome resolve to "no record". Clones
/// share the recorded call log.
#[derive(Clone, Default)]
pub struct MockLookup {
    outcomes: HashMap<String, LookupOutcome>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record<S: Into<String>>(mut self, username: S, record: LookupRecord) -> Self {
        self.outcomes.insert(username.into(), Ok(Some(record)));
        self
    }

    pub fn with_missing<S: Into<String>>(mut self, username: S) -> Self {
        self.outcomes.insert(username.into(), Ok(None));
        self
    }

    pub fn with_failure<S: Into<String>>(mut self, username: S, error: LookupError) -> Self {
        self.outcomes.insert(username.into(), Err(error));
        self
    }

    /// Usernames looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }
}

impl ProfileLookup for MockLookup {
    async fn fetch_profile(&self, username: &str) -> LookupOutcome {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(username.to_string());
        }
        self.outcomes.get(username).cloned().unwrap_or(Ok(None))
    }
}

/// Delay policy that counts how often it is consulted
#[derive(Clone)]
pub struct RecordingDelay {
    delay: Duration,
    count: Arc<AtomicUsize>,
}

impl RecordingDelay {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl DelayPolicy for RecordingDelay {
    fn next_delay(&self) -> Duration {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.delay
    }
}
