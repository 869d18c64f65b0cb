use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::LookupError;

/// Raw profile record as returned by the data provider.
///
/// Every field is optional: the provider may send partial or placeholder
/// records for accounts that no longer exist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LookupRecord {
    /// Numeric account identifier, sent either as a number or a numeric string
    #[serde(default, deserialize_with = "deserialize_account_id")]
    pub pk: Option<u64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub follower_count: Option<i64>,
    #[serde(default)]
    pub following_count: Option<i64>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

impl LookupRecord {
    /// Record with only the identifier set
    pub fn with_id(pk: u64) -> Self {
        Self {
            pk: Some(pk),
            ..Self::default()
        }
    }
}

fn deserialize_account_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Unsigned(u64),
        Signed(i64),
        Text(String),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Unsigned(n)) => Some(n),
        Some(RawId::Signed(_)) => None,
        Some(RawId::Text(s)) => s.trim().parse::<u64>().ok(),
        None => None,
    })
}

/// Outcome of one provider lookup: a record, no record, or a failure
pub type LookupOutcome = std::result::Result<Option<LookupRecord>, LookupError>;

/// Classification tag of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Live,
    NotAvailable,
    Error,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::NotAvailable => "NOT_AVAILABLE",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a live profile. Never contains nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub user_id: u64,
    pub full_name: String,
    pub biography: String,
    pub follower_count: i64,
    pub following_count: i64,
    pub is_private: bool,
    pub is_verified: bool,
    pub profile_pic: String,
    pub profile_url: String,
}

/// Classification outcome for one username.
///
/// Only constructible through [`Verdict::live`], [`Verdict::not_available`]
/// and [`Verdict::error`], so a LIVE verdict always carries a profile and any
/// other verdict always carries an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    username: String,
    is_live: bool,
    status: AccountStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_info: Option<ProfileSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Verdict {
    pub fn live<S: Into<String>>(username: S, profile: ProfileSnapshot) -> Self {
        Self {
            username: username.into(),
            is_live: true,
            status: AccountStatus::Live,
            user_info: Some(profile),
            error: None,
        }
    }

    pub fn not_available<S: Into<String>, M: Into<String>>(username: S, message: M) -> Self {
        Self {
            username: username.into(),
            is_live: false,
            status: AccountStatus::NotAvailable,
            user_info: None,
            error: Some(message.into()),
        }
    }

    pub fn error<S: Into<String>, M: Into<String>>(username: S, message: M) -> Self {
        Self {
            username: username.into(),
            is_live: false,
            status: AccountStatus::Error,
            user_info: None,
            error: Some(message.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn profile(&self) -> Option<&ProfileSnapshot> {
        self.user_info.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Results and counters of one pass over a username list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchRun {
    verdicts: Vec<Verdict>,
    total_calls: usize,
    live_count: usize,
    dead_count: usize,
}

impl BatchRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the verdict of one lookup attempt
    pub fn record(&mut self, verdict: Verdict) {
        self.total_calls += 1;
        if verdict.is_live() {
            self.live_count += 1;
        } else {
            self.dead_count += 1;
        }
        self.verdicts.push(verdict);
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn into_verdicts(self) -> Vec<Verdict> {
        self.verdicts
    }

    pub fn total_calls(&self) -> usize {
        self.total_calls
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn dead_count(&self) -> usize {
        self.dead_count
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// LIVE verdicts in input order
    pub fn live(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.is_live())
    }

    /// NOT_AVAILABLE and ERROR verdicts in input order
    pub fn dead(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.is_live())
    }
}
