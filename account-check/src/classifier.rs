//! Account status classification.
//!
//! Pure decision logic: turns one provider lookup outcome into a [`Verdict`].
//! No I/O and no state is kept between calls.

use crate::config::profile_url;
use crate::types::{LookupOutcome, LookupRecord, ProfileSnapshot, Verdict};

/// Message for accounts the provider has no usable record for
pub const NOT_FOUND_MESSAGE: &str = "account does not exist or is not available";
/// Message for records that fail the plausibility checks
pub const INCOMPLETE_MESSAGE: &str = "account data incomplete or account unavailable";

/// Classify the outcome of a lookup for `username`.
///
/// `profile_url_base` is used to build the canonical profile link of LIVE
/// verdicts.
pub fn classify(username: &str, outcome: &LookupOutcome, profile_url_base: &str) -> Verdict {
    match outcome {
        Err(err) => Verdict::error(username, err.to_string()),
        Ok(None) => Verdict::not_available(username, NOT_FOUND_MESSAGE),
        Ok(Some(record)) => classify_record(username, record, profile_url_base),
    }
}

/// Classify a record the provider did return
pub fn classify_record(username: &str, record: &LookupRecord, profile_url_base: &str) -> Verdict {
    let user_id = match record.pk {
        Some(id) if id != 0 => id,
        _ => return Verdict::not_available(username, NOT_FOUND_MESSAGE),
    };

    if !is_plausible(record) {
        return Verdict::not_available(username, INCOMPLETE_MESSAGE);
    }

    Verdict::live(
        username,
        ProfileSnapshot {
            user_id,
            full_name: record.full_name.clone().unwrap_or_default(),
            biography: record.biography.clone().unwrap_or_default(),
            follower_count: record.follower_count.unwrap_or(0),
            following_count: record.following_count.unwrap_or(0),
            is_private: record.is_private.unwrap_or(false),
            is_verified: record.is_verified.unwrap_or(false),
            profile_pic: record.profile_pic_url.clone().unwrap_or_default(),
            profile_url: profile_url(profile_url_base, username),
        },
    )
}

/// Heuristic guard against placeholder records for deactivated accounts.
///
/// Counts must be non-negative and at least one of name or biography must be
/// present (an empty string counts as present). This can reject legitimate
/// accounts with a minimal profile; the provider documents no stronger signal.
fn is_plausible(record: &LookupRecord) -> bool {
    let followers = record.follower_count.unwrap_or(0);
    let following = record.following_count.unwrap_or(0);

    followers >= 0
        && following >= 0
        && (record.full_name.is_some() || record.biography.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::types::AccountStatus;

    const BASE: &str = "https://instagram.com";

    fn alice() -> LookupRecord {
        LookupRecord {
            pk: Some(123),
            full_name: Some("Alice".to_string()),
            follower_count: Some(10),
            following_count: Some(5),
            ..LookupRecord::default()
        }
    }

    #[test]
    fn test_lookup_error_is_error_verdict() {
        let outcome: LookupOutcome = Err(LookupError::transport("connection reset"));
        let verdict = classify("alice", &outcome, BASE);

        assert_eq!(verdict.status(), AccountStatus::Error);
        assert!(!verdict.is_live());
        assert_eq!(verdict.error_message(), Some("request failed: connection reset"));
        assert!(verdict.profile().is_none());
    }

    #[test]
    fn test_missing_record_is_not_available() {
        let verdict = classify("ghost_user_000", &Ok(None), BASE);

        assert_eq!(verdict.status(), AccountStatus::NotAvailable);
        assert_eq!(verdict.error_message(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_zero_or_missing_id_is_not_available_regardless_of_fields() {
        let mut record = alice();
        record.pk = Some(0);
        let verdict = classify_record("alice", &record, BASE);
        assert_eq!(verdict.status(), AccountStatus::NotAvailable);
        assert_eq!(verdict.error_message(), Some(NOT_FOUND_MESSAGE));

        record.pk = None;
        record.is_verified = Some(true);
        record.biography = Some("bio".to_string());
        let verdict = classify_record("alice", &record, BASE);
        assert_eq!(verdict.status(), AccountStatus::NotAvailable);
        assert_eq!(verdict.error_message(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_valid_record_is_live_with_mapped_profile() {
        let verdict = classify("alice", &Ok(Some(alice())), BASE);

        assert_eq!(verdict.status(), AccountStatus::Live);
        assert!(verdict.is_live());
        assert!(verdict.error_message().is_none());

        let profile = verdict.profile().unwrap();
        assert_eq!(profile.user_id, 123);
        assert_eq!(profile.full_name, "Alice");
        assert_eq!(profile.biography, "");
        assert_eq!(profile.follower_count, 10);
        assert_eq!(profile.following_count, 5);
        assert!(!profile.is_private);
        assert!(!profile.is_verified);
        assert_eq!(profile.profile_pic, "");
        assert_eq!(profile.profile_url, "https://instagram.com/alice");
    }

    #[test]
    fn test_biography_alone_is_enough() {
        let record = LookupRecord {
            biography: Some("photographer".to_string()),
            ..LookupRecord::with_id(42)
        };
        let verdict = classify_record("lens", &record, BASE);
        assert_eq!(verdict.status(), AccountStatus::Live);
        assert_eq!(verdict.profile().unwrap().follower_count, 0);
    }

    #[test]
    fn test_empty_name_counts_as_present() {
        let record = LookupRecord {
            full_name: Some(String::new()),
            ..LookupRecord::with_id(7)
        };
        assert_eq!(
            classify_record("quiet", &record, BASE).status(),
            AccountStatus::Live
        );
    }

    #[test]
    fn test_negative_counts_are_not_available() {
        let mut record = alice();
        record.follower_count = Some(-1);
        let verdict = classify_record("alice", &record, BASE);
        assert_eq!(verdict.status(), AccountStatus::NotAvailable);
        assert_eq!(verdict.error_message(), Some(INCOMPLETE_MESSAGE));

        let mut record = alice();
        record.following_count = Some(-5);
        let verdict = classify_record("alice", &record, BASE);
        assert_eq!(verdict.status(), AccountStatus::NotAvailable);
        assert_eq!(verdict.error_message(), Some(INCOMPLETE_MESSAGE));
    }

    #[test]
    fn test_missing_name_and_biography_is_not_available() {
        let record = LookupRecord {
            follower_count: Some(100),
            following_count: Some(100),
            ..LookupRecord::with_id(99)
        };
        let verdict = classify_record("blank", &record, BASE);
        assert_eq!(verdict.status(), AccountStatus::NotAvailable);
        assert_eq!(verdict.error_message(), Some(INCOMPLETE_MESSAGE));
    }

    #[test]
    fn test_exactly_one_status_per_outcome() {
        let outcomes: Vec<LookupOutcome> = vec![
            Err(LookupError::status(500, "boom")),
            Ok(None),
            Ok(Some(LookupRecord::default())),
            Ok(Some(LookupRecord::with_id(1))),
            Ok(Some(alice())),
        ];

        for outcome in &outcomes {
            let verdict = classify("user", outcome, BASE);
            match verdict.status() {
                AccountStatus::Live => {
                    assert!(verdict.is_live());
                    assert!(verdict.profile().is_some());
                    assert!(verdict.error_message().is_none());
                }
                AccountStatus::NotAvailable | AccountStatus::Error => {
                    assert!(!verdict.is_live());
                    assert!(verdict.profile().is_none());
                    assert!(verdict.error_message().is_some());
                }
            }
        }
    }

    #[test]
    fn test_profile_url_base_is_configurable() {
        let verdict = classify_record("alice", &alice(), "https://www.instagram.com/");
        assert_eq!(
            verdict.profile().unwrap().profile_url,
            "https://www.instagram.com/alice"
        );
    }
}
