use chrono::{DateTime, Duration, Utc};

/// Upstream revalidation interval; a snapshot older than this is no longer
/// considered fresh and the next render shows the stale badge.
pub const REVALIDATE_SECS: i64 = 600;

const OFFLINE_AFTER_SECS: i64 = 3 * REVALIDATE_SECS;
const OFFLINE_AFTER_FAILURES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessState {
    Fresh,
    Stale,
    Offline,
}

/// Classifies the current snapshot from the age of the last successful fetch
/// and the failure streak. Failures degrade immediately to Stale and to
/// Offline after a streak of three.
#[must_use]
pub fn evaluate_freshness(
    last_success: Option<DateTime<Utc>>,
    consecutive_failures: u32,
) -> FreshnessState {
    let Some(last_success) = last_success else {
        return if consecutive_failures >= OFFLINE_AFTER_FAILURES {
            FreshnessState::Offline
        } else {
            FreshnessState::Stale
        };
    };

    let age = Utc::now() - last_success;

    if age > Duration::seconds(OFFLINE_AFTER_SECS) || consecutive_failures >= OFFLINE_AFTER_FAILURES
    {
        FreshnessState::Offline
    } else if age > Duration::seconds(REVALIDATE_SECS) || consecutive_failures >= 1 {
        FreshnessState::Stale
    } else {
        FreshnessState::Fresh
    }
}
