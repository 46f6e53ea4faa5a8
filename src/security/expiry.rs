//! Credential age and expiry arithmetic.
//!
//! Timestamps are Unix seconds supplied by the caller. Nothing here reads
//! the clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SECONDS_PER_DAY;

fn max_age_seconds(max_age_days: u32) -> i64 {
    i64::from(max_age_days) * SECONDS_PER_DAY
}

/// Returns `true` once `now - created` reaches the maximum age.
///
/// The boundary is inclusive: a credential exactly `max_age_days` old is
/// expired.
pub fn is_expired(created: i64, now: i64, max_age_days: u32) -> bool {
    now.saturating_sub(created) >= max_age_seconds(max_age_days)
}

/// Whole days left before expiry, truncated toward zero.
///
/// Zero or negative for credentials that are already expired. Informational
/// only; gate access with [`is_expired`].
pub fn days_until_expiry(created: i64, now: i64, max_age_days: u32) -> i64 {
    created
        .saturating_add(max_age_seconds(max_age_days))
        .saturating_sub(now)
        / SECONDS_PER_DAY
}

/// Creation time and maximum age of a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialLifetime {
    pub created_at: DateTime<Utc>,
    pub max_age_days: u32,
}

impl CredentialLifetime {
    pub fn new(created_at: DateTime<Utc>, max_age_days: u32) -> Self {
        Self {
            created_at,
            max_age_days,
        }
    }

    /// First instant at which the credential counts as expired.
    ///
    /// Saturates at [`DateTime::<Utc>::MAX_UTC`] when the sum is not
    /// representable.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at
            .checked_add_signed(Duration::seconds(max_age_seconds(self.max_age_days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        is_expired(self.created_at.timestamp(), now.timestamp(), self.max_age_days)
    }

    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        days_until_expiry(self.created_at.timestamp(), now.timestamp(), self.max_age_days)
    }
}
