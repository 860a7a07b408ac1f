//! In-memory access token record.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::CLOCK_SKEW_TOLERANCE;

/// The cached access token and its computed expiry.
///
/// A token is *valid* only when both fields are present. A valid token still
/// needs refreshing once its expiry is closer than [`CLOCK_SKEW_TOLERANCE`].
/// The record is always replaced as a whole.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use mygas_api::auth::CachedToken;
///
/// let now = Utc::now();
/// assert!(CachedToken::default().needs_refresh_at(now));
///
/// let token = CachedToken::new(Some("t".to_string()), Some(now + Duration::hours(1)));
/// assert!(token.is_valid());
/// assert!(!token.needs_refresh_at(now));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CachedToken {
    value: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Creates a token record from its parts.
    #[must_use]
    pub const fn new(value: Option<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { value, expires_at }
    }

    /// Creates a record for a token issued at `issued_at` with the given lifetime.
    #[must_use]
    pub fn issue(value: impl Into<String>, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let expires_at = chrono::Duration::from_std(lifetime)
            .ok()
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime));
        Self {
            value: Some(value.into()),
            expires_at,
        }
    }

    /// Returns the token value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the expiry, if any.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns `true` if both the value and the expiry are present.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.value.is_some() && self.expires_at.is_some()
    }

    /// Returns `true` if the token expires within the clock-skew tolerance of `now`.
    ///
    /// A record without expiry counts as expired.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let skew = chrono::Duration::from_std(CLOCK_SKEW_TOLERANCE)
            .unwrap_or_else(|_| chrono::Duration::zero());
        self.expires_at.map_or(true, |expires_at| expires_at < now + skew)
    }

    /// Returns `true` if a new token must be requested before use.
    #[must_use]
    pub fn needs_refresh_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_valid() || self.is_expired_at(now)
    }
}

impl fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedToken")
            .field("value", &self.value.as_ref().map(|_| "*****"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
