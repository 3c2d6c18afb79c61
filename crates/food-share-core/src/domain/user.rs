//! Identity Types
//!
//! The signed-in user and the provider session backing it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Public profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl UserProfile {
    /// Name used for greetings and donor attribution
    pub fn display_name_or(&self, fallback: &str) -> String {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Token lifetime assumed when the provider reports one chrono cannot hold
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Provider session: profile plus the token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub profile: UserProfile,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        profile: UserProfile,
        id_token: String,
        refresh_token: String,
        expires_in_secs: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            profile,
            id_token,
            refresh_token,
            expires_at: expiry_after(now, expires_in_secs),
        }
    }

    /// Id token still valid for at least `leeway`
    pub fn is_fresh(&self, now: DateTime<Utc>, leeway: Duration) -> bool {
        now + leeway < self.expires_at
    }
}

fn expiry_after(now: DateTime<Utc>, expires_in_secs: i64) -> DateTime<Utc> {
    Duration::try_seconds(expires_in_secs)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or_else(|| {
            log::warn!("[session] unusable token lifetime {}s, assuming default", expires_in_secs);
            now + Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile() -> UserProfile {
        UserProfile {
            uid: "u1".into(),
            email: "ana@example.com".into(),
            display_name: Some("  ".into()),
            photo_url: None,
        }
    }

    #[test]
    fn test_blank_display_name_falls_back() {
        assert_eq!(profile().display_name_or("Unknown Donor"), "Unknown Donor");
    }

    #[test]
    fn test_freshness_window() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let session = Session::new(profile(), "id".into(), "rt".into(), 3600, now);
        assert!(session.is_fresh(now, Duration::seconds(60)));
        assert!(session.is_fresh(now + Duration::seconds(3500), Duration::seconds(60)));
        assert!(!session.is_fresh(now + Duration::seconds(3550), Duration::seconds(60)));
    }

    #[test]
    fn test_out_of_range_lifetime_uses_default() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let session = Session::new(profile(), "id".into(), "rt".into(), 99_999_999_999_999_999, now);
        assert_eq!(session.expires_at, now + Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS));

        let session = Session::new(profile(), "id".into(), "rt".into(), i64::MIN, now);
        assert_eq!(session.expires_at, now + Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS));
    }

    #[test]
    fn test_profile_wire_names() {
        let value = serde_json::to_value(profile()).unwrap();
        assert!(value.get("photoURL").is_some());
        assert!(value.get("displayName").is_some());
    }
}
