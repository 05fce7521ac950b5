//! User profile model
//!
//! Read-only projection of the user service's profile records. The console
//! only consumes the identifier and display name; everything else the user
//! service returns is ignored.

use crate::domain::ids::UserId;
use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /users`
///
/// The profile is a join key for enrichment only; the console never
/// mutates user records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable identifier assigned by the user service
    pub user_id: UserId,

    /// Display name shown in place of the raw identifier
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_profile() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"userId": 10, "name": "Alice"}"#).unwrap();
        assert_eq!(profile.user_id, UserId::new(10));
        assert_eq!(profile.name, "Alice");
    }

    #[test]
    fn test_deserialize_profile_ignores_extra_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"userId": 3, "name": "Bea", "email": "b@example.com"}"#)
                .unwrap();
        assert_eq!(profile.user_id, UserId::new(3));
    }

    #[test]
    fn test_deserialize_profile_missing_name_defaults_empty() {
        let profile: UserProfile = serde_json::from_str(r#"{"userId": 5}"#).unwrap();
        assert!(profile.name.is_empty());
    }
}
