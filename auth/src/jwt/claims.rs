use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by a login bearer token.
///
/// The token is self-contained: subject, user id, and expiry are everything
/// an authenticated request needs, so no server-side session state exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the login email at issue time
    pub sub: String,

    /// Stable identifier of the authenticated user
    pub user_id: Uuid,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for a fresh login, expiring `ttl_minutes` from now.
    pub fn for_login(email: impl Into<String>, user_id: Uuid, ttl_minutes: i64) -> Self {
        Self::at(email, user_id, ttl_minutes, Utc::now())
    }

    /// Build claims with an injected issue time.
    ///
    /// Expiry tests use this to mint already-expired tokens.
    pub fn at(
        email: impl Into<String>,
        user_id: Uuid,
        ttl_minutes: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiration = issued_at + Duration::minutes(ttl_minutes);
        Self {
            sub: email.into(),
            user_id,
            exp: expiration.timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_login_sets_expiry() {
        let user_id = Uuid::new_v4();
        let claims = Claims::for_login("a@x.com", user_id, 30);

        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_at_uses_injected_clock() {
        let issued = Utc::now() - Duration::hours(2);
        let claims = Claims::at("a@x.com", Uuid::new_v4(), 60, issued);

        // Issued 2h ago with a 1h ttl: already expired
        assert!(claims.exp < Utc::now().timestamp());
    }
}
