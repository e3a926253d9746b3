// security/src/session.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::principal::Principal;

/// The cookie name carrying the opaque session token.
pub const SESSION_COOKIE: &str = "records_session";

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub principal: Principal,
    pub expires_at: DateTime<Utc>,
}

/// Process-local session state. Tokens are opaque v4 UUIDs; entries expire
/// after the configured TTL and are evicted lazily on access and on each
/// new sign-in.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn with_ttl_secs(secs: i64) -> Self {
        Self::new(Duration::seconds(secs))
    }

    /// Establishes a session for a signed-in principal and returns it.
    pub async fn create(&self, principal: Principal) -> Session {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            principal,
            expires_at: Utc::now() + self.ttl,
        };
        let mut sessions = self.inner.lock().await;
        sessions.retain(|_, s| s.expires_at > Utc::now());
        sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Resolves a token to its principal, evicting it if expired.
    pub async fn resolve(&self, token: &str) -> Option<Principal> {
        let mut sessions = self.inner.lock().await;
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => {
                Some(session.principal.clone())
            }
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Destroys a session (sign-out). Unknown tokens are a no-op.
    pub async fn destroy(&self, token: &str) {
        self.inner.lock().await.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::Role;

    #[tokio::test]
    async fn created_sessions_resolve_until_destroyed() {
        let store = SessionStore::with_ttl_secs(3600);
        let session = store
            .create(Principal::new(Role::Patient, "123456789012"))
            .await;

        let principal = store.resolve(&session.token).await.unwrap();
        assert_eq!(principal.role, Role::Patient);
        assert_eq!(principal.id, "123456789012");

        store.destroy(&session.token).await;
        assert!(store.resolve(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn expired_sessions_do_not_resolve() {
        let store = SessionStore::with_ttl_secs(-1);
        let session = store.create(Principal::new(Role::Admin, "admin")).await;
        assert!(store.resolve(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn unknown_tokens_do_not_resolve() {
        let store = SessionStore::with_ttl_secs(3600);
        assert!(store.resolve("not-a-token").await.is_none());
    }
}
