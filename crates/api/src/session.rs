//! Explicit auth session threaded through the API client.
//!
//! The token lives in a shared handle passed at construction, not in global
//! storage: whoever builds the client decides where the token comes from and
//! observes when the backend invalidates it.

use std::sync::{Arc, RwLock};

/// Shared bearer-token holder. Cheap to clone; all clones see the same token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// A session with no token; requests go out without an `Authorization`
    /// header.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("session lock poisoned") = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }
}

/// Login boundary: invoked once per 401 response, after the session token
/// has been cleared.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

/// Default handler for headless use: log and carry on.
#[derive(Debug, Default)]
pub struct LogUnauthorized;

impl UnauthorizedHandler for LogUnauthorized {
    fn on_unauthorized(&self) {
        tracing::warn!("session rejected by the API, login required");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_token() {
        let session = Session::anonymous();
        let clone = session.clone();

        session.set_token("abc123");
        assert_eq!(clone.token().as_deref(), Some("abc123"));

        clone.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn with_token_starts_authenticated() {
        let session = Session::with_token("t");
        assert!(session.is_authenticated());
    }
}
