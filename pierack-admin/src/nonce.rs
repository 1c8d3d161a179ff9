//! Anti-forgery tokens for admin forms
//!
//! Tokens are derived, not stored: a digest over the server secret, the
//! action name, the acting principal, and a coarse time tick. A token
//! validates during its own tick and the one before it, so a form stays
//! submittable for at least half a tick without any server-side state.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use sha2::{Digest, Sha256};

/// Seconds per validity tick (12 hours, two-tick window)
const TICK_SECONDS: i64 = 12 * 60 * 60;

/// Length of an emitted token
const TOKEN_LENGTH: usize = 16;

/// Factory for anti-forgery tokens, bound to a server secret
#[derive(Debug, Clone)]
pub struct Nonces {
    secret: String,
}

impl Nonces {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Create a token for an action, scoped to the acting principal
    pub fn create(&self, action: &str, principal: &str) -> String {
        self.token_at(action, principal, Self::tick())
    }

    /// Verify a token against the current and previous tick
    pub fn verify(&self, token: &str, action: &str, principal: &str) -> bool {
        let tick = Self::tick();
        token == self.token_at(action, principal, tick)
            || token == self.token_at(action, principal, tick - 1)
    }

    fn tick() -> i64 {
        Utc::now().timestamp() / TICK_SECONDS
    }

    fn token_at(&self, action: &str, principal: &str, tick: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b"|");
        hasher.update(action.as_bytes());
        hasher.update(b"|");
        hasher.update(principal.as_bytes());
        hasher.update(b"|");
        hasher.update(tick.to_le_bytes());

        let mut token = URL_SAFE_NO_PAD.encode(hasher.finalize());
        token.truncate(TOKEN_LENGTH);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_verify_round_trip() {
        let nonces = Nonces::new("secret");
        let token = nonces.create("save_pie_details", "alice");
        assert!(nonces.verify(&token, "save_pie_details", "alice"));
    }

    #[test]
    fn test_wrong_action_rejected() {
        let nonces = Nonces::new("secret");
        let token = nonces.create("save_pie_details", "alice");
        assert!(!nonces.verify(&token, "delete_pie", "alice"));
    }

    #[test]
    fn test_wrong_principal_rejected() {
        let nonces = Nonces::new("secret");
        let token = nonces.create("save_pie_details", "alice");
        assert!(!nonces.verify(&token, "save_pie_details", "mallory"));
    }

    #[test]
    fn test_different_secret_rejected() {
        let token = Nonces::new("one").create("save_pie_details", "alice");
        assert!(!Nonces::new("two").verify(&token, "save_pie_details", "alice"));
    }

    #[test]
    fn test_previous_tick_still_valid() {
        let nonces = Nonces::new("secret");
        let stale = nonces.token_at("save_pie_details", "alice", Nonces::tick() - 1);
        assert!(nonces.verify(&stale, "save_pie_details", "alice"));

        let older = nonces.token_at("save_pie_details", "alice", Nonces::tick() - 2);
        assert!(!nonces.verify(&older, "save_pie_details", "alice"));
    }

    #[test]
    fn test_token_shape() {
        let token = Nonces::new("secret").create("a", "b");
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(!token.contains('='));
    }
}
