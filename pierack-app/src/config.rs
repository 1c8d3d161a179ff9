//! Configuration loading
//!
//! Figment layers defaults, an optional `pierack.toml`, and `PIERACK_*`
//! environment variables into one typed struct. Later layers win.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PierackConfig {
    /// Address to listen on
    pub bind: String,
    /// Directory the content store lives in
    pub data_root: PathBuf,
    /// Secret for anti-forgery tokens; generated fresh when unset
    pub secret: Option<String>,
    /// Content body of the public pies page; directives expand at render time
    pub page_body: String,
}

impl Default for PierackConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            data_root: PathBuf::from(".pierack"),
            secret: None,
            page_body: "<h2>Our pies</h2>\n[pies posts_per_page=\"3\"]\n".to_string(),
        }
    }
}

impl PierackConfig {
    /// Load configuration: defaults, then `pierack.toml`, then environment
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("pierack.toml"))
            .merge(Env::prefixed("PIERACK_"))
            .extract()
    }

    /// The configured secret, or a freshly generated one
    ///
    /// A generated secret means tokens stop validating across restarts,
    /// which is fine for a dev setup but worth configuring in production.
    pub fn resolve_secret(&self) -> String {
        match &self.secret {
            Some(secret) if !secret.is_empty() => secret.clone(),
            _ => {
                let mut bytes = [0u8; 32];
                rand::rng().fill_bytes(&mut bytes);
                tracing::warn!("no secret configured; generated one for this run");
                URL_SAFE_NO_PAD.encode(bytes)
            }
        }
    }
}
