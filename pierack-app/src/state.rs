//! Shared application state

use crate::config::PierackConfig;
use pierack_admin::{Nonces, Principal};
use pierack_content::{ContentContext, ContentType, Result, TypeRegistry};

/// Everything the handlers share, built once at startup
#[derive(Debug)]
pub struct AppState {
    pub config: PierackConfig,
    pub content: ContentContext,
    pub nonces: Nonces,
    pub registry: TypeRegistry,
    /// The acting principal for admin requests
    ///
    /// Authentication is out of scope; the composition root decides who is
    /// acting. The default grants the full editor capabilities.
    pub principal: Principal,
}

impl AppState {
    /// Build the state: storage directories, token factory, type registry
    pub async fn from_config(config: PierackConfig) -> Result<Self> {
        let content = ContentContext::new(&config.data_root);
        content.ensure_directories().await?;

        let nonces = Nonces::new(config.resolve_secret());

        let mut registry = TypeRegistry::new();
        registry.register(ContentType::pies());
        tracing::info!("registered content type 'pies'");

        Ok(Self {
            config,
            content,
            nonces,
            registry,
            principal: Principal::editor("admin"),
        })
    }

    /// The pies content-type descriptor
    pub fn pies_type(&self) -> &ContentType {
        self.registry
            .get("pies")
            .expect("pies content type is registered at startup")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_from_config_registers_type_and_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let config = PierackConfig {
            data_root: temp.path().join(".pierack"),
            secret: Some("test".to_string()),
            ..Default::default()
        };

        let state = AppState::from_config(config).await.unwrap();

        assert!(state.registry.contains("pies"));
        assert_eq!(state.pies_type().labels.menu_name, "Pies");
        assert!(state.content.directories_exist());
    }
}
