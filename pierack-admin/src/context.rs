//! AdminContext - everything an admin command needs

use crate::nonce::Nonces;
use crate::principal::Principal;
use pierack_content::ContentContext;

/// Context passed to admin commands: storage access plus the request's
/// token factory and acting principal
#[derive(Debug, Clone)]
pub struct AdminContext {
    content: ContentContext,
    nonces: Nonces,
    principal: Principal,
}

impl AdminContext {
    pub fn new(content: ContentContext, nonces: Nonces, principal: Principal) -> Self {
        Self {
            content,
            nonces,
            principal,
        }
    }

    pub fn content(&self) -> &ContentContext {
        &self.content
    }

    pub fn nonces(&self) -> &Nonces {
        &self.nonces
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
