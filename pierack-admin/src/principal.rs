//! The acting identity on admin requests

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A permission the admin surfaces check before mutating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    EditPies,
    DeletePies,
}

/// The acting identity, carrying its capabilities
///
/// Authentication itself is out of scope; the composition root decides who
/// the principal is and hands it down with each request context.
#[derive(Debug, Clone)]
pub struct Principal {
    name: String,
    caps: HashSet<Capability>,
}

impl Principal {
    /// A principal with no capabilities
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caps: HashSet::new(),
        }
    }

    /// A principal allowed to edit and delete pies
    pub fn editor(name: impl Into<String>) -> Self {
        Self::new(name)
            .with_capability(Capability::EditPies)
            .with_capability(Capability::DeletePies)
    }

    /// Grant a capability
    pub fn with_capability(mut self, cap: Capability) -> Self {
        self.caps.insert(cap);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check a capability
    pub fn can(&self, cap: Capability) -> bool {
        self.caps.contains(&cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_principal_has_no_caps() {
        let p = Principal::new("viewer");
        assert!(!p.can(Capability::EditPies));
        assert!(!p.can(Capability::DeletePies));
    }

    #[test]
    fn test_editor_can_edit_and_delete() {
        let p = Principal::editor("alice");
        assert_eq!(p.name(), "alice");
        assert!(p.can(Capability::EditPies));
        assert!(p.can(Capability::DeletePies));
    }
}
