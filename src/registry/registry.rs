use std::collections::HashMap;

use crate::error::{Result, StoreError};

/// Registered action types of one store, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    // action type -> field name, `None` for whole-state reducers
    keys: HashMap<String, Option<&'static str>>,
    order: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `kind` as reducing `key`.
    ///
    /// Fails with [`StoreError::DuplicateActionType`] if `kind` is already
    /// present, in which case the registry is left unchanged.
    pub fn insert(&mut self, kind: &str, key: Option<&'static str>) -> Result<()> {
        if self.keys.contains_key(kind) {
            return Err(StoreError::DuplicateActionType(kind.to_string()));
        }
        self.keys.insert(kind.to_string(), key);
        self.order.push(kind.to_string());
        Ok(())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.keys.contains_key(kind)
    }

    /// The field an action type reduces.
    ///
    /// The outer `None` means the type is unknown, `Some(None)` means it
    /// reduces the whole state.
    pub fn key_of(&self, kind: &str) -> Option<Option<&'static str>> {
        self.keys.get(kind).copied()
    }

    /// Registered action types, oldest first.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        let mut registry = Registry::new();
        registry.insert("inc", Some("count")).unwrap();

        let err = registry.insert("inc", Some("name")).unwrap_err();

        assert_eq!(err, StoreError::DuplicateActionType("inc".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.key_of("inc"), Some(Some("count")));
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = Registry::new();
        registry.insert("b", None).unwrap();
        registry.insert("a", Some("count")).unwrap();

        assert_eq!(registry.types().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(registry.key_of("b"), Some(None));
        assert_eq!(registry.key_of("missing"), None);
        assert!(registry.contains("a"));
    }
}
