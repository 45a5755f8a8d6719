//! Member registry
//!
//! Members are identified by their display name. The registry keeps names
//! unique while remembering the order they were added in, which is the order
//! every table and the settlement pass iterate in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Ordered set of member names
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MemberRegistry {
    order: Vec<String>,
    index: HashSet<String>,
}

impl MemberRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member, returning false if the name is already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.index.contains(&name) {
            return false;
        }
        self.index.insert(name.clone());
        self.order.push(name);
        true
    }

    /// Membership test
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Names in insertion order as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Position of a member in insertion order
    pub fn position(&self, name: &str) -> Option<usize> {
        if !self.contains(name) {
            return None;
        }
        self.order.iter().position(|m| m == name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove every member
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    /// Normalize a user-supplied member name
    pub fn normalize_name(name: &str) -> &str {
        name.trim()
    }
}

impl From<Vec<String>> for MemberRegistry {
    fn from(names: Vec<String>) -> Self {
        let mut registry = Self::new();
        for name in names {
            registry.insert(name);
        }
        registry
    }
}

impl From<MemberRegistry> for Vec<String> {
    fn from(registry: MemberRegistry) -> Self {
        registry.order
    }
}

impl<S: Into<String>> FromIterator<S> for MemberRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.insert(name);
        }
        registry
    }
}

impl fmt::Display for MemberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.order.join(", "))
    }
}

/// Validation errors for member names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
        }
    }
}

impl std::error::Error for MemberValidationError {}

/// Validate a member name after normalization
pub fn validate_member_name(name: &str) -> Result<(), MemberValidationError> {
    if MemberRegistry::normalize_name(name).is_empty() {
        return Err(MemberValidationError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry = MemberRegistry::new();
        for name in ["Carol", "Alice", "Bob"] {
            assert!(registry.insert(name));
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["Carol", "Alice", "Bob"]);
        assert_eq!(registry.position("Alice"), Some(1));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = MemberRegistry::new();
        assert!(registry.insert("Alice"));
        assert!(!registry.insert("Alice"));
        assert_eq!(registry.len(), 1);

        // Identity is exact string equality
        assert!(registry.insert("alice"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_serializes_as_array() {
        let registry: MemberRegistry = ["A", "B"].into_iter().collect();
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let registry: MemberRegistry = serde_json::from_str(r#"["A","B","A"]"#).unwrap();
        assert_eq!(registry.as_slice(), &["A".to_string(), "B".to_string()]);
        assert!(registry.contains("B"));
    }

    #[test]
    fn test_validate_member_name() {
        assert!(validate_member_name("Alice").is_ok());
        assert_eq!(
            validate_member_name("   "),
            Err(MemberValidationError::EmptyName)
        );
        assert_eq!(validate_member_name(""), Err(MemberValidationError::EmptyName));
    }

    #[test]
    fn test_clear() {
        let mut registry: MemberRegistry = ["A", "B"].into_iter().collect();
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains("A"));
    }
}
