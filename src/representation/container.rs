//! Persistent metadata container
//!
//! Two sections live side by side: `Identity` holds the identity stamp and
//! nothing else, `Display` holds overrides owned by other subsystems (the
//! rename entry). Entries within a section are kept ordered so enumeration is
//! deterministic.

use crate::constants::metadata::{RENAMEABLE_ENTRY, RENAMEABLE_NAMESPACE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Entry name inside a container section
///
/// Serialized as `namespace:name` so containers stay valid JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MetadataKey {
    pub namespace: String,
    pub name: String,
}

impl MetadataKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Entry written by the rename subsystem
    pub fn renameable() -> Self {
        Self::new(RENAMEABLE_NAMESPACE, RENAMEABLE_ENTRY)
    }

    pub fn is_reserved(&self) -> bool {
        self.namespace == RENAMEABLE_NAMESPACE && self.name == RENAMEABLE_ENTRY
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

impl From<MetadataKey> for String {
    fn from(key: MetadataKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for MetadataKey {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.split_once(':') {
            Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
                Ok(Self::new(namespace, name))
            }
            _ => Err(format!("metadata key '{}' is not namespace:name", raw)),
        }
    }
}

/// Typed metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    String(String),
    Int(i64),
    Bool(bool),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataSection {
    Identity,
    Display,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentDataContainer {
    identity: BTreeMap<MetadataKey, MetadataValue>,
    display: BTreeMap<MetadataKey, MetadataValue>,
}

impl PersistentDataContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a flat, single-bag container (older saves, host imports) into
    /// sections. The reserved rename entry goes to `Display`, everything else
    /// to `Identity`.
    pub fn from_flat_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MetadataKey, MetadataValue)>,
    {
        let mut container = Self::new();
        for (key, value) in entries {
            let section = if key.is_reserved() {
                MetadataSection::Display
            } else {
                MetadataSection::Identity
            };
            container.set(section, key, value);
        }
        container
    }

    fn section(&self, section: MetadataSection) -> &BTreeMap<MetadataKey, MetadataValue> {
        match section {
            MetadataSection::Identity => &self.identity,
            MetadataSection::Display => &self.display,
        }
    }

    fn section_mut(
        &mut self,
        section: MetadataSection,
    ) -> &mut BTreeMap<MetadataKey, MetadataValue> {
        match section {
            MetadataSection::Identity => &mut self.identity,
            MetadataSection::Display => &mut self.display,
        }
    }

    /// Set an entry, returning the value it replaced
    pub fn set(
        &mut self,
        section: MetadataSection,
        key: MetadataKey,
        value: MetadataValue,
    ) -> Option<MetadataValue> {
        self.section_mut(section).insert(key, value)
    }

    pub fn set_string(
        &mut self,
        section: MetadataSection,
        key: MetadataKey,
        value: impl Into<String>,
    ) -> Option<MetadataValue> {
        self.set(section, key, MetadataValue::String(value.into()))
    }

    pub fn get(&self, section: MetadataSection, key: &MetadataKey) -> Option<&MetadataValue> {
        self.section(section).get(key)
    }

    /// String entry, `None` when absent or not a string
    pub fn get_string(&self, section: MetadataSection, key: &MetadataKey) -> Option<&str> {
        self.get(section, key).and_then(MetadataValue::as_str)
    }

    pub fn remove(&mut self, section: MetadataSection, key: &MetadataKey) -> Option<MetadataValue> {
        self.section_mut(section).remove(key)
    }

    pub fn clear(&mut self, section: MetadataSection) {
        self.section_mut(section).clear();
    }

    /// Entries of one section in key order
    pub fn entries(
        &self,
        section: MetadataSection,
    ) -> impl Iterator<Item = (&MetadataKey, &MetadataValue)> {
        self.section(section).iter()
    }

    pub fn keys(&self, section: MetadataSection) -> impl Iterator<Item = &MetadataKey> {
        self.section(section).keys()
    }

    pub fn len(&self, section: MetadataSection) -> usize {
        self.section(section).len()
    }

    pub fn is_empty(&self) -> bool {
        self.identity.is_empty() && self.display.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_independent() {
        let mut container = PersistentDataContainer::new();
        let key = MetadataKey::new("items", "type");

        container.set_string(MetadataSection::Identity, key.clone(), "ban_sword");
        assert_eq!(container.get_string(MetadataSection::Identity, &key), Some("ban_sword"));
        assert_eq!(container.get_string(MetadataSection::Display, &key), None);

        container.clear(MetadataSection::Display);
        assert_eq!(container.len(MetadataSection::Identity), 1);
    }

    #[test]
    fn test_get_string_ignores_other_types() {
        let mut container = PersistentDataContainer::new();
        let key = MetadataKey::new("items", "charge");
        container.set(MetadataSection::Display, key.clone(), MetadataValue::Int(3));
        assert_eq!(container.get_string(MetadataSection::Display, &key), None);
        assert_eq!(
            container.get(MetadataSection::Display, &key),
            Some(&MetadataValue::Int(3))
        );
    }

    #[test]
    fn test_json_uses_string_keys() {
        let mut container = PersistentDataContainer::new();
        container.set_string(
            MetadataSection::Identity,
            MetadataKey::new("items", "type"),
            "ban_sword",
        );

        let json = serde_json::to_string(&container).expect("Failed to serialize container");
        assert!(json.contains("\"items:type\""));
        let back: PersistentDataContainer =
            serde_json::from_str(&json).expect("Failed to deserialize container");
        assert_eq!(back, container);

        assert!(MetadataKey::try_from("nocolon".to_string()).is_err());
    }

    #[test]
    fn test_flat_entries_route_reserved_entry() {
        let container = PersistentDataContainer::from_flat_entries(vec![
            (
                MetadataKey::renameable(),
                MetadataValue::String("gold_crown".to_string()),
            ),
            (
                MetadataKey::new("items", "type"),
                MetadataValue::String("leather_hat".to_string()),
            ),
        ]);

        let identity: Vec<_> = container.keys(MetadataSection::Identity).collect();
        assert_eq!(identity, [&MetadataKey::new("items", "type")]);
        assert_eq!(
            container.get_string(MetadataSection::Display, &MetadataKey::renameable()),
            Some("gold_crown")
        );
    }
}
