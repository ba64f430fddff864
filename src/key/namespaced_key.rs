use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// First character outside `[A-Za-z0-9_.-]`
    static ref ILLEGAL_NAMESPACE_CHAR: Regex =
        Regex::new(r"[^A-Za-z0-9_.\-]").expect("namespace character pattern compiles");

    /// First character outside `[a-z0-9_/.]`
    static ref ILLEGAL_LOCAL_CHAR: Regex =
        Regex::new(r"[^a-z0-9_/.]").expect("local key character pattern compiles");
}

/// Why a raw key was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("missing ':' separator")]
    MissingSeparator,

    #[error("namespace is empty")]
    EmptyNamespace,

    #[error("local key is empty")]
    EmptyLocalKey,

    #[error("illegal character '{0}' in namespace")]
    IllegalNamespaceChar(char),

    #[error("illegal character '{0}' in local key")]
    IllegalLocalChar(char),
}

/// A raw key that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed key '{raw}': {reason}")]
pub struct MalformedKey {
    pub raw: String,
    pub reason: MalformedReason,
}

impl MalformedKey {
    fn new(raw: impl Into<String>, reason: MalformedReason) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }
}

/// Immutable `namespace:local_key` pair
///
/// Ordering is by namespace, then local key, so sorted listings group
/// content by domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    namespace: String,
    local: String,
}

impl Key {
    /// Parse `namespace:local_key`, splitting on the first colon only
    pub fn parse(raw: &str) -> Result<Self, MalformedKey> {
        let (namespace, local) = raw
            .split_once(':')
            .ok_or_else(|| MalformedKey::new(raw, MalformedReason::MissingSeparator))?;

        validate(namespace, local).map_err(|reason| MalformedKey::new(raw, reason))?;

        Ok(Self {
            namespace: namespace.to_string(),
            local: local.to_string(),
        })
    }

    /// Build a key from already separated parts
    pub fn of(namespace: &str, local: &str) -> Result<Self, MalformedKey> {
        validate(namespace, local)
            .map_err(|reason| MalformedKey::new(format!("{}:{}", namespace, local), reason))?;

        Ok(Self {
            namespace: namespace.to_string(),
            local: local.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn local(&self) -> &str {
        &self.local
    }
}

fn validate(namespace: &str, local: &str) -> Result<(), MalformedReason> {
    if namespace.is_empty() {
        return Err(MalformedReason::EmptyNamespace);
    }
    if local.is_empty() {
        return Err(MalformedReason::EmptyLocalKey);
    }
    if let Some(found) = ILLEGAL_NAMESPACE_CHAR.find(namespace) {
        let ch = found.as_str().chars().next().unwrap_or(':');
        return Err(MalformedReason::IllegalNamespaceChar(ch));
    }
    if let Some(found) = ILLEGAL_LOCAL_CHAR.find(local) {
        let ch = found.as_str().chars().next().unwrap_or(':');
        return Err(MalformedReason::IllegalLocalChar(ch));
    }
    Ok(())
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.local)
    }
}

impl FromStr for Key {
    type Err = MalformedKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Key {
    type Error = MalformedKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        let key = Key::parse("blocks:oak_log_disguise").expect("Failed to parse key");
        assert_eq!(key.namespace(), "blocks");
        assert_eq!(key.local(), "oak_log_disguise");
        assert_eq!(key.to_string(), "blocks:oak_log_disguise");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = Key::parse("noseparator").unwrap_err();
        assert_eq!(err.reason, MalformedReason::MissingSeparator);
        assert_eq!(err.raw, "noseparator");
    }

    #[test]
    fn test_parse_rejects_empty_parts() {
        assert_eq!(
            Key::parse("blocks:").unwrap_err().reason,
            MalformedReason::EmptyLocalKey
        );
        assert_eq!(
            Key::parse(":oak").unwrap_err().reason,
            MalformedReason::EmptyNamespace
        );
        assert_eq!(
            Key::parse(":").unwrap_err().reason,
            MalformedReason::EmptyNamespace
        );
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        // The remainder keeps its colon, which is illegal in a local key
        let err = Key::parse("blocks:type:oak").unwrap_err();
        assert_eq!(err.reason, MalformedReason::IllegalLocalChar(':'));
    }

    #[test]
    fn test_character_sets() {
        assert!(Key::of("my-mod.v2", "path/to/thing.v1").is_ok());
        // Namespaces may use uppercase letters, local keys may not
        assert!(Key::of("MyMod", "thing").is_ok());
        assert!(Key::of("Blocks", "oak").is_ok());
        assert_eq!(
            Key::of("my mod", "oak").unwrap_err().reason,
            MalformedReason::IllegalNamespaceChar(' ')
        );
        assert_eq!(
            Key::of("blocks", "oak-log").unwrap_err().reason,
            MalformedReason::IllegalLocalChar('-')
        );
        assert_eq!(
            Key::of("blocks", "Oak").unwrap_err().reason,
            MalformedReason::IllegalLocalChar('O')
        );
    }

    #[test]
    fn test_ordering_is_namespace_then_local() {
        let mut keys = vec![
            Key::parse("items:axe").expect("Failed to parse key"),
            Key::parse("blocks:zinc").expect("Failed to parse key"),
            Key::parse("blocks:ash").expect("Failed to parse key"),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["blocks:ash", "blocks:zinc", "items:axe"]);
    }

    #[test]
    fn test_serde_as_string() {
        let key = Key::parse("items:ban_sword").expect("Failed to parse key");
        let json = serde_json::to_string(&key).expect("Failed to serialize key");
        assert_eq!(json, "\"items:ban_sword\"");

        let back: Key = serde_json::from_str(&json).expect("Failed to deserialize key");
        assert_eq!(back, key);
        assert!(serde_json::from_str::<Key>("\"items:\"").is_err());
    }
}
