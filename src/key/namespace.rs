use crate::constants::namespaces::{BLOCKS, DECOR, ITEMS, LEGACY_TYPE_SUFFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content domains, one registry each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Blocks,
    Decor,
    Items,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [Namespace::Blocks, Namespace::Decor, Namespace::Items];

    /// Identifier used in keys and metadata entries
    pub const fn as_str(self) -> &'static str {
        match self {
            Namespace::Blocks => BLOCKS,
            Namespace::Decor => DECOR,
            Namespace::Items => ITEMS,
        }
    }

    /// Exact identifier match (`blocks`, `decor`, `items`)
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            BLOCKS => Some(Namespace::Blocks),
            DECOR => Some(Namespace::Decor),
            ITEMS => Some(Namespace::Items),
            _ => None,
        }
    }

    /// Exact identifier or the older `<namespace>:type` spelling
    pub fn from_legacy_identifier(identifier: &str) -> Option<Self> {
        match identifier.split_once(':') {
            Some((base, LEGACY_TYPE_SUFFIX)) => Self::from_identifier(base),
            Some(_) => None,
            None => Self::from_identifier(identifier),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_round_trip() {
        for namespace in Namespace::ALL {
            assert_eq!(Namespace::from_identifier(namespace.as_str()), Some(namespace));
        }
        assert_eq!(Namespace::from_identifier("msblock"), None);
        assert_eq!(Namespace::from_identifier(""), None);
        assert_eq!(Namespace::from_identifier("Blocks"), None);
    }

    #[test]
    fn test_legacy_spellings() {
        assert_eq!(Namespace::from_legacy_identifier("decor"), Some(Namespace::Decor));
        assert_eq!(
            Namespace::from_legacy_identifier("decor:type"),
            Some(Namespace::Decor)
        );
        assert_eq!(Namespace::from_legacy_identifier("decor:kind"), None);
        assert_eq!(Namespace::from_legacy_identifier("weapons:type"), None);
        // Strict lookup never accepts the suffixed form
        assert_eq!(Namespace::from_identifier("decor:type"), None);
    }
}
