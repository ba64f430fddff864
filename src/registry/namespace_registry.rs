use super::Definition;
use crate::codec;
use crate::error::{ContentError, ContentResult};
use crate::key::Key;
use crate::representation::Stamped;
use rustc_hash::FxHashMap;

/// Key → definition map of one namespace, with a designated default
///
/// The default is supplied at construction, so [`get_default`] can never come
/// back empty.
///
/// [`get_default`]: NamespaceRegistry::get_default
#[derive(Debug)]
pub struct NamespaceRegistry<D: Definition> {
    /// Registration order; the default is always at index 0
    definitions: Vec<D>,
    /// Map from key to index in `definitions`
    key_to_index: FxHashMap<Key, usize>,
}

impl<D: Definition> NamespaceRegistry<D> {
    /// Create a registry whose fallback is `default`
    pub fn new(default: D) -> ContentResult<Self> {
        let mut registry = Self {
            definitions: Vec::new(),
            key_to_index: FxHashMap::default(),
        };
        registry.register(default)?;
        Ok(registry)
    }

    /// Register a definition.
    ///
    /// Fails without touching the registry when the key is taken, belongs to
    /// another namespace, or the definition does not validate.
    pub fn register(&mut self, definition: D) -> ContentResult<&D> {
        let key = definition.key().clone();

        if key.namespace() != D::NAMESPACE.as_str() {
            return Err(ContentError::NamespaceMismatch {
                key,
                expected: D::NAMESPACE,
            });
        }
        if self.key_to_index.contains_key(&key) {
            return Err(ContentError::DuplicateKey { key });
        }

        definition.validate()?;

        if let Some(reason) = self
            .definitions
            .iter()
            .find_map(|existing| definition.conflicts_with(existing))
        {
            return Err(ContentError::InvalidDefinition { key, reason });
        }

        let index = self.definitions.len();
        log::debug!(
            "[NamespaceRegistry::register] Registered {} at index {}",
            key,
            index
        );
        self.key_to_index.insert(key, index);
        self.definitions.push(definition);

        Ok(&self.definitions[index])
    }

    /// Exact key lookup
    pub fn get(&self, key: &Key) -> Option<&D> {
        self.key_to_index
            .get(key)
            .and_then(|&index| self.definitions.get(index))
    }

    /// Designated fallback definition
    pub fn get_default(&self) -> &D {
        &self.definitions[0]
    }

    /// Definition stamped on `representation`, looking only in this namespace
    pub fn from_representation<R: Stamped>(&self, representation: &R) -> Option<&D> {
        let key = codec::read(representation)?;
        if key.namespace() != D::NAMESPACE.as_str() {
            return None;
        }
        self.get(&key)
    }

    /// Stamped definition, or the default when the representation is not ours
    pub fn resolve_or_default<R: Stamped>(&self, representation: &R) -> &D {
        self.from_representation(representation)
            .unwrap_or_else(|| self.get_default())
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.key_to_index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Always false: the default is registered at construction
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.definitions.iter()
    }

    /// Keys in namespace/local order
    pub fn sorted_keys(&self) -> Vec<&Key> {
        let mut keys: Vec<&Key> = self.key_to_index.keys().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::recipe::Recipe;
    use crate::key::Namespace;
    use crate::representation::{ItemStack, Material};

    #[derive(Debug)]
    struct TestDefinition {
        key: Key,
        color: u8,
    }

    impl Definition for TestDefinition {
        const NAMESPACE: Namespace = Namespace::Items;

        fn key(&self) -> &Key {
            &self.key
        }

        fn display_name(&self) -> &str {
            "test"
        }

        fn recipes(&self) -> &[Recipe] {
            &[]
        }

        fn conflicts_with(&self, other: &Self) -> Option<String> {
            (self.color == other.color).then(|| format!("color {} is taken", self.color))
        }
    }

    fn definition(raw: &str, color: u8) -> TestDefinition {
        TestDefinition {
            key: Key::parse(raw).expect("Failed to parse key"),
            color,
        }
    }

    fn registry() -> NamespaceRegistry<TestDefinition> {
        NamespaceRegistry::new(definition("items:fallback", 0)).expect("Failed to create registry")
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = registry();
        registry
            .register(definition("items:wrench", 1))
            .expect("Failed to register wrench");

        let wrench = Key::parse("items:wrench").expect("Failed to parse key");
        assert_eq!(registry.get(&wrench).map(|d| d.color), Some(1));
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut registry = registry();
        registry
            .register(definition("items:wrench", 1))
            .expect("Failed to register wrench");

        let err = registry.register(definition("items:wrench", 2)).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateKey { .. }));

        let wrench = Key::parse("items:wrench").expect("Failed to parse key");
        assert_eq!(registry.get(&wrench).map(|d| d.color), Some(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_namespace_mismatch() {
        let mut registry = registry();
        let err = registry.register(definition("blocks:wrench", 1)).unwrap_err();
        assert!(matches!(
            err,
            ContentError::NamespaceMismatch {
                expected: Namespace::Items,
                ..
            }
        ));
    }

    #[test]
    fn test_conflict_rejected() {
        let mut registry = registry();
        let err = registry.register(definition("items:other", 0)).unwrap_err();
        assert!(matches!(err, ContentError::InvalidDefinition { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_is_explicit() {
        let registry = registry();
        let unknown = Key::parse("items:unknown").expect("Failed to parse key");

        assert!(registry.get(&unknown).is_none());
        assert_eq!(registry.get_default().key.local(), "fallback");

        let plain = ItemStack::new(Material::Paper);
        assert!(registry.from_representation(&plain).is_none());
        assert_eq!(registry.resolve_or_default(&plain).key.local(), "fallback");
    }

    #[test]
    fn test_from_representation_stays_in_namespace() {
        let mut registry = registry();
        registry
            .register(definition("items:wrench", 1))
            .expect("Failed to register wrench");

        let wrench = Key::parse("items:wrench").expect("Failed to parse key");
        let stack = codec::stamped(ItemStack::new(Material::Paper), &wrench);
        assert_eq!(registry.from_representation(&stack).map(|d| d.color), Some(1));

        let foreign = Key::parse("blocks:wrench").expect("Failed to parse key");
        let stack = codec::stamped(ItemStack::new(Material::Paper), &foreign);
        assert!(registry.from_representation(&stack).is_none());
    }

    #[test]
    fn test_sorted_keys() {
        let mut registry = registry();
        registry
            .register(definition("items:axe", 1))
            .expect("Failed to register axe");
        let keys: Vec<String> = registry.sorted_keys().iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["items:axe", "items:fallback"]);
    }
}
