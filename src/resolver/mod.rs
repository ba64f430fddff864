//! Cross-namespace resolver
//!
//! Turns whatever a caller holds (a raw key string, a [`Key`], an item stack
//! or a placed block) into the definition it names, dispatching on the key's
//! namespace. A miss is always `None`: unknown namespaces, unregistered keys,
//! blank input and unstamped representations are ordinary outcomes.

mod custom_definition;

pub use custom_definition::CustomDefinition;

use crate::codec;
use crate::context::ContentRegistries;
use crate::key::{Key, Namespace};
use crate::representation::{BlockState, ItemStack};

/// Anything the resolver accepts
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    Raw(&'a str),
    Key(&'a Key),
    Item(&'a ItemStack),
    Block(&'a BlockState),
    Nothing,
}

impl<'a> From<&'a str> for Lookup<'a> {
    fn from(raw: &'a str) -> Self {
        Lookup::Raw(raw)
    }
}

impl<'a> From<&'a String> for Lookup<'a> {
    fn from(raw: &'a String) -> Self {
        Lookup::Raw(raw)
    }
}

impl<'a> From<&'a Key> for Lookup<'a> {
    fn from(key: &'a Key) -> Self {
        Lookup::Key(key)
    }
}

impl<'a> From<&'a ItemStack> for Lookup<'a> {
    fn from(stack: &'a ItemStack) -> Self {
        Lookup::Item(stack)
    }
}

impl<'a> From<&'a BlockState> for Lookup<'a> {
    fn from(state: &'a BlockState) -> Self {
        Lookup::Block(state)
    }
}

impl<'a, T: Into<Lookup<'a>>> From<Option<T>> for Lookup<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Lookup::Nothing, Into::into)
    }
}

impl ContentRegistries {
    /// Fresh stamped item for a key. Only the current spelling is accepted.
    pub fn resolve_item_stack<'a>(&self, lookup: impl Into<Lookup<'a>>) -> Option<ItemStack> {
        let key = self.lookup_key(lookup.into(), false)?;
        self.definition_for_key(&key)
            .map(|definition| definition.materialize())
    }

    /// Definition named by a key or stamped on a representation.
    ///
    /// Raw keys may use the legacy `<namespace>:type:<local>` spelling unless
    /// disabled in config.
    pub fn resolve_definition<'a>(
        &self,
        lookup: impl Into<Lookup<'a>>,
    ) -> Option<CustomDefinition<'_>> {
        let key = self.lookup_key(lookup.into(), self.config().legacy_aliases)?;
        let resolved = self.definition_for_key(&key);
        if resolved.is_none() {
            log::debug!("[ContentRegistries::resolve_definition] No content for {}", key);
        }
        resolved
    }

    pub fn is_custom_block(&self, stack: &ItemStack) -> bool {
        matches!(self.resolve_definition(stack), Some(CustomDefinition::Block(_)))
    }

    pub fn is_custom_decor(&self, stack: &ItemStack) -> bool {
        matches!(self.resolve_definition(stack), Some(CustomDefinition::Decor(_)))
    }

    pub fn is_custom_item(&self, stack: &ItemStack) -> bool {
        matches!(self.resolve_definition(stack), Some(CustomDefinition::Item(_)))
    }

    /// Materialize `amount` of the content named by `raw`.
    ///
    /// The amount is clamped to at least one and at most the stack limit of
    /// the content under the configured maximum.
    pub fn give(&self, raw: &str, amount: u32) -> Option<ItemStack> {
        let definition = self.resolve_definition(raw)?;
        let stack = definition.materialize();
        let host_limit = self.config().max_stack_size;

        let limit = match definition {
            CustomDefinition::Item(item) => item.max_stack_size(host_limit),
            CustomDefinition::Block(_) | CustomDefinition::Decor(_) => {
                stack.material.max_stack_size().min(host_limit).max(1)
            }
        };
        Some(stack.with_amount(amount.clamp(1, limit)))
    }

    fn lookup_key(&self, lookup: Lookup<'_>, legacy: bool) -> Option<Key> {
        match lookup {
            Lookup::Raw(raw) => parse_raw(raw, legacy),
            Lookup::Key(key) => Some(key.clone()),
            Lookup::Item(stack) => codec::read(stack),
            Lookup::Block(state) => codec::read(state),
            Lookup::Nothing => None,
        }
    }

    fn definition_for_key(&self, key: &Key) -> Option<CustomDefinition<'_>> {
        match Namespace::from_identifier(key.namespace())? {
            Namespace::Blocks => self.blocks.get(key).map(CustomDefinition::Block),
            Namespace::Decor => self.decor.get(key).map(CustomDefinition::Decor),
            Namespace::Items => self.items.get(key).map(CustomDefinition::Item),
        }
    }
}

fn parse_raw(raw: &str, legacy: bool) -> Option<Key> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if legacy {
        // `blocks:type:oak_log_disguise` splits into namespace `blocks:type`
        if let Some((identifier, local)) = raw.rsplit_once(':') {
            if let Some(namespace) = Namespace::from_legacy_identifier(identifier) {
                return Key::of(namespace.as_str(), local).ok();
            }
        }
    }

    match Key::parse(raw) {
        Ok(key) => Some(key),
        Err(e) => {
            log::debug!("[resolver::parse_raw] {}", e);
            None
        }
    }
}
