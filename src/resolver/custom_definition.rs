use crate::content::{BlockDefinition, DecorDefinition, ItemDefinition, SoundGroup};
use crate::key::{Key, Namespace};
use crate::materializer::materialize;
use crate::registry::Definition;
use crate::representation::ItemStack;
use std::ptr;

/// A resolved definition of any namespace
///
/// Borrowed from the registries it was resolved in. Equality is identity:
/// two values are equal only if they point at the same registered definition.
#[derive(Debug, Clone, Copy)]
pub enum CustomDefinition<'a> {
    Block(&'a BlockDefinition),
    Decor(&'a DecorDefinition),
    Item(&'a ItemDefinition),
}

impl<'a> CustomDefinition<'a> {
    pub fn key(&self) -> &'a Key {
        match *self {
            CustomDefinition::Block(definition) => &definition.key,
            CustomDefinition::Decor(definition) => &definition.key,
            CustomDefinition::Item(definition) => &definition.key,
        }
    }

    pub fn namespace(&self) -> Namespace {
        match *self {
            CustomDefinition::Block(_) => BlockDefinition::NAMESPACE,
            CustomDefinition::Decor(_) => DecorDefinition::NAMESPACE,
            CustomDefinition::Item(_) => ItemDefinition::NAMESPACE,
        }
    }

    pub fn display_name(&self) -> &'a str {
        match *self {
            CustomDefinition::Block(definition) => &definition.display_name,
            CustomDefinition::Decor(definition) => &definition.display_name,
            CustomDefinition::Item(definition) => &definition.display_name,
        }
    }

    pub fn as_block(&self) -> Option<&'a BlockDefinition> {
        match *self {
            CustomDefinition::Block(definition) => Some(definition),
            _ => None,
        }
    }

    pub fn as_decor(&self) -> Option<&'a DecorDefinition> {
        match *self {
            CustomDefinition::Decor(definition) => Some(definition),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&'a ItemDefinition> {
        match *self {
            CustomDefinition::Item(definition) => Some(definition),
            _ => None,
        }
    }

    /// Placement sounds; items are never placed
    pub fn sound_group(&self) -> Option<&'a SoundGroup> {
        match *self {
            CustomDefinition::Block(definition) => Some(&definition.sound_group),
            CustomDefinition::Decor(definition) => Some(&definition.sound_group),
            CustomDefinition::Item(_) => None,
        }
    }

    /// Fresh stamped item form
    pub fn materialize(&self) -> ItemStack {
        match *self {
            CustomDefinition::Block(definition) => materialize(definition),
            CustomDefinition::Decor(definition) => materialize(definition),
            CustomDefinition::Item(definition) => materialize(definition),
        }
    }
}

impl PartialEq for CustomDefinition<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CustomDefinition::Block(a), CustomDefinition::Block(b)) => ptr::eq(*a, *b),
            (CustomDefinition::Decor(a), CustomDefinition::Decor(b)) => ptr::eq(*a, *b),
            (CustomDefinition::Item(a), CustomDefinition::Item(b)) => ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for CustomDefinition<'_> {}
