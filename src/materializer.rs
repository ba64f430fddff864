//! Definition materializer
//!
//! Turns a registered definition into a fresh representation: the disguise
//! stack from the domain factory, the domain's visual metadata, and finally
//! the identity stamp. Everything produced here resolves back to the
//! definition it came from.

use crate::codec;
use crate::content::{BlockDefinition, DecorDefinition, Facing, ItemDefinition};
use crate::registry::Definition;
use crate::representation::{BlockState, ItemMeta, ItemStack, Material};

/// Domain factory and default metadata for one definition type
pub trait Materialize: Definition {
    /// Blank stack of the disguise material
    fn base_stack(&self) -> ItemStack;

    /// Display label, model index and other visual metadata
    fn apply_metadata(&self, meta: &mut ItemMeta);
}

/// Build the item form of `definition`, stamped with its key
pub fn materialize<D: Materialize>(definition: &D) -> ItemStack {
    let mut stack = definition.base_stack();
    definition.apply_metadata(stack.meta_mut());
    codec::stamp(&mut stack, definition.key());
    stack
}

/// Build the placed form of a custom block
pub fn materialize_block_state(definition: &BlockDefinition) -> BlockState {
    let mut state = BlockState::note_block(definition.note_block);
    codec::stamp(&mut state, &definition.key);
    state
}

/// Item form of decor using the model for `facing`
pub fn materialize_facing(definition: &DecorDefinition, facing: Facing) -> ItemStack {
    let mut stack = materialize(definition);
    stack.meta_mut().custom_model_data = Some(definition.model_for(facing));
    stack
}

impl Materialize for BlockDefinition {
    fn base_stack(&self) -> ItemStack {
        ItemStack::new(Material::Paper)
    }

    fn apply_metadata(&self, meta: &mut ItemMeta) {
        meta.display_name = Some(self.display_name.clone());
        meta.custom_model_data = Some(self.custom_model_data);
    }
}

impl Materialize for DecorDefinition {
    fn base_stack(&self) -> ItemStack {
        ItemStack::new(self.material)
    }

    fn apply_metadata(&self, meta: &mut ItemMeta) {
        meta.display_name = Some(self.display_name.clone());
        meta.custom_model_data = Some(self.custom_model_data);
    }
}

impl Materialize for ItemDefinition {
    fn base_stack(&self) -> ItemStack {
        ItemStack::new(self.material)
    }

    fn apply_metadata(&self, meta: &mut ItemMeta) {
        meta.display_name = Some(self.display_name.clone());
        meta.custom_model_data = Some(self.custom_model_data);
        meta.lore = self.lore.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::block::basic_blocks::create_oak_log_disguise_definition;
    use crate::content::decor::basic_decor::create_snowflake_on_string_definition;
    use crate::content::item::basic_items::create_dosimeter_definition;

    #[test]
    fn test_materialize_block_item() {
        let oak = create_oak_log_disguise_definition().expect("Failed to create oak log");
        let stack = materialize(&oak);

        assert_eq!(stack.material, Material::Paper);
        assert_eq!(stack.amount, 1);
        assert_eq!(stack.display_name(), Some("Oak Log"));
        assert_eq!(stack.custom_model_data(), Some(1001));
        assert_eq!(codec::read(&stack), Some(oak.key.clone()));
    }

    #[test]
    fn test_materialize_block_state() {
        let oak = create_oak_log_disguise_definition().expect("Failed to create oak log");
        let state = materialize_block_state(&oak);

        assert_eq!(state.material, Material::NoteBlock);
        assert_eq!(state.note_block, Some(oak.note_block));
        assert_eq!(codec::read(&state), Some(oak.key));
    }

    #[test]
    fn test_materialize_item_lore() {
        let dosimeter = create_dosimeter_definition().expect("Failed to create dosimeter");
        let stack = materialize(&dosimeter);

        assert_eq!(stack.material, Material::Clock);
        assert_eq!(
            stack.meta().map(|meta| meta.lore.clone()),
            Some(dosimeter.lore.clone())
        );
    }

    #[test]
    fn test_materialize_facing() {
        let snowflake =
            create_snowflake_on_string_definition().expect("Failed to create snowflake");
        let wall = materialize_facing(&snowflake, Facing::Wall);

        assert_eq!(wall.custom_model_data(), Some(1396));
        assert_eq!(codec::read(&wall), Some(snowflake.key));
    }
}
