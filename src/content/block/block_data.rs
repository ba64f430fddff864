//! Block Data
//!
//! Definition type for custom blocks and the block-only registry queries.

use crate::constants::limits::MAX_NOTE;
use crate::content::recipe::Recipe;
use crate::content::sound::SoundGroup;
use crate::error::{ContentError, ContentResult};
use crate::key::{Key, Namespace};
use crate::registry::{Definition, NamespaceRegistry};
use crate::representation::{BlockState, Material, NoteBlockData};

/// Tool that breaks a block at full speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolType {
    Hand,
    Axe,
    Pickaxe,
    Shovel,
    Hoe,
}

/// Custom block definition
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    pub key: Key,
    pub display_name: String,
    /// Model of the block's item form
    pub custom_model_data: u32,
    /// Note block state the placed block is disguised as
    pub note_block: NoteBlockData,
    pub sound_group: SoundGroup,
    pub hardness: f32,
    pub preferred_tool: ToolType,
    /// Drops its own item form when broken
    pub drops_self: bool,
    pub recipes: Vec<Recipe>,
}

pub type BlockRegistry = NamespaceRegistry<BlockDefinition>;

impl Definition for BlockDefinition {
    const NAMESPACE: Namespace = Namespace::Blocks;

    fn key(&self) -> &Key {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn validate(&self) -> ContentResult<()> {
        let invalid = |reason: String| ContentError::InvalidDefinition {
            key: self.key.clone(),
            reason,
        };

        if self.display_name.trim().is_empty() {
            return Err(invalid("display name is empty".to_string()));
        }
        if self.note_block.note > MAX_NOTE {
            return Err(invalid(format!(
                "note {} is outside 0..={}",
                self.note_block.note, MAX_NOTE
            )));
        }
        if !(self.hardness >= 0.0) {
            return Err(invalid(format!("hardness {} is negative", self.hardness)));
        }

        for recipe in &self.recipes {
            recipe.validate(&self.key)?;
        }
        Ok(())
    }

    fn conflicts_with(&self, other: &Self) -> Option<String> {
        (self.note_block == other.note_block)
            .then(|| format!("note block disguise is already used by {}", other.key))
    }
}

impl NamespaceRegistry<BlockDefinition> {
    /// Block disguised as `data`, for world blocks that carry no stamp
    pub fn from_note_block(&self, data: &NoteBlockData) -> Option<&BlockDefinition> {
        self.iter().find(|definition| definition.note_block == *data)
    }

    /// Stamped definition first, whatever the material; unstamped note
    /// blocks then fall back to their disguise
    pub fn from_block_state(&self, state: &BlockState) -> Option<&BlockDefinition> {
        self.from_representation(state).or_else(|| {
            if state.material != Material::NoteBlock {
                return None;
            }
            state.note_block.as_ref().and_then(|data| self.from_note_block(data))
        })
    }
}
