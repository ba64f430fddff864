//! Basic custom blocks
//!
//! Blocks shipped with the content module. Hosts can register more on top of
//! these with [`BlockRegistry::register`].

use super::block_data::{BlockDefinition, BlockRegistry, ToolType};
use crate::constants::namespaces::{BLOCKS, ITEMS};
use crate::content::recipe::{CraftingCategory, Recipe};
use crate::content::sound::SoundGroup;
use crate::error::ContentResult;
use crate::key::Key;
use crate::representation::{Instrument, Material, NoteBlockData};

/// Fallback for note blocks that are not a registered disguise
pub fn create_default_block_definition() -> ContentResult<BlockDefinition> {
    Ok(BlockDefinition {
        key: Key::of(BLOCKS, "default")?,
        display_name: "Note Block".to_string(),
        custom_model_data: 0,
        note_block: NoteBlockData::new(Instrument::Harp, 0, false),
        sound_group: SoundGroup::WOOD,
        hardness: 0.8,
        preferred_tool: ToolType::Axe,
        drops_self: true,
        recipes: Vec::new(),
    })
}

/// Create oak log disguise definition
pub fn create_oak_log_disguise_definition() -> ContentResult<BlockDefinition> {
    Ok(BlockDefinition {
        key: Key::of(BLOCKS, "oak_log_disguise")?,
        display_name: "Oak Log".to_string(),
        custom_model_data: 1001,
        note_block: NoteBlockData::new(Instrument::BassDrum, 1, false),
        sound_group: SoundGroup::WOOD,
        hardness: 2.0,
        preferred_tool: ToolType::Axe,
        drops_self: true,
        recipes: vec![Recipe::shaped(&["LL", "LL"])
            .material('L', Material::OakLog)
            .category(CraftingCategory::Building)],
    })
}

/// Create cardboard definition
pub fn create_cardboard_definition() -> ContentResult<BlockDefinition> {
    Ok(BlockDefinition {
        key: Key::of(BLOCKS, "cardboard")?,
        display_name: "Cardboard".to_string(),
        custom_model_data: 1002,
        note_block: NoteBlockData::new(Instrument::Banjo, 2, false),
        sound_group: SoundGroup::WOOL,
        hardness: 0.4,
        preferred_tool: ToolType::Hand,
        drops_self: true,
        recipes: vec![Recipe::shaped(&["PPP", "PPP", "PPP"])
            .material('P', Material::Paper)
            .category(CraftingCategory::Building)],
    })
}

/// Create deepslate tile bricks definition
pub fn create_deepslate_tile_bricks_definition() -> ContentResult<BlockDefinition> {
    Ok(BlockDefinition {
        key: Key::of(BLOCKS, "deepslate_tile_bricks")?,
        display_name: "Deepslate Tile Bricks".to_string(),
        custom_model_data: 1003,
        note_block: NoteBlockData::new(Instrument::Bell, 3, true),
        sound_group: SoundGroup::STONE,
        hardness: 3.5,
        preferred_tool: ToolType::Pickaxe,
        drops_self: true,
        recipes: vec![Recipe::shaped(&["DD", "DD"])
            .material('D', Material::DeepslateTiles)
            .category(CraftingCategory::Building)],
    })
}

/// Create plumbum block definition (crafted from custom ingots)
pub fn create_plumbum_block_definition() -> ContentResult<BlockDefinition> {
    Ok(BlockDefinition {
        key: Key::of(BLOCKS, "plumbum_block")?,
        display_name: "Plumbum Block".to_string(),
        custom_model_data: 1004,
        note_block: NoteBlockData::new(Instrument::IronXylophone, 4, false),
        sound_group: SoundGroup::METAL,
        hardness: 5.0,
        preferred_tool: ToolType::Pickaxe,
        drops_self: true,
        recipes: vec![Recipe::shaped(&["III", "III", "III"])
            .custom('I', Key::of(ITEMS, "plumbum_ingot")?)
            .category(CraftingCategory::Building)],
    })
}

/// Register all basic custom blocks on top of the default
pub fn register_basic_blocks(registry: &mut BlockRegistry) -> ContentResult<()> {
    registry.register(create_oak_log_disguise_definition()?)?;
    registry.register(create_cardboard_definition()?)?;
    registry.register(create_deepslate_tile_bricks_definition()?)?;
    registry.register(create_plumbum_block_definition()?)?;
    Ok(())
}

/// Block registry with the default and every basic block
pub fn create_block_registry() -> ContentResult<BlockRegistry> {
    let mut registry = BlockRegistry::new(create_default_block_definition()?)?;
    register_basic_blocks(&mut registry)?;
    log::info!("[blocks] Registered {} custom blocks", registry.len());
    Ok(registry)
}
