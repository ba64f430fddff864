//! Basic custom items

use super::item_data::{EquipmentSlot, ItemDefinition, ItemRegistry};
use crate::constants::namespaces::ITEMS;
use crate::content::recipe::{CraftingCategory, Recipe};
use crate::error::ContentResult;
use crate::key::Key;
use crate::representation::Material;

/// Create plumbum ingot definition (item default)
pub fn create_plumbum_ingot_definition() -> ContentResult<ItemDefinition> {
    Ok(ItemDefinition {
        key: Key::of(ITEMS, "plumbum_ingot")?,
        material: Material::Paper,
        display_name: "Plumbum Ingot".to_string(),
        custom_model_data: 1200,
        lore: Vec::new(),
        unstackable: false,
        wearable: None,
        recipes: Vec::new(),
    })
}

/// Create ban sword definition
pub fn create_ban_sword_definition() -> ContentResult<ItemDefinition> {
    Ok(ItemDefinition {
        key: Key::of(ITEMS, "ban_sword")?,
        material: Material::NetheriteSword,
        display_name: "Ban Sword".to_string(),
        custom_model_data: 1201,
        lore: vec!["Strikes with the weight of a thousand years".to_string()],
        unstackable: true,
        wearable: None,
        recipes: Vec::new(),
    })
}

/// Create dosimeter definition
pub fn create_dosimeter_definition() -> ContentResult<ItemDefinition> {
    Ok(ItemDefinition {
        key: Key::of(ITEMS, "dosimeter")?,
        material: Material::Clock,
        display_name: "Dosimeter".to_string(),
        custom_model_data: 1202,
        lore: vec!["Measures radiation nearby".to_string()],
        unstackable: true,
        wearable: None,
        recipes: vec![Recipe::shaped(&["PIP", "PRP", "PGP"])
            .custom('P', Key::of(ITEMS, "plumbum_ingot")?)
            .material('I', Material::IronIngot)
            .material('R', Material::Redstone)
            .material('G', Material::Glass)
            .category(CraftingCategory::Equipment)],
    })
}

/// Create cocaine definition
pub fn create_cocaine_definition() -> ContentResult<ItemDefinition> {
    Ok(ItemDefinition {
        key: Key::of(ITEMS, "cocaine")?,
        material: Material::Sugar,
        display_name: "Cocaine".to_string(),
        custom_model_data: 1203,
        lore: Vec::new(),
        unstackable: false,
        wearable: None,
        recipes: Vec::new(),
    })
}

/// Create leather hat definition
pub fn create_leather_hat_definition() -> ContentResult<ItemDefinition> {
    Ok(ItemDefinition {
        key: Key::of(ITEMS, "leather_hat")?,
        material: Material::LeatherHelmet,
        display_name: "Leather Hat".to_string(),
        custom_model_data: 1204,
        lore: Vec::new(),
        unstackable: true,
        wearable: Some(EquipmentSlot::Head),
        recipes: vec![Recipe::shaped(&[" L ", "LLL"])
            .material('L', Material::Leather)
            .category(CraftingCategory::Equipment)],
    })
}

/// Register all basic items on top of the default
pub fn register_basic_items(registry: &mut ItemRegistry) -> ContentResult<()> {
    registry.register(create_ban_sword_definition()?)?;
    registry.register(create_dosimeter_definition()?)?;
    registry.register(create_cocaine_definition()?)?;
    registry.register(create_leather_hat_definition()?)?;
    Ok(())
}

/// Item registry with the default and every basic item
pub fn create_item_registry() -> ContentResult<ItemRegistry> {
    let mut registry = ItemRegistry::new(create_plumbum_ingot_definition()?)?;
    register_basic_items(&mut registry)?;
    log::info!("[items] Registered {} custom items", registry.len());
    Ok(registry)
}
