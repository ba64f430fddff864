//! Basic custom decor

use super::decor_data::{
    DecorDefinition, DecorHitBox, DecorParameter, DecorRegistry, Facing, HitBoxKind,
};
use crate::constants::namespaces::DECOR;
use crate::content::recipe::{CraftingCategory, Recipe};
use crate::content::sound::SoundGroup;
use crate::error::ContentResult;
use crate::key::Key;
use crate::representation::Material;

/// Create cool chair definition (decor default)
pub fn create_cool_chair_definition() -> ContentResult<DecorDefinition> {
    Ok(DecorDefinition {
        key: Key::of(DECOR, "cool_chair")?,
        material: Material::LeatherHorseArmor,
        display_name: "Cool Chair".to_string(),
        custom_model_data: 1037,
        hitbox: DecorHitBox::new(HitBoxKind::Solid, 1.0, 1.0, 1.0),
        facings: vec![Facing::Floor],
        sound_group: SoundGroup::WOOL,
        parameters: vec![DecorParameter::Sittable, DecorParameter::Paintable],
        sit_height: Some(0.6),
        face_models: Vec::new(),
        recipes: vec![Recipe::shaped(&["LLL", "I I"])
            .material('L', Material::Leather)
            .material('I', Material::IronNugget)
            .category(CraftingCategory::Building)],
    })
}

/// Create snowflake on string definition
pub fn create_snowflake_on_string_definition() -> ContentResult<DecorDefinition> {
    Ok(DecorDefinition {
        key: Key::of(DECOR, "snowflake_on_string")?,
        material: Material::LeatherHorseArmor,
        display_name: "Snowflake on a String".to_string(),
        custom_model_data: 1254,
        hitbox: DecorHitBox::new(HitBoxKind::None, 0.6875, 0.84375, 0.6875),
        facings: vec![Facing::Ceiling, Facing::Wall],
        sound_group: SoundGroup::GLASS,
        parameters: vec![DecorParameter::FaceTyped, DecorParameter::Paintable],
        sit_height: None,
        face_models: vec![(Facing::Ceiling, 1254), (Facing::Wall, 1396)],
        recipes: vec![Recipe::shaped(&[" S ", "BBB", " B "])
            .material('S', Material::String)
            .material('B', Material::Snowball)
            .category(CraftingCategory::Building)
            .seasonal()],
    })
}

/// Create hoglin head definition
pub fn create_hoglin_head_definition() -> ContentResult<DecorDefinition> {
    Ok(DecorDefinition {
        key: Key::of(DECOR, "hoglin_head")?,
        material: Material::LeatherHorseArmor,
        display_name: "Hoglin Head".to_string(),
        custom_model_data: 1164,
        hitbox: DecorHitBox::new(HitBoxKind::None, 1.0, 1.0, 1.0),
        facings: vec![Facing::Floor, Facing::Wall],
        sound_group: SoundGroup::WOOD,
        parameters: vec![DecorParameter::Wrenchable],
        sit_height: None,
        face_models: Vec::new(),
        recipes: Vec::new(),
    })
}

fn create_paintable_rocking_chair(
    local: &str,
    custom_model_data: u32,
    display_name: &str,
    planks: Material,
) -> ContentResult<DecorDefinition> {
    Ok(DecorDefinition {
        key: Key::of(DECOR, local)?,
        material: Material::LeatherHorseArmor,
        display_name: display_name.to_string(),
        custom_model_data,
        hitbox: DecorHitBox::new(HitBoxKind::Barrier, 1.0, 1.0, 1.0),
        facings: vec![Facing::Floor],
        sound_group: SoundGroup::WOOD,
        parameters: vec![DecorParameter::Sittable, DecorParameter::Paintable],
        sit_height: Some(0.5),
        face_models: Vec::new(),
        recipes: vec![Recipe::shaped(&["P  ", "PLP", "PPP"])
            .material('P', planks)
            .material('L', Material::Leather)
            .group(format!("{}:paintable_rocking_chair", DECOR))
            .category(CraftingCategory::Building)],
    })
}

pub fn create_acacia_paintable_rocking_chair_definition() -> ContentResult<DecorDefinition> {
    create_paintable_rocking_chair(
        "acacia_paintable_rocking_chair",
        1039,
        "Acacia Rocking Chair",
        Material::AcaciaPlanks,
    )
}

pub fn create_birch_paintable_rocking_chair_definition() -> ContentResult<DecorDefinition> {
    create_paintable_rocking_chair(
        "birch_paintable_rocking_chair",
        1041,
        "Birch Rocking Chair",
        Material::BirchPlanks,
    )
}

pub fn create_cherry_paintable_rocking_chair_definition() -> ContentResult<DecorDefinition> {
    create_paintable_rocking_chair(
        "cherry_paintable_rocking_chair",
        1381,
        "Cherry Rocking Chair",
        Material::CherryPlanks,
    )
}

/// Register all basic decor on top of the default
pub fn register_basic_decor(registry: &mut DecorRegistry) -> ContentResult<()> {
    registry.register(create_snowflake_on_string_definition()?)?;
    registry.register(create_hoglin_head_definition()?)?;
    registry.register(create_acacia_paintable_rocking_chair_definition()?)?;
    registry.register(create_birch_paintable_rocking_chair_definition()?)?;
    registry.register(create_cherry_paintable_rocking_chair_definition()?)?;
    Ok(())
}

/// Decor registry with the default and every basic decor
pub fn create_decor_registry() -> ContentResult<DecorRegistry> {
    let mut registry = DecorRegistry::new(create_cool_chair_definition()?)?;
    register_basic_decor(&mut registry)?;
    log::info!("[decor] Registered {} custom decor", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;

    #[test]
    fn test_basic_decor_register() {
        let registry = create_decor_registry().expect("Failed to create decor registry");
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.get_default().key.local(), "cool_chair");
    }

    #[test]
    fn test_face_models() {
        let snowflake =
            create_snowflake_on_string_definition().expect("Failed to create snowflake");
        assert_eq!(snowflake.model_for(Facing::Ceiling), 1254);
        assert_eq!(snowflake.model_for(Facing::Wall), 1396);
        // Undeclared facing falls back to the item model
        assert_eq!(snowflake.model_for(Facing::Floor), 1254);
    }

    #[test]
    fn test_sittable_needs_height() {
        let mut registry = create_decor_registry().expect("Failed to create decor registry");
        let mut chair = create_cool_chair_definition().expect("Failed to create chair");
        chair.key = Key::of(DECOR, "floating_chair").expect("Failed to build key");
        chair.sit_height = None;

        assert!(matches!(
            registry.register(chair),
            Err(ContentError::InvalidDefinition { .. })
        ));
    }

    #[test]
    fn test_face_typed_needs_every_model() {
        let mut registry = create_decor_registry().expect("Failed to create decor registry");
        let mut snowflake =
            create_snowflake_on_string_definition().expect("Failed to create snowflake");
        snowflake.key = Key::of(DECOR, "half_snowflake").expect("Failed to build key");
        snowflake.face_models.retain(|(facing, _)| *facing == Facing::Ceiling);

        assert!(registry.register(snowflake).is_err());
    }

    #[test]
    fn test_hitbox_bounds() {
        let mut registry = create_decor_registry().expect("Failed to create decor registry");
        let mut head = create_hoglin_head_definition().expect("Failed to create head");
        head.key = Key::of(DECOR, "giant_head").expect("Failed to build key");
        head.hitbox = DecorHitBox::new(HitBoxKind::Solid, 20.0, 1.0, 1.0);
        assert!(registry.register(head).is_err());

        let chair = create_acacia_paintable_rocking_chair_definition()
            .expect("Failed to create rocking chair");
        assert!(chair.hitbox.is_solid());
        assert_eq!(chair.hitbox.block_span(), (1, 1, 1));
    }
}
