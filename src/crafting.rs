//! Crafting recipe assembly
//!
//! Definitions carry recipe descriptions. Once every namespace is registered
//! they are turned into [`CraftingRecipe`]s with concrete stacks: results are
//! materialized from the owning definition and custom ingredients are
//! resolved through the cross-namespace resolver.

use crate::content::recipe::{CraftingCategory, Recipe, RecipeChoice};
use crate::context::ContentRegistries;
use crate::error::{ContentError, ContentResult, OptionExt};
use crate::key::Key;
use crate::materializer::{materialize, Materialize};
use crate::registry::{Definition, NamespaceRegistry};
use crate::representation::{ItemStack, Material};

/// Concrete crafting grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum Ingredient {
    Material(Material),
    /// Exact custom stack that must be matched, identity included
    Custom(ItemStack),
}

/// Recipe ready to hand to the host's crafting system
#[derive(Debug, Clone, PartialEq)]
pub struct CraftingRecipe {
    /// Owning definition's key for its first recipe; the recipe at position
    /// `N > 0` of the definition gets a `.N` suffix
    pub id: Key,
    pub result: ItemStack,
    pub shape: Vec<String>,
    pub ingredients: Vec<(char, Ingredient)>,
    pub category: CraftingCategory,
    pub group: Option<String>,
    pub show_in_menu: bool,
}

/// Every custom ingredient of every recipe must resolve
pub fn check_ingredients(registries: &ContentRegistries) -> ContentResult<()> {
    check_registry(registries, &registries.blocks)?;
    check_registry(registries, &registries.decor)?;
    check_registry(registries, &registries.items)?;
    Ok(())
}

fn check_registry<D: Definition>(
    registries: &ContentRegistries,
    registry: &NamespaceRegistry<D>,
) -> ContentResult<()> {
    for definition in registry.iter() {
        for recipe in definition.recipes() {
            for ingredient in recipe.custom_ingredients() {
                resolve_ingredient(registries, definition.key(), ingredient)?;
            }
        }
    }
    Ok(())
}

fn resolve_ingredient(
    registries: &ContentRegistries,
    recipe: &Key,
    ingredient: &Key,
) -> ContentResult<ItemStack> {
    registries
        .resolve_item_stack(ingredient)
        .ok_or_content(|| ContentError::UnknownIngredient {
            recipe: recipe.clone(),
            ingredient: ingredient.clone(),
        })
}

/// Recipes the host should register, honoring the recipe switches in config
pub fn build_recipes(registries: &ContentRegistries) -> ContentResult<Vec<CraftingRecipe>> {
    let config = registries.config();
    if !config.recipes_enabled {
        log::info!("[crafting::build_recipes] Recipes disabled by config");
        return Ok(Vec::new());
    }

    let mut recipes = Vec::new();
    collect_recipes(registries, &registries.blocks, config.christmas, &mut recipes)?;
    collect_recipes(registries, &registries.decor, config.christmas, &mut recipes)?;
    collect_recipes(registries, &registries.items, config.christmas, &mut recipes)?;

    log::info!("[crafting::build_recipes] Built {} recipes", recipes.len());
    Ok(recipes)
}

fn collect_recipes<D: Materialize>(
    registries: &ContentRegistries,
    registry: &NamespaceRegistry<D>,
    seasonal_enabled: bool,
    out: &mut Vec<CraftingRecipe>,
) -> ContentResult<()> {
    for definition in registry.iter() {
        let key = definition.key();
        // Ids follow the position in the definition, so toggling seasonal
        // recipes never renumbers the others
        let enabled = definition
            .recipes()
            .iter()
            .enumerate()
            .filter(|(_, recipe)| seasonal_enabled || !recipe.seasonal);

        for (index, recipe) in enabled {
            let id = if index == 0 {
                key.clone()
            } else {
                Key::of(key.namespace(), &format!("{}.{}", key.local(), index))?
            };
            out.push(build_recipe(registries, id, definition, recipe)?);
        }
    }
    Ok(())
}

fn build_recipe<D: Materialize>(
    registries: &ContentRegistries,
    id: Key,
    definition: &D,
    recipe: &Recipe,
) -> ContentResult<CraftingRecipe> {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|(symbol, choice)| {
            let ingredient = match choice {
                RecipeChoice::Material(material) => Ingredient::Material(*material),
                RecipeChoice::Custom(key) => {
                    Ingredient::Custom(resolve_ingredient(registries, definition.key(), key)?)
                }
            };
            Ok((*symbol, ingredient))
        })
        .collect::<ContentResult<Vec<_>>>()?;

    Ok(CraftingRecipe {
        id,
        result: materialize(definition),
        shape: recipe.shape.clone(),
        ingredients,
        category: recipe.category,
        group: recipe.group.clone(),
        show_in_menu: recipe.show_in_menu,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::config::ContentConfig;

    fn registries(config: ContentConfig) -> ContentRegistries {
        ContentRegistries::with_basic_content(config).expect("Failed to build registries")
    }

    fn recipe_ids(recipes: &[CraftingRecipe]) -> Vec<String> {
        recipes.iter().map(|recipe| recipe.id.to_string()).collect()
    }

    #[test]
    fn test_build_recipes() {
        let recipes =
            build_recipes(&registries(ContentConfig::default())).expect("Failed to build recipes");
        let ids = recipe_ids(&recipes);

        assert!(ids.contains(&"blocks:oak_log_disguise".to_string()));
        assert!(ids.contains(&"decor:cool_chair".to_string()));
        assert!(ids.contains(&"items:leather_hat".to_string()));
        // Seasonal recipe is off outside the event
        assert!(!ids.contains(&"decor:snowflake_on_string".to_string()));
    }

    #[test]
    fn test_results_carry_identity() {
        let recipes =
            build_recipes(&registries(ContentConfig::default())).expect("Failed to build recipes");
        for recipe in &recipes {
            assert_eq!(codec::read(&recipe.result).as_ref(), Some(&recipe.id));
        }
    }

    #[test]
    fn test_custom_ingredient_is_stamped_stack() {
        let recipes =
            build_recipes(&registries(ContentConfig::default())).expect("Failed to build recipes");
        let plumbum_block = recipes
            .iter()
            .find(|recipe| recipe.id.to_string() == "blocks:plumbum_block")
            .expect("Missing plumbum block recipe");

        match &plumbum_block.ingredients[..] {
            [('I', Ingredient::Custom(stack))] => {
                assert_eq!(
                    codec::read(stack).map(|key| key.to_string()),
                    Some("items:plumbum_ingot".to_string())
                );
            }
            other => panic!("unexpected ingredients {:?}", other),
        }
    }

    #[test]
    fn test_seasonal_recipes_with_christmas() {
        let config = ContentConfig {
            christmas: true,
            ..ContentConfig::default()
        };
        let recipes = build_recipes(&registries(config)).expect("Failed to build recipes");
        assert!(recipe_ids(&recipes).contains(&"decor:snowflake_on_string".to_string()));
    }

    fn snowflake_registries(christmas: bool) -> ContentRegistries {
        use crate::content::block::create_block_registry;
        use crate::content::decor::basic_decor::{
            create_cool_chair_definition, create_snowflake_on_string_definition,
        };
        use crate::content::item::create_item_registry;
        use crate::content::DecorRegistry;

        // Seasonal recipe first, an everyday one after it
        let mut snowflake =
            create_snowflake_on_string_definition().expect("Failed to create snowflake");
        snowflake.recipes.push(Recipe::shaped(&["SS"]).material('S', Material::String));

        let chair = create_cool_chair_definition().expect("Failed to create chair");
        let mut decor = DecorRegistry::new(chair).expect("Failed to create decor registry");
        decor.register(snowflake).expect("Failed to register snowflake");

        let config = ContentConfig {
            christmas,
            ..ContentConfig::default()
        };
        ContentRegistries::new(
            create_block_registry().expect("Failed to create blocks"),
            decor,
            create_item_registry().expect("Failed to create items"),
            config,
        )
        .expect("Failed to build registries")
    }

    fn shape_of(recipes: &[CraftingRecipe], id: &str) -> Option<Vec<String>> {
        recipes
            .iter()
            .find(|recipe| recipe.id.to_string() == id)
            .map(|recipe| recipe.shape.clone())
    }

    #[test]
    fn test_recipe_ids_stable_across_seasons() {
        let everyday = vec!["SS".to_string()];

        let off = build_recipes(&snowflake_registries(false)).expect("Failed to build recipes");
        assert_eq!(shape_of(&off, "decor:snowflake_on_string"), None);
        assert_eq!(shape_of(&off, "decor:snowflake_on_string.1"), Some(everyday.clone()));

        let on = build_recipes(&snowflake_registries(true)).expect("Failed to build recipes");
        assert_eq!(shape_of(&on, "decor:snowflake_on_string.1"), Some(everyday));
        assert_eq!(
            shape_of(&on, "decor:snowflake_on_string"),
            Some(vec![" S ".to_string(), "BBB".to_string(), " B ".to_string()])
        );
    }

    #[test]
    fn test_recipes_disabled() {
        let config = ContentConfig {
            recipes_enabled: false,
            ..ContentConfig::default()
        };
        let recipes = build_recipes(&registries(config)).expect("Failed to build recipes");
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_rocking_chairs_share_group() {
        let recipes =
            build_recipes(&registries(ContentConfig::default())).expect("Failed to build recipes");
        let grouped = recipes
            .iter()
            .filter(|recipe| recipe.group.as_deref() == Some("decor:paintable_rocking_chair"))
            .count();
        assert_eq!(grouped, 3);
    }
}
