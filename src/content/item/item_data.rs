//! Item Data

use crate::content::recipe::Recipe;
use crate::error::{ContentError, ContentResult};
use crate::key::{Key, Namespace};
use crate::registry::{Definition, NamespaceRegistry};
use crate::representation::Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentSlot {
    Head,
    Chest,
    Legs,
    Feet,
}

/// Custom item definition
#[derive(Debug, Clone)]
pub struct ItemDefinition {
    pub key: Key,
    pub material: Material,
    pub display_name: String,
    pub custom_model_data: u32,
    pub lore: Vec<String>,
    /// Never stacks above one, whatever the material allows
    pub unstackable: bool,
    /// Slot the item can be worn in
    pub wearable: Option<EquipmentSlot>,
    pub recipes: Vec<Recipe>,
}

pub type ItemRegistry = NamespaceRegistry<ItemDefinition>;

impl ItemDefinition {
    /// Largest stack of this item, within the host limit
    pub fn max_stack_size(&self, host_limit: u32) -> u32 {
        if self.unstackable {
            1
        } else {
            self.material.max_stack_size().min(host_limit).max(1)
        }
    }
}

impl Definition for ItemDefinition {
    const NAMESPACE: Namespace = Namespace::Items;

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
        let invalid = |reason: &str| ContentError::InvalidDefinition {
            key: self.key.clone(),
            reason: reason.to_string(),
        };

        if self.display_name.trim().is_empty() {
            return Err(invalid("display name is empty"));
        }
        if self.material == Material::Air {
            return Err(invalid("air cannot be an item"));
        }

        for recipe in &self.recipes {
            recipe.validate(&self.key)?;
        }
        Ok(())
    }
}
