//! Shaped crafting recipes attached to definitions
//!
//! Definitions only describe their recipes. Turning them into craftable
//! recipes with concrete result stacks is done by `crate::crafting`, after
//! every namespace has been registered.

use crate::constants::limits::CRAFTING_GRID;
use crate::error::{ContentError, ContentResult};
use crate::key::Key;
use crate::representation::Material;
use std::collections::HashSet;

/// One cell choice of a shaped recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeChoice {
    Material(Material),
    /// Another piece of custom content, by key
    Custom(Key),
}

/// Recipe book tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CraftingCategory {
    Building,
    Equipment,
    Redstone,
    Misc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub shape: Vec<String>,
    pub ingredients: Vec<(char, RecipeChoice)>,
    pub category: CraftingCategory,
    /// Listed in the crafts menu
    pub show_in_menu: bool,
    pub group: Option<String>,
    /// Only craftable while the seasonal event is enabled
    pub seasonal: bool,
}

impl Recipe {
    pub fn shaped(rows: &[&str]) -> Self {
        Self {
            shape: rows.iter().map(|row| row.to_string()).collect(),
            ingredients: Vec::new(),
            category: CraftingCategory::Misc,
            show_in_menu: true,
            group: None,
            seasonal: false,
        }
    }

    pub fn material(mut self, symbol: char, material: Material) -> Self {
        self.ingredients.push((symbol, RecipeChoice::Material(material)));
        self
    }

    pub fn custom(mut self, symbol: char, key: Key) -> Self {
        self.ingredients.push((symbol, RecipeChoice::Custom(key)));
        self
    }

    pub fn category(mut self, category: CraftingCategory) -> Self {
        self.category = category;
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.show_in_menu = false;
        self
    }

    pub fn seasonal(mut self) -> Self {
        self.seasonal = true;
        self
    }

    /// Check the shape against the grid and the ingredient table
    pub fn validate(&self, owner: &Key) -> ContentResult<()> {
        let invalid = |reason: String| ContentError::InvalidRecipe {
            key: owner.clone(),
            reason,
        };

        if self.shape.is_empty() || self.shape.len() > CRAFTING_GRID {
            return Err(invalid(format!(
                "shape has {} rows, expected 1..={}",
                self.shape.len(),
                CRAFTING_GRID
            )));
        }

        let width = self.shape[0].chars().count();
        for row in &self.shape {
            let row_width = row.chars().count();
            if row_width == 0 || row_width > CRAFTING_GRID {
                return Err(invalid(format!("row '{}' must be 1..={} wide", row, CRAFTING_GRID)));
            }
            if row_width != width {
                return Err(invalid(format!("row '{}' is not {} wide", row, width)));
            }
        }

        let mut symbols = HashSet::new();
        for (symbol, _) in &self.ingredients {
            if *symbol == ' ' {
                return Err(invalid("' ' is reserved for empty cells".to_string()));
            }
            if !symbols.insert(*symbol) {
                return Err(invalid(format!("symbol '{}' is defined twice", symbol)));
            }
        }

        let used: HashSet<char> = self
            .shape
            .iter()
            .flat_map(|row| row.chars())
            .filter(|c| *c != ' ')
            .collect();

        if used.is_empty() {
            return Err(invalid("shape has no ingredients".to_string()));
        }
        if let Some(missing) = used.iter().find(|c| !symbols.contains(c)) {
            return Err(invalid(format!("symbol '{}' has no ingredient", missing)));
        }
        if let Some(unused) = symbols.iter().find(|c| !used.contains(c)) {
            return Err(invalid(format!("ingredient '{}' is not in the shape", unused)));
        }

        Ok(())
    }

    /// Keys of custom ingredients
    pub fn custom_ingredients(&self) -> impl Iterator<Item = &Key> {
        self.ingredients.iter().filter_map(|(_, choice)| match choice {
            RecipeChoice::Custom(key) => Some(key),
            RecipeChoice::Material(_) => None,
        })
    }
}
