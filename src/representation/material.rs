use crate::constants::limits::MAX_STACK_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock materials custom content is disguised as or crafted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Air,

    // Disguises
    NoteBlock,
    Paper,
    LeatherHorseArmor,
    NetheriteSword,
    Clock,
    Sugar,
    LeatherHelmet,

    // Ingredients
    OakLog,
    OakPlanks,
    AcaciaPlanks,
    BirchPlanks,
    CherryPlanks,
    Leather,
    IronNugget,
    IronIngot,
    String,
    Snowball,
    Stick,
    DeepslateTiles,
    Netherite,
    Redstone,
    Glass,
}

impl Material {
    pub const fn name(self) -> &'static str {
        match self {
            Material::Air => "air",
            Material::NoteBlock => "note_block",
            Material::Paper => "paper",
            Material::LeatherHorseArmor => "leather_horse_armor",
            Material::NetheriteSword => "netherite_sword",
            Material::Clock => "clock",
            Material::Sugar => "sugar",
            Material::LeatherHelmet => "leather_helmet",
            Material::OakLog => "oak_log",
            Material::OakPlanks => "oak_planks",
            Material::AcaciaPlanks => "acacia_planks",
            Material::BirchPlanks => "birch_planks",
            Material::CherryPlanks => "cherry_planks",
            Material::Leather => "leather",
            Material::IronNugget => "iron_nugget",
            Material::IronIngot => "iron_ingot",
            Material::String => "string",
            Material::Snowball => "snowball",
            Material::Stick => "stick",
            Material::DeepslateTiles => "deepslate_tiles",
            Material::Netherite => "netherite_ingot",
            Material::Redstone => "redstone",
            Material::Glass => "glass",
        }
    }

    /// Largest stack the host allows for this material
    pub const fn max_stack_size(self) -> u32 {
        match self {
            Material::Air => 0,
            Material::LeatherHorseArmor
            | Material::NetheriteSword
            | Material::LeatherHelmet => 1,
            Material::Snowball => 16,
            _ => MAX_STACK_SIZE,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
