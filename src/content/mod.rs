//! Custom content definitions
//!
//! Each domain has a `*_data.rs` with its definition type and a `basic_*.rs`
//! with the content shipped by default.

pub mod block;
pub mod decor;
pub mod item;
pub mod recipe;
pub mod sound;

pub use block::{BlockDefinition, BlockRegistry, ToolType};
pub use decor::{DecorDefinition, DecorHitBox, DecorParameter, DecorRegistry, Facing, HitBoxKind};
pub use item::{EquipmentSlot, ItemDefinition, ItemRegistry};
pub use recipe::{CraftingCategory, Recipe, RecipeChoice};
pub use sound::{SoundEvent, SoundGroup};
