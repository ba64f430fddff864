//! Custom items

pub mod basic_items;
pub mod item_data;

pub use basic_items::{create_item_registry, register_basic_items};
pub use item_data::{EquipmentSlot, ItemDefinition, ItemRegistry};
