//! Custom decor
//!
//! Furniture and ornaments: an item form with a model, plus a hitbox the host
//! fills with barrier or solid blocks when the decor is placed.

pub mod basic_decor;
pub mod decor_data;

pub use basic_decor::{create_decor_registry, register_basic_decor};
pub use decor_data::{
    DecorDefinition, DecorHitBox, DecorParameter, DecorRegistry, Facing, HitBoxKind,
};
