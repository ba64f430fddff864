//! Custom blocks
//!
//! Placed as note blocks; the `(instrument, note, powered)` triple tells the
//! disguises apart and the identity stamp names the definition.

pub mod basic_blocks;
pub mod block_data;

pub use basic_blocks::{create_block_registry, register_basic_blocks};
pub use block_data::{BlockDefinition, BlockRegistry, ToolType};
