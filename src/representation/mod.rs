//! In-world representations of custom content
//!
//! Custom content never exists in the world as its own type. It is a stock
//! object (an item stack, a note block) disguised by visual metadata and
//! carrying its identity inside a [`PersistentDataContainer`].

mod block_state;
mod container;
mod item_stack;
mod material;

pub use block_state::{BlockState, Instrument, NoteBlockData};
pub use container::{MetadataKey, MetadataSection, MetadataValue, PersistentDataContainer};
pub use item_stack::{ItemMeta, ItemStack};
pub use material::Material;

/// Anything that carries a metadata container the identity codec can stamp
pub trait Stamped {
    /// Container if the representation has one yet
    fn container(&self) -> Option<&PersistentDataContainer>;

    /// Container, created on first write
    fn container_mut(&mut self) -> &mut PersistentDataContainer;
}
