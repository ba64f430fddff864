//! Shared constants for custom content
//!
//! Namespace literals are a contract with content authors: they appear in
//! recipe files, configuration and admin commands. Do not rename them.

/// Namespace identifiers as they appear in keys
pub mod namespaces {
    pub const BLOCKS: &str = "blocks";
    pub const DECOR: &str = "decor";
    pub const ITEMS: &str = "items";

    /// Suffix of the legacy `<namespace>:type` spelling
    pub const LEGACY_TYPE_SUFFIX: &str = "type";
}

/// Metadata container entry names
pub mod metadata {
    /// Entry name used for identity stamps (`<namespace>:type` → local key)
    pub const IDENTITY_ENTRY: &str = "type";

    /// Reserved entry written by the rename subsystem
    pub const RENAMEABLE_NAMESPACE: &str = super::namespaces::ITEMS;
    pub const RENAMEABLE_ENTRY: &str = "renameable";
}

/// Stack and geometry limits
pub mod limits {
    /// Largest stack the host inventory accepts
    pub const MAX_STACK_SIZE: u32 = 64;

    /// Largest decor hitbox edge, in blocks
    pub const MAX_HITBOX_EDGE: f64 = 16.0;

    /// Note block pitch range is 0..=24
    pub const MAX_NOTE: u8 = 24;

    /// Crafting grid is 3x3
    pub const CRAFTING_GRID: usize = 3;
}
