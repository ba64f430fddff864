// Hearth Customs - custom content registry and identity codec
//
// Custom blocks, decor and items live in the world as disguised stock objects
// (note blocks, item stacks) with their identity stamped into a metadata
// container. This crate owns:
// - key: namespaced content keys
// - codec: stamping and reading identity on representations
// - registry: one registry per namespace with an explicit default
// - resolver: raw key / key / representation -> definition, across namespaces
// - materializer: definition -> stamped representation
//
// Registries are built once, then published read-only through `context`.

// Constants module
pub mod constants;

// Core
pub mod codec;
pub mod error;
pub mod key;
pub mod registry;
pub mod representation;
pub mod resolver;

// Content
pub mod content;
pub mod crafting;
pub mod materializer;

// Application context
pub mod config;
pub mod context;
pub mod logging;

pub use config::ContentConfig;
pub use content::{
    BlockDefinition, BlockRegistry, DecorDefinition, DecorRegistry, ItemDefinition, ItemRegistry,
    SoundGroup,
};
pub use context::{
    create_shared_content, publish, reload, snapshot, ContentRegistries, SharedContent,
};
pub use crafting::{build_recipes, CraftingRecipe, Ingredient};
pub use error::{ContentError, ContentResult, OptionExt};
pub use key::{Key, MalformedKey, Namespace};
pub use materializer::{materialize, materialize_block_state, materialize_facing, Materialize};
pub use registry::{Definition, NamespaceRegistry};
pub use representation::{BlockState, ItemStack, Material, PersistentDataContainer, Stamped};
pub use resolver::{CustomDefinition, Lookup};
