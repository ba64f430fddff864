//! Content registries as an application context
//!
//! [`ContentRegistries`] owns the three namespace registries. It is built once,
//! single-threaded, then published behind an `Arc` and only read. Reloading
//! builds a fresh instance and swaps it in; readers holding the previous
//! snapshot keep using it until they drop it.

use crate::config::ContentConfig;
use crate::content::{
    block::create_block_registry, decor::create_decor_registry, item::create_item_registry,
    BlockRegistry, DecorRegistry, ItemRegistry,
};
use crate::crafting;
use crate::error::ContentResult;
use parking_lot::RwLock;
use std::sync::Arc;

/// All content registries of one running server
#[derive(Debug)]
pub struct ContentRegistries {
    pub blocks: BlockRegistry,
    pub decor: DecorRegistry,
    pub items: ItemRegistry,
    config: ContentConfig,
}

impl ContentRegistries {
    /// Assemble registries filled elsewhere.
    ///
    /// Fails if a recipe of any namespace names custom content that is not
    /// registered.
    pub fn new(
        blocks: BlockRegistry,
        decor: DecorRegistry,
        items: ItemRegistry,
        config: ContentConfig,
    ) -> ContentResult<Self> {
        let registries = Self {
            blocks,
            decor,
            items,
            config,
        };
        crafting::check_ingredients(&registries)?;

        log::info!(
            "[ContentRegistries::new] Content ready: {} blocks, {} decor, {} items",
            registries.blocks.len(),
            registries.decor.len(),
            registries.items.len()
        );
        Ok(registries)
    }

    /// Registries holding the content shipped with this crate
    pub fn with_basic_content(config: ContentConfig) -> ContentResult<Self> {
        Self::new(
            create_block_registry()?,
            create_decor_registry()?,
            create_item_registry()?,
            config,
        )
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Definitions across all namespaces
    pub fn len(&self) -> usize {
        self.blocks.len() + self.decor.len() + self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe handle to the currently published registries
pub type SharedContent = Arc<RwLock<Arc<ContentRegistries>>>;

/// Publish `registries` for the first time
pub fn create_shared_content(registries: ContentRegistries) -> SharedContent {
    Arc::new(RwLock::new(Arc::new(registries)))
}

/// Current registries; the lock is held only for the `Arc` clone
pub fn snapshot(shared: &SharedContent) -> Arc<ContentRegistries> {
    Arc::clone(&shared.read())
}

/// Swap in freshly built registries, returning the ones replaced
pub fn publish(shared: &SharedContent, registries: ContentRegistries) -> Arc<ContentRegistries> {
    let fresh = Arc::new(registries);
    let previous = std::mem::replace(&mut *shared.write(), fresh);
    log::info!("[context::publish] Published new content registries");
    previous
}

/// Rebuild and swap. The published registries are untouched if `build` fails.
pub fn reload<F>(shared: &SharedContent, build: F) -> ContentResult<Arc<ContentRegistries>>
where
    F: FnOnce() -> ContentResult<ContentRegistries>,
{
    let registries = build()?;
    Ok(publish(shared, registries))
}
