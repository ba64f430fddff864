//! Content configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is a valid
//! configuration.

use crate::constants::limits::MAX_STACK_SIZE;
use crate::error::{ContentError, ContentResult};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Accept `<namespace>:type:<key>` spellings in definition lookups
    pub legacy_aliases: bool,
    /// Seasonal recipes are craftable
    pub christmas: bool,
    /// Expose crafting recipes at all
    pub recipes_enabled: bool,
    /// Upper bound for materialized stack sizes
    pub max_stack_size: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            legacy_aliases: true,
            christmas: false,
            recipes_enabled: true,
            max_stack_size: MAX_STACK_SIZE,
        }
    }
}

impl ContentConfig {
    pub fn from_toml_str(source: &str) -> ContentResult<Self> {
        let config: ContentConfig = toml::from_str(source)?;
        config.validate().map_err(|e| ContentError::InvalidConfig {
            field: "max_stack_size".to_string(),
            value: config.max_stack_size.to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ContentError::ConfigLoad {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let config = Self::from_toml_str(&source).map_err(|e| match e {
            ContentError::ConfigLoad { error, .. } => ContentError::ConfigLoad {
                path: path.display().to_string(),
                error,
            },
            other => other,
        })?;

        log::info!(
            "[ContentConfig::load] Loaded {} (legacy_aliases={}, christmas={}, recipes_enabled={})",
            path.display(),
            config.legacy_aliases,
            config.christmas,
            config.recipes_enabled
        );
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.max_stack_size == 0 {
            return Err(anyhow::anyhow!("ContentConfig: max_stack_size cannot be 0"));
        }
        if self.max_stack_size > MAX_STACK_SIZE {
            return Err(anyhow::anyhow!(
                "ContentConfig: max_stack_size {} exceeds maximum of {}",
                self.max_stack_size,
                MAX_STACK_SIZE
            ));
        }
        Ok(())
    }
}
