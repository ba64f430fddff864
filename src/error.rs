//! Error handling for the content registries
//!
//! Lookups that miss are not errors: they return `None`. Everything in here
//! is either a malformed input handed to us by a caller or a startup-time
//! registration problem that must stop the content module from loading.

use crate::key::{Key, MalformedKey, Namespace};
use std::error::Error as StdError;
use std::fmt;

/// Main error type for custom content
#[derive(Debug)]
pub enum ContentError {
    // Key Errors
    MalformedKey(MalformedKey),

    // Registration Errors
    DuplicateKey {
        key: Key,
    },
    NamespaceMismatch {
        key: Key,
        expected: Namespace,
    },
    InvalidDefinition {
        key: Key,
        reason: String,
    },
    InvalidRecipe {
        key: Key,
        reason: String,
    },
    UnknownIngredient {
        recipe: Key,
        ingredient: Key,
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
    ConfigLoad {
        path: String,
        error: String,
    },

    // Representation Errors
    SerializationError {
        context: String,
        error: String,
    },
    DeserializationError {
        context: String,
        error: String,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MalformedKey(err) => write!(f, "{}", err),

            ContentError::DuplicateKey { key } => {
                write!(f, "Duplicate content key: {} is already registered", key)
            }
            ContentError::NamespaceMismatch { key, expected } => write!(
                f,
                "Namespace mismatch: {} cannot be registered in the '{}' registry",
                key, expected
            ),
            ContentError::InvalidDefinition { key, reason } => {
                write!(f, "Invalid definition {}: {}", key, reason)
            }
            ContentError::InvalidRecipe { key, reason } => {
                write!(f, "Invalid recipe for {}: {}", key, reason)
            }
            ContentError::UnknownIngredient { recipe, ingredient } => write!(
                f,
                "Recipe for {} uses unknown ingredient {}",
                recipe, ingredient
            ),

            ContentError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),
            ContentError::ConfigLoad { path, error } => {
                write!(f, "Config load failed for {}: {}", path, error)
            }

            ContentError::SerializationError { context, error } => {
                write!(f, "Serialization error in {}: {}", context, error)
            }
            ContentError::DeserializationError { context, error } => {
                write!(f, "Deserialization error in {}: {}", context, error)
            }
        }
    }
}

impl StdError for ContentError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ContentError::MalformedKey(err) => Some(err),
            _ => None,
        }
    }
}

/// Type alias for Results in the content registries
pub type ContentResult<T> = Result<T, ContentError>;

impl From<MalformedKey> for ContentError {
    fn from(err: MalformedKey) -> Self {
        ContentError::MalformedKey(err)
    }
}

impl From<bincode::Error> for ContentError {
    fn from(err: bincode::Error) -> Self {
        ContentError::DeserializationError {
            context: "bincode".to_string(),
            error: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ContentError {
    fn from(err: toml::de::Error) -> Self {
        ContentError::ConfigLoad {
            path: String::new(),
            error: err.to_string(),
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_content<F>(self, f: F) -> ContentResult<T>
    where
        F: FnOnce() -> ContentError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_content<F>(self, f: F) -> ContentResult<T>
    where
        F: FnOnce() -> ContentError,
    {
        self.ok_or_else(f)
    }
}
