//! Namespaced content keys
//!
//! A [`Key`] is the stable name of a custom content definition, written as
//! `namespace:local_key`. [`Namespace`] is the closed set of content domains a
//! key can belong to.

mod namespace;
mod namespaced_key;

pub use namespace::Namespace;
pub use namespaced_key::{Key, MalformedKey, MalformedReason};
