//! Identity codec
//!
//! Stamps a [`Key`] into a representation's metadata container and reads it
//! back. The stamp is stored in the identity section as
//! `<namespace>:type = "<local key>"`, which is the layout already present in
//! stored item stacks and placed blocks.

use crate::constants::metadata::IDENTITY_ENTRY;
use crate::key::Key;
use crate::representation::{ItemStack, MetadataKey, MetadataSection, Stamped};

fn identity_entry(namespace: &str) -> MetadataKey {
    MetadataKey::new(namespace, IDENTITY_ENTRY)
}

/// Write `key` as the representation's only identity.
///
/// Any earlier identity entry is dropped, so a representation never carries
/// two identities. Display entries are left alone. Returns the identity that
/// was replaced, if it differed.
pub fn stamp<R: Stamped>(representation: &mut R, key: &Key) -> Option<Key> {
    let previous = read(representation).filter(|previous| previous != key);
    if let Some(previous) = &previous {
        log::debug!("[codec::stamp] Replacing identity {} with {}", previous, key);
    }

    let container = representation.container_mut();
    container.clear(MetadataSection::Identity);
    container.set_string(
        MetadataSection::Identity,
        identity_entry(key.namespace()),
        key.local(),
    );

    previous
}

/// Builder-style [`stamp`]
pub fn stamped<R: Stamped>(mut representation: R, key: &Key) -> R {
    stamp(&mut representation, key);
    representation
}

/// Read the stamped identity.
///
/// The first identity entry in key order wins; the reserved rename entry is
/// never an identity even if a host wrote it into the identity section. A
/// missing container, an empty section or an unparsable value all read as
/// `None`.
pub fn read<R: Stamped>(representation: &R) -> Option<Key> {
    let container = representation.container()?;
    let (entry, value) = container
        .entries(MetadataSection::Identity)
        .find(|(entry, _)| !entry.is_reserved())?;

    Key::of(&entry.namespace, value.as_str()?).ok()
}

/// Remove every identity entry, returning the identity that was readable.
///
/// Unreadable leftovers (non-string values, invalid local keys) are dropped
/// too.
pub fn erase<R: Stamped>(representation: &mut R) -> Option<Key> {
    let previous = read(representation);
    let has_identity = representation
        .container()
        .is_some_and(|container| container.len(MetadataSection::Identity) > 0);
    if has_identity {
        representation.container_mut().clear(MetadataSection::Identity);
    }
    previous
}

/// Record that the rename subsystem renamed this stack to `rename`
pub fn mark_renamed(stack: &mut ItemStack, rename: &str) {
    stack.container_mut().set_string(
        MetadataSection::Display,
        MetadataKey::renameable(),
        rename,
    );
}

/// Rename applied by the rename subsystem, if any
pub fn renamed_as(stack: &ItemStack) -> Option<&str> {
    stack
        .container()?
        .get_string(MetadataSection::Display, &MetadataKey::renameable())
}
