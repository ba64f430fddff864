use super::{Material, PersistentDataContainer, Stamped};
use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};

/// Note block instruments available as disguise channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    Harp,
    BassDrum,
    Snare,
    Hat,
    Bass,
    Flute,
    Bell,
    Guitar,
    Chime,
    Xylophone,
    IronXylophone,
    CowBell,
    Didgeridoo,
    Bit,
    Banjo,
    Pling,
}

/// Note block state triple that disguises a custom block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteBlockData {
    pub instrument: Instrument,
    pub note: u8,
    pub powered: bool,
}

impl NoteBlockData {
    pub const fn new(instrument: Instrument, note: u8, powered: bool) -> Self {
        Self {
            instrument,
            note,
            powered,
        }
    }
}

/// A placed block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockState {
    pub material: Material,
    pub note_block: Option<NoteBlockData>,
    pub container: PersistentDataContainer,
}

impl BlockState {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            note_block: None,
            container: PersistentDataContainer::new(),
        }
    }

    /// Bare note block, as the host reports an unstamped world block
    pub fn note_block(data: NoteBlockData) -> Self {
        Self {
            material: Material::NoteBlock,
            note_block: Some(data),
            container: PersistentDataContainer::new(),
        }
    }

    pub fn to_bytes(&self) -> ContentResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ContentError::SerializationError {
            context: "block state".to_string(),
            error: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> ContentResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Stamped for BlockState {
    fn container(&self) -> Option<&PersistentDataContainer> {
        Some(&self.container)
    }

    fn container_mut(&mut self) -> &mut PersistentDataContainer {
        &mut self.container
    }
}
