use super::{Material, PersistentDataContainer, Stamped};
use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};

/// Visual and persistent metadata of an item stack
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMeta {
    pub display_name: Option<String>,
    /// Resource pack model index
    pub custom_model_data: Option<u32>,
    pub lore: Vec<String>,
    pub container: PersistentDataContainer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,
    pub amount: u32,
    pub meta: Option<ItemMeta>,
}

impl ItemStack {
    /// A single plain item with no metadata
    pub fn new(material: Material) -> Self {
        Self {
            material,
            amount: 1,
            meta: None,
        }
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    /// Metadata, created on first access
    pub fn meta_mut(&mut self) -> &mut ItemMeta {
        self.meta.get_or_insert_with(ItemMeta::default)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|meta| meta.display_name.as_deref())
    }

    pub fn custom_model_data(&self) -> Option<u32> {
        self.meta.as_ref().and_then(|meta| meta.custom_model_data)
    }

    pub fn is_empty(&self) -> bool {
        self.material == Material::Air || self.amount == 0
    }

    pub fn to_bytes(&self) -> ContentResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ContentError::SerializationError {
            context: "item stack".to_string(),
            error: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> ContentResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Stamped for ItemStack {
    fn container(&self) -> Option<&PersistentDataContainer> {
        self.meta.as_ref().map(|meta| &meta.container)
    }

    fn container_mut(&mut self) -> &mut PersistentDataContainer {
        &mut self.meta_mut().container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_stack_has_no_container() {
        let stack = ItemStack::new(Material::Paper);
        assert!(stack.container().is_none());
        assert_eq!(stack.display_name(), None);
        assert!(!stack.is_empty());
        assert!(ItemStack::new(Material::Paper).with_amount(0).is_empty());
    }

    #[test]
    fn test_container_mut_creates_meta() {
        let mut stack = ItemStack::new(Material::Paper);
        stack.container_mut();
        assert!(stack.meta().is_some());
        assert!(stack.container().is_some_and(PersistentDataContainer::is_empty));
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut stack = ItemStack::new(Material::Clock).with_amount(3);
        stack.meta_mut().display_name = Some("Dosimeter".to_string());
        stack.meta_mut().custom_model_data = Some(1);

        let bytes = stack.to_bytes().expect("Failed to serialize stack");
        let back = ItemStack::from_bytes(&bytes).expect("Failed to deserialize stack");
        assert_eq!(back, stack);

        assert!(ItemStack::from_bytes(&[0xff]).is_err());
    }
}
