//! Decor Data
//!
//! Definition type for custom decor, its hitbox and placement parameters.

use crate::constants::limits::MAX_HITBOX_EDGE;
use crate::content::recipe::Recipe;
use crate::content::sound::SoundGroup;
use crate::error::{ContentError, ContentResult};
use crate::key::{Key, Namespace};
use crate::registry::{Definition, NamespaceRegistry};
use crate::representation::Material;

/// What the host fills a decor hitbox with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitBoxKind {
    /// Interaction only, walk-through
    None,
    Barrier,
    Solid,
    StructureVoid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorHitBox {
    pub kind: HitBoxKind,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl DecorHitBox {
    pub const fn new(kind: HitBoxKind, x: f64, y: f64, z: f64) -> Self {
        Self { kind, x, y, z }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.kind, HitBoxKind::Barrier | HitBoxKind::Solid)
    }

    /// Whole blocks the hitbox covers on each axis
    pub fn block_span(&self) -> (u32, u32, u32) {
        (
            self.x.ceil() as u32,
            self.y.ceil() as u32,
            self.z.ceil() as u32,
        )
    }

    fn validate(&self) -> Result<(), String> {
        for (axis, edge) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !(edge > 0.0 && edge <= MAX_HITBOX_EDGE) {
                return Err(format!(
                    "hitbox {} = {} is outside (0, {}]",
                    axis, edge, MAX_HITBOX_EDGE
                ));
            }
        }
        Ok(())
    }
}

/// Surface a decor can be placed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Floor,
    Wall,
    Ceiling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorParameter {
    /// Players can sit on it; requires a sit height
    Sittable,
    /// Can be dyed
    Paintable,
    /// Rotates through variants with a wrench
    Wrenchable,
    /// Toggles a light
    Lightable,
    /// Uses a different model per facing
    FaceTyped,
}

/// Custom decor definition
#[derive(Debug, Clone)]
pub struct DecorDefinition {
    pub key: Key,
    pub material: Material,
    pub display_name: String,
    pub custom_model_data: u32,
    pub hitbox: DecorHitBox,
    pub facings: Vec<Facing>,
    pub sound_group: SoundGroup,
    pub parameters: Vec<DecorParameter>,
    pub sit_height: Option<f64>,
    /// Per-facing models for face-typed decor
    pub face_models: Vec<(Facing, u32)>,
    pub recipes: Vec<Recipe>,
}

pub type DecorRegistry = NamespaceRegistry<DecorDefinition>;

impl DecorDefinition {
    pub fn has_parameter(&self, parameter: DecorParameter) -> bool {
        self.parameters.contains(&parameter)
    }

    pub fn can_face(&self, facing: Facing) -> bool {
        self.facings.contains(&facing)
    }

    /// Model to use when placed against `facing`
    pub fn model_for(&self, facing: Facing) -> u32 {
        self.face_models
            .iter()
            .find(|(face, _)| *face == facing)
            .map(|&(_, model)| model)
            .unwrap_or(self.custom_model_data)
    }
}

impl Definition for DecorDefinition {
    const NAMESPACE: Namespace = Namespace::Decor;

    fn key(&self) -> &Key {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn validate(&self) -> ContentResult<()> {
        let invalid = |reason: String| ContentError::InvalidDefinition {
            key: self.key.clone(),
            reason,
        };

        if self.display_name.trim().is_empty() {
            return Err(invalid("display name is empty".to_string()));
        }
        if self.material == Material::Air {
            return Err(invalid("air cannot carry a model".to_string()));
        }
        self.hitbox.validate().map_err(invalid)?;

        if self.facings.is_empty() {
            return Err(invalid("no facing declared".to_string()));
        }

        if self.has_parameter(DecorParameter::Sittable) {
            match self.sit_height {
                Some(height) if height > 0.0 => {}
                _ => return Err(invalid("sittable decor needs a positive sit height".to_string())),
            }
        }

        if let Some((facing, _)) = self
            .face_models
            .iter()
            .find(|(facing, _)| !self.can_face(*facing))
        {
            return Err(invalid(format!("model for undeclared facing {:?}", facing)));
        }
        if self.has_parameter(DecorParameter::FaceTyped) {
            if let Some(facing) = self
                .facings
                .iter()
                .find(|facing| !self.face_models.iter().any(|(face, _)| face == *facing))
            {
                return Err(invalid(format!("face-typed decor has no model for {:?}", facing)));
            }
        }

        for recipe in &self.recipes {
            recipe.validate(&self.key)?;
        }
        Ok(())
    }
}
