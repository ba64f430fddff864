use crate::content::recipe::Recipe;
use crate::error::ContentResult;
use crate::key::{Key, Namespace};
use std::fmt;

/// Registered custom content of one domain
pub trait Definition: fmt::Debug + Send + Sync + 'static {
    /// Registry this definition belongs to
    const NAMESPACE: Namespace;

    fn key(&self) -> &Key;

    fn display_name(&self) -> &str;

    fn recipes(&self) -> &[Recipe];

    /// Domain checks run once at registration
    fn validate(&self) -> ContentResult<()> {
        for recipe in self.recipes() {
            recipe.validate(self.key())?;
        }
        Ok(())
    }

    /// Reason this definition cannot coexist with an already registered one
    fn conflicts_with(&self, _other: &Self) -> Option<String> {
        None
    }
}
