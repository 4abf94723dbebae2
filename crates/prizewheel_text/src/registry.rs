//! Named font registry
//!
//! Fonts are registered under logical names chosen by the caller (for
//! example a bold and a regular label face), independent of the family name
//! stored inside the font file. A process-wide registry is set exactly once
//! and is read-only afterwards.

use crate::font::FontFace;
use crate::{Result, TextError};
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock};

/// Global registry instance
static GLOBAL_REGISTRY: OnceLock<FontRegistry> = OnceLock::new();

/// Fonts keyed by logical name
#[derive(Debug, Default)]
pub struct FontRegistry {
    faces: FxHashMap<String, Arc<FontFace>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `data` and register it under `name`, replacing any previous face
    pub fn register(&mut self, name: impl Into<String>, data: Vec<u8>) -> Result<Arc<FontFace>> {
        let name = name.into();
        let face = Arc::new(FontFace::from_data(data)?);
        tracing::debug!(
            "Registered font '{}' (family='{}', weight={:?})",
            name,
            face.family_name(),
            face.weight()
        );
        self.faces.insert(name, Arc::clone(&face));
        Ok(face)
    }

    pub fn get(&self, name: &str) -> Option<Arc<FontFace>> {
        self.faces.get(name).cloned()
    }

    /// Like [`get`](Self::get), but a missing name is an error
    pub fn require(&self, name: &str) -> Result<Arc<FontFace>> {
        self.get(name)
            .ok_or_else(|| TextError::FontNotRegistered(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Registered logical names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.faces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Initialize the process-wide registry from `(name, data)` pairs.
///
/// Only the first successful call registers anything; later calls return the
/// existing registry and ignore their arguments. A parse failure leaves the
/// registry unset so a later call may retry.
pub fn register_global<I>(fonts: I) -> Result<&'static FontRegistry>
where
    I: IntoIterator<Item = (&'static str, &'static [u8])>,
{
    if let Some(registry) = GLOBAL_REGISTRY.get() {
        return Ok(registry);
    }

    let mut registry = FontRegistry::new();
    for (name, data) in fonts {
        registry.register(name, data.to_vec())?;
    }

    // A concurrent initializer may have won the race; either registry is equivalent
    Ok(GLOBAL_REGISTRY.get_or_init(|| registry))
}

/// The process-wide registry, if [`register_global`] has run
pub fn global_registry() -> Result<&'static FontRegistry> {
    GLOBAL_REGISTRY.get().ok_or(TextError::RegistryUninitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::tests::{BOLD_FONT, REGULAR_FONT};
    use crate::font::FontWeight;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = FontRegistry::new();
        registry.register("LabelBold", BOLD_FONT.to_vec()).unwrap();
        registry.register("LabelRegular", REGULAR_FONT.to_vec()).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), ["LabelBold", "LabelRegular"]);
        assert_eq!(registry.get("LabelBold").unwrap().weight(), FontWeight::Bold);
        assert!(matches!(
            registry.require("Missing"),
            Err(TextError::FontNotRegistered(_))
        ));
    }

    #[test]
    fn test_global_registration_is_idempotent() {
        let first = register_global([("LabelBold", BOLD_FONT)]).unwrap();
        let second = register_global([("Other", REGULAR_FONT)]).unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(second.get("Other").is_none());
        assert!(global_registry().unwrap().get("LabelBold").is_some());
    }
}
