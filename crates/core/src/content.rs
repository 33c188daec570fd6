//! User-edited content overrides.

use std::collections::HashMap;

/// Replacement text saved over a slide's default copy, keyed by the
/// stable content identifier.
///
/// A key is present only once an edit has been explicitly committed for
/// it; absence means "use the slide's static default." There is no
/// delete operation, so an override is never un-set for the session.
#[derive(Debug, Default, Clone)]
pub struct ContentOverrides {
    map: HashMap<String, String>,
}

impl ContentOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save an override, unconditionally replacing any prior value.
    pub fn set(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.map.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn is_overridden(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
