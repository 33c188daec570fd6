//! Domain types for the slide deck.

use serde::Serialize;

/// Layout category of a slide. Affects presentation layout only,
/// never navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlideKind {
    /// Centered headline slide.
    Title,
    /// Logo, heading, and body content.
    Content,
    /// Bespoke layout (the interactive investment slide).
    Custom,
}

/// One editable content field on a slide: a stable key plus the
/// default copy shown when no override has been saved for it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Field {
    pub key: &'static str,
    pub default: &'static str,
}

/// One of the 35 fixed slides in the deck.
///
/// Descriptors are constructed once from a literal table and never
/// mutated; `index` defines navigation order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlideDescriptor {
    /// 0-based, position-stable slide index.
    pub index: usize,
    pub kind: SlideKind,
    /// Content fields in reading order.
    pub fields: &'static [Field],
}

impl SlideDescriptor {
    /// The slide's headline, by convention the first field.
    pub fn title(&self) -> Option<&'static str> {
        self.fields.first().map(|f| f.default)
    }

    /// Look up a field's default text by key.
    pub fn field(&self, key: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.default)
    }
}
