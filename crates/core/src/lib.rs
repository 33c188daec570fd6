//! Core domain types and the presentation state controller
//! for the sales-deck runtime.

pub mod content;
pub mod controller;
pub mod deck;
pub mod error;
pub mod fullscreen;
pub mod input;
pub mod notes;
pub mod pricing;
pub mod types;

pub use content::ContentOverrides;
pub use controller::{Controller, Snapshot, DEFAULT_TRANSITION_MS};
pub use deck::{Deck, SLIDE_COUNT};
pub use error::{Error, Result};
pub use fullscreen::{Fullscreen, NoFullscreen};
pub use input::{Key, KeyOutcome};
pub use notes::PresenterNotes;
pub use pricing::{BillingPeriod, PlatformCount, PricingBreakdown, PricingInputs};
pub use types::{Field, SlideDescriptor, SlideKind};
