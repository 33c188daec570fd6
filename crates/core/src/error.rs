//! Error types for the presentation runtime.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a presentation.
///
/// Out-of-range navigation is deliberately not represented here: the
/// controller treats it as a silent no-op, so only genuinely exceptional
/// conditions carry an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A content key that no slide in the deck declares.
    #[error("Unknown content key: {0}")]
    UnknownContentKey(String),

    /// A slide index outside the deck.
    #[error("Slide index {index} is out of range (deck has {count} slides)")]
    SlideOutOfRange { index: usize, count: usize },

    /// The host has no fullscreen capability at all.
    #[error("Fullscreen is not available in this host")]
    FullscreenUnavailable,

    /// The host refused or failed a fullscreen request.
    #[error("Fullscreen request failed: {0}")]
    FullscreenDenied(String),
}
