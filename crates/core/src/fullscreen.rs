//! Abstract fullscreen capability.
//!
//! The controller only ever asks the host to enter or leave fullscreen;
//! the authoritative flag is fed back through
//! [`crate::controller::Controller::sync_fullscreen`] so that host-level
//! toggles (e.g. a browser-native Escape) stay in sync.

use crate::error::{Error, Result};

/// Host-provided fullscreen capability. Requests are best-effort.
pub trait Fullscreen {
    fn request_fullscreen(&mut self) -> Result<()>;
    fn exit_fullscreen(&mut self) -> Result<()>;
}

/// Host with no fullscreen support (tests, headless CLI).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFullscreen;

impl Fullscreen for NoFullscreen {
    fn request_fullscreen(&mut self) -> Result<()> {
        Err(Error::FullscreenUnavailable)
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        Err(Error::FullscreenUnavailable)
    }
}
