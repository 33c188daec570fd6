//! WASM bindings for the presentation controller.
//!
//! This crate exposes the controller to the browser front-end. The page
//! owns the render loop and the DOM: it forwards `KeyboardEvent.key`
//! strings and `performance.now()` timestamps here, calls
//! `preventDefault` when `handle_key` reports the event consumed, and
//! supplies the fullscreen capability as a pair of JS callbacks. The
//! page's `fullscreenchange` listener feeds the authoritative flag back
//! through `notify_fullscreen_change`.

use js_sys::Function;
use pitch_core::{
    BillingPeriod, Controller, Error, Fullscreen, Key, PlatformCount, Result as CoreResult,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Fullscreen capability backed by JS callbacks installed from the page.
#[derive(Default)]
struct JsFullscreen {
    request: Option<Function>,
    exit: Option<Function>,
}

fn call_hook(hook: Option<&Function>) -> CoreResult<()> {
    let Some(hook) = hook else {
        return Err(Error::FullscreenUnavailable);
    };
    hook.call0(&JsValue::NULL)
        .map(|_| ())
        .map_err(|e| Error::FullscreenDenied(format!("{:?}", e)))
}

impl Fullscreen for JsFullscreen {
    fn request_fullscreen(&mut self) -> CoreResult<()> {
        call_hook(self.request.as_ref())
    }

    fn exit_fullscreen(&mut self) -> CoreResult<()> {
        call_hook(self.exit.as_ref())
    }
}

/// Map a DOM `KeyboardEvent.key` value to a deck key.
fn key_from_dom(key: &str) -> Option<Key> {
    match key {
        "ArrowRight" => Some(Key::ArrowRight),
        "ArrowLeft" => Some(Key::ArrowLeft),
        " " | "Spacebar" => Some(Key::Space),
        "Enter" => Some(Key::Enter),
        "Backspace" => Some(Key::Backspace),
        "Home" => Some(Key::Home),
        "End" => Some(Key::End),
        "Escape" | "Esc" => Some(Key::Escape),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Char(c)),
                _ => None,
            }
        }
    }
}

/// The presentation session, owned by the page for one tab lifetime.
#[wasm_bindgen]
pub struct PresentationHandle {
    controller: Controller,
    fullscreen: JsFullscreen,
}

#[wasm_bindgen]
impl PresentationHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            controller: Controller::default(),
            fullscreen: JsFullscreen::default(),
        }
    }

    // --- navigation -------------------------------------------------

    /// Request navigation; timestamps come from `performance.now()`.
    pub fn navigate_to(&mut self, target: usize, now_ms: f64) {
        self.controller.navigate_to(target, now_ms as u64);
    }

    pub fn advance(&mut self, now_ms: f64) {
        self.controller.advance(now_ms as u64);
    }

    pub fn retreat(&mut self, now_ms: f64) {
        self.controller.retreat(now_ms as u64);
    }

    /// Commit a pending transition once its window has elapsed. Call
    /// from `requestAnimationFrame` or a timeout.
    pub fn poll(&mut self, now_ms: f64) {
        self.controller.poll(now_ms as u64);
    }

    pub fn current_slide(&self) -> usize {
        self.controller.current_slide()
    }

    pub fn slide_count(&self) -> usize {
        self.controller.deck().len()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    /// Apply a `KeyboardEvent.key` value. Returns true when the event
    /// was consumed and the page should call `preventDefault`.
    pub fn handle_key(&mut self, key: &str, now_ms: f64) -> bool {
        let Some(key) = key_from_dom(key) else {
            return false;
        };
        self.controller
            .handle_key(key, &mut self.fullscreen, now_ms as u64)
            .is_consumed()
    }

    // --- editing ----------------------------------------------------

    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.controller.set_edit_mode(enabled);
    }

    pub fn edit_mode(&self) -> bool {
        self.controller.edit_mode()
    }

    pub fn begin_edit(&mut self, key: &str) -> Result<(), JsValue> {
        self.controller
            .begin_edit(key)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn cancel_edit(&mut self) {
        self.controller.cancel_edit();
    }

    pub fn commit_edit(&mut self, key: &str, text: &str) {
        self.controller.commit_edit(key, text);
    }

    /// Override text if saved, otherwise the slide's default copy.
    pub fn resolve_content(&self, key: &str) -> Option<String> {
        self.controller.resolve_content(key).map(str::to_string)
    }

    // --- presenter notes --------------------------------------------

    pub fn set_note(&mut self, index: usize, text: &str) {
        self.controller.set_note(index, text);
    }

    pub fn note(&self, index: usize) -> Option<String> {
        self.controller.note(index).map(str::to_string)
    }

    pub fn toggle_notes(&mut self) {
        self.controller.toggle_notes();
    }

    pub fn notes_visible(&self) -> bool {
        self.controller.notes_visible()
    }

    // --- fullscreen -------------------------------------------------

    /// Install the page's fullscreen callbacks (typically wrapping
    /// `element.requestFullscreen()` and `document.exitFullscreen()`).
    pub fn set_fullscreen_hooks(&mut self, request: Function, exit: Function) {
        self.fullscreen.request = Some(request);
        self.fullscreen.exit = Some(exit);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.controller.toggle_fullscreen(&mut self.fullscreen);
    }

    /// Forward the document's `fullscreenchange` event. This is the only
    /// thing that moves the mirrored flag, so browser-chrome exits are
    /// picked up too.
    pub fn notify_fullscreen_change(&mut self, active: bool) {
        self.controller.sync_fullscreen(active);
    }

    pub fn fullscreen(&self) -> bool {
        self.controller.fullscreen()
    }

    // --- pricing ----------------------------------------------------

    /// Platform count must be 1 or 2; anything else throws.
    pub fn set_platform_count(&mut self, count: u32) -> Result<(), JsValue> {
        let count = match count {
            1 => PlatformCount::One,
            2 => PlatformCount::Two,
            n => return Err(JsValue::from_str(&format!("invalid platform count: {}", n))),
        };
        self.controller.set_platform_count(count);
        Ok(())
    }

    pub fn set_billing_annual(&mut self, annual: bool) {
        self.controller.set_billing_period(if annual {
            BillingPeriod::Annual
        } else {
            BillingPeriod::Monthly
        });
    }

    /// The derived pricing breakdown as a JS object.
    pub fn pricing(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.controller.pricing())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    // --- snapshot ---------------------------------------------------

    /// Full read-only state snapshot as a JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.controller.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl Default for PresentationHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(key_from_dom("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(key_from_dom(" "), Some(Key::Space));
        assert_eq!(key_from_dom("Enter"), Some(Key::Enter));
        assert_eq!(key_from_dom("Backspace"), Some(Key::Backspace));
        assert_eq!(key_from_dom("Escape"), Some(Key::Escape));
        assert_eq!(key_from_dom("f"), Some(Key::Char('f')));
        assert_eq!(key_from_dom("N"), Some(Key::Char('N')));
        assert_eq!(key_from_dom("Shift"), None);
        assert_eq!(key_from_dom("PageDown"), None);
    }

    #[test]
    fn test_navigation_through_handle() {
        let mut handle = PresentationHandle::new();

        handle.navigate_to(5, 0.0);
        assert!(handle.is_transitioning());
        handle.poll(150.0);

        assert_eq!(handle.current_slide(), 5);
        assert_eq!(handle.slide_count(), 35);
    }

    #[test]
    fn test_handle_key_reports_consumption() {
        let mut handle = PresentationHandle::new();

        assert!(handle.handle_key("ArrowRight", 0.0));
        assert!(!handle.handle_key("Shift", 0.0));

        handle.set_edit_mode(true);
        assert!(!handle.handle_key("ArrowRight", 0.0));
    }
}
