//! The presentation controller: a single owned object holding all
//! session state and exposing explicit operations plus read-only
//! snapshots. No rendering technology is visible from here.
//!
//! Navigation runs through a two-state machine. A successful
//! `navigate_to` records the pending target and enters `Transitioning`;
//! the host event loop calls [`Controller::poll`] with its clock until
//! the transition window elapses, at which point the slide index commits
//! and the machine returns to `Idle`. While `Transitioning`, further
//! navigation requests are dropped (not queued), which guarantees
//! at most one slide-index mutation in flight. All other operations,
//! edits included, keep applying instantly during the window.

use serde::Serialize;

use crate::content::ContentOverrides;
use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::fullscreen::Fullscreen;
use crate::input::{action_for, Action, Key, KeyOutcome};
use crate::notes::PresenterNotes;
use crate::pricing::{BillingPeriod, PlatformCount, PricingBreakdown, PricingInputs};

/// Length of the visual slide transition, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning { target: usize, deadline_ms: u64 },
}

/// Read-only view of the controller for a rendering surface.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub current_slide: usize,
    pub slide_count: usize,
    /// Fraction of the deck completed, for the progress bar.
    pub progress: f64,
    pub transitioning: bool,
    pub edit_mode: bool,
    /// The field currently open for inline editing, if any.
    pub editing_key: Option<String>,
    pub fullscreen: bool,
    pub notes_visible: bool,
    pub pricing: PricingBreakdown,
}

/// Owns all presentation state for one session.
pub struct Controller {
    deck: Deck,
    current_slide: usize,
    phase: Phase,
    transition_ms: u64,
    edit_mode: bool,
    editing_key: Option<String>,
    overrides: ContentOverrides,
    notes: PresenterNotes,
    fullscreen: bool,
    notes_visible: bool,
    pricing: PricingInputs,
}

impl Controller {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            current_slide: 0,
            phase: Phase::Idle,
            transition_ms: DEFAULT_TRANSITION_MS,
            edit_mode: false,
            editing_key: None,
            overrides: ContentOverrides::new(),
            notes: PresenterNotes::with_defaults(),
            fullscreen: false,
            notes_visible: false,
            pricing: PricingInputs::default(),
        }
    }

    /// Override the transition window length.
    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Request navigation to `target`.
    ///
    /// Silently ignored when `target` is outside the deck or a
    /// transition is already in flight. On success the slide does not
    /// change yet; it commits on the `poll` call that ends the window.
    pub fn navigate_to(&mut self, target: usize, now_ms: u64) {
        if target >= self.deck.len() {
            log::debug!("navigation to out-of-range slide {} ignored", target);
            return;
        }
        if let Phase::Transitioning { .. } = self.phase {
            log::debug!("navigation to slide {} dropped mid-transition", target);
            return;
        }
        self.phase = Phase::Transitioning {
            target,
            deadline_ms: now_ms + self.transition_ms,
        };
    }

    /// Commit a pending transition once its window has elapsed.
    /// Call from the host event loop; a no-op while `Idle` or before
    /// the deadline.
    pub fn poll(&mut self, now_ms: u64) {
        if let Phase::Transitioning { target, deadline_ms } = self.phase {
            if now_ms >= deadline_ms {
                self.current_slide = target;
                self.phase = Phase::Idle;
            }
        }
    }

    /// Move to the next slide; no wraparound past the last.
    pub fn advance(&mut self, now_ms: u64) {
        self.navigate_to(self.current_slide + 1, now_ms);
    }

    /// Move to the previous slide; no wraparound past the first.
    pub fn retreat(&mut self, now_ms: u64) {
        let Some(target) = self.current_slide.checked_sub(1) else {
            return;
        };
        self.navigate_to(target, now_ms);
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Enable or disable edit mode. Keyboard navigation is suspended
    /// while enabled. Disabling closes any open field editor.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        if !enabled {
            self.editing_key = None;
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Open a field for inline editing. Only valid in edit mode and for
    /// keys the deck declares.
    pub fn begin_edit(&mut self, key: &str) -> Result<()> {
        if !self.deck.has_key(key) {
            return Err(Error::UnknownContentKey(key.to_string()));
        }
        if self.edit_mode {
            self.editing_key = Some(key.to_string());
        }
        Ok(())
    }

    /// Close the open field editor without saving.
    pub fn cancel_edit(&mut self) {
        self.editing_key = None;
    }

    pub fn editing_key(&self) -> Option<&str> {
        self.editing_key.as_deref()
    }

    /// Save edited text for a content key, replacing any prior override.
    /// Takes effect immediately, including mid-transition. The text is
    /// free-form and unvalidated.
    pub fn commit_edit(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        if self.editing_key.as_deref() == Some(key.as_str()) {
            self.editing_key = None;
        }
        self.overrides.set(key, text);
    }

    /// Resolved text for a content key: the saved override if one
    /// exists, otherwise the slide's static default.
    pub fn resolve_content(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .or_else(|| self.deck.default_content(key))
    }

    pub fn overrides(&self) -> &ContentOverrides {
        &self.overrides
    }

    // ------------------------------------------------------------------
    // Presenter notes
    // ------------------------------------------------------------------

    pub fn set_note(&mut self, index: usize, text: impl Into<String>) {
        self.notes.set(index, text);
    }

    pub fn note(&self, index: usize) -> Option<&str> {
        self.notes.get(index)
    }

    pub fn toggle_notes(&mut self) {
        self.notes_visible = !self.notes_visible;
    }

    pub fn set_notes_visible(&mut self, visible: bool) {
        self.notes_visible = visible;
    }

    pub fn notes_visible(&self) -> bool {
        self.notes_visible
    }

    // ------------------------------------------------------------------
    // Fullscreen
    // ------------------------------------------------------------------

    /// Ask the host to enter or leave fullscreen, based on the mirrored
    /// flag. Best-effort: a refusal is logged and the flag is left
    /// untouched, since only [`Controller::sync_fullscreen`] may move it.
    pub fn toggle_fullscreen(&mut self, host: &mut dyn Fullscreen) {
        let result = if self.fullscreen {
            host.exit_fullscreen()
        } else {
            host.request_fullscreen()
        };
        if let Err(e) = result {
            log::warn!("fullscreen toggle failed: {}", e);
        }
    }

    /// Host-reported fullscreen state change. This is the single
    /// authoritative source for the flag, so out-of-band exits (browser
    /// chrome, host Escape) are reflected too.
    pub fn sync_fullscreen(&mut self, active: bool) {
        self.fullscreen = active;
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------

    pub fn set_platform_count(&mut self, count: PlatformCount) {
        self.pricing.platform_count = count;
    }

    pub fn set_billing_period(&mut self, period: BillingPeriod) {
        self.pricing.billing_period = period;
    }

    pub fn pricing(&self) -> PricingBreakdown {
        self.pricing.breakdown()
    }

    // ------------------------------------------------------------------
    // Keyboard dispatch
    // ------------------------------------------------------------------

    /// Apply a key press. Returns whether the event was consumed so the
    /// embedding layer can suppress the host's default action. All keys
    /// are ignored while edit mode is active.
    pub fn handle_key(
        &mut self,
        key: Key,
        host: &mut dyn Fullscreen,
        now_ms: u64,
    ) -> KeyOutcome {
        if self.edit_mode {
            return KeyOutcome::Ignored;
        }
        let Some(action) = action_for(key) else {
            return KeyOutcome::Ignored;
        };
        match action {
            Action::Advance => self.advance(now_ms),
            Action::Retreat => self.retreat(now_ms),
            Action::GoToFirst => self.navigate_to(0, now_ms),
            Action::GoToLast => self.navigate_to(self.deck.last_index(), now_ms),
            Action::ToggleFullscreen => self.toggle_fullscreen(host),
            Action::ToggleNotes => self.toggle_notes(),
            Action::EscapeFullscreen => {
                if !self.fullscreen {
                    return KeyOutcome::Ignored;
                }
                self.toggle_fullscreen(host);
            }
        }
        KeyOutcome::Consumed
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Read-only view for a rendering surface.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_slide: self.current_slide,
            slide_count: self.deck.len(),
            progress: (self.current_slide + 1) as f64 / self.deck.len() as f64,
            transitioning: self.is_transitioning(),
            edit_mode: self.edit_mode,
            editing_key: self.editing_key.clone(),
            fullscreen: self.fullscreen,
            notes_visible: self.notes_visible,
            pricing: self.pricing.breakdown(),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Deck::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fullscreen::NoFullscreen;

    /// Test host that accepts every fullscreen request and records calls.
    #[derive(Default)]
    struct RecordingHost {
        requests: usize,
        exits: usize,
    }

    impl Fullscreen for RecordingHost {
        fn request_fullscreen(&mut self) -> Result<()> {
            self.requests += 1;
            Ok(())
        }

        fn exit_fullscreen(&mut self) -> Result<()> {
            self.exits += 1;
            Ok(())
        }
    }

    fn settled(controller: &mut Controller, target: usize) {
        controller.navigate_to(target, 0);
        controller.poll(DEFAULT_TRANSITION_MS);
    }

    #[test]
    fn test_navigate_commits_after_window() {
        let mut controller = Controller::default();

        controller.navigate_to(5, 1_000);
        assert_eq!(controller.current_slide(), 0);
        assert!(controller.is_transitioning());

        // Before the deadline nothing commits.
        controller.poll(1_100);
        assert_eq!(controller.current_slide(), 0);

        controller.poll(1_150);
        assert_eq!(controller.current_slide(), 5);
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let mut controller = Controller::default();
        settled(&mut controller, 7);

        controller.navigate_to(35, 0);
        controller.poll(u64::MAX);

        assert_eq!(controller.current_slide(), 7);
    }

    #[test]
    fn test_navigation_during_transition_is_dropped() {
        let mut controller = Controller::default();

        controller.navigate_to(5, 0);
        controller.navigate_to(10, 10);
        controller.poll(u64::MAX);

        assert_eq!(controller.current_slide(), 5);
    }

    #[test]
    fn test_no_wraparound_at_deck_edges() {
        let mut controller = Controller::default();

        controller.retreat(0);
        assert!(!controller.is_transitioning());
        assert_eq!(controller.current_slide(), 0);

        settled(&mut controller, 34);
        controller.advance(0);
        assert!(!controller.is_transitioning());
        controller.poll(u64::MAX);
        assert_eq!(controller.current_slide(), 34);
    }

    #[test]
    fn test_edit_commit_applies_mid_transition() {
        let mut controller = Controller::default();

        controller.navigate_to(3, 0);
        controller.commit_edit("title-main", "Foo");

        assert_eq!(controller.resolve_content("title-main"), Some("Foo"));
        assert!(controller.is_transitioning());
    }

    #[test]
    fn test_resolve_content_falls_back_to_default() {
        let mut controller = Controller::default();

        controller.commit_edit("title-main", "Foo");

        assert_eq!(controller.resolve_content("title-main"), Some("Foo"));
        assert_eq!(
            controller.resolve_content("title-sub"),
            Some("The Growth Engine for Century Bank's Next Chapter.")
        );
        assert_eq!(controller.resolve_content("no-such-key"), None);
    }

    #[test]
    fn test_begin_edit_requires_known_key() {
        let mut controller = Controller::default();
        controller.set_edit_mode(true);

        controller.begin_edit("title-main").unwrap();
        assert_eq!(controller.editing_key(), Some("title-main"));

        assert!(controller.begin_edit("bogus").is_err());
    }

    #[test]
    fn test_disabling_edit_mode_closes_open_editor() {
        let mut controller = Controller::default();
        controller.set_edit_mode(true);
        controller.begin_edit("years").unwrap();

        controller.set_edit_mode(false);

        assert_eq!(controller.editing_key(), None);
    }

    #[test]
    fn test_commit_edit_closes_matching_editor() {
        let mut controller = Controller::default();
        controller.set_edit_mode(true);
        controller.begin_edit("years").unwrap();

        controller.commit_edit("years", "138");

        assert_eq!(controller.editing_key(), None);
        assert_eq!(controller.resolve_content("years"), Some("138"));
    }

    #[test]
    fn test_set_note() {
        let mut controller = Controller::default();

        controller.set_note(3, "Pause here");

        assert_eq!(controller.note(3), Some("Pause here"));
        assert!(controller.note(2).unwrap().starts_with("Acknowledge"));
    }

    #[test]
    fn test_keyboard_advances_when_not_editing() {
        let mut controller = Controller::default();
        let mut host = NoFullscreen;

        let outcome = controller.handle_key(Key::ArrowRight, &mut host, 0);
        controller.poll(u64::MAX);

        assert!(outcome.is_consumed());
        assert_eq!(controller.current_slide(), 1);
    }

    #[test]
    fn test_keyboard_suspended_in_edit_mode() {
        let mut controller = Controller::default();
        let mut host = NoFullscreen;
        controller.set_edit_mode(true);

        let outcome = controller.handle_key(Key::ArrowRight, &mut host, 0);
        controller.poll(u64::MAX);

        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(controller.current_slide(), 0);
    }

    #[test]
    fn test_home_and_end_keys() {
        let mut controller = Controller::default();
        let mut host = NoFullscreen;
        settled(&mut controller, 10);

        let _ = controller.handle_key(Key::End, &mut host, 0);
        controller.poll(u64::MAX);
        assert_eq!(controller.current_slide(), 34);

        let _ = controller.handle_key(Key::Home, &mut host, 0);
        controller.poll(u64::MAX);
        assert_eq!(controller.current_slide(), 0);
    }

    #[test]
    fn test_fullscreen_flag_moves_only_on_sync() {
        let mut controller = Controller::default();
        let mut host = RecordingHost::default();

        controller.toggle_fullscreen(&mut host);
        assert_eq!(host.requests, 1);
        assert!(!controller.fullscreen());

        controller.sync_fullscreen(true);
        assert!(controller.fullscreen());

        // Out-of-band exit (browser chrome) reverts the flag without
        // the controller ever calling exit_fullscreen.
        controller.sync_fullscreen(false);
        assert!(!controller.fullscreen());
        assert_eq!(host.exits, 0);
    }

    #[test]
    fn test_denied_fullscreen_leaves_flag_false() {
        let mut controller = Controller::default();
        let mut host = NoFullscreen;

        controller.toggle_fullscreen(&mut host);

        assert!(!controller.fullscreen());
    }

    #[test]
    fn test_escape_only_acts_in_fullscreen() {
        let mut controller = Controller::default();
        let mut host = RecordingHost::default();

        assert_eq!(
            controller.handle_key(Key::Escape, &mut host, 0),
            KeyOutcome::Ignored
        );
        assert_eq!(host.exits, 0);

        controller.sync_fullscreen(true);
        let outcome = controller.handle_key(Key::Escape, &mut host, 0);
        assert!(outcome.is_consumed());
        assert_eq!(host.exits, 1);
    }

    #[test]
    fn test_notes_toggle_key() {
        let mut controller = Controller::default();
        let mut host = NoFullscreen;

        let _ = controller.handle_key(Key::Char('n'), &mut host, 0);
        assert!(controller.notes_visible());
        let _ = controller.handle_key(Key::Char('N'), &mut host, 0);
        assert!(!controller.notes_visible());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut controller = Controller::default();
        settled(&mut controller, 17);
        controller.set_platform_count(PlatformCount::Two);
        controller.toggle_notes();

        let snapshot = controller.snapshot();

        assert_eq!(snapshot.current_slide, 17);
        assert_eq!(snapshot.slide_count, 35);
        assert!(snapshot.notes_visible);
        assert_eq!(snapshot.pricing.integration_cost, 42_500);
        assert_eq!(snapshot.pricing.total_year1, 42_500 + 99_840);
    }

    #[test]
    fn test_custom_transition_window() {
        let mut controller = Controller::default().with_transition_ms(1_000);

        controller.navigate_to(2, 0);
        controller.poll(999);
        assert_eq!(controller.current_slide(), 0);
        controller.poll(1_000);
        assert_eq!(controller.current_slide(), 2);
    }
}
