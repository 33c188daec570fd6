//! Presenter notes, one free-text note per slide.

use crate::deck::SLIDE_COUNT;

/// Default note for each slide index. Every index is present from the
/// start; the store never grows or shrinks.
static DEFAULT_NOTES: [&str; SLIDE_COUNT] = [
    "Welcome the audience. Introduce yourself and the Epicosity team. Set the stage for a strategic conversation about growth and security.",
    "Pause for effect. This isn't fear-mongering—it's a wake-up call. Let the numbers sink in before moving forward.",
    "Acknowledge Century's legacy. This slide builds emotional connection before diving into solutions.",
    "Celebrate their expansion. Make them feel proud of their growth trajectory.",
    "Rhetorical question. Let it hang for a moment. This is the pivot point of the presentation.",
    "Soften the pitch. We're partners, not vendors.",
    "Side-by-side comparison creates clear contrast. Emphasize the architectural difference.",
    "Transition slide. Brief pause before diving into the core problem.",
    "Identify the pain point they're experiencing daily. Marketing teams relate to this immediately.",
    "The solution reveal. Energy should pick up here.",
    "Explain the bridge metaphor. Keep it simple and tangible.",
    "Show you understand their specific technical environment.",
    "Walk through the data flow visually. Point at each stage.",
    "Transition to security focus.",
    "The table is powerful—let them read it. The compliance badges add credibility.",
    "Transition to growth possibilities.",
    "Concrete campaign examples make it real. Reference their specific markets.",
    "More concrete examples focused on prospect acquisition.",
    "Social proof. Let the quote speak for itself.",
    "ROI transition—this is what leadership cares about.",
    "Explain attribution clearly. The dashboard stats should impress.",
    "Implementation overview transition.",
    "Walk through each phase. Emphasize quick wins.",
    "Stakeholder-specific value proposition.",
    "Summary of benefits by role.",
    "Why Epicosity transition.",
    "Credibility slide. Introduce team members briefly.",
    "Build anticipation for the demo.",
    "LIVE DEMO—have dev site ready. Show specific features.",
    "Investment transition.",
    "INTERACTIVE PRICING—let them play with the calculator. Be ready to answer questions.",
    "Next steps transition.",
    "Clear action items. Make it easy to say yes.",
    "Call to action.",
    "Thank them. Open for questions.",
];

/// Fixed-size store of per-slide presenter notes.
///
/// Notes are written through directly (every keystroke in the notes
/// panel updates the store); there is no save step and no history.
#[derive(Debug, Clone)]
pub struct PresenterNotes {
    notes: Vec<String>,
}

impl PresenterNotes {
    /// Notes pre-populated with the default per-slide text.
    pub fn with_defaults() -> Self {
        Self {
            notes: DEFAULT_NOTES.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.notes.get(index).map(String::as_str)
    }

    /// Overwrite the note for a slide. Out-of-range indices are ignored;
    /// the store's key set is fixed for the session.
    pub fn set(&mut self, index: usize, text: impl Into<String>) {
        if let Some(note) = self.notes.get_mut(index) {
            *note = text.into();
        } else {
            log::debug!("ignoring note for out-of-range slide {}", index);
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for PresenterNotes {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slides_have_default_notes() {
        let notes = PresenterNotes::with_defaults();

        assert_eq!(notes.len(), SLIDE_COUNT);
        for i in 0..SLIDE_COUNT {
            assert!(!notes.get(i).unwrap().is_empty());
        }
    }

    #[test]
    fn test_set_overwrites_single_slide() {
        let mut notes = PresenterNotes::with_defaults();

        notes.set(3, "Pause here");

        assert_eq!(notes.get(3), Some("Pause here"));
        assert_eq!(notes.get(2), Some(DEFAULT_NOTES[2]));
        assert_eq!(notes.get(4), Some(DEFAULT_NOTES[4]));
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        let mut notes = PresenterNotes::with_defaults();

        notes.set(35, "nope");

        assert_eq!(notes.len(), SLIDE_COUNT);
        assert_eq!(notes.get(35), None);
    }
}
