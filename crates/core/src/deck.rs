//! The fixed 35-slide sales deck.
//!
//! The deck is a literal table: it is built once at startup, lives for the
//! session, and is never mutated. User edits live in
//! [`crate::content::ContentOverrides`], not here.

use crate::types::{Field, SlideDescriptor, SlideKind};

/// Number of slides in the deck.
pub const SLIDE_COUNT: usize = 35;

const fn f(key: &'static str, default: &'static str) -> Field {
    Field { key, default }
}

const fn slide(index: usize, kind: SlideKind, fields: &'static [Field]) -> SlideDescriptor {
    SlideDescriptor { index, kind, fields }
}

static SLIDES: [SlideDescriptor; SLIDE_COUNT] = [
    slide(
        0,
        SlideKind::Title,
        &[
            f("title-main", "Core Connected Marketing"),
            f("title-sub", "The Growth Engine for Century Bank's Next Chapter."),
            f(
                "title-contact",
                "300 N MAIN AVE. SIOUX FALLS, SD 57104 | 605.275.3742 | EPICOSITY.COM",
            ),
        ],
    ),
    slide(
        1,
        SlideKind::Content,
        &[
            f("breach-stat", "823,548 customers exposed."),
            f("breach-scope", "80+ banks and credit unions."),
            f("breach-data", "SSNs. Account numbers. Dates of birth."),
            f("breach-lesson", "One vendor. One breach. One lesson."),
            f("breach-takeaway", "This is about architecture."),
        ],
    ),
    slide(
        2,
        SlideKind::Title,
        &[
            f("legacy-title", "The legacy."),
            f("years", "137"),
            f("legacy-trust", "You survived by being the most trusted."),
            f("legacy-why", "That trust is why this decision matters."),
        ],
    ),
    slide(
        3,
        SlideKind::Content,
        &[
            f("growth-title", "Now you're growing."),
            f("growth-branches", "Six branches across New Mexico."),
            f("growth-lpo", "Loan production offices in Dallas & Houston."),
            f(
                "growth-los-alamos",
                "Los Alamos — new building at Trinity Drive, across from Ashley Pond.",
            ),
            f("growth-markets", "New markets. New customers. New expectations."),
            f("growth-moment", "This is the moment."),
        ],
    ),
    slide(
        4,
        SlideKind::Title,
        &[
            f(
                "scale-q",
                "Does the way you market today scale to where you're going tomorrow?",
            ),
            f("scale-protect", "And does it protect you while you get there?"),
        ],
    ),
    slide(
        5,
        SlideKind::Content,
        &[
            f("pitch-title", "We're not here to pitch software."),
            f(
                "pitch-body",
                "We're here to talk about what Core Connected Marketing means for Century's next chapter.",
            ),
            f(
                "pitch-decade",
                "And why this choice shapes how you grow for the next decade.",
            ),
        ],
    ),
    slide(
        6,
        SlideKind::Content,
        &[
            f("data-title", "Where your customer data lives matters."),
            f("data-old-1", "Vendor stores your customer database"),
            f("data-old-2", "SSNs, account numbers, balances all in one external system"),
            f("data-old-3", "One breach = 80+ institutions exposed"),
            f("data-old-4", "3+ months before notification"),
            f("data-new-1", "Your core remains source of truth"),
            f("data-new-2", "Only marketing-relevant data moves"),
            f("data-new-3", "One-way, read-only sync"),
            f("data-new-4", "Your data never leaves your control"),
        ],
    ),
    slide(
        7,
        SlideKind::Title,
        &[
            f("disconnect-title", "The disconnect."),
            f("disconnect-systems", "Multiple systems. One customer."),
            f("disconnect-none", "No connection."),
        ],
    ),
    slide(
        8,
        SlideKind::Content,
        &[
            f("core-title", "Your core is powerful."),
            f(
                "core-knows",
                "Your core knows everything. Every relationship. Every product. Every dollar that moves.",
            ),
            f(
                "core-marketing",
                "Your marketing doesn't – leaving customers getting the wrong message at the wrong time.",
            ),
            f("core-exists", "The data exists. It's not connected."),
        ],
    ),
    slide(
        9,
        SlideKind::Title,
        &[
            f("solution-title", "The solution."),
            f("solution-sub", "Core Connected Marketing."),
        ],
    ),
    slide(
        10,
        SlideKind::Content,
        &[
            f("what-title", "What it actually is."),
            f("what-bridge", "A secure bridge between your core and HubSpot."),
            f(
                "what-trigger",
                "So every message, every ad, every email is triggered by real customer behavior.",
            ),
            f("what-guesswork", "Not guesswork."),
        ],
    ),
    slide(
        11,
        SlideKind::Content,
        &[
            f("systems-title", "We understand how your systems are built."),
            f(
                "systems-gap",
                "No account hierarchies. No loan mapping. No way to see the full customer relationship.",
            ),
            f("systems-build", "We build HubSpot to think like a core — from day one."),
            f(
                "systems-objects",
                "Banking customers. Account relationships. Core-connected deals.",
            ),
            f("systems-start", "No retrofitting. Built right from the start."),
        ],
    ),
    slide(
        12,
        SlideKind::Content,
        &[
            f("connect-title", "How it actually connects."),
            f("connect-flow", "Your Core → Secure Export → Integration Layer → HubSpot"),
            f("connect-sync", "Customer and account data syncs on a scheduled basis"),
            f("connect-fields", "Only marketing-relevant fields move over, not sensitive PII"),
            f("connect-triggers", "Changes in the core trigger updates in HubSpot automatically"),
            f(
                "connect-boundary",
                "HubSpot engagement data stays in HubSpot — doesn't write back",
            ),
            f("connect-summary", "One-way sync. Secure handoff. Clear boundaries."),
        ],
    ),
    slide(13, SlideKind::Title, &[f("security-title", "Data integrity and security.")]),
    slide(
        14,
        SlideKind::Content,
        &[
            f("compliance-title", "Secure. Compliant. Automated."),
            f(
                "compliance-moves",
                "Hashed customer IDs, product ownership flags, lifecycle dates, segment assignments",
            ),
            f(
                "compliance-stays",
                "SSNs, account balances, transaction details, sensitive PII",
            ),
            f("compliance-risk", "Old model: complete records stored externally"),
            f("compliance-badges", "CCPA | GDPR | SOC | TRUSTe"),
        ],
    ),
    slide(15, SlideKind::Title, &[f("growth-starts", "Then the real growth starts.")]),
    slide(
        16,
        SlideKind::Content,
        &[
            f("customers-title", "What becomes possible — customers."),
            f(
                "customers-lead",
                "Campaigns that run themselves — triggered by real behavior.",
            ),
            f(
                "customers-welcome",
                "Welcome Journey - Los Alamos: new account → onboarding → LANL employee triggers → cross-sell wealth at 90 days",
            ),
            f(
                "customers-cross-sell",
                "Cross-Sell - Existing Customers: checking only → detect external mortgage → home equity education → warm handoff",
            ),
            f(
                "customers-renewal",
                "Loan Renewal - Texas: loan maturing → refinance offer → Dallas LPO gets warm lead",
            ),
            f(
                "customers-anniversary",
                "137th Anniversary: multi-generational families → personalized messaging → event invite",
            ),
        ],
    ),
    slide(
        17,
        SlideKind::Content,
        &[
            f("prospects-title", "What becomes possible — Prospects."),
            f(
                "prospects-entry",
                "Los Alamos Market Entry: search \"best bank near me\" → see Century → retarget with Trinity Drive campaign",
            ),
            f(
                "prospects-lanl",
                "LANL Employee Targeting: federal employees within 15 miles → financial wellness → first-time homebuyer",
            ),
            f(
                "prospects-conquest",
                "Competitor Conquest: geofence competitor branches → serve ads highlighting 137 years of trust",
            ),
            f(
                "prospects-texas",
                "Texas Expansion Pipeline: Houston/Dallas campaigns → lead capture → nurture → handoff to LPO",
            ),
        ],
    ),
    slide(
        18,
        SlideKind::Content,
        &[
            f("story-title", "Success story: Industrial FCU"),
            f(
                "story-before",
                "\"Before working with Epicosity, our marketing team was constantly pulling lists, manually triggering campaigns, and struggling to connect our core data to HubSpot. We knew we had the data, but we couldn't act on it in real time.",
            ),
            f(
                "story-after",
                "Core Connected Marketing completely changed that. Now, our journeys are behavior-based, our lead alerts are timely, and we can finally show attribution for campaigns that drive real results.",
            ),
            f(
                "story-value",
                "It is the first time marketing, sales, and digital are working in sync, and our leadership can clearly see the value.\"",
            ),
        ],
    ),
    slide(19, SlideKind::Title, &[f("roi-title", "And yes – we can show ROI.")]),
    slide(
        20,
        SlideKind::Content,
        &[
            f("attribution-title", "Every click. Every conversion. Every dollar."),
            f(
                "attribution-funnel",
                "Ad clicks → Page visits → Form submissions → Account opened",
            ),
            f("attribution-report", "Deal attribution report"),
            f("attribution-influence", "Campaign influence on closed revenue"),
            f(
                "attribution-question",
                "For the first time, you'll be able to answer: 'What did our marketing actually produce?'",
            ),
            f("attribution-deal-value", "$50,484.32 Associated Deal Value"),
            f("attribution-interactions", "5 Avg Interactions Per Deal"),
        ],
    ),
    slide(21, SlideKind::Title, &[f("how-title", "How we get there.")]),
    slide(
        22,
        SlideKind::Content,
        &[
            f("timeline-title", "Implementation Timeline"),
            f(
                "timeline-discovery",
                "Discovery: executive priorities, core data mapping (Weeks 1-3)",
            ),
            f(
                "timeline-build",
                "HubSpot Build: platform setup, custom objects, workflows (Weeks 4-8)",
            ),
            f(
                "timeline-integration",
                "Integration: core connection, sync testing (Weeks 6-10)",
            ),
            f(
                "timeline-campaigns",
                "Campaigns: welcome journeys, cross-sell, acquisition (Weeks 9-12)",
            ),
            f("timeline-launch", "Launch: go live, monitor, refine (Week 13+)"),
        ],
    ),
    slide(23, SlideKind::Title, &[f("matters-title", "Why this matters to each of you.")]),
    slide(
        24,
        SlideKind::Content,
        &[
            f("means-title", "What this means for Century Bank."),
            f("means-revenue", "Marketing becomes a revenue engine. Every dollar traceable."),
            f("means-scale", "No more manual list pulls. A system that scales."),
            f("means-secure", "Secure. Compliant. Integrated."),
            f("means-audit", "Audit-ready architecture. No SSN exposure."),
            f("means-tools", "Tools to execute strategy with proof."),
        ],
    ),
    slide(25, SlideKind::Title, &[f("why-title", "Why Epicosity.")]),
    slide(
        26,
        SlideKind::Content,
        &[
            f("team-title", "We're not integrators who dabble in marketing."),
            f("team-marketers", "We're marketers who learned how to integrate."),
            f(
                "team-experience",
                "20+ years in financial institutions. We know compliance, board questions, and the pressure to prove ROI.",
            ),
            f("team-world", "We're not learning your world. We live in it."),
        ],
    ),
    slide(
        27,
        SlideKind::Title,
        &[
            f("built-title", "We didn't prepare a pitch."),
            f("built-sub", "We built something."),
        ],
    ),
    slide(
        28,
        SlideKind::Content,
        &[
            f("demo-title", "Dev site walkthrough."),
            f("demo-label", "[Live Demo]"),
            f("demo-hint", "Switch to browser for live demonstration"),
        ],
    ),
    slide(29, SlideKind::Title, &[f("investment-title", "The investment.")]),
    slide(
        30,
        SlideKind::Custom,
        &[
            f("pricing-title", "Investment Overview"),
            f("pricing-flow", "Your Core → Prismatic → HubSpot"),
            f("pricing-note", "One-way sync • Read-only • No SSNs transferred"),
        ],
    ),
    slide(31, SlideKind::Title, &[f("next-title", "Next steps.")]),
    slide(
        32,
        SlideKind::Content,
        &[
            f("steps-title", "Next steps."),
            f(
                "steps-alignment",
                "Executive Alignment Session: lock in growth priorities and success metrics for 2026.",
            ),
            f(
                "steps-discovery",
                "Core Integration Discovery: map the data flow between your systems. Define triggers and segments.",
            ),
            f(
                "steps-build",
                "HubSpot Build-Out: custom objects, workflows, dashboards — configured for Century.",
            ),
            f("steps-launch", "Launch: Q2 activation. Measurable results. Momentum."),
        ],
    ),
    slide(33, SlideKind::Title, &[f("build-next-title", "Let's build what's next.")]),
    slide(
        34,
        SlideKind::Title,
        &[
            f("thanks-title", "Thank You."),
            f("thanks-tagline", "We Champion Growth"),
            f(
                "thanks-contact",
                "300 N MAIN AVE. SIOUX FALLS, SD 57104 | 605.275.3742 | EPICOSITY.COM",
            ),
        ],
    ),
];

/// The ordered, immutable slide deck.
#[derive(Debug, Clone, Copy)]
pub struct Deck {
    slides: &'static [SlideDescriptor],
}

impl Deck {
    /// The standard 35-slide deck.
    pub fn standard() -> Self {
        Self { slides: &SLIDES }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the last slide.
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn slide(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }

    /// Default text for a content key, searching the whole deck.
    ///
    /// Keys are unique deck-wide, so the first match is the only one.
    pub fn default_content(&self, key: &str) -> Option<&'static str> {
        self.slides.iter().find_map(|s| s.field(key))
    }

    /// Whether any slide declares this content key.
    pub fn has_key(&self, key: &str) -> bool {
        self.default_content(key).is_some()
    }
}
