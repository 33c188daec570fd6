//! The interactive investment calculator on the pricing slide.
//!
//! Everything here is a pure function of the two inputs; values are
//! recomputed on every read and never cached.

use serde::Serialize;

/// Annual cost of the Prismatic integration platform, in dollars.
pub const PRISMATIC_ANNUAL: u32 = 12_000;
/// Annual cost of ongoing Epicosity support, in dollars.
pub const SUPPORT_ANNUAL: u32 = 28_800;
/// Annual cost of HubSpot Marketing Hub Enterprise, in dollars.
pub const HUBSPOT_ANNUAL: u32 = 59_040;

/// How many core platforms the integration connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformCount {
    One,
    Two,
}

impl PlatformCount {
    /// One-time integration cost for this platform count, in dollars.
    /// Never divided into monthly installments.
    pub fn integration_cost(self) -> u32 {
        match self {
            Self::One => 27_500,
            Self::Two => 42_500,
        }
    }
}

/// Whether ongoing costs display as annual or monthly figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BillingPeriod {
    Monthly,
    Annual,
}

/// The two calculator inputs. Defaults match the deck's initial view:
/// one platform, annual billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingInputs {
    pub platform_count: PlatformCount,
    pub billing_period: BillingPeriod,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            platform_count: PlatformCount::One,
            billing_period: BillingPeriod::Annual,
        }
    }
}

impl PricingInputs {
    /// Compute the full derived breakdown for the current inputs.
    pub fn breakdown(&self) -> PricingBreakdown {
        let integration_cost = self.platform_count.integration_cost();
        let total_ongoing_annual = PRISMATIC_ANNUAL + SUPPORT_ANNUAL + HUBSPOT_ANNUAL;

        let line_items = vec![
            LineItem::new("HubSpot Marketing Hub Enterprise", HUBSPOT_ANNUAL, self.billing_period),
            LineItem::new("Prismatic Integration Platform", PRISMATIC_ANNUAL, self.billing_period),
            LineItem::new("Epicosity Ongoing Support", SUPPORT_ANNUAL, self.billing_period),
        ];

        PricingBreakdown {
            billing_period: self.billing_period,
            integration_cost,
            line_items,
            total_ongoing_annual,
            display_ongoing: display_amount(total_ongoing_annual, self.billing_period),
            total_year1: integration_cost + total_ongoing_annual,
        }
    }
}

/// One ongoing-cost row on the investment slide.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    pub name: &'static str,
    /// Annual amount in dollars.
    pub annual: u32,
    /// Amount as displayed for the selected billing period.
    pub display: u32,
}

impl LineItem {
    fn new(name: &'static str, annual: u32, period: BillingPeriod) -> Self {
        Self {
            name,
            annual,
            display: display_amount(annual, period),
        }
    }
}

/// Fully derived pricing figures, all in dollars.
#[derive(Debug, Clone, Serialize)]
pub struct PricingBreakdown {
    pub billing_period: BillingPeriod,
    /// One-time integration cost.
    pub integration_cost: u32,
    /// Ongoing costs in display order.
    pub line_items: Vec<LineItem>,
    pub total_ongoing_annual: u32,
    /// Ongoing total as displayed for the selected billing period.
    pub display_ongoing: u32,
    /// One-time cost plus twelve months of all ongoing costs.
    pub total_year1: u32,
}

/// Monthly figure for an annual amount, rounded half-up.
///
/// The deck's current amounts all divide evenly by 12; the half-up rule
/// is the documented policy for any future amount that does not.
pub fn monthly_of(annual: u32) -> u32 {
    (annual + 6) / 12
}

fn display_amount(annual: u32, period: BillingPeriod) -> u32 {
    match period {
        BillingPeriod::Annual => annual,
        BillingPeriod::Monthly => monthly_of(annual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_cost_by_platform_count() {
        assert_eq!(PlatformCount::One.integration_cost(), 27_500);
        assert_eq!(PlatformCount::Two.integration_cost(), 42_500);
    }

    #[test]
    fn test_total_ongoing_is_constant() {
        for platform_count in [PlatformCount::One, PlatformCount::Two] {
            let inputs = PricingInputs {
                platform_count,
                billing_period: BillingPeriod::Annual,
            };
            assert_eq!(inputs.breakdown().total_ongoing_annual, 99_840);
        }
    }

    #[test]
    fn test_year1_total() {
        let inputs = PricingInputs::default();
        assert_eq!(inputs.breakdown().total_year1, 27_500 + 99_840);

        let inputs = PricingInputs {
            platform_count: PlatformCount::Two,
            billing_period: BillingPeriod::Annual,
        };
        assert_eq!(inputs.breakdown().total_year1, 42_500 + 99_840);
    }

    #[test]
    fn test_monthly_display() {
        let inputs = PricingInputs {
            platform_count: PlatformCount::One,
            billing_period: BillingPeriod::Monthly,
        };
        let breakdown = inputs.breakdown();

        assert_eq!(breakdown.display_ongoing, 8_320);
        assert_eq!(breakdown.line_items[0].display, 4_920); // HubSpot
        assert_eq!(breakdown.line_items[1].display, 1_000); // Prismatic
        assert_eq!(breakdown.line_items[2].display, 2_400); // Support

        // One-time cost is never divided by 12.
        assert_eq!(breakdown.integration_cost, 27_500);
    }

    #[test]
    fn test_billing_period_does_not_change_annual_figures() {
        let annual = PricingInputs::default().breakdown();
        let monthly = PricingInputs {
            billing_period: BillingPeriod::Monthly,
            ..PricingInputs::default()
        }
        .breakdown();

        assert_eq!(annual.total_year1, monthly.total_year1);
        assert_eq!(annual.total_ongoing_annual, monthly.total_ongoing_annual);
        assert_eq!(annual.integration_cost, monthly.integration_cost);
    }

    #[test]
    fn test_monthly_of_rounds_half_up() {
        assert_eq!(monthly_of(99_840), 8_320);
        assert_eq!(monthly_of(59_040), 4_920);
        // 100/12 = 8.33.. rounds down, 102/12 = 8.5 rounds up
        assert_eq!(monthly_of(100), 8);
        assert_eq!(monthly_of(102), 9);
    }
}
