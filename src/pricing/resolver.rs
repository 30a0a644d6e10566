//! Premium resolution
//!
//! Resolves (tier, age, frequency) to a priced premium with its breakdown.
//! Amounts stay at full f64 precision throughout; rounding to 2 decimals
//! happens only in the display helpers, never inside the computation.

use crate::applicant::{Applicant, CoverageTier, PaymentFrequency};
use crate::rates::{AgeBand, RateTable};
use serde::{Deserialize, Serialize};

/// Multiplier applied to the annual base before halving for semi-annual billing
pub const SEMI_ANNUAL_LOADING: f64 = 1.02;

/// Period one premium payment covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingPeriod {
    Year,
    SixMonths,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Year => "year",
            BillingPeriod::SixMonths => "6 months",
        }
    }
}

/// A resolved premium with its display breakdown
///
/// For semi-annual billing `base_amount` is the back-calculated pre-loading
/// half-base (`final_amount / 1.02`); it exists for the breakdown display
/// and is never an input to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumResult {
    /// Pre-loading premium for the billing period
    pub base_amount: f64,
    /// Semi-annual loading; zero for annual billing
    pub loading_amount: f64,
    /// Amount actually billed per period
    pub final_amount: f64,
    /// Period the amount covers
    pub billing_period: BillingPeriod,
}

impl PremiumResult {
    /// Billed amount fixed to 2 decimals for rendering
    pub fn final_display(&self) -> String {
        format!("{:.2}", self.final_amount)
    }

    /// Base amount fixed to 2 decimals for rendering
    pub fn base_display(&self) -> String {
        format!("{:.2}", self.base_amount)
    }

    /// Loading amount fixed to 2 decimals for rendering
    pub fn loading_display(&self) -> String {
        format!("{:.2}", self.loading_amount)
    }
}

/// Resolves premiums against a rate table
#[derive(Debug, Clone)]
pub struct PremiumResolver {
    rates: RateTable,
}

impl PremiumResolver {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Resolver over the built-in First Care 200 schedule
    pub fn first_care_200() -> Self {
        Self::new(RateTable::first_care_200())
    }

    /// Resolve the premium for a tier, age, and payment frequency.
    ///
    /// Pure: identical inputs produce bit-identical results.
    pub fn resolve(
        &self,
        tier: CoverageTier,
        age: u8,
        frequency: PaymentFrequency,
    ) -> PremiumResult {
        let band = AgeBand::for_age(age);
        let base = self.rates.base_annual(tier, band);

        match frequency {
            PaymentFrequency::Annual => PremiumResult {
                base_amount: base,
                loading_amount: 0.0,
                final_amount: base,
                billing_period: BillingPeriod::Year,
            },
            PaymentFrequency::SemiAnnual => {
                let final_amount = base * SEMI_ANNUAL_LOADING / 2.0;
                // Display-only back-calculation recovering the half-base
                let base_amount = final_amount / SEMI_ANNUAL_LOADING;
                PremiumResult {
                    base_amount,
                    loading_amount: final_amount - base_amount,
                    final_amount,
                    billing_period: BillingPeriod::SixMonths,
                }
            }
        }
    }

    /// Resolve directly from an applicant record
    pub fn resolve_for(&self, applicant: &Applicant) -> PremiumResult {
        self.resolve(
            applicant.coverage_tier,
            applicant.age,
            applicant.payment_frequency,
        )
    }

    /// The underlying rate table
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
