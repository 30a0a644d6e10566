//! Quote session state
//!
//! Owns the current form input and the premium derived from it. This is the
//! single mutation surface the rendering collaborator talks to: every field
//! setter replaces the field and recomputes the premium synchronously, so a
//! reader never observes input and premium out of step.

use crate::applicant::{Applicant, Country, CoverageTier, PaymentFrequency};
use crate::benefits::{self, BenefitCategory};
use crate::eligibility;
use crate::network;
use crate::pricing::resolver::{PremiumResolver, PremiumResult};

/// Live quote state: current input plus the last-computed premium
#[derive(Debug, Clone)]
pub struct QuoteSession {
    resolver: PremiumResolver,
    input: Applicant,
    premium: PremiumResult,
}

impl QuoteSession {
    /// Start a session from an applicant record
    pub fn new(resolver: PremiumResolver, input: Applicant) -> Self {
        let premium = resolver.resolve_for(&input);
        Self {
            resolver,
            input,
            premium,
        }
    }

    /// Session over the built-in schedule with the initial form state
    pub fn first_care_200() -> Self {
        Self::new(PremiumResolver::first_care_200(), Applicant::default())
    }

    pub fn set_age(&mut self, age: u8) {
        self.input.age = age;
        self.recompute();
    }

    pub fn set_nationality(&mut self, nationality: String) {
        self.input.nationality = nationality;
        self.recompute();
    }

    pub fn set_country_of_residence(&mut self, country: Option<Country>) {
        self.input.country_of_residence = country;
        self.recompute();
    }

    pub fn set_pre_existing_condition(&mut self, declared: bool) {
        self.input.has_pre_existing_condition = declared;
        self.recompute();
    }

    pub fn set_coverage_tier(&mut self, tier: CoverageTier) {
        self.input.coverage_tier = tier;
        self.recompute();
    }

    pub fn set_payment_frequency(&mut self, frequency: PaymentFrequency) {
        self.input.payment_frequency = frequency;
        self.recompute();
    }

    // Full recomputation on every edit; the result is never patched
    // incrementally.
    fn recompute(&mut self) {
        self.premium = self.resolver.resolve_for(&self.input);
    }

    /// Current form input
    pub fn input(&self) -> &Applicant {
        &self.input
    }

    /// Premium derived from the current input
    pub fn premium(&self) -> &PremiumResult {
        &self.premium
    }

    /// Advisory warnings for the current input
    pub fn warnings(&self) -> Vec<String> {
        eligibility::warnings_for(&self.input)
    }

    /// Surcharge hospitals for the selected country of residence
    pub fn surcharge_hospitals(&self) -> &'static [&'static str] {
        match self.input.country_of_residence {
            Some(country) => network::surcharge_hospitals(country),
            None => &[],
        }
    }

    /// Benefit schedule for the selected tier
    pub fn benefits(&self) -> Vec<BenefitCategory> {
        benefits::schedule_for(self.input.coverage_tier)
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::first_care_200()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::resolver::BillingPeriod;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state_prices_immediately() {
        let session = QuoteSession::first_care_200();
        // Default form: age 30, IP, annual
        assert_eq!(session.premium().final_amount, 474.0);
        assert!(session.warnings().is_empty());
        assert!(session.surcharge_hospitals().is_empty());
    }

    #[test]
    fn test_setters_recompute_synchronously() {
        let mut session = QuoteSession::first_care_200();

        session.set_age(62);
        assert_eq!(session.premium().final_amount, 1560.0); // 61-65 band
        assert_eq!(session.warnings().len(), 1);

        session.set_coverage_tier(CoverageTier::InpatientPlusOutpatient);
        assert_eq!(session.premium().final_amount, 3432.0);

        session.set_payment_frequency(PaymentFrequency::SemiAnnual);
        assert_relative_eq!(
            session.premium().final_amount,
            3432.0 * 1.02 / 2.0,
            epsilon = 1e-9
        );
        assert_eq!(session.premium().billing_period, BillingPeriod::SixMonths);
    }

    #[test]
    fn test_non_pricing_fields_still_refresh_state() {
        let mut session = QuoteSession::first_care_200();
        let before = *session.premium();

        session.set_nationality("French".to_string());
        session.set_country_of_residence(Some(Country::Vietnam));

        // Premium unchanged in value, state fully consistent
        assert_eq!(session.premium().final_amount, before.final_amount);
        assert_eq!(
            session.surcharge_hospitals(),
            ["Franco-Vietnamese Hospital"]
        );
    }

    #[test]
    fn test_warnings_never_block_pricing() {
        let mut session = QuoteSession::first_care_200();
        session.set_age(70);
        session.set_pre_existing_condition(true);

        assert_eq!(session.warnings().len(), 2);
        assert_eq!(session.premium().final_amount, 1984.0); // 66-70 band, still priced
    }

    #[test]
    fn test_benefits_follow_tier() {
        let mut session = QuoteSession::first_care_200();
        assert_eq!(session.benefits().len(), 2);
        session.set_coverage_tier(CoverageTier::InpatientPlusOutpatient);
        assert_eq!(session.benefits().len(), 3);
    }
}
