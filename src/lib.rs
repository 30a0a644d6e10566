//! First Care 200 premium rating engine
//!
//! This library provides:
//! - Base premium resolution from the published (tier x age band) rate table
//! - Payment-frequency loading and billing breakdown
//! - Advisory eligibility warnings
//! - Surcharge hospital network lookup
//! - Static benefit schedule per coverage tier
//! - A quote session holding form input with synchronously derived premiums

pub mod applicant;
pub mod benefits;
pub mod eligibility;
pub mod error;
pub mod network;
pub mod pricing;
pub mod rates;

// Re-export commonly used types
pub use applicant::{Applicant, Country, CoverageTier, PaymentFrequency};
pub use error::RatingError;
pub use pricing::{BillingPeriod, PremiumResolver, PremiumResult, QuoteSession};
pub use rates::{AgeBand, RateTable};
