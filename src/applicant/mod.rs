//! Applicant input model and census loading

mod data;
pub mod loader;

pub use data::{Applicant, Country, CoverageTier, PaymentFrequency};
