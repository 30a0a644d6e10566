//! Premium resolution and quote session state

mod quote;
mod resolver;

pub use quote::QuoteSession;
pub use resolver::{BillingPeriod, PremiumResolver, PremiumResult, SEMI_ANNUAL_LOADING};
