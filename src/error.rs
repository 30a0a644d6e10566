//! Error types for rate loading and input parsing

use thiserror::Error;

/// Errors raised while loading rating data or parsing input records.
///
/// Premium resolution itself is total and has no error path: the rate table
/// is dense by construction, and any loaded table is validated for
/// completeness before it can be used.
#[derive(Debug, Error)]
pub enum RatingError {
    /// A loaded rate table is missing the cell for a (tier, band) pair.
    #[error("missing premium rate for tier {tier} band {band}")]
    MissingRate { tier: &'static str, band: &'static str },

    /// A rate row referenced an age band label outside the fixed 18.
    #[error("unknown age band label: {0}")]
    UnknownBand(String),

    /// A non-positive premium amount in a loaded rate table.
    #[error("non-positive premium {amount} for tier {tier} band {band}")]
    NonPositiveRate {
        tier: &'static str,
        band: &'static str,
        amount: f64,
    },

    #[error("unknown coverage tier: {0}")]
    UnknownCoverageTier(String),

    #[error("unknown payment frequency: {0}")]
    UnknownPaymentFrequency(String),

    #[error("unknown country: {0}")]
    UnknownCountry(String),

    /// A census flag column with a value other than Yes/No.
    #[error("invalid flag value: {0}")]
    InvalidFlag(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
