//! Applicant data structures matching the quote form

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// Coverage tier of the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageTier {
    /// Inpatient cover only ("IP")
    InpatientOnly,
    /// Inpatient plus outpatient cover ("IP+OP")
    InpatientPlusOutpatient,
}

impl CoverageTier {
    /// All tiers, in rate table order
    pub const ALL: [CoverageTier; 2] = [
        CoverageTier::InpatientOnly,
        CoverageTier::InpatientPlusOutpatient,
    ];

    /// Get the plan code matching the published rate schedule
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageTier::InpatientOnly => "IP",
            CoverageTier::InpatientPlusOutpatient => "IP+OP",
        }
    }

    /// Parse a plan code ("IP" or "IP+OP")
    pub fn from_code(code: &str) -> Result<Self, RatingError> {
        match code {
            "IP" => Ok(CoverageTier::InpatientOnly),
            "IP+OP" => Ok(CoverageTier::InpatientPlusOutpatient),
            other => Err(RatingError::UnknownCoverageTier(other.to_string())),
        }
    }

    /// Row index into the rate table
    pub(crate) fn index(&self) -> usize {
        match self {
            CoverageTier::InpatientOnly => 0,
            CoverageTier::InpatientPlusOutpatient => 1,
        }
    }

    pub fn includes_outpatient(&self) -> bool {
        matches!(self, CoverageTier::InpatientPlusOutpatient)
    }
}

/// How often the premium is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    /// One payment per policy year
    Annual,
    /// Two payments per policy year, subject to the 2% loading
    SemiAnnual,
}

impl PaymentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Annual => "annual",
            PaymentFrequency::SemiAnnual => "semi-annual",
        }
    }

    /// Parse the schedule spelling ("annual" or "semi-annual")
    pub fn from_code(code: &str) -> Result<Self, RatingError> {
        match code {
            "annual" => Ok(PaymentFrequency::Annual),
            "semi-annual" => Ok(PaymentFrequency::SemiAnnual),
            other => Err(RatingError::UnknownPaymentFrequency(other.to_string())),
        }
    }
}

/// Countries of residence the plan is sold in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Cambodia,
    France,
    Germany,
    India,
    Indonesia,
    Italy,
    Laos,
    Malaysia,
    Myanmar,
    Netherlands,
    Philippines,
    Spain,
    SriLanka,
    Thailand,
    Vietnam,
}

impl Country {
    /// All supported countries, sorted alphabetically for presentation
    pub const ALL: [Country; 15] = [
        Country::Cambodia,
        Country::France,
        Country::Germany,
        Country::India,
        Country::Indonesia,
        Country::Italy,
        Country::Laos,
        Country::Malaysia,
        Country::Myanmar,
        Country::Netherlands,
        Country::Philippines,
        Country::Spain,
        Country::SriLanka,
        Country::Thailand,
        Country::Vietnam,
    ];

    /// Display name as it appears in the country selector
    pub fn name(&self) -> &'static str {
        match self {
            Country::Cambodia => "Cambodia",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::India => "India",
            Country::Indonesia => "Indonesia",
            Country::Italy => "Italy",
            Country::Laos => "Laos",
            Country::Malaysia => "Malaysia",
            Country::Myanmar => "Myanmar",
            Country::Netherlands => "Netherlands",
            Country::Philippines => "Philippines",
            Country::Spain => "Spain",
            Country::SriLanka => "Sri Lanka",
            Country::Thailand => "Thailand",
            Country::Vietnam => "Vietnam",
        }
    }

    /// Parse an exact display name. No trimming or case folding: lookups
    /// match the published table keys verbatim.
    pub fn from_name(name: &str) -> Option<Country> {
        Country::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single applicant as entered on the quote form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// Age in whole years. The form constrains this to [0, 100]; ages above
    /// 100 are tolerated and saturate into the top rate band.
    pub age: u8,

    /// Nationality, free text, not validated
    #[serde(default)]
    pub nationality: String,

    /// Country of residence, if one has been selected
    #[serde(default)]
    pub country_of_residence: Option<Country>,

    /// Whether the applicant declared a pre-existing condition
    pub has_pre_existing_condition: bool,

    /// Selected coverage tier
    pub coverage_tier: CoverageTier,

    /// Selected payment frequency
    pub payment_frequency: PaymentFrequency,
}

impl Default for Applicant {
    /// Initial form state: 30-year-old, inpatient-only, annual billing
    fn default() -> Self {
        Self {
            age: 30,
            nationality: String::new(),
            country_of_residence: None,
            has_pre_existing_condition: false,
            coverage_tier: CoverageTier::InpatientOnly,
            payment_frequency: PaymentFrequency::Annual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_codes() {
        assert_eq!(CoverageTier::InpatientOnly.as_str(), "IP");
        assert_eq!(CoverageTier::InpatientPlusOutpatient.as_str(), "IP+OP");
        assert_eq!(
            CoverageTier::from_code("IP+OP").unwrap(),
            CoverageTier::InpatientPlusOutpatient
        );
        assert!(CoverageTier::from_code("OP").is_err());
    }

    #[test]
    fn test_countries_sorted() {
        let names: Vec<&str> = Country::ALL.iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_country_exact_match() {
        assert_eq!(Country::from_name("Sri Lanka"), Some(Country::SriLanka));
        assert_eq!(Country::from_name("sri lanka"), None);
        assert_eq!(Country::from_name(" Thailand"), None);
        assert_eq!(Country::from_name(""), None);
    }
}
