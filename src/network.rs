//! Surcharge hospital network
//!
//! Certain high-cost hospitals carry a 40% co-payment under the plan. The
//! mapping is static; a country with no entry simply has no surcharge
//! hospitals on record.

use crate::applicant::Country;

/// Co-payment share applied at surcharge hospitals
pub const SURCHARGE_COPAY: f64 = 0.40;

/// Hospitals subject to the co-payment surcharge, in published order
pub fn surcharge_hospitals(country: Country) -> &'static [&'static str] {
    match country {
        Country::Thailand => &["Bumrungrad International Hospital", "First Western Hospital"],
        Country::Indonesia => &["BIMC Hospital, Kuta", "BIMC Hospital, Nusa Dua"],
        Country::Vietnam => &["Franco-Vietnamese Hospital"],
        Country::Philippines => &[
            "Asian Hospital and Medical Center",
            "St Luke's Medical Center",
            "The Medical City",
            "Makati Medical Center",
        ],
        Country::India => &["Wockhardt Hospital"],
        Country::France => &["American Hospital of Paris", "Clinique Victor Hugo"],
        _ => &[],
    }
}

/// String-keyed lookup matching the published table keys verbatim.
///
/// No casing or whitespace normalization is performed; an unknown or empty
/// name yields an empty list, not an error.
pub fn hospitals_for(country_name: &str) -> &'static [&'static str] {
    match Country::from_name(country_name) {
        Some(country) => surcharge_hospitals(country),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thailand_two_hospitals_in_order() {
        let hospitals = hospitals_for("Thailand");
        assert_eq!(
            hospitals,
            ["Bumrungrad International Hospital", "First Western Hospital"]
        );
    }

    #[test]
    fn test_philippines_order_preserved() {
        let hospitals = surcharge_hospitals(Country::Philippines);
        assert_eq!(hospitals.len(), 4);
        assert_eq!(hospitals[0], "Asian Hospital and Medical Center");
        assert_eq!(hospitals[3], "Makati Medical Center");
    }

    #[test]
    fn test_countries_without_surcharge_hospitals() {
        assert!(hospitals_for("Germany").is_empty());
        assert!(surcharge_hospitals(Country::Laos).is_empty());
    }

    #[test]
    fn test_exact_match_only() {
        assert!(hospitals_for("").is_empty());
        assert!(hospitals_for("thailand").is_empty());
        assert!(hospitals_for("Thailand ").is_empty());
        assert!(hospitals_for("Atlantis").is_empty());
    }
}
