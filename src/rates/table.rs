//! Base premium rate table for the First Care 200 plan
//!
//! Rates are annual USD amounts per (coverage tier, age band) cell, stored
//! densely so every lookup is total: the built-in table is complete by
//! construction, and loaded tables are validated for completeness before a
//! `RateTable` is handed out.

use crate::applicant::CoverageTier;
use crate::rates::bands::AgeBand;

/// Dense (tier x band) table of annual base premiums in USD
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: [[f64; AgeBand::COUNT]; 2],
}

impl RateTable {
    /// Built-in table with the published First Care 200 rates
    pub fn first_care_200() -> Self {
        Self {
            rates: [Self::inpatient_rates(), Self::inpatient_outpatient_rates()],
        }
    }

    /// Create from pre-validated dense rates (used by the CSV loader)
    pub(crate) fn from_rates(rates: [[f64; AgeBand::COUNT]; 2]) -> Self {
        Self { rates }
    }

    /// Annual base premium for a tier and band
    pub fn base_annual(&self, tier: CoverageTier, band: AgeBand) -> f64 {
        self.rates[tier.index()][band.index()]
    }

    /// Published IP rates, bands 0-3 through 96-100
    fn inpatient_rates() -> [f64; AgeBand::COUNT] {
        [
            440.0, 380.0, 419.0, 474.0, 566.0, 656.0, 768.0, 901.0, 1069.0, 1275.0, 1560.0,
            1984.0, 2335.0, 2900.0, 3600.0, 4200.0, 5100.0, 6500.0,
        ]
    }

    /// Published IP+OP rates, bands 0-3 through 96-100
    fn inpatient_outpatient_rates() -> [f64; AgeBand::COUNT] {
        [
            1309.0, 818.0, 765.0, 893.0, 1020.0, 1148.0, 1339.0, 1466.0, 1785.0, 2550.0, 3432.0,
            4365.0, 5137.0, 6380.0, 7920.0, 9240.0, 11220.0, 14300.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_complete_and_positive() {
        let table = RateTable::first_care_200();
        for tier in CoverageTier::ALL {
            for band in AgeBand::all() {
                let rate = table.base_annual(tier, band);
                assert!(rate > 0.0, "{} {}: {}", tier.as_str(), band, rate);
            }
        }
    }

    #[test]
    fn test_spot_rates() {
        let table = RateTable::first_care_200();
        assert_eq!(
            table.base_annual(CoverageTier::InpatientOnly, AgeBand::for_age(30)),
            474.0
        );
        assert_eq!(
            table.base_annual(CoverageTier::InpatientPlusOutpatient, AgeBand::for_age(0)),
            1309.0
        );
        assert_eq!(
            table.base_annual(CoverageTier::InpatientOnly, AgeBand::for_age(100)),
            6500.0
        );
        assert_eq!(
            table.base_annual(CoverageTier::InpatientPlusOutpatient, AgeBand::for_age(60)),
            2550.0
        );
    }

    #[test]
    fn test_rates_rise_beyond_young_child_band() {
        // The 0-3 band is priced above the bands that follow it; from 19-25
        // onward rates increase monotonically with age in both tiers.
        let table = RateTable::first_care_200();
        for tier in CoverageTier::ALL {
            let rates: Vec<f64> = AgeBand::all().map(|b| table.base_annual(tier, b)).collect();
            for i in 3..rates.len() {
                assert!(rates[i] > rates[i - 1], "{} band {}", tier.as_str(), i);
            }
        }
    }
}
