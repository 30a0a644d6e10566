//! CSV-based rate table loader
//!
//! Lets an updated rate schedule be dropped in without a rebuild. The file
//! format is one row per band with both tier columns:
//!
//! ```csv
//! Band,IP,IP_OP
//! 0-3,440,1309
//! 4-18,380,818
//! ```
//!
//! Completeness is enforced here: a table missing any (tier, band) cell is
//! rejected at load time, so a constructed `RateTable` is always total.

use crate::applicant::CoverageTier;
use crate::error::RatingError;
use crate::rates::bands::AgeBand;
use crate::rates::table::RateTable;
use std::fs::File;
use std::path::Path;

/// Default path to the rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

/// Raw CSV row matching premium_rates.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Band")]
    band: String,
    #[serde(rename = "IP")]
    ip: f64,
    #[serde(rename = "IP_OP")]
    ip_op: f64,
}

/// Load a complete rate table from `premium_rates.csv` in the given directory
pub fn load_rate_table(path: &Path) -> Result<RateTable, RatingError> {
    let file = File::open(path.join("premium_rates.csv"))?;
    load_rate_table_from_reader(file)
}

/// Load a rate table from any reader (e.g. string buffer, network stream)
pub fn load_rate_table_from_reader<R: std::io::Read>(reader: R) -> Result<RateTable, RatingError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut rates = [[0.0_f64; AgeBand::COUNT]; 2];
    let mut seen = [false; AgeBand::COUNT];
    let mut rows = 0usize;

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let band = AgeBand::from_label(&row.band)
            .ok_or_else(|| RatingError::UnknownBand(row.band.clone()))?;

        for (tier, amount) in [
            (CoverageTier::InpatientOnly, row.ip),
            (CoverageTier::InpatientPlusOutpatient, row.ip_op),
        ] {
            if amount <= 0.0 {
                return Err(RatingError::NonPositiveRate {
                    tier: tier.as_str(),
                    band: band.label(),
                    amount,
                });
            }
            rates[tier.index()][band.index()] = amount;
        }

        seen[band.index()] = true;
        rows += 1;
    }

    // Reject gaps: every band must have been priced for both tiers
    for band in AgeBand::all() {
        if !seen[band.index()] {
            return Err(RatingError::MissingRate {
                tier: CoverageTier::InpatientOnly.as_str(),
                band: band.label(),
            });
        }
    }

    log::debug!("loaded {} rate rows", rows);
    Ok(RateTable::from_rates(rates))
}

impl RateTable {
    /// Load from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, RatingError> {
        Self::from_csv_path(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, RatingError> {
        load_rate_table(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CSV: &str = "\
Band,IP,IP_OP
0-3,440,1309
4-18,380,818
19-25,419,765
26-30,474,893
31-35,566,1020
36-40,656,1148
41-45,768,1339
46-50,901,1466
51-55,1069,1785
56-60,1275,2550
61-65,1560,3432
66-70,1984,4365
71-75,2335,5137
76-80,2900,6380
81-85,3600,7920
86-90,4200,9240
91-95,5100,11220
96-100,6500,14300
";

    #[test]
    fn test_load_matches_builtin() {
        let loaded = load_rate_table_from_reader(FULL_CSV.as_bytes()).unwrap();
        assert_eq!(loaded, RateTable::first_care_200());
    }

    #[test]
    fn test_missing_band_rejected() {
        // Drop the 51-55 row
        let partial: String = FULL_CSV
            .lines()
            .filter(|l| !l.starts_with("51-55"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = load_rate_table_from_reader(partial.as_bytes()).unwrap_err();
        assert!(matches!(err, RatingError::MissingRate { band: "51-55", .. }));
    }

    #[test]
    fn test_unknown_band_rejected() {
        let csv = "Band,IP,IP_OP\n0-5,440,1309\n";
        let err = load_rate_table_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RatingError::UnknownBand(_)));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        let csv = "Band,IP,IP_OP\n0-3,0,1309\n";
        let err = load_rate_table_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RatingError::NonPositiveRate { .. }));
    }
}
