//! Load applicants from a census CSV for batch quoting

use super::{Applicant, Country, CoverageTier, PaymentFrequency};
use crate::error::RatingError;
use csv::Reader;
use std::path::Path;

/// Default census file used by the batch rater
pub const DEFAULT_CENSUS_PATH: &str = "data/applicants.csv";

/// One census row: an applicant with its census identifier
#[derive(Debug, Clone)]
pub struct CensusEntry {
    pub applicant_id: u32,
    pub applicant: Applicant,
}

/// Raw CSV row matching applicants.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ApplicantID")]
    applicant_id: u32,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Nationality")]
    nationality: String,
    #[serde(rename = "CountryOfResidence")]
    country_of_residence: String,
    #[serde(rename = "PreExisting")]
    pre_existing: String,
    #[serde(rename = "CoverageTier")]
    coverage_tier: String,
    #[serde(rename = "PaymentFrequency")]
    payment_frequency: String,
}

impl CsvRow {
    fn to_entry(self) -> Result<CensusEntry, RatingError> {
        // Empty means no residence selected; anything else must parse
        let country_of_residence = if self.country_of_residence.is_empty() {
            None
        } else {
            match Country::from_name(&self.country_of_residence) {
                Some(country) => Some(country),
                None => return Err(RatingError::UnknownCountry(self.country_of_residence)),
            }
        };

        let has_pre_existing_condition = match self.pre_existing.as_str() {
            "Yes" => true,
            "No" => false,
            other => return Err(RatingError::InvalidFlag(other.to_string())),
        };

        let coverage_tier = CoverageTier::from_code(&self.coverage_tier)?;
        let payment_frequency = PaymentFrequency::from_code(&self.payment_frequency)?;

        Ok(CensusEntry {
            applicant_id: self.applicant_id,
            applicant: Applicant {
                age: self.age,
                nationality: self.nationality,
                country_of_residence,
                has_pre_existing_condition,
                coverage_tier,
                payment_frequency,
            },
        })
    }
}

/// Load all applicants from a census CSV file
pub fn load_census<P: AsRef<Path>>(path: P) -> Result<Vec<CensusEntry>, RatingError> {
    let reader = Reader::from_path(path)?;
    collect_entries(reader)
}

/// Load applicants from any reader (e.g. string buffer, request body)
pub fn load_census_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<CensusEntry>, RatingError> {
    collect_entries(Reader::from_reader(reader))
}

/// Load the default census file
pub fn load_default_census() -> Result<Vec<CensusEntry>, RatingError> {
    load_census(DEFAULT_CENSUS_PATH)
}

fn collect_entries<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<CensusEntry>, RatingError> {
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.to_entry()?);
    }
    log::debug!("loaded {} census rows", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ApplicantID,Age,Nationality,CountryOfResidence,PreExisting,CoverageTier,PaymentFrequency
1,34,German,Thailand,No,IP,annual
2,58,French,Vietnam,Yes,IP+OP,semi-annual
3,7,,,No,IP,annual
";

    #[test]
    fn test_load_sample_census() {
        let entries = load_census_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(entries.len(), 3);

        let second = &entries[1];
        assert_eq!(second.applicant_id, 2);
        assert_eq!(second.applicant.age, 58);
        assert_eq!(
            second.applicant.country_of_residence,
            Some(Country::Vietnam)
        );
        assert!(second.applicant.has_pre_existing_condition);
        assert_eq!(
            second.applicant.coverage_tier,
            CoverageTier::InpatientPlusOutpatient
        );
        assert_eq!(
            second.applicant.payment_frequency,
            PaymentFrequency::SemiAnnual
        );

        // Blank residence stays unselected
        assert_eq!(entries[2].applicant.country_of_residence, None);
    }

    #[test]
    fn test_unknown_country_rejected() {
        let csv = "ApplicantID,Age,Nationality,CountryOfResidence,PreExisting,CoverageTier,PaymentFrequency\n1,30,,Narnia,No,IP,annual\n";
        let err = load_census_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RatingError::UnknownCountry(_)));
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let csv = "ApplicantID,Age,Nationality,CountryOfResidence,PreExisting,CoverageTier,PaymentFrequency\n1,30,,,No,OP,annual\n";
        let err = load_census_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RatingError::UnknownCoverageTier(_)));
    }
}
