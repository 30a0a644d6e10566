//! Fixed age bands used by the published rate schedule
//!
//! The schedule prices 18 contiguous closed bands covering ages 0-100.
//! Ages beyond 100 are not rejected; they saturate into the top band.

/// Upper boundary (inclusive) of each band, ascending
const BAND_UPPER_BOUNDS: [u8; AgeBand::COUNT] = [
    3, 18, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 100,
];

/// Band labels as printed in the rate schedule
const BAND_LABELS: [&str; AgeBand::COUNT] = [
    "0-3", "4-18", "19-25", "26-30", "31-35", "36-40", "41-45", "46-50", "51-55", "56-60",
    "61-65", "66-70", "71-75", "76-80", "81-85", "86-90", "91-95", "96-100",
];

/// One of the 18 fixed rate bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeBand {
    index: usize,
}

impl AgeBand {
    /// Number of bands in the schedule
    pub const COUNT: usize = 18;

    /// Find the band for an age in whole years.
    ///
    /// Scans the ascending boundary list and returns the band ending at the
    /// first boundary >= age. Ages above the last boundary (100) fall into
    /// the top band rather than erroring, so the lookup is total over `u8`.
    pub fn for_age(age: u8) -> AgeBand {
        for (index, &upper) in BAND_UPPER_BOUNDS.iter().enumerate() {
            if age <= upper {
                return AgeBand { index };
            }
        }
        AgeBand {
            index: Self::COUNT - 1,
        }
    }

    /// Look up a band by its schedule label (e.g. "26-30")
    pub fn from_label(label: &str) -> Option<AgeBand> {
        BAND_LABELS
            .iter()
            .position(|&l| l == label)
            .map(|index| AgeBand { index })
    }

    /// All bands in ascending order
    pub fn all() -> impl Iterator<Item = AgeBand> {
        (0..Self::COUNT).map(|index| AgeBand { index })
    }

    /// Position in the schedule, 0-based ascending
    pub fn index(&self) -> usize {
        self.index
    }

    /// Lowest age in the band (inclusive)
    pub fn lower(&self) -> u8 {
        if self.index == 0 {
            0
        } else {
            BAND_UPPER_BOUNDS[self.index - 1] + 1
        }
    }

    /// Highest age in the band (inclusive)
    pub fn upper(&self) -> u8 {
        BAND_UPPER_BOUNDS[self.index]
    }

    /// Label as printed in the rate schedule
    pub fn label(&self) -> &'static str {
        BAND_LABELS[self.index]
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_partition_zero_to_hundred() {
        // Every age in [0, 100] lands in exactly one band that contains it
        for age in 0u8..=100 {
            let band = AgeBand::for_age(age);
            assert!(band.lower() <= age && age <= band.upper(), "age {}", age);
            let containing = AgeBand::all()
                .filter(|b| b.lower() <= age && age <= b.upper())
                .count();
            assert_eq!(containing, 1, "age {} in {} bands", age, containing);
        }
    }

    #[test]
    fn test_bands_contiguous() {
        let bands: Vec<AgeBand> = AgeBand::all().collect();
        assert_eq!(bands.len(), AgeBand::COUNT);
        assert_eq!(bands[0].lower(), 0);
        assert_eq!(bands[AgeBand::COUNT - 1].upper(), 100);
        for pair in bands.windows(2) {
            assert_eq!(pair[1].lower(), pair[0].upper() + 1);
        }
    }

    #[test]
    fn test_spot_bands() {
        assert_eq!(AgeBand::for_age(0).label(), "0-3");
        assert_eq!(AgeBand::for_age(3).label(), "0-3");
        assert_eq!(AgeBand::for_age(4).label(), "4-18");
        assert_eq!(AgeBand::for_age(30).label(), "26-30");
        assert_eq!(AgeBand::for_age(55).label(), "51-55");
        assert_eq!(AgeBand::for_age(56).label(), "56-60");
        assert_eq!(AgeBand::for_age(100).label(), "96-100");
    }

    #[test]
    fn test_ages_above_hundred_saturate() {
        for age in [101u8, 120, 200, u8::MAX] {
            assert_eq!(AgeBand::for_age(age).label(), "96-100");
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(AgeBand::from_label("26-30"), Some(AgeBand::for_age(28)));
        assert_eq!(AgeBand::from_label("0-100"), None);
    }
}
