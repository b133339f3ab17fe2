use serde::{Deserialize, Serialize};

/// Discretized years-of-experience ranges used by the cleaner list filter.
///
/// Boundaries are strict `<` comparisons: exactly 1 year lands in
/// `OneToTwo`, exactly 10 in `TenPlus`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceBucket {
    EntryLevel,
    OneToTwo,
    TwoToFive,
    FiveToTen,
    TenPlus,
}

impl ExperienceBucket {
    pub fn code(&self) -> &'static str {
        match self {
            ExperienceBucket::EntryLevel => "entry-level",
            ExperienceBucket::OneToTwo => "1-2-years",
            ExperienceBucket::TwoToFive => "2-5-years",
            ExperienceBucket::FiveToTen => "5-10-years",
            ExperienceBucket::TenPlus => "10-plus-years",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExperienceBucket::EntryLevel => "Entry Level (0-1 year)",
            ExperienceBucket::OneToTwo => "Junior (1-2 years)",
            ExperienceBucket::TwoToFive => "Mid-Level (2-5 years)",
            ExperienceBucket::FiveToTen => "Senior (5-10 years)",
            ExperienceBucket::TenPlus => "Expert (10+ years)",
        }
    }

    pub fn all() -> Vec<ExperienceBucket> {
        vec![
            ExperienceBucket::EntryLevel,
            ExperienceBucket::OneToTwo,
            ExperienceBucket::TwoToFive,
            ExperienceBucket::FiveToTen,
            ExperienceBucket::TenPlus,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "entry-level" => Some(ExperienceBucket::EntryLevel),
            "1-2-years" => Some(ExperienceBucket::OneToTwo),
            "2-5-years" => Some(ExperienceBucket::TwoToFive),
            "5-10-years" => Some(ExperienceBucket::FiveToTen),
            "10-plus-years" => Some(ExperienceBucket::TenPlus),
            _ => None,
        }
    }

    pub fn from_years(years: f64) -> Self {
        if years < 1.0 {
            ExperienceBucket::EntryLevel
        } else if years < 2.0 {
            ExperienceBucket::OneToTwo
        } else if years < 5.0 {
            ExperienceBucket::TwoToFive
        } else if years < 10.0 {
            ExperienceBucket::FiveToTen
        } else {
            ExperienceBucket::TenPlus
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_years() {
        assert_eq!(ExperienceBucket::from_years(0.0), ExperienceBucket::EntryLevel);
        assert_eq!(ExperienceBucket::from_years(0.5), ExperienceBucket::EntryLevel);
        assert_eq!(ExperienceBucket::from_years(1.0), ExperienceBucket::OneToTwo);
        assert_eq!(ExperienceBucket::from_years(2.0), ExperienceBucket::TwoToFive);
        assert_eq!(ExperienceBucket::from_years(5.0), ExperienceBucket::FiveToTen);
        assert_eq!(ExperienceBucket::from_years(10.0), ExperienceBucket::TenPlus);
        assert_eq!(ExperienceBucket::from_years(25.0), ExperienceBucket::TenPlus);
    }

    #[test]
    fn test_codes_round_trip() {
        for bucket in ExperienceBucket::all() {
            assert_eq!(ExperienceBucket::from_code(bucket.code()), Some(bucket));
        }
        assert_eq!(ExperienceBucket::from_code("3-4-years"), None);
    }
}
