use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar quarter label used by the quarterly indicator series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quarter::Q1 => write!(f, "Q1"),
            Quarter::Q2 => write!(f, "Q2"),
            Quarter::Q3 => write!(f, "Q3"),
            Quarter::Q4 => write!(f, "Q4"),
        }
    }
}

/// Identifies one reporting period of a series, either a whole year or a
/// quarter within a year.
///
/// Serializes flat into the owning record, so a quarterly period renders as
/// `"year": 2024, "quarter": "Q2"` and an annual one as just `"year": 2016`.
///
/// Periods are totally ordered by `(year, quarter)`. Advancing a period moves
/// the year and keeps the quarter label unchanged; callers that want the
/// projection to walk quarter by quarter expand their horizon into quarter
/// steps instead (the real estate scenario does this with `years * 4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quarter: Option<Quarter>,
}

impl Period {
    /// Creates an annual period.
    pub fn year(year: i32) -> Self {
        Self {
            year,
            quarter: None,
        }
    }

    /// Creates a quarterly period.
    pub fn quarterly(year: i32, quarter: Quarter) -> Self {
        Self {
            year,
            quarter: Some(quarter),
        }
    }

    /// Gets the calendar year of the period.
    pub fn year_number(&self) -> i32 {
        self.year
    }

    /// Gets the quarter label, if the period is quarterly.
    pub fn quarter(&self) -> Option<Quarter> {
        self.quarter
    }

    /// Returns the period `years` years later with the same quarter label.
    pub fn plus_years(&self, years: u32) -> Self {
        Self {
            year: self.year + years as i32,
            quarter: self.quarter,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quarter {
            Some(quarter) => write!(f, "{} {}", self.year, quarter),
            None => write!(f, "{}", self.year),
        }
    }
}
