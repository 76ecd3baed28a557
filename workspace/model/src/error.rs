use thiserror::Error;

use crate::period::Period;

/// Error types for the data model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Series points are not sorted by ascending period
    #[error("Series periods out of order: {0} does not precede {1}")]
    UnorderedPeriods(Period, Period),

    /// The same period appears more than once in a series
    #[error("Duplicate period in series: {0}")]
    DuplicatePeriod(Period),
}
