use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the series data model
    #[error("Series error: {0}")]
    Series(#[from] model::ModelError),

    /// Error from forecast computation
    #[error("Forecast computation error: {0}")]
    ForecastComputation(String),

    /// Error from value formatting
    #[error("Format error: {0}")]
    Format(String),

    /// Runtime error for unexpected situations
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
