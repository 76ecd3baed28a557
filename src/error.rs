use thiserror::Error;

/// Error types for the engine facade
#[derive(Error, Debug)]
pub enum EngineError {
    /// Error from the compute layer
    #[error("Compute error: {0}")]
    Compute(#[from] compute::ComputeError),

    /// Error from the data model
    #[error("Model error: {0}")]
    Model(#[from] model::ModelError),

    /// Scenario parameters outside their slider bounds
    #[error("Invalid scenario parameters: {0}")]
    InvalidParams(#[from] validator::ValidationErrors),

    /// Requested city is not covered by the data provider
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Requested indicator has no comparison table
    #[error("No comparison data for indicator: {0}")]
    UnknownIndicator(String),
}

/// Type alias for Result with EngineError
pub type Result<T> = std::result::Result<T, EngineError>;
