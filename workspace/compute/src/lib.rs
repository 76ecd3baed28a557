pub mod analytics;
pub mod error;
pub mod forecast;
pub mod format;
pub mod testing;

pub use analytics::{
    RegressionResult, compute_cagr, compute_correlation, compute_linear_regression,
    compute_moving_average, compute_yoy_growth,
};
pub use error::{ComputeError, Result};
pub use forecast::{AdjustmentFactors, append_forecast, compute_forecast, unadjusted_forecast};
