use serde::{Deserialize, Serialize};
use validator::Validate;

/// User-adjustable scenario controls driving the forecast views.
///
/// Carried explicitly by callers rather than living in ambient UI state so
/// the same parameters can be validated once and threaded through every
/// projection. `Default` yields the dashboard's reset position.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ScenarioParams {
    /// Assumed interest rate change in percentage points (-2.0 to 5.0, slider step 0.5)
    #[validate(range(min = -2.0, max = 5.0))]
    pub interest_rate: f64,
    /// Assumed annual population growth in percent (-1.0 to 2.0, slider step 0.1)
    #[validate(range(min = -1.0, max = 2.0))]
    pub population_growth: f64,
    /// Digital investment intensity (0 to 10, slider step 1)
    #[validate(range(min = 0.0, max = 10.0))]
    pub digitalization: f64,
    /// Forecast horizon in years (1 to 5)
    #[validate(range(min = 1, max = 5))]
    pub prediction_years: u32,
    /// Whether forecast points are appended to chart data
    pub show_predictions: bool,
    /// Key of the selected city
    #[validate(length(min = 1))]
    pub city: String,
}

impl ScenarioParams {
    /// Creates the parameter set at its reset position.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            interest_rate: 0.0,
            population_growth: 0.5,
            digitalization: 0.0,
            prediction_years: 3,
            show_predictions: true,
            city: "duisburg".to_string(),
        }
    }
}
