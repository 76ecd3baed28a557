//! Scenario policy: how the slider parameters act on each indicator family.
//!
//! The mapping mirrors the dashboard's elasticities. Interest rate moves
//! work against real estate prices, with house prices the most sensitive.
//! Digital investment accelerates the advanced technology shares, and the
//! population slider feeds straight through as annual growth. GDP and
//! unemployment are projected unadjusted.

use tracing::{debug, instrument};

use common::ScenarioParams;
use compute::forecast::{self, AdjustmentFactors};
use model::{Domain, Series, SeriesPoint};

use crate::error::Result;

/// Adjustment factors the scenario applies to the domain's fields.
pub fn adjustment_factors(params: &ScenarioParams, domain: Domain) -> AdjustmentFactors {
    match domain {
        Domain::Population => {
            AdjustmentFactors::new_with_rate("population", params.population_growth / 100.0)
        }
        Domain::RealEstate => AdjustmentFactors::new()
            .with_rate("apartment_rent", params.interest_rate * -0.015)
            .with_rate("house_price", params.interest_rate * -0.03)
            .with_rate("land_price", params.interest_rate * -0.02),
        Domain::IctAdoption => AdjustmentFactors::new()
            .with_rate("ai", params.digitalization * 0.05)
            .with_rate("cloud", params.digitalization * 0.03)
            .with_rate("ecommerce", params.digitalization * 0.04),
        Domain::Gdp | Domain::Unemployment => AdjustmentFactors::new(),
    }
}

/// Number of projection steps for the domain. Quarterly series walk in
/// quarter steps, so the year horizon expands by four.
pub fn horizon_steps(params: &ScenarioParams, domain: Domain) -> u32 {
    match domain {
        Domain::RealEstate => params.prediction_years * 4,
        _ => params.prediction_years,
    }
}

/// Projects the domain's series under the scenario.
#[instrument(skip(series, params), fields(%domain))]
pub fn project(series: &Series, domain: Domain, params: &ScenarioParams) -> Vec<SeriesPoint> {
    let factors = adjustment_factors(params, domain);
    let steps = horizon_steps(params, domain);
    debug!(steps, ?factors, "projecting domain under scenario");
    forecast::compute_forecast(series, steps, &factors)
}

/// History plus projection in one validated series. With predictions turned
/// off the history is returned unchanged.
pub fn project_combined(series: &Series, domain: Domain, params: &ScenarioParams) -> Result<Series> {
    if !params.show_predictions {
        return Ok(series.clone());
    }
    let projection = project(series, domain, params);
    Ok(forecast::append_forecast(series, projection)?)
}
