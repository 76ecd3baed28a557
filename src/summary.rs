//! Report assembly for the dashboard views.
//!
//! This is where the pieces meet: observed series from the provider run
//! through the scenario projection, and the results are condensed into the
//! summary cards, chart rows and narrative blocks the frontend renders.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use validator::Validate;

use common::{
    ChartPoint, FieldForecast, ForecastSummary, GdpTrend, ScenarioInsights, ScenarioOutlook,
    ScenarioParams,
};
use compute::{ComputeError, compute_yoy_growth, format};
use model::{Domain, Series};

use crate::dataset::SeriesProvider;
use crate::error::{EngineError, Result};
use crate::{insights, scenario};

/// Consolidated scenario output for the predictions view: one summary card
/// per projected indicator family plus the narrative assessments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    /// City key the report was built for
    pub city: String,
    /// Summary cards for the projected indicator families
    pub summaries: Vec<ForecastSummary>,
    /// Long-run GDP trajectory class from the observed series
    pub gdp_trend: GdpTrend,
    /// Scored outlook gauges for the scenario position
    pub outlook: ScenarioOutlook,
    /// Narrative insight lines and the strategy recommendation
    pub insights: ScenarioInsights,
}

/// Indicator families shown as summary cards on the predictions view.
const SUMMARY_DOMAINS: [Domain; 3] = [Domain::Population, Domain::RealEstate, Domain::IctAdoption];

/// Converts a combined history and forecast series into chart-ready rows.
/// Forecast rows are marked and their label carries the `(F)` suffix.
pub fn chart_points(series: &Series) -> Vec<ChartPoint> {
    series
        .points()
        .iter()
        .map(|point| {
            let name = if point.is_forecast() {
                format!("{} (F)", point.period())
            } else {
                point.period().to_string()
            };
            ChartPoint {
                name,
                values: point.values().clone(),
                forecast: point.is_forecast(),
            }
        })
        .collect()
}

/// Field whose projected value becomes the card headline.
fn headline_field(domain: Domain) -> &'static str {
    match domain {
        Domain::Population => "population",
        Domain::RealEstate => "apartment_rent",
        Domain::IctAdoption => "ai",
        Domain::Gdp => "gdp",
        Domain::Unemployment => "rate",
    }
}

/// Renders the headline value in the unit the dashboard shows for the
/// domain. Adoption shares and unemployment rates are stored as percent
/// points, so they are scaled back down before formatting.
fn headline_for(domain: Domain, value: f64) -> compute::Result<String> {
    match domain {
        Domain::Population => format::format_grouped(value),
        Domain::RealEstate => format::format_eur_per_sqm(value),
        Domain::IctAdoption | Domain::Unemployment => Ok(format::format_percentage(value / 100.0)),
        Domain::Gdp => Ok(format!("€{value:.1}B")),
    }
}

/// Summarizes how every field of the domain moves over the scenario
/// horizon: last observed value against the projected value at the end.
///
/// The prediction toggle does not apply here; it only controls whether
/// forecast rows are appended to chart series.
#[instrument(skip(provider, params), fields(%domain))]
pub fn forecast_summary(
    provider: &dyn SeriesProvider,
    domain: Domain,
    params: &ScenarioParams,
) -> Result<ForecastSummary> {
    let series = provider.series(domain)?;
    let projection = scenario::project(&series, domain, params);

    let last = series.last().ok_or_else(|| {
        ComputeError::ForecastComputation(format!("no observed data for {domain}"))
    })?;
    let projected_point = projection.last();
    let period = projected_point
        .map(|point| point.period())
        .unwrap_or_else(|| last.period());

    let fields: Vec<FieldForecast> = last
        .values()
        .iter()
        .map(|(field, &current)| {
            let projected = projected_point
                .and_then(|point| point.value(field))
                .unwrap_or(current);
            FieldForecast {
                field: field.clone(),
                current,
                projected,
                change: projected - current,
                change_percent: compute_yoy_growth(projected, current),
            }
        })
        .collect();

    let lead = fields
        .iter()
        .find(|field| field.field == headline_field(domain))
        .or_else(|| fields.first())
        .ok_or_else(|| {
            ComputeError::ForecastComputation(format!("no fields to summarize for {domain}"))
        })?;
    let headline = headline_for(domain, lead.projected)?;
    debug!(%period, %headline, "Computed forecast summary");

    Ok(ForecastSummary {
        domain,
        period,
        headline,
        fields,
    })
}

/// Runs the full scenario pipeline for one parameter position: validates
/// the sliders, checks the provider covers the requested city, then builds
/// the summary cards and narrative blocks in one pass.
#[instrument(skip(provider, params), fields(city = %params.city, years = params.prediction_years))]
pub fn scenario_report(
    provider: &dyn SeriesProvider,
    params: &ScenarioParams,
) -> Result<DashboardReport> {
    params.validate()?;
    if params.city != provider.city_key() {
        return Err(EngineError::UnknownCity(params.city.clone()));
    }

    let summaries = SUMMARY_DOMAINS
        .into_iter()
        .map(|domain| forecast_summary(provider, domain, params))
        .collect::<Result<Vec<_>>>()?;
    let gdp = provider.series(Domain::Gdp)?;

    Ok(DashboardReport {
        city: params.city.clone(),
        summaries,
        gdp_trend: insights::gdp_trend(&gdp),
        outlook: insights::scenario_outlook(params),
        insights: insights::scenario_insights(params),
    })
}
