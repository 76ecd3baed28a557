//! Scenario projection engine for a single-city economic dashboard.
//!
//! The crate carries the dashboard's observed indicator series, projects
//! them forward under user-adjustable scenario parameters and condenses the
//! results into the summary cards, chart rows and narrative assessments the
//! frontend renders.
//!
//! The workspace splits along the same seams as the views: `model` holds
//! periods and series, `compute` the forecasting and trend analytics,
//! `common` the parameter and report types. This crate ties them to the
//! built-in city data behind the `SeriesProvider` seam.

pub mod dataset;
pub mod error;
pub mod insights;
pub mod scenario;
pub mod summary;


pub use dataset::{
    CityOverview, DuisburgDataset, EmploymentSnapshot, SectorShare, SeriesProvider,
};
pub use error::{EngineError, Result};
pub use insights::{gdp_trend, scenario_insights, scenario_outlook};
pub use scenario::{adjustment_factors, horizon_steps, project, project_combined};
pub use summary::{DashboardReport, chart_points, forecast_summary, scenario_report};

// Re-export the workspace layers so callers can reach the underlying types
// through one crate.
pub use common;
pub use compute;
pub use model;
