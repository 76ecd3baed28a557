use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use model::{Domain, Period};

/// Direction of an indicator's recent movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Steady,
}

/// Position of a city relative to the comparison-set average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkPosition {
    Above,
    Below,
    Average,
}

/// One row of a city comparison table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityIndicator {
    /// Display name of the city
    pub name: String,
    /// Latest value of the compared indicator
    pub value: f64,
    /// Change versus the previous period, in the indicator's display unit
    pub change: f64,
    /// Direction of the recent movement
    pub trend: TrendDirection,
    /// Standing relative to the comparison-set average, where tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkPosition>,
}

/// A chart-ready row: a display label plus the plotted field values.
/// Forecast rows carry a `(F)` suffix in the label and the flag set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    /// Axis label, e.g. `2024 Q2` or `2027 Q2 (F)`
    pub name: String,
    /// Plotted field values
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
    /// True for projected rows
    pub forecast: bool,
}

/// Forecast movement of a single field of a domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldForecast {
    /// Field name within the domain's series
    pub field: String,
    /// Last observed value
    pub current: f64,
    /// Projected value at the end of the horizon
    pub projected: f64,
    /// Absolute change from current to projected
    pub change: f64,
    /// Relative change from current to projected, as a fraction
    pub change_percent: f64,
}

/// Consolidated forecast numbers for one domain at the scenario horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSummary {
    /// Domain the summary covers
    pub domain: Domain,
    /// Period the projected values refer to
    pub period: Period,
    /// Display string of the projected lead value, e.g. `9,80 €/m²`
    pub headline: String,
    /// Per-field movement over the horizon
    pub fields: Vec<FieldForecast>,
}

/// Long-run GDP trajectory class derived from average annual growth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GdpTrend {
    Strong,
    Moderate,
    Steady,
    Declining,
}

/// Economic growth potential under the scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPotential {
    Strong,
    Moderate,
    Limited,
}

/// Housing market trajectory under the scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HousingOutlook {
    Overheating,
    Growth,
    Stable,
}

/// Competitiveness position relative to peer cities under the scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompetitivenessOutlook {
    Improving,
    Maintaining,
    Declining,
}

impl fmt::Display for GrowthPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthPotential::Strong => write!(f, "Strong"),
            GrowthPotential::Moderate => write!(f, "Moderate"),
            GrowthPotential::Limited => write!(f, "Limited"),
        }
    }
}

impl fmt::Display for HousingOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HousingOutlook::Overheating => write!(f, "Overheating"),
            HousingOutlook::Growth => write!(f, "Growth"),
            HousingOutlook::Stable => write!(f, "Stable"),
        }
    }
}

impl fmt::Display for CompetitivenessOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompetitivenessOutlook::Improving => write!(f, "Improving"),
            CompetitivenessOutlook::Maintaining => write!(f, "Maintaining"),
            CompetitivenessOutlook::Declining => write!(f, "Declining"),
        }
    }
}

/// Combined impact assessment across the three outlook dimensions.
/// Scores are 0 to 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioOutlook {
    pub growth_potential: GrowthPotential,
    pub growth_score: f64,
    pub housing_market: HousingOutlook,
    pub housing_score: f64,
    pub competitiveness: CompetitivenessOutlook,
    pub competitiveness_score: f64,
}

/// Narrative takeaways for the scenario, one line per theme plus the
/// overall strategic recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioInsights {
    /// Population trajectory line
    pub population: String,
    /// Housing market line
    pub housing: String,
    /// Digital transformation line
    pub digitalization: String,
    /// Strategic recommendation paragraph
    pub recommendation: String,
}
