//! Scenario interpretation: outlook classifications and narrative lines.
//!
//! The thresholds and wording follow the dashboard's combined impact
//! analysis, so a given slider position produces the same assessment the
//! UI showed for it.

use tracing::instrument;

use common::{
    CompetitivenessOutlook, GdpTrend, GrowthPotential, HousingOutlook, ScenarioInsights,
    ScenarioOutlook, ScenarioParams,
};
use compute::compute_yoy_growth;
use model::Series;

/// Classifies the long-run GDP trajectory from average annual growth of the
/// observed points. Forecast points are ignored; fewer than two observed
/// points read as steady.
#[instrument(skip(series), fields(points = series.len()))]
pub fn gdp_trend(series: &Series) -> GdpTrend {
    let values: Vec<f64> = series
        .observed()
        .filter_map(|point| point.value("gdp"))
        .collect();
    if values.len() < 2 {
        return GdpTrend::Steady;
    }

    let total_growth: f64 = values
        .windows(2)
        .map(|pair| compute_yoy_growth(pair[1], pair[0]))
        .sum();
    let average_growth = total_growth / (values.len() - 1) as f64;

    if average_growth > 0.02 {
        GdpTrend::Strong
    } else if average_growth > 0.0 {
        GdpTrend::Moderate
    } else if average_growth > -0.01 {
        GdpTrend::Steady
    } else {
        GdpTrend::Declining
    }
}

/// Assesses the combined impact of the scenario across the three outlook
/// dimensions, each with a 0 to 100 score.
pub fn scenario_outlook(params: &ScenarioParams) -> ScenarioOutlook {
    let growth_potential = if params.population_growth > 0.5
        && params.digitalization > 3.0
        && params.interest_rate < 2.0
    {
        GrowthPotential::Strong
    } else if params.population_growth > 0.0 && params.digitalization > 0.0 {
        GrowthPotential::Moderate
    } else {
        GrowthPotential::Limited
    };
    let growth_score = 30.0
        + if params.population_growth > 0.0 {
            params.population_growth * 10.0
        } else {
            0.0
        }
        + if params.interest_rate > 2.0 {
            0.0
        } else if params.interest_rate < 0.0 {
            10.0
        } else {
            5.0
        }
        + params.digitalization * 3.0;

    let housing_market = if params.population_growth > 1.0 && params.interest_rate < 1.0 {
        HousingOutlook::Overheating
    } else if params.population_growth > 0.3 && params.interest_rate < 3.0 {
        HousingOutlook::Growth
    } else {
        HousingOutlook::Stable
    };
    let housing_score = 40.0
        + params.population_growth * 15.0
        + if params.interest_rate > 2.0 {
            -10.0
        } else if params.interest_rate < 0.0 {
            15.0
        } else {
            0.0
        };

    let competitiveness = if params.digitalization > 5.0 && params.population_growth > 0.0 {
        CompetitivenessOutlook::Improving
    } else if params.digitalization > 2.0 {
        CompetitivenessOutlook::Maintaining
    } else {
        CompetitivenessOutlook::Declining
    };
    let competitiveness_score = 35.0
        + params.digitalization * 5.0
        + if params.population_growth > 0.0 { 5.0 } else { -5.0 }
        + if params.interest_rate > 3.0 {
            -10.0
        } else if params.interest_rate < 0.0 {
            5.0
        } else {
            0.0
        };

    ScenarioOutlook {
        growth_potential,
        growth_score: growth_score.clamp(0.0, 100.0),
        housing_market,
        housing_score: housing_score.clamp(0.0, 100.0),
        competitiveness,
        competitiveness_score: competitiveness_score.clamp(0.0, 100.0),
    }
}

/// Narrative takeaways for the scenario, one line per theme plus the
/// strategic recommendation.
pub fn scenario_insights(params: &ScenarioParams) -> ScenarioInsights {
    let population = if params.population_growth > 1.0 {
        "The high growth scenario would put pressure on housing and infrastructure, \
         requiring accelerated development."
    } else if params.population_growth > 0.0 {
        "Moderate growth provides stability while allowing planned infrastructure \
         development to keep pace."
    } else {
        "Population decline would require focus on retention strategies and service \
         optimization."
    };

    let housing = if params.interest_rate > 3.0 {
        "Significant interest rate increases could reduce housing demand and slow price \
         growth, potentially benefiting affordability."
    } else if params.interest_rate > 0.0 {
        "Moderate interest rate increases would likely stabilize the housing market after \
         recent growth periods."
    } else {
        "Lower interest rates could accelerate property price growth, potentially creating \
         affordability challenges."
    };

    let digitalization = if params.digitalization > 5.0 {
        "High investment in digital infrastructure could position Duisburg as a technology \
         leader, attracting innovative businesses and skilled workers."
    } else if params.digitalization > 2.0 {
        "Moderate digital investment would help maintain competitiveness without closing \
         the gap with digital leaders."
    } else {
        "Limited digital investment risks widening the technology gap with neighboring \
         cities, potentially affecting economic development."
    };

    let recommendation = if params.digitalization > 3.0
        && params.population_growth > 0.3
        && params.interest_rate < 3.0
    {
        "The combination of positive population growth, manageable interest rates, and \
         strong digital investment creates favorable conditions for economic development. \
         Focus on leveraging technology to address employment challenges while ensuring \
         housing development keeps pace with population growth."
    } else if params.digitalization > 3.0 && params.population_growth < 0.3 {
        "With limited population growth but strong digital investment, focus on quality \
         over quantity - attracting high-skilled workers and innovative businesses through \
         digital leadership, while addressing structural economic challenges."
    } else if params.digitalization < 3.0 && params.population_growth > 0.5 {
        "Population growth without corresponding digital investment risks creating a \
         growth imbalance. Consider reallocating resources to improve digital \
         infrastructure and workforce skills to maximize the benefits of population \
         growth."
    } else {
        "Based on current parameter settings, Duisburg faces challenges in maintaining \
         competitive position. Consider a more balanced approach with moderate investments \
         in both physical infrastructure and digital transformation to create sustainable \
         growth conditions."
    };

    ScenarioInsights {
        population: population.to_string(),
        housing: housing.to_string(),
        digitalization: digitalization.to_string(),
        recommendation: recommendation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DuisburgDataset, SeriesProvider};
    use compute::testing::{annual_series, assert_f64_eq};
    use model::Domain;

    #[test]
    fn test_observed_gdp_reads_as_strong_growth() {
        // 15.2 -> 17.3 averages about 2.7% per year, past the 2% threshold.
        let series = DuisburgDataset::new().series(Domain::Gdp).unwrap();
        assert_eq!(gdp_trend(&series), GdpTrend::Strong);
    }

    #[test]
    fn test_gdp_trend_thresholds() {
        let strong = annual_series(2018, "gdp", &[10.0, 10.5, 11.0]);
        assert_eq!(gdp_trend(&strong), GdpTrend::Strong);

        let flat = annual_series(2018, "gdp", &[10.0, 10.0, 10.0]);
        assert_eq!(gdp_trend(&flat), GdpTrend::Steady);

        let declining = annual_series(2018, "gdp", &[10.0, 9.5, 9.0]);
        assert_eq!(gdp_trend(&declining), GdpTrend::Declining);
    }

    #[test]
    fn test_gdp_trend_short_series_is_steady() {
        let single = annual_series(2023, "gdp", &[17.3]);
        assert_eq!(gdp_trend(&single), GdpTrend::Steady);
    }

    #[test]
    fn test_default_scenario_outlook() {
        // Reset sliders: 0.5% population growth, no rate change, no digital
        // push. Without any digital investment the growth reading stays
        // limited even though population grows.
        let outlook = scenario_outlook(&ScenarioParams::default());
        assert_eq!(outlook.growth_potential, GrowthPotential::Limited);
        assert_eq!(outlook.housing_market, HousingOutlook::Growth);
        assert_eq!(outlook.competitiveness, CompetitivenessOutlook::Declining);
        assert_f64_eq(outlook.growth_score, 40.0, 1e-9);
        assert_f64_eq(outlook.housing_score, 47.5, 1e-9);
        assert_f64_eq(outlook.competitiveness_score, 40.0, 1e-9);
    }

    #[test]
    fn test_expansion_scenario_reads_strong() {
        let mut params = ScenarioParams::default();
        params.population_growth = 1.5;
        params.digitalization = 6.0;
        params.interest_rate = 0.5;

        let outlook = scenario_outlook(&params);
        assert_eq!(outlook.growth_potential, GrowthPotential::Strong);
        assert_eq!(outlook.housing_market, HousingOutlook::Overheating);
        assert_eq!(outlook.competitiveness, CompetitivenessOutlook::Improving);
    }

    #[test]
    fn test_tightening_scenario_cools_housing() {
        let mut params = ScenarioParams::default();
        params.interest_rate = 4.0;
        params.population_growth = 0.2;

        let outlook = scenario_outlook(&params);
        assert_eq!(outlook.housing_market, HousingOutlook::Stable);
        // 40 + 3 - 10
        assert_f64_eq(outlook.housing_score, 33.0, 1e-9);
    }

    #[test]
    fn test_insight_lines_follow_thresholds() {
        let mut params = ScenarioParams::default();
        params.population_growth = -0.5;
        params.interest_rate = 4.0;
        params.digitalization = 7.0;

        let insights = scenario_insights(&params);
        assert!(insights.population.contains("decline"));
        assert!(insights.housing.contains("reduce housing demand"));
        assert!(insights.digitalization.contains("technology leader"));
    }

    #[test]
    fn test_recommendation_branches() {
        let favorable = {
            let mut params = ScenarioParams::default();
            params.digitalization = 5.0;
            params.population_growth = 1.0;
            params.interest_rate = 1.0;
            params
        };
        assert!(
            scenario_insights(&favorable)
                .recommendation
                .contains("favorable conditions")
        );

        let digital_only = {
            let mut params = ScenarioParams::default();
            params.digitalization = 5.0;
            params.population_growth = 0.0;
            params
        };
        assert!(
            scenario_insights(&digital_only)
                .recommendation
                .contains("quality over quantity")
        );

        let growth_only = {
            let mut params = ScenarioParams::default();
            params.digitalization = 1.0;
            params.population_growth = 1.0;
            params
        };
        assert!(
            scenario_insights(&growth_only)
                .recommendation
                .contains("growth imbalance")
        );

        let baseline = ScenarioParams::default();
        assert!(
            scenario_insights(&baseline)
                .recommendation
                .contains("balanced approach")
        );
    }
}
