//! Built-in observed datasets for the city dashboard.
//!
//! The dashboard's indicator tables live here as typed constants behind the
//! `SeriesProvider` seam, so another data source can be plugged in without
//! touching the projection code. A lookup the provider does not cover is a
//! typed error; nothing is silently substituted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{BenchmarkPosition, CityIndicator, TrendDirection};
use model::{Domain, Period, Quarter, Series, SeriesPoint};

use crate::error::{EngineError, Result};

/// Source of observed indicator series and city comparison tables.
pub trait SeriesProvider {
    /// Key of the city the provider covers, e.g. `duisburg`.
    fn city_key(&self) -> &str;

    /// Observed series for the indicator family.
    fn series(&self, domain: Domain) -> Result<Series>;

    /// Comparison rows for the indicator across peer cities.
    fn city_comparison(&self, domain: Domain) -> Result<Vec<CityIndicator>>;
}

/// Headline metrics shown on the overview tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityOverview {
    pub population: u64,
    /// Gross domestic product in billions of euros
    pub gdp_billions: f64,
    pub unemployment_rate: f64,
    pub inflation_rate: f64,
    /// Average yearly household income in euros
    pub average_income: f64,
    pub gdp_growth_rate: f64,
}

/// Employment share of one economic sector, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectorShare {
    pub sector: String,
    pub share: f64,
}

/// Labor market snapshot for the latest observed year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmploymentSnapshot {
    pub labor_force: u64,
    pub employed: u64,
    pub unemployed: u64,
    pub youth_unemployment_rate: f64,
    pub sectors: Vec<SectorShare>,
}

/// Built-in Duisburg data, observed through 2023/2024.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuisburgDataset;

impl DuisburgDataset {
    pub fn new() -> Self {
        Self
    }

    /// Headline metrics for the overview tab.
    pub fn overview(&self) -> CityOverview {
        CityOverview {
            population: 498_590,
            gdp_billions: 17.3,
            unemployment_rate: 9.8,
            inflation_rate: 2.4,
            average_income: 42_350.0,
            gdp_growth_rate: 1.8,
        }
    }

    /// Labor market snapshot for 2023.
    pub fn employment(&self) -> EmploymentSnapshot {
        EmploymentSnapshot {
            labor_force: 243_500,
            employed: 219_637,
            unemployed: 23_863,
            youth_unemployment_rate: 12.5,
            sectors: vec![
                sector("Industrial & Manufacturing", 28.0),
                sector("Logistics & Transportation", 23.0),
                sector("Retail & Services", 25.0),
                sector("Public Administration", 16.0),
                sector("Others", 8.0),
            ],
        }
    }
}

impl SeriesProvider for DuisburgDataset {
    fn city_key(&self) -> &str {
        "duisburg"
    }

    fn series(&self, domain: Domain) -> Result<Series> {
        debug!(%domain, "loading built-in series");
        let series = match domain {
            Domain::Population => population_series()?,
            Domain::RealEstate => real_estate_series()?,
            Domain::IctAdoption => ict_series()?,
            Domain::Gdp => gdp_series()?,
            Domain::Unemployment => unemployment_series()?,
        };
        Ok(series)
    }

    fn city_comparison(&self, domain: Domain) -> Result<Vec<CityIndicator>> {
        match domain {
            Domain::Population => Ok(vec![
                city("Duisburg", 503_707.0, 0.6, TrendDirection::Up, None),
                city("Dortmund", 588_250.0, 0.4, TrendDirection::Up, None),
                city("Essen", 579_432.0, 0.2, TrendDirection::Up, None),
                city("Bochum", 364_628.0, -0.1, TrendDirection::Down, None),
                city("Münster", 315_293.0, 1.2, TrendDirection::Up, None),
            ]),
            Domain::RealEstate => Ok(vec![
                city("Duisburg", 9.5, 2.2, TrendDirection::Up, None),
                city("Dortmund", 10.3, 3.0, TrendDirection::Up, None),
                city("Essen", 10.6, 2.9, TrendDirection::Up, None),
                city("Bochum", 9.7, 2.1, TrendDirection::Up, None),
                city("Münster", 12.8, 3.4, TrendDirection::Up, None),
            ]),
            Domain::Unemployment => Ok(vec![
                city(
                    "Duisburg",
                    12.8,
                    0.2,
                    TrendDirection::Up,
                    Some(BenchmarkPosition::Above),
                ),
                city(
                    "Dortmund",
                    10.9,
                    0.1,
                    TrendDirection::Up,
                    Some(BenchmarkPosition::Above),
                ),
                city(
                    "Essen",
                    11.2,
                    0.0,
                    TrendDirection::Steady,
                    Some(BenchmarkPosition::Above),
                ),
                city(
                    "Bochum",
                    9.6,
                    -0.3,
                    TrendDirection::Down,
                    Some(BenchmarkPosition::Above),
                ),
                city(
                    "Münster",
                    5.7,
                    -0.2,
                    TrendDirection::Down,
                    Some(BenchmarkPosition::Below),
                ),
            ]),
            Domain::IctAdoption => Ok(vec![
                city(
                    "Duisburg",
                    19.6,
                    1.8,
                    TrendDirection::Up,
                    Some(BenchmarkPosition::Below),
                ),
                city(
                    "Dortmund",
                    24.3,
                    2.1,
                    TrendDirection::Up,
                    Some(BenchmarkPosition::Above),
                ),
                city(
                    "Essen",
                    22.7,
                    1.9,
                    TrendDirection::Up,
                    Some(BenchmarkPosition::Average),
                ),
                city(
                    "Bochum",
                    20.5,
                    2.2,
                    TrendDirection::Up,
                    Some(BenchmarkPosition::Average),
                ),
                city(
                    "Münster",
                    27.8,
                    2.6,
                    TrendDirection::Up,
                    Some(BenchmarkPosition::Above),
                ),
            ]),
            Domain::Gdp => Err(EngineError::UnknownIndicator(domain.to_string())),
        }
    }
}

fn sector(name: &str, share: f64) -> SectorShare {
    SectorShare {
        sector: name.to_string(),
        share,
    }
}

fn city(
    name: &str,
    value: f64,
    change: f64,
    trend: TrendDirection,
    benchmark: Option<BenchmarkPosition>,
) -> CityIndicator {
    CityIndicator {
        name: name.to_string(),
        value,
        change,
        trend,
        benchmark,
    }
}

fn annual_point(year: i32) -> SeriesPoint {
    SeriesPoint::new(Period::year(year), BTreeMap::new())
}

/// Residents at year end, 2016 through 2023.
fn population_series() -> Result<Series> {
    let values = [
        (2016, 498_500.0),
        (2017, 496_769.0),
        (2018, 497_248.0),
        (2019, 497_343.0),
        (2020, 494_544.0),
        (2021, 493_813.0),
        (2022, 500_857.0),
        (2023, 503_707.0),
    ];
    let points = values
        .into_iter()
        .map(|(year, count)| annual_point(year).with_value("population", count))
        .collect();
    Ok(Series::new(points)?)
}

/// Quarterly price levels 2019 Q1 through 2024 Q2: apartment rent in €/m²,
/// house and land prices in €/m².
fn real_estate_series() -> Result<Series> {
    fn quarter_point(year: i32, quarter: Quarter, rent: f64, house: f64, land: f64) -> SeriesPoint {
        SeriesPoint::new(Period::quarterly(year, quarter), BTreeMap::new())
            .with_value("apartment_rent", rent)
            .with_value("house_price", house)
            .with_value("land_price", land)
    }

    let points = vec![
        quarter_point(2019, Quarter::Q1, 6.9, 1850.0, 230.0),
        quarter_point(2019, Quarter::Q2, 7.0, 1880.0, 235.0),
        quarter_point(2019, Quarter::Q3, 7.2, 1920.0, 240.0),
        quarter_point(2019, Quarter::Q4, 7.3, 1950.0, 245.0),
        quarter_point(2020, Quarter::Q1, 7.4, 1990.0, 250.0),
        quarter_point(2020, Quarter::Q2, 7.5, 2030.0, 255.0),
        quarter_point(2020, Quarter::Q3, 7.6, 2070.0, 260.0),
        quarter_point(2020, Quarter::Q4, 7.7, 2110.0, 265.0),
        quarter_point(2021, Quarter::Q1, 7.8, 2170.0, 270.0),
        quarter_point(2021, Quarter::Q2, 7.9, 2230.0, 275.0),
        quarter_point(2021, Quarter::Q3, 8.1, 2290.0, 280.0),
        quarter_point(2021, Quarter::Q4, 8.2, 2360.0, 290.0),
        quarter_point(2022, Quarter::Q1, 8.3, 2450.0, 300.0),
        quarter_point(2022, Quarter::Q2, 8.5, 2540.0, 310.0),
        quarter_point(2022, Quarter::Q3, 8.7, 2630.0, 320.0),
        quarter_point(2022, Quarter::Q4, 8.9, 2720.0, 330.0),
        quarter_point(2023, Quarter::Q1, 9.0, 2780.0, 340.0),
        quarter_point(2023, Quarter::Q2, 9.1, 2820.0, 345.0),
        quarter_point(2023, Quarter::Q3, 9.2, 2840.0, 350.0),
        quarter_point(2023, Quarter::Q4, 9.3, 2820.0, 350.0),
        quarter_point(2024, Quarter::Q1, 9.4, 2810.0, 348.0),
        quarter_point(2024, Quarter::Q2, 9.5, 2820.0, 350.0),
    ];
    Ok(Series::new(points)?)
}

/// Share of businesses using each technology, 2020 through 2024.
fn ict_series() -> Result<Series> {
    let values = [
        (2020, 95.8, 30.2, 9.9, 11.5),
        (2021, 96.2, 32.5, 12.8, 11.8),
        (2022, 96.8, 35.3, 15.7, 12.0),
        (2023, 97.3, 36.5, 17.8, 12.2),
        (2024, 97.7, 38.0, 19.6, 12.5),
    ];
    let points = values
        .into_iter()
        .map(|(year, internet, cloud, ai, ecommerce)| {
            annual_point(year)
                .with_value("internet", internet)
                .with_value("cloud", cloud)
                .with_value("ai", ai)
                .with_value("ecommerce", ecommerce)
        })
        .collect();
    Ok(Series::new(points)?)
}

/// Gross domestic product in billions of euros, 2018 through 2023.
fn gdp_series() -> Result<Series> {
    let values = [
        (2018, 15.2),
        (2019, 15.9),
        (2020, 15.3),
        (2021, 16.2),
        (2022, 16.8),
        (2023, 17.3),
    ];
    let points = values
        .into_iter()
        .map(|(year, gdp)| annual_point(year).with_value("gdp", gdp))
        .collect();
    Ok(Series::new(points)?)
}

/// City and national unemployment rates in percent, 2018 through 2023.
fn unemployment_series() -> Result<Series> {
    let values = [
        (2018, 11.9, 5.2),
        (2019, 11.2, 5.0),
        (2020, 11.8, 5.9),
        (2021, 10.9, 5.7),
        (2022, 10.3, 5.3),
        (2023, 9.8, 5.0),
    ];
    let points = values
        .into_iter()
        .map(|(year, rate, national)| {
            annual_point(year)
                .with_value("rate", rate)
                .with_value("national_rate", national)
        })
        .collect();
    Ok(Series::new(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_a_series() {
        let dataset = DuisburgDataset::new();
        for domain in Domain::ALL {
            let series = dataset.series(domain).expect("built-in series must load");
            assert!(series.len() >= 2, "{domain} series too short to project");
            assert!(series.points().iter().all(|point| !point.is_forecast()));
        }
    }

    #[test]
    fn test_population_series_matches_observed_history() {
        let series = DuisburgDataset::new()
            .series(Domain::Population)
            .unwrap();
        assert_eq!(series.len(), 8);
        assert_eq!(series.first().map(|p| p.period()), Some(Period::year(2016)));
        assert_eq!(
            series.last().and_then(|p| p.value("population")),
            Some(503_707.0)
        );
    }

    #[test]
    fn test_real_estate_series_is_quarterly() {
        let series = DuisburgDataset::new().series(Domain::RealEstate).unwrap();
        assert_eq!(series.len(), 22);
        assert_eq!(
            series.last().map(|p| p.period()),
            Some(Period::quarterly(2024, Quarter::Q2))
        );
        assert_eq!(
            series.last().and_then(|p| p.value("apartment_rent")),
            Some(9.5)
        );
        assert_eq!(series.field_values("house_price").len(), 22);
    }

    #[test]
    fn test_comparison_rows_cover_the_peer_cities() {
        let dataset = DuisburgDataset::new();
        let rows = dataset.city_comparison(Domain::Unemployment).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Duisburg");
        assert_eq!(rows[0].benchmark, Some(BenchmarkPosition::Above));

        // Population rows carry no benchmark column.
        let rows = dataset.city_comparison(Domain::Population).unwrap();
        assert!(rows.iter().all(|row| row.benchmark.is_none()));
    }

    #[test]
    fn test_gdp_has_no_comparison_table() {
        let err = DuisburgDataset::new()
            .city_comparison(Domain::Gdp)
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownIndicator(_)));
    }

    #[test]
    fn test_overview_snapshot() {
        let overview = DuisburgDataset::new().overview();
        assert_eq!(overview.population, 498_590);
        assert_eq!(overview.gdp_billions, 17.3);
        assert_eq!(overview.average_income, 42_350.0);
    }

    #[test]
    fn test_employment_sector_shares_sum_to_full_economy() {
        let employment = DuisburgDataset::new().employment();
        let total: f64 = employment.sectors.iter().map(|s| s.share).sum();
        assert_eq!(total, 100.0);
        assert_eq!(
            employment.employed + employment.unemployed,
            employment.labor_force
        );
    }
}
