use std::fmt;

use serde::{Deserialize, Serialize};

/// The indicator families the dashboard tracks for the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Annual resident count.
    Population,
    /// Quarterly apartment rent, house price, and land price levels.
    RealEstate,
    /// Annual share of businesses using internet, cloud, AI, and e-commerce.
    IctAdoption,
    /// Annual gross domestic product in billions of euros.
    Gdp,
    /// Annual city and national unemployment rates.
    Unemployment,
}

impl Domain {
    /// All indicator families, in dashboard tab order.
    pub const ALL: [Domain; 5] = [
        Domain::Population,
        Domain::RealEstate,
        Domain::IctAdoption,
        Domain::Gdp,
        Domain::Unemployment,
    ];

    /// Stable key used in serialized payloads and error messages.
    pub fn key(&self) -> &'static str {
        match self {
            Domain::Population => "population",
            Domain::RealEstate => "real_estate",
            Domain::IctAdoption => "ict_adoption",
            Domain::Gdp => "gdp",
            Domain::Unemployment => "unemployment",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
