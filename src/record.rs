//! The location triple as it leaves a form and is stored on a job or profile.

use serde::{Deserialize, Serialize};

/// A submitted location. City is required; lower levels are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub city: String,
    #[serde(default)]
    pub commune: Option<String>,
    #[serde(default)]
    pub quartier: Option<String>,
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl LocationRecord {
    /// Build a record; empty commune / quartier are stored as `None`.
    pub fn new(city: &str, commune: &str, quartier: &str) -> Self {
        Self {
            city: city.to_string(),
            commune: non_empty(commune),
            quartier: non_empty(quartier),
        }
    }

    /// "Abidjan, Cocody, Cocody Angré", skipping missing levels.
    pub fn display_line(&self) -> String {
        let mut line = self.city.clone();
        for part in [&self.commune, &self.quartier].into_iter().flatten() {
            line.push_str(", ");
            line.push_str(part);
        }
        line
    }
}

/// City filter used when searching records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    City(String),
}

impl CityFilter {
    /// `"all"` and the empty string mean no filter; anything else is a city name.
    pub fn parse(s: &str) -> Self {
        match s {
            "" | "all" => Self::All,
            city => Self::City(city.to_string()),
        }
    }

    pub fn matches(&self, record: &LocationRecord) -> bool {
        self.matches_city(&record.city)
    }

    /// Exact, case-sensitive comparison against a city name.
    pub fn matches_city(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::City(city) => city == name,
        }
    }
}
