//! Core types for the location subsystem.

use serde::Serialize;
use thiserror::Error;

/// Smallest unit of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quartier {
    pub name: &'static str,
}

/// Administrative subdivision of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Commune {
    pub name: &'static str,
    pub quartiers: &'static [Quartier],
}

/// Top-level unit. Names are unique across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub communes: &'static [Commune],
}

impl City {
    pub fn quartier_count(&self) -> usize {
        self.communes.iter().map(|c| c.quartiers.len()).sum()
    }
}

/// A flat city entry for listings (CLI, `/api/cities/list`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityInfo {
    pub name: String,
    pub communes: usize,
    pub quartiers: usize,
}

impl From<&City> for CityInfo {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.to_string(),
            communes: city.communes.len(),
            quartiers: city.quartier_count(),
        }
    }
}

/// Errors raised when a submitted location is checked against the dataset.
///
/// Lookups never produce these: an unknown name simply yields no children.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("No city selected")]
    MissingCity,

    #[error("Unknown city: '{0}'")]
    UnknownCity(String),

    #[error("Commune '{commune}' is not part of '{city}'")]
    UnknownCommune { city: String, commune: String },

    #[error("Quartier '{quartier}' is not part of '{commune}, {city}'")]
    UnknownQuartier {
        city: String,
        commune: String,
        quartier: String,
    },

    #[error("A quartier was given without a commune")]
    QuartierWithoutCommune,
}
