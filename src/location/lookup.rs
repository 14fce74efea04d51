//! Child lookups over the location table.
//!
//! Matching is exact and case-sensitive. A miss at any level yields an empty
//! slice; nothing here fails.

use super::dataset::all_cities;
use super::types::{City, CityInfo, Commune, LocationError, Quartier};
use crate::record::LocationRecord;

/// Find a city by exact name.
pub fn find_city<'a>(cities: &'a [City], name: &str) -> Option<&'a City> {
    cities.iter().find(|c| c.name == name)
}

/// Find a commune by exact name under the named city.
pub fn find_commune<'a>(cities: &'a [City], city: &str, commune: &str) -> Option<&'a Commune> {
    find_city(cities, city)?.communes.iter().find(|c| c.name == commune)
}

/// Communes of `city` within `cities`.
pub fn communes_in(cities: &[City], city: &str) -> &'static [Commune] {
    find_city(cities, city).map(|c| c.communes).unwrap_or(&[])
}

/// Quartiers of `commune` under `city` within `cities`.
pub fn quartiers_in(cities: &[City], city: &str, commune: &str) -> &'static [Quartier] {
    find_commune(cities, city, commune)
        .map(|c| c.quartiers)
        .unwrap_or(&[])
}

/// Communes of a city in the built-in dataset.
pub fn communes_for_city(city: &str) -> &'static [Commune] {
    communes_in(all_cities(), city)
}

/// Quartiers of a commune in the built-in dataset.
///
/// The commune must belong to `city`: a valid commune name from another city
/// gives an empty result.
pub fn quartiers_for_commune(city: &str, commune: &str) -> &'static [Quartier] {
    quartiers_in(all_cities(), city, commune)
}

/// Summary of every city (for listings / API).
pub fn city_list(cities: &[City]) -> Vec<CityInfo> {
    cities.iter().map(CityInfo::from).collect()
}

/// Check a submitted triple against `cities`.
///
/// Empty `commune` / `quartier` mean "not given". The record keeps the
/// dataset spelling, which is identical to the input on success.
pub fn resolve_location(
    cities: &[City],
    city: &str,
    commune: &str,
    quartier: &str,
) -> Result<LocationRecord, LocationError> {
    if city.is_empty() {
        return Err(LocationError::MissingCity);
    }
    let found_city = find_city(cities, city)
        .ok_or_else(|| LocationError::UnknownCity(city.to_string()))?;

    if commune.is_empty() {
        if !quartier.is_empty() {
            return Err(LocationError::QuartierWithoutCommune);
        }
        return Ok(LocationRecord::new(found_city.name, "", ""));
    }

    let found_commune = found_city
        .communes
        .iter()
        .find(|c| c.name == commune)
        .ok_or_else(|| LocationError::UnknownCommune {
            city: city.to_string(),
            commune: commune.to_string(),
        })?;

    if !quartier.is_empty() && !found_commune.quartiers.iter().any(|q| q.name == quartier) {
        return Err(LocationError::UnknownQuartier {
            city: city.to_string(),
            commune: commune.to_string(),
            quartier: quartier.to_string(),
        });
    }

    Ok(LocationRecord::new(found_city.name, found_commune.name, quartier))
}
