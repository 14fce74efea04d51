//! Cascading city → commune → quartier selection.
//!
//! A [`SelectionState`] belongs to one form. Changing a level clears every
//! level below it, unconditionally. Option lists are derived from the
//! current values on every call and are never cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::location::{
    all_cities, communes_in, quartiers_in, City, Commune, LocationError, Quartier,
};
use crate::record::LocationRecord;

/// One of the three selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationField {
    City,
    Commune,
    Quartier,
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::Commune => write!(f, "commune"),
            Self::Quartier => write!(f, "quartier"),
        }
    }
}

/// The selected (city, commune, quartier) of one form. Empty means unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    city: String,
    commune: String,
    quartier: String,
    cities: &'static [City],
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Empty selection over the built-in dataset.
    pub fn new() -> Self {
        Self::with_dataset(all_cities())
    }

    /// Empty selection over a specific dataset.
    pub fn with_dataset(cities: &'static [City]) -> Self {
        Self {
            city: String::new(),
            commune: String::new(),
            quartier: String::new(),
            cities,
        }
    }

    /// Rebuild a selection by replaying the three changes top-down.
    pub fn restore(cities: &'static [City], city: &str, commune: &str, quartier: &str) -> Self {
        let mut state = Self::with_dataset(cities);
        state.on_city_changed(city);
        state.on_commune_changed(commune);
        state.on_quartier_changed(quartier);
        state
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn commune(&self) -> &str {
        &self.commune
    }

    pub fn quartier(&self) -> &str {
        &self.quartier
    }

    /// Select a city. Commune and quartier are always cleared, even when the
    /// city is unchanged.
    pub fn on_city_changed(&mut self, city: &str) {
        self.city = city.to_string();
        self.commune.clear();
        self.quartier.clear();
        debug!(
            city,
            communes = self.available_communes().len(),
            "city changed; commune and quartier cleared"
        );
    }

    /// Select a commune. The quartier is always cleared.
    pub fn on_commune_changed(&mut self, commune: &str) {
        self.commune = commune.to_string();
        self.quartier.clear();
        debug!(
            city = %self.city,
            commune,
            quartiers = self.available_quartiers().len(),
            "commune changed; quartier cleared"
        );
    }

    /// Select a quartier. Leaf level, nothing cascades.
    pub fn on_quartier_changed(&mut self, quartier: &str) {
        self.quartier = quartier.to_string();
        debug!(quartier, "quartier changed");
    }

    /// Single entry point for all three selectors.
    pub fn apply(&mut self, field: LocationField, value: &str) {
        match field {
            LocationField::City => self.on_city_changed(value),
            LocationField::Commune => self.on_commune_changed(value),
            LocationField::Quartier => self.on_quartier_changed(value),
        }
    }

    pub fn available_cities(&self) -> &'static [City] {
        self.cities
    }

    pub fn available_communes(&self) -> &'static [Commune] {
        communes_in(self.cities, &self.city)
    }

    pub fn available_quartiers(&self) -> &'static [Quartier] {
        quartiers_in(self.cities, &self.city, &self.commune)
    }

    /// Advisory: the commune selector should be inert until a city is set.
    pub fn commune_selectable(&self) -> bool {
        !self.city.is_empty()
    }

    /// Advisory: the quartier selector should be inert until a commune is set.
    pub fn quartier_selectable(&self) -> bool {
        !self.commune.is_empty()
    }

    /// Snapshot for a presentation layer. `form_disabled` turns off all three
    /// selectors (e.g. while the form is submitting).
    pub fn view(&self, form_disabled: bool) -> SelectorView {
        SelectorView {
            city: WidgetView {
                value: self.city.clone(),
                options: self.available_cities().iter().map(|c| c.name).collect(),
                enabled: !form_disabled,
            },
            commune: WidgetView {
                value: self.commune.clone(),
                options: self.available_communes().iter().map(|c| c.name).collect(),
                enabled: !form_disabled && self.commune_selectable(),
            },
            quartier: WidgetView {
                value: self.quartier.clone(),
                options: self.available_quartiers().iter().map(|q| q.name).collect(),
                enabled: !form_disabled && self.quartier_selectable(),
            },
        }
    }

    /// Turn the selection into a record. Only the city is required; names are
    /// kept as entered.
    pub fn submit(&self) -> Result<LocationRecord, LocationError> {
        if self.city.is_empty() {
            return Err(LocationError::MissingCity);
        }
        Ok(LocationRecord::new(&self.city, &self.commune, &self.quartier))
    }
}

/// Options and state of a single selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub value: String,
    pub options: Vec<&'static str>,
    pub enabled: bool,
}

/// The three selectors of a location form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    pub city: WidgetView,
    pub commune: WidgetView,
    pub quartier: WidgetView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::communes_for_city;

    static SMALL: &[City] = &[City {
        name: "Testville",
        communes: &[
            Commune {
                name: "Nord",
                quartiers: &[Quartier { name: "Alpha" }, Quartier { name: "Beta" }],
            },
            Commune {
                name: "Sud",
                quartiers: &[Quartier { name: "Gamma" }],
            },
        ],
    }];

    fn abidjan_cocody_angre() -> SelectionState {
        let mut s = SelectionState::new();
        s.on_city_changed("Abidjan");
        s.on_commune_changed("Cocody");
        s.on_quartier_changed("Cocody Angré");
        s
    }

    #[test]
    fn test_full_selection() {
        let s = abidjan_cocody_angre();
        assert_eq!((s.city(), s.commune(), s.quartier()), ("Abidjan", "Cocody", "Cocody Angré"));
        assert!(s.available_quartiers().iter().any(|q| q.name == "Cocody Angré"));
    }

    #[test]
    fn test_city_change_resets_lower_levels() {
        let mut s = abidjan_cocody_angre();
        s.on_city_changed("Bouaké");
        assert_eq!((s.city(), s.commune(), s.quartier()), ("Bouaké", "", ""));
        assert_eq!(s.available_communes(), communes_for_city("Bouaké"));
        assert!(s.available_quartiers().is_empty());
    }

    #[test]
    fn test_same_city_still_resets() {
        let mut s = abidjan_cocody_angre();
        s.on_city_changed("Abidjan");
        assert_eq!((s.commune(), s.quartier()), ("", ""));
        s.on_city_changed("Abidjan");
        assert_eq!((s.commune(), s.quartier()), ("", ""));
    }

    #[test]
    fn test_commune_change_resets_quartier() {
        let mut s = abidjan_cocody_angre();
        s.on_commune_changed("Plateau");
        assert_eq!(s.quartier(), "");
        assert_eq!(s.available_quartiers().len(), 4);
    }

    #[test]
    fn test_unknown_names_give_empty_lists() {
        let mut s = SelectionState::new();
        s.on_city_changed("Atlantis");
        assert!(s.available_communes().is_empty());
        s.on_commune_changed("Cocody");
        assert!(s.available_quartiers().is_empty());
        // Updates are never refused.
        assert_eq!(s.commune(), "Cocody");
    }

    #[test]
    fn test_apply_dispatches_with_cascade() {
        let mut s = abidjan_cocody_angre();
        s.apply(LocationField::Commune, "Yopougon");
        assert_eq!((s.commune(), s.quartier()), ("Yopougon", ""));
        s.apply(LocationField::Quartier, "Yopougon Maroc");
        assert_eq!(s.quartier(), "Yopougon Maroc");
        s.apply(LocationField::City, "Man");
        assert_eq!((s.city(), s.commune(), s.quartier()), ("Man", "", ""));
    }

    #[test]
    fn test_restore_replays_changes() {
        let s = SelectionState::restore(all_cities(), "Abidjan", "Cocody", "Cocody Angré");
        assert_eq!(s, abidjan_cocody_angre());
    }

    #[test]
    fn test_custom_dataset() {
        let mut s = SelectionState::with_dataset(SMALL);
        assert_eq!(s.view(false).city.options, ["Testville"]);

        s.on_city_changed("Abidjan");
        assert!(s.available_communes().is_empty());

        s.on_city_changed("Testville");
        let communes: Vec<&str> = s.available_communes().iter().map(|c| c.name).collect();
        assert_eq!(communes, ["Nord", "Sud"]);

        s.on_commune_changed("Nord");
        let quartiers: Vec<&str> = s.available_quartiers().iter().map(|q| q.name).collect();
        assert_eq!(quartiers, ["Alpha", "Beta"]);

        let restored = SelectionState::restore(SMALL, "Testville", "Sud", "Gamma");
        assert_eq!(restored.available_quartiers(), [Quartier { name: "Gamma" }]);
    }

    #[test]
    fn test_selectable_flags() {
        let mut s = SelectionState::new();
        assert!(!s.commune_selectable());
        assert!(!s.quartier_selectable());
        s.on_city_changed("Daloa");
        assert!(s.commune_selectable());
        assert!(!s.quartier_selectable());
        s.on_commune_changed("Daloa Centre");
        assert!(s.quartier_selectable());
    }

    #[test]
    fn test_view() {
        let mut s = SelectionState::new();
        s.on_city_changed("Bouaké");
        let view = s.view(false);
        assert_eq!(view.city.options.len(), 8);
        assert!(view.city.enabled);
        assert_eq!(view.commune.options, ["Bouaké Centre", "Gonfreville"]);
        assert!(view.commune.enabled);
        assert!(view.quartier.options.is_empty());
        assert!(!view.quartier.enabled);

        let disabled = s.view(true);
        assert!(!disabled.city.enabled);
        assert!(!disabled.commune.enabled);
    }

    #[test]
    fn test_submit() {
        assert_eq!(SelectionState::new().submit(), Err(LocationError::MissingCity));

        let mut s = SelectionState::new();
        s.on_city_changed("Gagnoa");
        let rec = s.submit().unwrap();
        assert_eq!(rec, LocationRecord::new("Gagnoa", "", ""));

        let rec = abidjan_cocody_angre().submit().unwrap();
        assert_eq!(rec.display_line(), "Abidjan, Cocody, Cocody Angré");
    }

    #[test]
    fn test_field_serde() {
        let f: LocationField = serde_json::from_str("\"commune\"").unwrap();
        assert_eq!(f, LocationField::Commune);
        assert_eq!(LocationField::Quartier.to_string(), "quartier");
    }
}
