//! Location subsystem: the embedded city → commune → quartier table and the
//! lookups over it.

pub mod dataset;
pub mod lookup;
pub mod types;

pub use dataset::all_cities;
pub use lookup::{
    city_list, communes_for_city, communes_in, find_city, find_commune, quartiers_for_commune,
    quartiers_in, resolve_location,
};
pub use types::{City, CityInfo, Commune, LocationError, Quartier};
