//! Embedded Côte d'Ivoire location table.
//!
//! Order is the authored order and is what every listing returns.

use super::types::{City, Commune, Quartier};

const fn q(name: &'static str) -> Quartier {
    Quartier { name }
}

const CITIES: &[City] = &[
    City {
        name: "Abidjan",
        communes: &[
            Commune {
                name: "Plateau",
                quartiers: &[
                    q("Plateau Centre"),
                    q("Plateau Administratif"),
                    q("Plateau Lagunaire"),
                    q("Plateau Nord"),
                ],
            },
            Commune {
                name: "Cocody",
                quartiers: &[
                    q("Riviera Golf"),
                    q("Deux-Plateaux Vallon"),
                    q("Cocody Angré"),
                    q("Cocody Riviera Palmeraie"),
                    q("Cocody II Plateaux"),
                    q("Cocody Centre"),
                    q("Cocody Danga"),
                ],
            },
            Commune {
                name: "Adjamé",
                quartiers: &[
                    q("Adjamé Marché"),
                    q("Adjamé Liberté"),
                    q("Adjamé Bracodi"),
                    q("Adjamé Williamsville"),
                ],
            },
            Commune {
                name: "Yopougon",
                quartiers: &[
                    q("Yopougon Sideci"),
                    q("Yopougon Millionnaire"),
                    q("Yopougon Maroc"),
                    q("Yopougon Andokoi"),
                    q("Yopougon Siporex"),
                ],
            },
            Commune {
                name: "Marcory",
                quartiers: &[
                    q("Marcory Zone 4"),
                    q("Marcory Anoumabo"),
                    q("Marcory Résidentiel"),
                    q("Marcory Biafra"),
                ],
            },
            Commune {
                name: "Treichville",
                quartiers: &[
                    q("Treichville Centre"),
                    q("Treichville Biafra"),
                    q("Treichville Ancien Pont"),
                    q("Treichville Belleville"),
                ],
            },
            Commune {
                name: "Koumassi",
                quartiers: &[
                    q("Koumassi Remblais"),
                    q("Koumassi Centre"),
                    q("Koumassi Sicogi"),
                ],
            },
            Commune {
                name: "Port-Bouët",
                quartiers: &[
                    q("Port-Bouët Zone 3"),
                    q("Port-Bouët Aéroport"),
                    q("Port-Bouët Vridi"),
                ],
            },
            Commune {
                name: "Bingerville",
                quartiers: &[q("Bingerville Centre"), q("Bingerville Adiopodoumé")],
            },
        ],
    },
    City {
        name: "Bouaké",
        communes: &[
            Commune {
                name: "Bouaké Centre",
                quartiers: &[q("Commerce"), q("Dar Es Salam"), q("Belleville")],
            },
            Commune {
                name: "Gonfreville",
                quartiers: &[q("Gonfreville Centre"), q("Petit Paris")],
            },
        ],
    },
    City {
        name: "Yamoussoukro",
        communes: &[Commune {
            name: "Yamoussoukro Centre",
            quartiers: &[q("Habitat"), q("Moronou"), q("N'Zuessy")],
        }],
    },
    City {
        name: "San-Pédro",
        communes: &[Commune {
            name: "San-Pédro Centre",
            quartiers: &[q("Bardot"), q("Wharf"), q("Balmer")],
        }],
    },
    City {
        name: "Daloa",
        communes: &[Commune {
            name: "Daloa Centre",
            quartiers: &[q("Tazibouo"), q("Lobia"), q("Gbeleban")],
        }],
    },
    City {
        name: "Korhogo",
        communes: &[Commune {
            name: "Korhogo Centre",
            quartiers: &[q("Résidentiel"), q("Tchégbaré"), q("Petit Paris")],
        }],
    },
    City {
        name: "Man",
        communes: &[Commune {
            name: "Man Centre",
            quartiers: &[q("Libreville"), q("Dokoré"), q("Zouatta")],
        }],
    },
    City {
        name: "Gagnoa",
        communes: &[Commune {
            name: "Gagnoa Centre",
            quartiers: &[q("Dioulabougou"), q("Belleville"), q("Château")],
        }],
    },
];

/// The full dataset, in authored order. Never empty.
pub fn all_cities() -> &'static [City] {
    CITIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_not_empty() {
        assert!(!all_cities().is_empty());
        assert!(all_cities().iter().all(|c| !c.communes.is_empty()));
    }

    #[test]
    fn test_dataset_sizes() {
        let cities = all_cities();
        assert_eq!(cities.len(), 8);
        assert_eq!(cities.iter().map(|c| c.communes.len()).sum::<usize>(), 17);
        assert_eq!(cities.iter().map(|c| c.quartier_count()).sum::<usize>(), 59);
    }

    #[test]
    fn test_authored_order() {
        let names: Vec<&str> = all_cities().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["Abidjan", "Bouaké", "Yamoussoukro", "San-Pédro", "Daloa", "Korhogo", "Man", "Gagnoa"]
        );
    }

    #[test]
    fn test_sibling_names_unique() {
        let mut cities = HashSet::new();
        for city in all_cities() {
            assert!(cities.insert(city.name), "duplicate city {}", city.name);

            let mut communes = HashSet::new();
            for commune in city.communes {
                assert!(communes.insert(commune.name), "duplicate commune {}", commune.name);

                let mut quartiers = HashSet::new();
                for quartier in commune.quartiers {
                    assert!(
                        quartiers.insert(quartier.name),
                        "duplicate quartier {}",
                        quartier.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_quartier_names_repeat_across_parents() {
        // "Petit Paris" and "Belleville" live under more than one commune.
        let petit_paris = all_cities()
            .iter()
            .flat_map(|c| c.communes)
            .flat_map(|m| m.quartiers)
            .filter(|q| q.name == "Petit Paris")
            .count();
        assert_eq!(petit_paris, 2);
    }
}
