//! The static list of guessable cities.

use std::collections::HashSet;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use super::geo::Coords;
use super::random::RandomHandle;
use crate::error::DirectoryError;

const BUILTIN_CITIES: &str = include_str!("../../data/us_cities.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub coords: Coords,
    #[serde(default)]
    pub population: Option<NonZeroU64>,
}

impl City {
    pub fn new(name: impl Into<String>, coords: Coords) -> Self {
        Self {
            name: name.into(),
            coords,
            population: None,
        }
    }
}

/// Read-only, ordered, never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct CityDirectory {
    cities: Vec<City>,
}

impl CityDirectory {
    pub fn new(cities: Vec<City>) -> Result<Self, DirectoryError> {
        if cities.is_empty() {
            return Err(DirectoryError::Empty);
        }
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !city.coords.is_valid() {
                return Err(DirectoryError::InvalidCoords {
                    name: city.name.clone(),
                    lon: city.coords.lon,
                    lat: city.coords.lat,
                });
            }
            if !seen.insert(city.name.to_lowercase()) {
                return Err(DirectoryError::DuplicateName(city.name.clone()));
            }
        }
        Ok(Self { cities })
    }

    pub fn from_json(raw: &str) -> Result<Self, DirectoryError> {
        let cities: Vec<City> = serde_json::from_str(raw)?;
        Self::new(cities)
    }

    /// US cities with population above 75k, bundled into the binary.
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::from_json(BUILTIN_CITIES)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Case-insensitive exact name lookup. Callers trim.
    pub fn find(&self, name: &str) -> Option<&City> {
        let needle = name.to_lowercase();
        self.cities.iter().find(|c| c.name.to_lowercase() == needle)
    }

    /// Names starting with `prefix` (case-insensitive), in directory order.
    /// Empty prefix yields nothing.
    pub fn suggest<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let needle = prefix.to_lowercase();
        self.cities
            .iter()
            .filter(move |c| !needle.is_empty() && c.name.to_lowercase().starts_with(&needle))
            .map(|c| c.name.as_str())
    }

    pub fn choose(&self, rng: &RandomHandle) -> &City {
        let len = self.cities.len();
        &self.cities[rng.next_index(len) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::random::SequenceRandom;

    fn sample() -> CityDirectory {
        CityDirectory::new(vec![
            City::new("Springfield", Coords::new(-89.6, 39.8)),
            City::new("Columbus", Coords::new(-83.0, 39.9)),
            City::new("Austin", Coords::new(-97.7, 30.3)),
            City::new("Aurora", Coords::new(-104.8, 39.7)),
        ])
        .unwrap()
    }

    #[test]
    fn empty_directory_is_rejected() {
        assert!(matches!(CityDirectory::new(Vec::new()), Err(DirectoryError::Empty)));
        assert!(matches!(CityDirectory::from_json("[]"), Err(DirectoryError::Empty)));
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let err = CityDirectory::new(vec![
            City::new("Austin", Coords::new(-97.7, 30.3)),
            City::new("AUSTIN", Coords::new(-97.7, 30.3)),
        ])
        .unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateName(name) if name == "AUSTIN"));
    }

    #[test]
    fn out_of_range_coords_are_rejected() {
        let err = CityDirectory::new(vec![City::new("Nowhere", Coords::new(200.0, 0.0))]).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidCoords { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(CityDirectory::from_json("{"), Err(DirectoryError::Parse(_))));
    }

    #[test]
    fn parses_population_when_present() {
        let dir = CityDirectory::from_json(
            r#"[{"name":"Austin","coords":[-97.7,30.3],"population":961855},
                {"name":"Columbus","coords":[-83.0,39.9]}]"#,
        )
        .unwrap();
        assert_eq!(dir.find("austin").and_then(|c| c.population).map(NonZeroU64::get), Some(961_855));
        assert_eq!(dir.find("Columbus").and_then(|c| c.population), None);
    }

    #[test]
    fn zero_population_is_rejected() {
        assert!(CityDirectory::from_json(r#"[{"name":"A","coords":[0,0],"population":0}]"#).is_err());
    }

    #[test]
    fn find_is_case_insensitive_and_exact() {
        let dir = sample();
        assert_eq!(dir.find("COLUMBUS").map(|c| c.name.as_str()), Some("Columbus"));
        assert!(dir.find("Colum").is_none());
        assert!(dir.find("").is_none());
    }

    #[test]
    fn suggest_matches_prefix_in_directory_order() {
        let dir = sample();
        let names: Vec<_> = dir.suggest("AU").collect();
        assert_eq!(names, vec!["Austin", "Aurora"]);
    }

    #[test]
    fn suggest_is_prefix_not_substring() {
        let dir = sample();
        assert_eq!(dir.suggest("field").count(), 0);
    }

    #[test]
    fn suggest_empty_prefix_yields_nothing() {
        assert_eq!(sample().suggest("").count(), 0);
    }

    #[test]
    fn choose_uses_injected_source() {
        let dir = sample();
        let rng = RandomHandle::new(SequenceRandom::new(vec![2, 1]));
        assert_eq!(dir.choose(&rng).name, "Austin");
        assert_eq!(dir.choose(&rng).name, "Columbus");
    }

    #[test]
    fn builtin_dataset_loads() {
        let dir = CityDirectory::builtin().unwrap();
        assert!(dir.len() > 50);
        assert!(dir.iter().all(|c| c.population.is_some()));
    }
}
