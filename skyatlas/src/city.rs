//! Cities from the reference tables and helpers to browse them.

use crate::error::SkyatlasError;
use serde::{Deserialize, Serialize};
use skyatlas_types::{GeoBounds, GeoPoint2d};
use std::collections::BTreeMap;

/// Region name used for cities that don't specify one.
pub const DEFAULT_REGION: &str = "Other";

/// A city of a country reference table.
///
/// Deserializes from the flat table shape: `{"name", "lat", "lon", "region", "isCapital",
/// "population"}`, where only `name`, `lat` and `lon` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Name of the city, unique within a country.
    pub name: String,
    /// Location of the city.
    #[serde(flatten)]
    pub point: GeoPoint2d,
    /// State, province or region the city belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Whether the city is the administrative capital of the country.
    #[serde(default)]
    pub is_capital: bool,
    /// Number of inhabitants, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl City {
    /// Creates a city with no region, capital flag or population.
    pub fn new(name: impl Into<String>, point: GeoPoint2d) -> Self {
        Self {
            name: name.into(),
            point,
            region: None,
            is_capital: false,
            population: None,
        }
    }

    /// Creates a city from raw coordinates in degrees, checking that they are in range.
    pub fn try_new(name: impl Into<String>, lat: f64, lon: f64) -> Result<Self, SkyatlasError> {
        Ok(Self::new(name, GeoPoint2d::try_new(lat, lon)?))
    }

    /// Sets the region of the city.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Marks the city as the capital.
    pub fn capital(mut self) -> Self {
        self.is_capital = true;
        self
    }

    /// Sets population of the city.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// Region of the city, or [`DEFAULT_REGION`].
    pub fn region_or_default(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }
}

/// Geographic bounds of a set of cities. Empty set gives the whole globe.
pub fn geo_bounds(cities: &[City]) -> GeoBounds {
    if cities.is_empty() {
        log::debug!("No cities given, using globe bounds");
    }

    GeoBounds::from_points(cities.iter().map(|city| &city.point))
}

/// Cities whose name or region contains the query, case-insensitively. A blank query matches
/// all cities.
pub fn filter_cities<'a>(cities: &'a [City], query: &str) -> Vec<&'a City> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return cities.iter().collect();
    }

    cities
        .iter()
        .filter(|city| {
            city.name.to_lowercase().contains(&query)
                || city
                    .region
                    .as_ref()
                    .is_some_and(|region| region.to_lowercase().contains(&query))
        })
        .collect()
}

/// Groups cities by region, keeping the order of cities within each group.
pub fn group_by_region<'a>(
    cities: impl IntoIterator<Item = &'a City>,
) -> BTreeMap<&'a str, Vec<&'a City>> {
    let mut groups: BTreeMap<&str, Vec<&City>> = BTreeMap::new();
    for city in cities {
        groups.entry(city.region_or_default()).or_default().push(city);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use skyatlas_types::{latlon, SkyatlasTypesError};

    #[test]
    fn checked_constructor() {
        let city = City::try_new("Sapporo", 43.0618, 141.3545).unwrap();
        assert_eq!(city.point, latlon!(43.0618, 141.3545));

        assert_matches!(
            City::try_new("Nowhere", 91.0, 0.0),
            Err(SkyatlasError::Types(SkyatlasTypesError::InvalidCoordinate { .. }))
        );
    }

    fn japan() -> Vec<City> {
        vec![
            City::new("Tokyo", latlon!(35.6762, 139.6503))
                .with_region("Kantō")
                .capital()
                .with_population(14_000_000),
            City::new("Osaka", latlon!(34.6937, 135.5023))
                .with_region("Kansai")
                .with_population(2_700_000),
            City::new("Kyoto", latlon!(35.0116, 135.7681)).with_region("Kansai"),
            City::new("Sapporo", latlon!(43.0642, 141.3469)).with_region("Hokkaidō"),
            City::new("Naha", latlon!(26.2124, 127.6809)),
        ]
    }

    #[test]
    fn deserialize_reference_row() {
        let city: City = serde_json::from_str(
            r#"{ "name": "Tokyo", "lat": 35.6762, "lon": 139.6503, "region": "Kantō", "isCapital": true, "population": 14000000 }"#,
        )
        .unwrap();
        assert_eq!(city, japan()[0]);

        let city: City =
            serde_json::from_str(r#"{ "name": "Naha", "lat": 26.2124, "lon": 127.6809 }"#)
                .unwrap();
        assert_eq!(city, japan()[4]);
    }

    #[test]
    fn bounds_of_cities() {
        let bounds = geo_bounds(&japan());
        assert_eq!(
            bounds,
            GeoBounds::new(26.2124, 43.0642, 127.6809, 141.3469)
        );
        assert_eq!(geo_bounds(&[]), GeoBounds::GLOBE);
    }

    #[test]
    fn example_bounds() {
        let cities = [
            City::new("A", latlon!(10.0, 10.0)),
            City::new("B", latlon!(-10.0, -10.0)),
        ];
        assert_eq!(geo_bounds(&cities), GeoBounds::new(-10.0, 10.0, -10.0, 10.0));
    }

    #[test]
    fn filter_by_name_or_region() {
        let cities = japan();
        let names = |found: Vec<&City>| found.iter().map(|c| c.name.clone()).collect::<Vec<_>>();

        assert_eq!(names(filter_cities(&cities, "")).len(), 5);
        assert_eq!(names(filter_cities(&cities, "   ")).len(), 5);
        assert_eq!(names(filter_cities(&cities, "KYO")), ["Tokyo", "Kyoto"]);
        assert_eq!(names(filter_cities(&cities, "kansai")), ["Osaka", "Kyoto"]);
        assert!(filter_cities(&cities, "berlin").is_empty());
    }

    #[test]
    fn grouping() {
        let cities = japan();
        let groups = group_by_region(&cities);

        assert_eq!(
            groups.keys().copied().collect::<Vec<_>>(),
            ["Hokkaidō", "Kansai", "Kantō", "Other"]
        );
        let kansai: Vec<&str> = groups["Kansai"].iter().map(|c| c.name.as_str()).collect();
        assert_eq!(kansai, ["Osaka", "Kyoto"]);
        assert_eq!(groups[DEFAULT_REGION][0].name, "Naha");
    }

    #[test]
    fn grouping_filtered() {
        let cities = japan();
        let groups = group_by_region(filter_cities(&cities, "o"));
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), 4);
        assert!(!groups.contains_key(DEFAULT_REGION));
    }
}
