//! See [`CountryMap`].

use crate::city::{filter_cities, geo_bounds, City};
use crate::condition::WeatherCondition;
use crate::path_bounds::path_bounds;
use crate::placement::{place_markers, Interaction, MarkerAttributes, MarkerStyle};
use crate::projector::MercatorFit;
use crate::view_box::ViewBox;
use skyatlas_types::{
    CartesianPoint2d, GeoBounds, GeoPoint2d, PlanarBounds, Point2d, Projection,
};
use std::cmp::Ordering;

/// Cities of one country positioned on the outline of that country.
///
/// Path bounds, geographic bounds and the projection are computed once on construction, so a map
/// view should keep the `CountryMap` for as long as the path and the city set don't change.
///
/// ```
/// use skyatlas::{City, CountryMap};
/// use skyatlas::placement::{Interaction, MarkerStyle};
/// use skyatlas_types::latlon;
///
/// let map = CountryMap::new(
///     "M0,0 L100,0 L100,100 L0,100 Z",
///     vec![
///         City::new("North", latlon!(10.0, 10.0)),
///         City::new("South", latlon!(-10.0, -10.0)),
///     ],
/// );
///
/// let markers = map.markers(&MarkerStyle::default(), &Interaction::none());
/// assert_eq!(markers.len(), 2);
/// assert_eq!(map.view_box(10.0).to_string(), "-10 -10 120 120");
/// ```
#[derive(Debug, Clone)]
pub struct CountryMap {
    cities: Vec<City>,
    fit: MercatorFit,
    condition: WeatherCondition,
}

impl CountryMap {
    /// Creates a map from a serialized outline path and the cities of the country.
    ///
    /// Cities with coordinates outside of the valid latitude/longitude ranges are dropped.
    pub fn new(path: &str, cities: Vec<City>) -> Self {
        let total = cities.len();
        let cities: Vec<City> = cities
            .into_iter()
            .filter(|city| {
                let valid = city.point.is_valid();
                if !valid {
                    log::warn!("Skipping city {} with invalid location {:?}", city.name, city.point);
                }
                valid
            })
            .collect();

        let fit = MercatorFit::new(geo_bounds(&cities), path_bounds(path));
        log::debug!(
            "Country map with {} of {total} cities, path bounds {:?}",
            cities.len(),
            fit.planar_bounds()
        );

        Self {
            cities,
            fit,
            condition: WeatherCondition::default(),
        }
    }

    /// Sets the weather condition shown on the map, which colors the markers.
    pub fn with_condition(mut self, condition: WeatherCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Weather condition shown on the map.
    pub fn condition(&self) -> WeatherCondition {
        self.condition
    }

    /// Cities shown on the map.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Bounds of the country outline.
    pub fn path_bounds(&self) -> PlanarBounds {
        self.fit.planar_bounds()
    }

    /// Bounds of the city set.
    pub fn geo_bounds(&self) -> GeoBounds {
        self.fit.geo_bounds()
    }

    /// Projection used to place the cities.
    pub fn projection(&self) -> &MercatorFit {
        &self.fit
    }

    /// Position of a city in path coordinates. The city doesn't have to belong to the map.
    pub fn project(&self, city: &City) -> Point2d {
        self.fit.project_point(&city.point)
    }

    /// All cities with their positions.
    pub fn projected(&self) -> impl Iterator<Item = (&City, Point2d)> + '_ {
        self.cities.iter().map(|city| (city, self.project(city)))
    }

    /// Render attributes of all city markers, in drawing order.
    pub fn markers(&self, style: &MarkerStyle, interaction: &Interaction) -> Vec<MarkerAttributes> {
        place_markers(self.projected(), style, interaction, self.condition)
    }

    /// Render attributes of the markers of cities matching a search query.
    ///
    /// Positions are not affected by the filter: the projection still spans the whole city set,
    /// so markers don't jump around while the user types.
    pub fn markers_matching(
        &self,
        query: &str,
        style: &MarkerStyle,
        interaction: &Interaction,
    ) -> Vec<MarkerAttributes> {
        let found = filter_cities(&self.cities, query);
        place_markers(
            found.into_iter().map(|city| (city, self.project(city))),
            style,
            interaction,
            self.condition,
        )
    }

    /// View box showing the whole outline with the given padding.
    pub fn view_box(&self, padding: f64) -> ViewBox {
        ViewBox::around(&self.path_bounds(), padding)
    }

    /// City whose marker center is the closest to `point`, within `radius`.
    ///
    /// If several markers are equally close, the one drawn on top wins (capital first, then
    /// larger population).
    pub fn city_at(&self, point: &Point2d, radius: f64) -> Option<&City> {
        self.projected()
            .map(|(city, position)| (city, position.distance(point)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|(city_a, a), (city_b, b)| {
                a.partial_cmp(b)
                    .unwrap_or(Ordering::Equal)
                    .then(city_b.is_capital.cmp(&city_a.is_capital))
                    .then(city_b.population.cmp(&city_a.population))
            })
            .map(|(city, _)| city)
    }

    /// Geographic location under a point of the outline. Returns `None` if the city set is
    /// degenerate, since the map has no geographic extent along one of the axes then.
    pub fn location_at(&self, point: &Point2d) -> Option<GeoPoint2d> {
        self.fit.unproject(point)
    }
}
