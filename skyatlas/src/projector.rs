//! Forward projection of geographic points into the coordinate space of a drawn outline.
//!
//! Country outlines are pre-rendered with a Mercator projection, so markers have to follow the
//! same transform to line up with the coast: longitude maps linearly onto the horizontal axis and
//! latitude goes through the Mercator ordinate before being normalized onto the vertical axis.
//! North is at the top (`y_min`), as in screen space.

use skyatlas_types::geo::mercator::{mercator_lat, mercator_y};
use skyatlas_types::{
    CartesianPoint2d, GeoBounds, GeoPoint, GeoPoint2d, NewCartesianPoint2d, NewGeoPoint,
    PlanarBounds, Point2d, Projection,
};
use std::marker::PhantomData;

/// Fits a set of geographic bounds into planar bounds using the Mercator vertical axis.
///
/// If the geographic bounds have zero extent along an axis (a single city, or cities on the same
/// parallel or meridian), every point is placed at the middle of the planar range along that
/// axis.
#[derive(Debug, Copy, Clone)]
pub struct MercatorFit<In = GeoPoint2d, Out = Point2d> {
    geo: GeoBounds,
    planar: PlanarBounds,
    mercator_min: f64,
    mercator_max: f64,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> MercatorFit<In, Out> {
    /// Creates a new projection from the bounds of the city set into the bounds of the path.
    pub fn new(geo: GeoBounds, planar: PlanarBounds) -> Self {
        let fit = Self {
            geo,
            planar,
            mercator_min: mercator_y(geo.lat_min),
            mercator_max: mercator_y(geo.lat_max),
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        };

        if fit.lon_span().is_none() || fit.mercator_span().is_none() {
            log::debug!("Degenerate geographic bounds {geo:?}, centering the flat axis");
        }

        fit
    }

    /// Geographic bounds of the projection.
    pub fn geo_bounds(&self) -> GeoBounds {
        self.geo
    }

    /// Planar bounds of the projection.
    pub fn planar_bounds(&self) -> PlanarBounds {
        self.planar
    }

    /// Projects latitude and longitude in degrees. The result is always finite for finite input.
    pub fn project_point(&self, point: &impl GeoPoint<Num = f64>) -> Point2d {
        Point2d::new(self.project_lon(point.lon()), self.project_lat(point.lat()))
    }

    fn lon_span(&self) -> Option<f64> {
        non_degenerate(self.geo.lon_max - self.geo.lon_min)
    }

    fn mercator_span(&self) -> Option<f64> {
        non_degenerate(self.mercator_min - self.mercator_max)
    }

    fn project_lon(&self, lon: f64) -> f64 {
        let Some(span) = self.lon_span() else {
            return self.planar.center().x;
        };

        let t = (lon - self.geo.lon_min) / span;
        finite_or(
            self.planar.x_min + t * self.planar.width(),
            self.planar.center().x,
        )
    }

    fn project_lat(&self, lat: f64) -> f64 {
        // Mercator ordinate grows northwards while screen y grows southwards, so the northern
        // edge (`mercator_max`) maps to `y_min`.
        let Some(span) = self.mercator_span() else {
            return self.planar.center().y;
        };

        let t = (mercator_y(lat) - self.mercator_max) / span;
        finite_or(
            self.planar.y_min + t * self.planar.height(),
            self.planar.center().y,
        )
    }

    /// Inverse of [`MercatorFit::project_point`]. Returns `None` if the geographic bounds are
    /// degenerate along any axis, since the inverse is not defined then.
    pub fn unproject_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> Option<(f64, f64)> {
        let lon_span = self.lon_span()?;
        let mercator_span = self.mercator_span()?;
        let width = non_degenerate(self.planar.width())?;
        let height = non_degenerate(self.planar.height())?;

        let lon = self.geo.lon_min + (point.x() - self.planar.x_min) / width * lon_span;
        let t = (point.y() - self.planar.y_min) / height;
        let lat = mercator_lat(self.mercator_max + t * mercator_span);

        (lat.is_finite() && lon.is_finite()).then_some((lat, lon))
    }
}

fn non_degenerate(span: f64) -> Option<f64> {
    (span != 0.0 && span.is_finite()).then_some(span)
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for MercatorFit<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let projected = self.project_point(input);
        Some(Out::new(projected.x, projected.y))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let (lat, lon) = self.unproject_point(input)?;
        Some(In::latlon(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use skyatlas_types::latlon;

    const EPSILON: f64 = 1e-9;

    fn unit_square() -> PlanarBounds {
        PlanarBounds::new(0.0, 0.0, 100.0, 100.0)
    }

    fn square_fit(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> MercatorFit {
        MercatorFit::new(
            GeoBounds::new(lat_min, lat_max, lon_min, lon_max),
            unit_square(),
        )
    }

    #[test]
    fn example_scenario() {
        let fit = square_fit(-10.0, 10.0, -10.0, 10.0);

        assert_abs_diff_eq!(
            fit.project_point(&latlon!(10.0, 10.0)),
            Point2d::new(100.0, 0.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            fit.project_point(&latlon!(-10.0, -10.0)),
            Point2d::new(0.0, 100.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn corners_map_to_corners() {
        let geo = GeoBounds::new(30.0, 45.5, 129.0, 146.0);
        let planar = PlanarBounds::new(412.3, 87.1, 530.9, 240.6);
        let fit: MercatorFit = MercatorFit::new(geo, planar);

        let pairs = [
            (latlon!(geo.lat_max, geo.lon_min), Point2d::new(planar.x_min, planar.y_min)),
            (latlon!(geo.lat_min, geo.lon_min), Point2d::new(planar.x_min, planar.y_max)),
            (latlon!(geo.lat_min, geo.lon_max), Point2d::new(planar.x_max, planar.y_max)),
            (latlon!(geo.lat_max, geo.lon_max), Point2d::new(planar.x_max, planar.y_min)),
        ];

        for ((geo_point, expected), corner) in pairs.iter().zip(planar.corners()) {
            assert_abs_diff_eq!(*expected, corner);
            assert_abs_diff_eq!(fit.project_point(geo_point), *expected, epsilon = EPSILON);
        }
    }

    #[test]
    fn equator_is_not_centered_in_asymmetric_bounds() {
        // Mercator stretches high latitudes, so the equator of [-10, 60] is below the linear
        // position of 60 / 70.
        let fit = square_fit(-10.0, 60.0, 0.0, 10.0);
        let y = fit.project_point(&latlon!(0.0, 5.0)).y;
        let linear = 60.0 / 70.0 * 100.0;
        assert!(y > linear, "{y} should be below the equirectangular position {linear}");
    }

    #[test]
    fn single_city_is_centered() {
        let fit = square_fit(52.5, 52.5, 13.4, 13.4);
        let projected = fit.project_point(&latlon!(52.5, 13.4));
        assert_eq!(projected, Point2d::new(50.0, 50.0));
    }

    #[test]
    fn same_parallel_centers_only_y() {
        let fit = square_fit(40.0, 40.0, 0.0, 20.0);
        assert_abs_diff_eq!(
            fit.project_point(&latlon!(40.0, 5.0)),
            Point2d::new(25.0, 50.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn same_meridian_centers_only_x() {
        let fit = square_fit(0.0, 20.0, 7.0, 7.0);
        let projected = fit.project_point(&latlon!(20.0, 7.0));
        assert_abs_diff_eq!(projected, Point2d::new(50.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn stays_within_planar_bounds() {
        let bounds = [
            GeoBounds::new(-10.0, 10.0, -10.0, 10.0),
            GeoBounds::new(24.0, 46.0, 122.0, 154.0),
            GeoBounds::new(-55.0, -21.0, -73.0, -53.0),
            GeoBounds::new(55.0, 71.0, 4.0, 31.0),
            GeoBounds::GLOBE,
        ];
        let planar = PlanarBounds::new(-35.0, 12.0, 480.0, 300.0);

        for geo in bounds {
            let fit: MercatorFit = MercatorFit::new(geo, planar);
            for i in 0..=40 {
                for j in 0..=40 {
                    let lat = geo.lat_min + geo.lat_span() * i as f64 / 40.0;
                    let lon = geo.lon_min + geo.lon_span() * j as f64 / 40.0;
                    let p = fit.project_point(&latlon!(lat, lon));
                    assert!(p.x.is_finite() && p.y.is_finite());
                    assert!(
                        planar.expand(1e-6).contains(&p),
                        "{lat}, {lon} projected outside of {planar:?}: {p:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn x_is_monotonic_in_longitude() {
        let fit = square_fit(-30.0, 30.0, -60.0, 60.0);
        for lat in [-30.0, -5.0, 0.0, 17.0, 30.0] {
            let mut prev = f64::NEG_INFINITY;
            for lon in -60..=60 {
                let x = fit.project_point(&latlon!(lat, lon as f64)).x;
                assert!(x >= prev);
                prev = x;
            }
        }
    }

    #[test]
    fn y_decreases_northwards() {
        let fit = square_fit(-30.0, 60.0, 0.0, 1.0);
        let mut prev = f64::INFINITY;
        for lat in -30..=60 {
            let y = fit.project_point(&latlon!(lat as f64, 0.5)).y;
            assert!(y < prev);
            prev = y;
        }
    }

    #[test]
    fn unproject_inverts_project() {
        let fit: MercatorFit = MercatorFit::new(
            GeoBounds::new(35.0, 71.0, -10.0, 40.0),
            PlanarBounds::new(10.0, 10.0, 250.0, 310.0),
        );
        for point in [latlon!(35.0, -10.0), latlon!(48.85, 2.35), latlon!(59.9, 30.3)] {
            let projected: Point2d = fit.project(&point).unwrap();
            let restored: GeoPoint2d = fit.unproject(&projected).unwrap();
            assert_abs_diff_eq!(restored, point, epsilon = 1e-9);
        }
    }

    #[test]
    fn unproject_degenerate_is_none() {
        let fit = square_fit(1.0, 1.0, 2.0, 2.0);
        assert!(fit.unproject_point(&Point2d::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn non_finite_input_stays_finite() {
        let fit = square_fit(-10.0, 10.0, -10.0, 10.0);
        let projected = fit.project_point(&latlon!(f64::NAN, f64::NAN));
        assert_eq!(projected, Point2d::new(50.0, 50.0));
    }
}
