use crate::geo::point::GeoPoint;
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// Latitude/longitude bounding box in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::GLOBE
    }
}

impl GeoBounds {
    /// The whole globe: `[-90, 90] x [-180, 180]`.
    pub const GLOBE: Self = Self {
        lat_min: -90.0,
        lat_max: 90.0,
        lon_min: -180.0,
        lon_max: 180.0,
    };

    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Smallest bounds containing all the given points. Returns [`GeoBounds::GLOBE`] if the
    /// iterator is empty.
    pub fn from_points<'a, P: GeoPoint<Num = f64> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Self {
        let Some(first) = points.next() else {
            return Self::GLOBE;
        };

        let mut bounds = Self::new(first.lat(), first.lat(), first.lon(), first.lon());
        for p in points {
            bounds.lat_min = bounds.lat_min.min(p.lat());
            bounds.lat_max = bounds.lat_max.max(p.lat());
            bounds.lon_min = bounds.lon_min.min(p.lon());
            bounds.lon_max = bounds.lon_max.max(p.lon());
        }

        bounds
    }

    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// True if the bounds have zero extent along at least one axis.
    pub fn is_degenerate(&self) -> bool {
        self.lat_span() == 0.0 || self.lon_span() == 0.0
    }

    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        self.lat_min <= point.lat()
            && self.lat_max >= point.lat()
            && self.lon_min <= point.lon()
            && self.lon_max >= point.lon()
    }
}

impl AbsDiffEq for GeoBounds {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat_min.abs_diff_eq(&other.lat_min, epsilon)
            && self.lat_max.abs_diff_eq(&other.lat_max, epsilon)
            && self.lon_min.abs_diff_eq(&other.lon_min, epsilon)
            && self.lon_max.abs_diff_eq(&other.lon_max, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint2d;
    use crate::latlon;

    #[test]
    fn empty_is_globe() {
        let points: Vec<GeoPoint2d> = vec![];
        assert_eq!(GeoBounds::from_points(points.iter()), GeoBounds::GLOBE);
        assert_eq!(GeoBounds::default(), GeoBounds::new(-90.0, 90.0, -180.0, 180.0));
    }

    #[test]
    fn single_point_is_degenerate() {
        let points = [latlon!(48.85, 2.35)];
        let bounds = GeoBounds::from_points(points.iter());
        assert_eq!(bounds, GeoBounds::new(48.85, 48.85, 2.35, 2.35));
        assert!(bounds.is_degenerate());
        assert!(bounds.contains(&points[0]));
    }

    #[test]
    fn min_max_over_points() {
        let points = [latlon!(10.0, 10.0), latlon!(-10.0, -10.0), latlon!(3.0, 25.0)];
        let bounds = GeoBounds::from_points(points.iter());
        assert_eq!(bounds, GeoBounds::new(-10.0, 10.0, -10.0, 25.0));
        assert!(!bounds.is_degenerate());
        for p in &points {
            assert!(bounds.contains(p));
        }
        assert!(!bounds.contains(&latlon!(11.0, 0.0)));
    }

    #[test]
    fn min_never_exceeds_max() {
        let points: Vec<GeoPoint2d> = (0..50)
            .map(|i| {
                let i = i as f64;
                latlon!((i * 37.0) % 180.0 - 90.0, (i * 53.0) % 360.0 - 180.0)
            })
            .collect();
        for n in 1..points.len() {
            let bounds = GeoBounds::from_points(points[..n].iter());
            assert!(bounds.lat_min <= bounds.lat_max);
            assert!(bounds.lon_min <= bounds.lon_max);
        }
    }
}
