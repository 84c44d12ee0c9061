//! Bounding box of a serialized vector path (SVG `d` attribute syntax).
//!
//! The path is not interpreted as a sequence of drawing commands. Every numeric literal is taken
//! in order of appearance, and the literals are paired up as `x, y, x, y, ...`. This matches the
//! output of path serializers that only emit absolute `M`/`L`/`Z` commands, which is what country
//! outlines are drawn with.

use lazy_static::lazy_static;
use regex::Regex;
use skyatlas_types::{PlanarBounds, Point2d};

/// Bounds used when a path has fewer than two numeric literals.
pub const FALLBACK_BOUNDS: PlanarBounds = PlanarBounds {
    x_min: 0.0,
    y_min: 0.0,
    x_max: 100.0,
    y_max: 100.0,
};

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("valid number regex");
}

/// Numeric literals of the path in order of appearance. Literals that overflow `f64` are skipped.
fn literals(path: &str) -> impl Iterator<Item = f64> + '_ {
    NUMBER
        .find_iter(path)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Coordinate pairs of the path. A trailing unpaired literal is dropped.
pub fn path_coordinates(path: &str) -> Vec<Point2d> {
    let values: Vec<f64> = literals(path).collect();
    values
        .chunks_exact(2)
        .map(|pair| Point2d::new(pair[0], pair[1]))
        .collect()
}

/// Computes the bounding box of the path.
///
/// Even-indexed literals are treated as x coordinates and odd-indexed ones as y coordinates. If
/// the path contains fewer than two literals, [`FALLBACK_BOUNDS`] is returned.
pub fn path_bounds(path: &str) -> PlanarBounds {
    let mut count = 0usize;
    let mut bounds = PlanarBounds::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );

    for (index, value) in literals(path).enumerate() {
        if index % 2 == 0 {
            bounds.x_min = bounds.x_min.min(value);
            bounds.x_max = bounds.x_max.max(value);
        } else {
            bounds.y_min = bounds.y_min.min(value);
            bounds.y_max = bounds.y_max.max(value);
        }
        count += 1;
    }

    if count < 2 {
        log::debug!("Path has {count} numeric literals, using fallback bounds");
        return FALLBACK_BOUNDS;
    }

    bounds
}
