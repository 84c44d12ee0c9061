use crate::cartesian::point::CartesianPoint2d;
use approx::AbsDiffEq;
use nalgebra::{Point2, Scalar};
use num_traits::Num;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a planar drawing, e.g. of a vector path.
pub type PlanarBounds = Rect<f64>;

/// Axis-aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    pub x_min: N,
    pub y_min: N,
    pub x_max: N,
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar> Rect<N> {
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn x_min(&self) -> N {
        self.x_min
    }

    pub fn x_max(&self) -> N {
        self.x_max
    }

    pub fn y_min(&self) -> N {
        self.y_min
    }

    pub fn y_max(&self) -> N {
        self.y_max
    }

    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Returns a rectangle grown by `amount` on every side. Negative values shrink it.
    pub fn expand(&self, amount: N) -> Self {
        Self {
            x_min: self.x_min - amount,
            x_max: self.x_max + amount,
            y_min: self.y_min - amount,
            y_max: self.y_max + amount,
        }
    }

    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Corners in the order: top-left, bottom-left, bottom-right, top-right (with y growing
    /// downwards, as in screen space).
    pub fn corners(&self) -> [Point2<N>; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_min, self.y_max),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_max, self.y_min),
        ]
    }
}

impl<N> AbsDiffEq for Rect<N>
where
    N: AbsDiffEq<Epsilon = N> + Copy,
{
    type Epsilon = N;

    fn default_epsilon() -> Self::Epsilon {
        N::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x_min.abs_diff_eq(&other.x_min, epsilon)
            && self.y_min.abs_diff_eq(&other.y_min, epsilon)
            && self.x_max.abs_diff_eq(&other.x_max, epsilon)
            && self.y_max.abs_diff_eq(&other.y_max, epsilon)
    }
}
