//! SVG view box around a country outline.

use serde::Serialize;
use skyatlas_types::PlanarBounds;
use std::fmt::{Display, Formatter};

/// Default margin around a country outline, in path units.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Visible area of an SVG document: `min-x min-y width height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl ViewBox {
    /// View box that shows `bounds` with `padding` on every side.
    pub fn around(bounds: &PlanarBounds, padding: f64) -> Self {
        let padded = bounds.expand(padding);
        Self {
            min_x: padded.x_min,
            min_y: padded.y_min,
            width: padded.width(),
            height: padded.height(),
        }
    }

    /// Bounds of the visible area.
    pub fn bounds(&self) -> PlanarBounds {
        PlanarBounds::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }
}

impl Display for ViewBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}
