//! Panel outline - the trapezoidal silhouette cut around all slats.

use crate::config::BellowsConfig;
use crate::types::{Point2D, Shape2D};

/// Outline polygon of a configured face.
///
/// Vertices run top-left, top-right, bottom-right, bottom-left. Zigzag faces
/// are widened by the side space on each side so the diagonal folds have room
/// to reach the border.
pub fn outline(config: &BellowsConfig) -> Shape2D {
    let cx = config.center_x();
    let extra = config.outline_extra();
    let top_half = config.top_width / 2.0 + extra;
    let bottom_half = config.bottom_width / 2.0 + extra;
    let y_top = config.top_margin;
    let y_bottom = config.top_margin + config.length;

    Shape2D::Polygon {
        points: vec![
            Point2D::new(cx - top_half, y_top),
            Point2D::new(cx + top_half, y_top),
            Point2D::new(cx + bottom_half, y_bottom),
            Point2D::new(cx - bottom_half, y_bottom),
        ],
    }
}
