//! Core types for cut and score layouts.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A 2D point in page coordinates (millimetres).
///
/// X runs from the left page edge, Y runs down from the top page edge,
/// matching the orientation of vector drawing formats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Create an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Expand the bounding box to include a point.
    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Expand the bounding box to include another box.
    pub fn merge(&mut self, other: &BoundingBox2D) {
        if other.is_valid() {
            self.include_point(Point2D::new(other.min_x, other.min_y));
            self.include_point(Point2D::new(other.max_x, other.max_y));
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if the bounding box is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

/// Output group a primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Layer {
    /// Lines cut through the sheet.
    Cut,
    /// Lines creased for folding.
    Score,
}

impl Layer {
    /// Layer label as written into the drawing.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Cut => "CUT",
            Layer::Score => "SCORE",
        }
    }

    /// Stroke colour downstream tools use to pick the operation.
    pub fn stroke(&self) -> StrokeColor {
        match self {
            Layer::Cut => StrokeColor::Black,
            Layer::Score => StrokeColor::Green,
        }
    }
}

/// Stroke colour of a primitive. Primitives are never filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeColor {
    /// Cut operations.
    Black,
    /// Score operations.
    Green,
}

impl StrokeColor {
    /// Named colour (SVG keyword).
    pub fn name(&self) -> &'static str {
        match self {
            StrokeColor::Black => "black",
            StrokeColor::Green => "green",
        }
    }

    /// Hex RGB value of the named colour.
    pub fn hex(&self) -> &'static str {
        match self {
            StrokeColor::Black => "#000000",
            StrokeColor::Green => "#008000",
        }
    }
}

/// A 2D shape in a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape2D {
    /// Closed polygon.
    Polygon {
        /// Ordered list of vertices; the last connects back to the first.
        points: Vec<Point2D>,
    },
    /// Axis-aligned rectangle.
    Rectangle {
        /// Top-left corner.
        origin: Point2D,
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        height: f64,
    },
    /// Line segment.
    Line {
        /// Start point.
        start: Point2D,
        /// End point.
        end: Point2D,
    },
}

impl Shape2D {
    /// Rectangle horizontally centred on `center_x` with its top edge at `y`.
    pub fn centered_rect(center_x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape2D::Rectangle {
            origin: Point2D::new(center_x - width / 2.0, y),
            width,
            height,
        }
    }

    /// Line segment between two coordinate pairs.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Shape2D::Line {
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
        }
    }

    /// Bounding box of the shape.
    pub fn bounds(&self) -> BoundingBox2D {
        let mut bounds = BoundingBox2D::empty();
        match self {
            Shape2D::Polygon { points } => {
                for p in points {
                    bounds.include_point(*p);
                }
            }
            Shape2D::Rectangle {
                origin,
                width,
                height,
            } => {
                bounds.include_point(*origin);
                bounds.include_point(Point2D::new(origin.x + width, origin.y + height));
            }
            Shape2D::Line { start, end } => {
                bounds.include_point(*start);
                bounds.include_point(*end);
            }
        }
        bounds
    }
}

/// A shape tagged with its layer and stroke.
///
/// Deserializing checks that the stroke is the layer's colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPrimitive")]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape2D,
    /// Layer the shape is drawn on.
    pub layer: Layer,
    /// Stroke colour (always the layer's colour).
    pub stroke: StrokeColor,
}

impl Primitive {
    /// Create a primitive on `layer`, stroked with the layer's colour.
    pub fn new(shape: Shape2D, layer: Layer) -> Self {
        Self {
            shape,
            layer,
            stroke: layer.stroke(),
        }
    }

    /// Is this a rectangle?
    pub fn is_rectangle(&self) -> bool {
        matches!(self.shape, Shape2D::Rectangle { .. })
    }

    /// Is this a line segment?
    pub fn is_line(&self) -> bool {
        matches!(self.shape, Shape2D::Line { .. })
    }

    /// Is this a polygon?
    pub fn is_polygon(&self) -> bool {
        matches!(self.shape, Shape2D::Polygon { .. })
    }
}

#[derive(Deserialize)]
struct RawPrimitive {
    shape: Shape2D,
    layer: Layer,
    stroke: StrokeColor,
}

impl TryFrom<RawPrimitive> for Primitive {
    type Error = LayoutError;

    fn try_from(raw: RawPrimitive) -> Result<Self, Self::Error> {
        if raw.stroke != raw.layer.stroke() {
            return Err(LayoutError::InvalidScene(format!(
                "{} primitive has {} stroke, expected {}",
                raw.layer.name(),
                raw.stroke.name(),
                raw.layer.stroke().name()
            )));
        }
        Ok(Primitive::new(raw.shape, raw.layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_layer_strokes() {
        assert_eq!(Layer::Cut.stroke(), StrokeColor::Black);
        assert_eq!(Layer::Score.stroke(), StrokeColor::Green);
        assert_eq!(Layer::Cut.name(), "CUT");
        assert_eq!(Layer::Score.name(), "SCORE");
        assert_eq!(StrokeColor::Green.name(), "green");
        assert_eq!(StrokeColor::Black.hex(), "#000000");
    }

    #[test]
    fn test_primitive_takes_layer_stroke() {
        let p = Primitive::new(Shape2D::line(0.0, 0.0, 1.0, 1.0), Layer::Score);
        assert_eq!(p.stroke, StrokeColor::Green);
        assert!(p.is_line());
        assert!(!p.is_rectangle());
    }

    #[test]
    fn test_centered_rect() {
        let rect = Shape2D::centered_rect(100.0, 20.0, 40.0, 1.0);
        let b = rect.bounds();
        assert_relative_eq!(b.min_x, 80.0);
        assert_relative_eq!(b.max_x, 120.0);
        assert_relative_eq!(b.min_y, 20.0);
        assert_relative_eq!(b.height(), 1.0);
    }

    #[test]
    fn test_bounding_box_merge() {
        let mut a = Shape2D::line(0.0, 0.0, 1.0, 1.0).bounds();
        let b = Shape2D::line(5.0, -2.0, 6.0, 3.0).bounds();
        a.merge(&b);
        assert_relative_eq!(a.width(), 6.0);
        assert_relative_eq!(a.height(), 5.0);

        let mut empty = BoundingBox2D::empty();
        assert!(!empty.is_valid());
        empty.merge(&BoundingBox2D::empty());
        assert!(!empty.is_valid());
    }

    #[test]
    fn test_primitive_rejects_foreign_stroke() {
        let json = r#"{"shape":{"kind":"line","start":{"x":0.0,"y":0.0},"end":{"x":1.0,"y":1.0}},"layer":"SCORE","stroke":"black"}"#;
        let err = serde_json::from_str::<Primitive>(json).unwrap_err();
        assert!(err.to_string().contains("stroke"));

        let ok = json.replace("black", "green");
        let prim: Primitive = serde_json::from_str(&ok).unwrap();
        assert_eq!(prim.layer, Layer::Score);
        assert_eq!(prim.stroke, StrokeColor::Green);
    }
}
