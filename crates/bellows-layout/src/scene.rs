//! Scene assembly - outline and slats collected into CUT and SCORE layers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BellowsConfig;
use crate::error::LayoutError;
use crate::outline::outline;
use crate::partition::partition;
use crate::slat::SlatBuilder;
use crate::types::{BoundingBox2D, Layer, Point2D, Primitive, Shape2D};

/// A finished layout: two ordered layers of primitives on a page.
///
/// This is the hand-off point to a vector drawing writer. Units are
/// millimetres. Deserializing rejects a primitive filed under the wrong
/// layer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScene")]
pub struct Scene {
    /// Page width.
    pub page_width: f64,
    /// Page height.
    pub page_height: f64,
    cut: Vec<Primitive>,
    score: Vec<Primitive>,
}

impl Scene {
    /// Primitives to cut through, in drawing order.
    pub fn cut(&self) -> &[Primitive] {
        &self.cut
    }

    /// Primitives to score, in drawing order.
    pub fn score(&self) -> &[Primitive] {
        &self.score
    }

    /// Primitives of one layer.
    pub fn layer(&self, layer: Layer) -> &[Primitive] {
        match layer {
            Layer::Cut => &self.cut,
            Layer::Score => &self.score,
        }
    }

    /// All primitives, CUT layer first.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.cut.iter().chain(self.score.iter())
    }

    /// Rectangles across both layers.
    pub fn rectangles(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives().filter(|p| p.is_rectangle())
    }

    /// Line segments across both layers.
    pub fn lines(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives().filter(|p| p.is_line())
    }

    /// Polygons across both layers.
    pub fn polygons(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives().filter(|p| p.is_polygon())
    }

    /// Bounding box of all geometry.
    pub fn bounds(&self) -> BoundingBox2D {
        let mut bounds = BoundingBox2D::empty();
        for prim in self.primitives() {
            bounds.merge(&prim.shape.bounds());
        }
        bounds
    }

    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.cut.len() + self.score.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.cut.is_empty() && self.score.is_empty()
    }
}

#[derive(Deserialize)]
struct RawScene {
    page_width: f64,
    page_height: f64,
    cut: Vec<Primitive>,
    score: Vec<Primitive>,
}

impl TryFrom<RawScene> for Scene {
    type Error = LayoutError;

    fn try_from(raw: RawScene) -> Result<Self, Self::Error> {
        for (layer, prims) in [(Layer::Cut, &raw.cut), (Layer::Score, &raw.score)] {
            if let Some((i, prim)) = prims.iter().enumerate().find(|(_, p)| p.layer != layer) {
                return Err(LayoutError::InvalidScene(format!(
                    "{} list entry {i} is tagged {}",
                    layer.name(),
                    prim.layer.name()
                )));
            }
        }
        Ok(Scene {
            page_width: raw.page_width,
            page_height: raw.page_height,
            cut: raw.cut,
            score: raw.score,
        })
    }
}

/// Accumulates primitives per layer, then freezes them into a [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    page_width: f64,
    page_height: f64,
    cut: Vec<Primitive>,
    score: Vec<Primitive>,
}

impl SceneBuilder {
    /// Create an empty builder for a page.
    pub fn new(page_width: f64, page_height: f64) -> Self {
        Self {
            page_width,
            page_height,
            cut: Vec::new(),
            score: Vec::new(),
        }
    }

    /// Add a shape to a layer.
    pub fn add_shape(&mut self, shape: Shape2D, layer: Layer) {
        let prim = Primitive::new(shape, layer);
        match layer {
            Layer::Cut => self.cut.push(prim),
            Layer::Score => self.score.push(prim),
        }
    }

    /// Add a closed polygon to a layer.
    pub fn add_polygon(&mut self, points: Vec<Point2D>, layer: Layer) {
        self.add_shape(Shape2D::Polygon { points }, layer);
    }

    /// Add a rectangle to a layer.
    pub fn add_rect(&mut self, origin: Point2D, width: f64, height: f64, layer: Layer) {
        self.add_shape(
            Shape2D::Rectangle {
                origin,
                width,
                height,
            },
            layer,
        );
    }

    /// Add a line segment to a layer.
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, layer: Layer) {
        self.add_shape(Shape2D::line(x1, y1, x2, y2), layer);
    }

    /// Add a cut rectangle horizontally centred on `center_x`, top edge at `y`.
    pub fn add_cut_rect(&mut self, center_x: f64, y: f64, width: f64, height: f64) {
        self.add_shape(
            Shape2D::centered_rect(center_x, y, width, height),
            Layer::Cut,
        );
    }

    /// Add a score line.
    pub fn add_score_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.add_line(x1, y1, x2, y2, Layer::Score);
    }

    /// Freeze into an immutable scene.
    pub fn build(self) -> Scene {
        Scene {
            page_width: self.page_width,
            page_height: self.page_height,
            cut: self.cut,
            score: self.score,
        }
    }
}

/// Assemble the scene of a face without validating its config.
///
/// Malformed parameters produce degenerate but well-formed geometry. Use
/// [`crate::layout`] to validate first.
pub fn assemble(config: &BellowsConfig) -> Scene {
    let mut out = SceneBuilder::new(config.page_width, config.page_height);
    out.add_shape(outline(config), Layer::Cut);

    let slats = SlatBuilder::new(config);
    for segment in partition(config) {
        if segment.is_degenerate() {
            warn!(index = segment.index, "zero-weight fold yields no visible slat pair");
        }
        debug!(
            index = segment.index,
            start = segment.cursor_start,
            end = segment.cursor_end,
            band_a = segment.band_a,
            band_b = segment.band_b,
            "fold segment"
        );
        slats.add_segment(&segment, &mut out);
    }
    slats.add_panel_guides(&mut out);

    let scene = out.build();
    info!(
        cut = scene.cut().len(),
        score = scene.score().len(),
        zigzag = config.zigzag,
        "assembled bellows scene"
    );
    scene
}
