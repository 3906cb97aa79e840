//! Slat geometry - cut and score primitives for each fold pair.
//!
//! Two constructions are supported:
//!
//! - **Straight**: a cut rectangle at each band boundary, inset by the side
//!   space. Two long score lines, drawn once per panel, mark the tear-off
//!   strip that holds the slats together until they are glued.
//! - **Zigzag**: the fold boundary runs diagonally out to the panel edge so
//!   the slats reach the border and interlock with a straight face. Cut
//!   rectangles are held in place by connective bridges.
//!
//! Coordinates are page coordinates: the panel is centred on `center_x` and
//! shifted down by the top margin.

use tracing::trace;

use crate::config::BellowsConfig;
use crate::partition::FoldSegment;
use crate::scene::SceneBuilder;
use crate::width::TrapezoidWidth;

/// Builds slat primitives for one face.
#[derive(Debug, Clone, Copy)]
pub struct SlatBuilder {
    width: TrapezoidWidth,
    center_x: f64,
    top_margin: f64,
    side_space: f64,
    slack: f64,
    connective: f64,
    zigzag: bool,
}

impl SlatBuilder {
    /// Slat builder for a configured face.
    pub fn new(config: &BellowsConfig) -> Self {
        Self {
            width: TrapezoidWidth::from_config(config),
            center_x: config.center_x(),
            top_margin: config.top_margin,
            side_space: config.side_space,
            slack: config.slack,
            connective: config.connective,
            zigzag: config.zigzag,
        }
    }

    /// Positions of the two band boundaries of `segment`, along the length.
    pub fn band_boundaries(&self, segment: &FoldSegment) -> (f64, f64) {
        let y1 = segment.cursor_start + segment.band_a - self.slack;
        let y2 = segment.cursor_start + segment.band_a + segment.band_b - self.slack;
        (y1, y2)
    }

    /// Emit the primitives of one fold pair using the configured construction.
    pub fn add_segment(&self, segment: &FoldSegment, out: &mut SceneBuilder) {
        if self.zigzag {
            self.add_zigzag(segment, out);
        } else {
            self.add_straight(segment, out);
        }
    }

    /// Emit the panel-wide primitives that do not belong to a single fold.
    pub fn add_panel_guides(&self, out: &mut SceneBuilder) {
        if !self.zigzag {
            self.add_straight_guides(out);
        }
    }

    /// Straight slats: one inset cut rectangle per band boundary.
    pub fn add_straight(&self, segment: &FoldSegment, out: &mut SceneBuilder) {
        let (y1, y2) = self.band_boundaries(segment);
        for y in [y1, y2] {
            let width = self.width.width_at(y) - 2.0 * self.side_space;
            out.add_cut_rect(self.center_x, y + self.top_margin, width, self.slack);
        }
        trace!(index = segment.index, y1, y2, "straight slat pair");
    }

    /// Long score lines inset by the side space from each panel edge.
    pub fn add_straight_guides(&self, out: &mut SceneBuilder) {
        let top_half = self.width.top / 2.0 - self.side_space;
        let bottom_half = self.width.bottom / 2.0 - self.side_space;
        let y_top = self.top_margin;
        let y_bottom = self.top_margin + self.width.length;

        out.add_score_line(
            self.center_x - top_half,
            y_top,
            self.center_x - bottom_half,
            y_bottom,
        );
        out.add_score_line(
            self.center_x + top_half,
            y_top,
            self.center_x + bottom_half,
            y_bottom,
        );
    }

    /// Zigzag slats: two bridged cut rectangles joined by a Z of score lines.
    pub fn add_zigzag(&self, segment: &FoldSegment, out: &mut SceneBuilder) {
        let (y1, y2) = self.band_boundaries(segment);
        let cursor = segment.cursor_start;
        let cx = self.center_x;
        let m = self.top_margin;
        let slack = self.slack;

        // Inset at the segment ends, full width at the zig point.
        let start_half = (self.width.width_at(cursor) - 2.0 * self.side_space) / 2.0;
        let zig_half = self.width.width_at(y1) / 2.0;
        let end_half = (self.width.width_at(y2) - 2.0 * self.side_space) / 2.0;

        out.add_cut_rect(
            cx,
            y1 + m,
            2.0 * zig_half - 2.0 * self.connective,
            slack,
        );

        // Diagonals tracing the Z on both sides.
        for side in [-1.0, 1.0] {
            out.add_score_line(
                cx + side * start_half,
                cursor + m,
                cx + side * zig_half,
                y1 + m,
            );
        }
        for side in [-1.0, 1.0] {
            out.add_score_line(
                cx + side * zig_half,
                y1 + m + slack,
                cx + side * end_half,
                y2 + m,
            );
        }

        // Corner closers across the fold gap.
        for (half, y) in [(zig_half, y1), (end_half, y2)] {
            for side in [-1.0, 1.0] {
                out.add_score_line(cx + side * half, y + m, cx + side * half, y + m + slack);
            }
        }

        let end_width = 2.0 * end_half - 2.0 * self.connective;
        out.add_cut_rect(cx, y2 + m, end_width, slack);
        trace!(index = segment.index, y1, y2, "zigzag slat pair");
    }
}
