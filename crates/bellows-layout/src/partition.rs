//! Fold partitioning - split the bellows length into weighted fold pairs.
//!
//! Each fold pair holds two slat bands. The bands are skewed by half of the
//! adjoining face's per-fold taper so that, once the two faces are folded
//! together, their fold lines land at the same physical position.

use serde::{Deserialize, Serialize};

use crate::config::BellowsConfig;

/// One fold pair along the bellows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldSegment {
    /// Position in the fold list.
    pub index: usize,
    /// Relative weight of this fold pair.
    pub weight: f64,
    /// Start position along the length.
    pub cursor_start: f64,
    /// End position along the length.
    pub cursor_end: f64,
    /// Thickness of the first slat band (weight-scaled).
    pub band_a: f64,
    /// Thickness of the second slat band (weight-scaled).
    pub band_b: f64,
}

impl FoldSegment {
    /// Length of the segment along the bellows.
    pub fn span(&self) -> f64 {
        self.cursor_end - self.cursor_start
    }

    /// Band thicknesses before weight scaling, `None` for a zero weight.
    pub fn unscaled_bands(&self) -> Option<(f64, f64)> {
        (self.weight > 0.0).then(|| (self.band_a / self.weight, self.band_b / self.weight))
    }

    /// Is this a zero-span segment?
    pub fn is_degenerate(&self) -> bool {
        self.weight == 0.0
    }
}

/// Nominal band thicknesses of a unit-weight fold pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPitch {
    /// First band in each pair.
    pub first: f64,
    /// Second band in each pair.
    pub second: f64,
}

impl BandPitch {
    /// Band pitch for the whole bellows.
    ///
    /// `slat_y = length / total` is the unit fold span, split into two bands
    /// of `(slat_y ± offset) / 2` with `offset = other_face_delta / total / 2`.
    /// The larger band comes first unless `up_down` is set.
    pub fn new(length: f64, total_weight: f64, other_face_delta: f64, up_down: bool) -> Self {
        let slat_y = length / total_weight;
        let slat_offset = (other_face_delta / total_weight) / 2.0;
        let larger = (slat_y + slat_offset) / 2.0;
        let smaller = (slat_y - slat_offset) / 2.0;
        if up_down {
            Self {
                first: smaller,
                second: larger,
            }
        } else {
            Self {
                first: larger,
                second: smaller,
            }
        }
    }
}

/// Partition a configured face into fold segments.
pub fn partition(config: &BellowsConfig) -> Vec<FoldSegment> {
    partition_folds(
        config.length,
        &config.folds,
        config.other_face_delta,
        config.up_down,
    )
}

/// Partition `length` into one segment per fold weight.
///
/// Cursors are a prefix sum over the weights, so the last segment ends at
/// `length` exactly. Zero weights yield zero-span segments.
pub fn partition_folds(
    length: f64,
    folds: &[f64],
    other_face_delta: f64,
    up_down: bool,
) -> Vec<FoldSegment> {
    let total: f64 = folds.iter().sum();
    let pitch = BandPitch::new(length, total, other_face_delta, up_down);

    folds
        .iter()
        .enumerate()
        .scan((0.0_f64, 0.0_f64), |(prefix, cursor), (index, &weight)| {
            *prefix += weight;
            let cursor_start = *cursor;
            let cursor_end = length * (*prefix / total);
            *cursor = cursor_end;
            Some(FoldSegment {
                index,
                weight,
                cursor_start,
                cursor_end,
                band_a: pitch.first * weight,
                band_b: pitch.second * weight,
            })
        })
        .collect()
}
