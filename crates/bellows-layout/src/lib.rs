#![warn(missing_docs)]

//! Cut and score layouts for folding bellows stiffener slats.
//!
//! Given the unfolded length of a bellows face, its top and bottom widths,
//! and a list of fold weights, this crate computes where every stiffener
//! slat, connective bridge, and fold score line goes. The result is a
//! [`Scene`] of polygons, rectangles, and line segments in two layers:
//!
//! - **CUT** (black): the panel outline and the gaps between slats
//! - **SCORE** (green): lines creased rather than cut
//!
//! Writing the scene to a vector drawing format is left to the caller.
//!
//! # Example
//!
//! ```
//! use bellows_layout::{layout, layout_faces, BellowsConfig, MatingFaces};
//!
//! let config = BellowsConfig {
//!     folds: vec![1.0; 12],
//!     ..Default::default()
//! };
//! let scene = layout(&config)?;
//! assert_eq!(scene.score().len(), 8 * 12);
//!
//! // Both adjoining faces of a bellows at once.
//! let (main, side) = layout_faces(&MatingFaces::reference())?;
//! assert_eq!(side.score().len(), 2);
//! # let _ = main;
//! # Ok::<(), bellows_layout::LayoutError>(())
//! ```

pub mod config;
pub mod error;
pub mod outline;
pub mod partition;
pub mod scene;
pub mod slat;
pub mod types;
pub mod width;

pub use config::{BellowsConfig, FaceWidths, MatingFaces, INCH};
pub use error::{LayoutError, Result};
pub use outline::outline;
pub use partition::{partition, partition_folds, BandPitch, FoldSegment};
pub use scene::{assemble, Scene, SceneBuilder};
pub use slat::SlatBuilder;
pub use types::{BoundingBox2D, Layer, Point2D, Primitive, Shape2D, StrokeColor};
pub use width::TrapezoidWidth;

use tracing::{instrument, Span};

/// Lay out one bellows face.
///
/// Validates the config, then builds the outline and every slat pair. This
/// is the main entry point.
#[instrument(skip_all, fields(folds = config.folds.len(), zigzag = config.zigzag))]
pub fn layout(config: &BellowsConfig) -> Result<Scene> {
    config.validate()?;
    Ok(assemble(config))
}

/// Lay out both adjoining faces of a bellows concurrently.
///
/// Returns `(main, side)` scenes; see [`MatingFaces::configs`].
#[instrument(skip_all, fields(folds = faces.folds.len()))]
pub fn layout_faces(faces: &MatingFaces) -> Result<(Scene, Scene)> {
    let (main, side) = faces.configs();
    // Pool threads do not inherit the current span.
    let span = Span::current();
    let (main, side) = rayon::join(
        || span.in_scope(|| layout(&main)),
        || span.in_scope(|| layout(&side)),
    );
    Ok((main?, side?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rejects_invalid() {
        let config = BellowsConfig {
            folds: vec![0.0],
            ..Default::default()
        };
        assert!(matches!(
            layout(&config),
            Err(LayoutError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_layout_faces_reference() {
        let faces = MatingFaces::reference();
        let (main, side) = layout_faces(&faces).unwrap();
        let n = faces.folds.len();

        assert_eq!(main.score().len(), 8 * n);
        assert_eq!(main.rectangles().count(), 2 * n);
        assert_eq!(side.score().len(), 2);
        assert_eq!(side.rectangles().count(), 2 * n);
        assert_eq!(main.polygons().count(), 1);
        assert_eq!(side.polygons().count(), 1);
    }

    #[test]
    fn test_layout_faces_invalid_side() {
        let mut faces = MatingFaces::reference();
        faces.side.top = f64::NAN;
        assert!(layout_faces(&faces).is_err());
    }

    #[test]
    fn test_layout_matches_assemble() {
        let config = BellowsConfig::default();
        assert_eq!(layout(&config).unwrap(), assemble(&config));
    }
}
