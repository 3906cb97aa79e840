//! Bellows layout parameters.
//!
//! All lengths are millimetres. A [`BellowsConfig`] describes one face of
//! the bellows; [`MatingFaces`] describes the two adjoining faces that are
//! folded together and derives a config for each.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Millimetres per inch.
pub const INCH: f64 = 25.4;

/// Default page width (8.5 in).
pub const DEFAULT_PAGE_WIDTH: f64 = 8.5 * INCH;
/// Default page height (14 in).
pub const DEFAULT_PAGE_HEIGHT: f64 = 14.0 * INCH;
/// Default offset of the panel from the top page edge.
pub const DEFAULT_TOP_MARGIN: f64 = 5.0;
/// Default clearance between slat edge and panel edge.
pub const DEFAULT_SIDE_SPACE: f64 = 7.0;
/// Default gap reserved for each fold.
pub const DEFAULT_SLACK: f64 = 1.0;
/// Default width of the uncut bridge joining zigzag slats.
pub const DEFAULT_CONNECTIVE: f64 = 2.0;

fn default_page_width() -> f64 {
    DEFAULT_PAGE_WIDTH
}

fn default_page_height() -> f64 {
    DEFAULT_PAGE_HEIGHT
}

fn default_top_margin() -> f64 {
    DEFAULT_TOP_MARGIN
}

fn default_side_space() -> f64 {
    DEFAULT_SIDE_SPACE
}

fn default_slack() -> f64 {
    DEFAULT_SLACK
}

fn default_connective() -> f64 {
    DEFAULT_CONNECTIVE
}

fn default_true() -> bool {
    true
}

/// Fold weights of the reference bellows: shorter folds at the ends for
/// clearance, twelve full folds in between.
pub fn reference_folds() -> Vec<f64> {
    let mut folds = vec![0.6, 0.7, 0.85];
    folds.extend(std::iter::repeat(1.0).take(12));
    folds.push(0.75);
    folds
}

/// Parameters for one bellows face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BellowsConfig {
    /// Total unfolded length, film plane to lens board.
    pub length: f64,
    /// Panel width at the top (y = 0).
    pub top_width: f64,
    /// Panel width at the bottom (y = length).
    pub bottom_width: f64,
    /// Top width minus bottom width of the adjoining face.
    #[serde(default)]
    pub other_face_delta: f64,
    /// Relative weight of each fold pair.
    pub folds: Vec<f64>,
    /// Clearance between slat edge and panel edge.
    #[serde(default = "default_side_space")]
    pub side_space: f64,
    /// Gap reserved for the fold itself.
    #[serde(default = "default_slack")]
    pub slack: f64,
    /// Width of the uncut bridge joining zigzag slats.
    #[serde(default = "default_connective")]
    pub connective: f64,
    /// Zigzag (interlocking) construction instead of straight slats.
    #[serde(default = "default_true")]
    pub zigzag: bool,
    /// Put the smaller band first in each fold pair.
    #[serde(default)]
    pub up_down: bool,
    /// Page width.
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    /// Page height.
    #[serde(default = "default_page_height")]
    pub page_height: f64,
    /// Offset of the panel from the top page edge.
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,
}

impl Default for BellowsConfig {
    fn default() -> Self {
        let (main, _) = MatingFaces::reference().configs();
        main
    }
}

impl BellowsConfig {
    /// Sum of all fold weights.
    pub fn total_weight(&self) -> f64 {
        self.folds.iter().sum()
    }

    /// Number of fold pairs (one per weight).
    pub fn fold_count(&self) -> usize {
        self.folds.len()
    }

    /// Horizontal centre of the panel on the page.
    pub fn center_x(&self) -> f64 {
        self.page_width / 2.0
    }

    /// Extra outline clearance on each side of the panel.
    pub fn outline_extra(&self) -> f64 {
        if self.zigzag {
            self.side_space
        } else {
            0.0
        }
    }

    /// Parse a config from TOML and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("length", self.length),
            ("top_width", self.top_width),
            ("bottom_width", self.bottom_width),
            ("other_face_delta", self.other_face_delta),
            ("side_space", self.side_space),
            ("slack", self.slack),
            ("connective", self.connective),
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("top_margin", self.top_margin),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if self.length <= 0.0 {
            return Err(invalid("length must be positive"));
        }
        if self.folds.is_empty() {
            return Err(invalid("folds must not be empty"));
        }
        if let Some((i, w)) = self
            .folds
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(invalid(format!(
                "fold weight {i} must be finite and non-negative, got {w}"
            )));
        }
        if self.total_weight() <= 0.0 {
            return Err(invalid("sum of fold weights must be positive"));
        }

        for (name, value) in [
            ("top_width", self.top_width),
            ("bottom_width", self.bottom_width),
            ("side_space", self.side_space),
            ("slack", self.slack),
            ("connective", self.connective),
            ("top_margin", self.top_margin),
        ] {
            if value < 0.0 {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }

        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(invalid("page dimensions must be positive"));
        }
        let widest = self.top_width.max(self.bottom_width) + 2.0 * self.outline_extra();
        if widest > self.page_width {
            return Err(invalid(format!(
                "panel outline ({widest:.1}mm) is wider than the page ({:.1}mm)",
                self.page_width
            )));
        }
        if self.top_margin + self.length > self.page_height {
            return Err(invalid(format!(
                "panel ({:.1}mm with margin) is taller than the page ({:.1}mm)",
                self.top_margin + self.length,
                self.page_height
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> LayoutError {
    LayoutError::InvalidConfig(msg.into())
}

/// Top and bottom widths of one face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceWidths {
    /// Width at the top.
    pub top: f64,
    /// Width at the bottom.
    pub bottom: f64,
}

impl FaceWidths {
    /// Create face widths.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Top width minus bottom width.
    pub fn delta(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Two adjoining faces of one bellows that fold together.
///
/// The main face gets zigzag slats reaching the panel border; the side face
/// gets straight slats stopping short by the side space. Each face's slat
/// pitch is skewed by the other face's taper so their folds line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatingFaces {
    /// Total unfolded length shared by both faces.
    pub length: f64,
    /// Relative fold weights shared by both faces.
    pub folds: Vec<f64>,
    /// Main (zigzag) face.
    pub main: FaceWidths,
    /// Side (straight) face.
    pub side: FaceWidths,
    /// Clearance between slat edge and panel edge.
    #[serde(default = "default_side_space")]
    pub side_space: f64,
    /// Gap reserved for each fold.
    #[serde(default = "default_slack")]
    pub slack: f64,
    /// Width of the uncut bridge joining zigzag slats.
    #[serde(default = "default_connective")]
    pub connective: f64,
    /// Page width.
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    /// Page height.
    #[serde(default = "default_page_height")]
    pub page_height: f64,
    /// Offset of each panel from the top page edge.
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,
}

impl MatingFaces {
    /// A 270mm bellows tapering 156→55mm on the main face and 95→45mm on the
    /// side face.
    pub fn reference() -> Self {
        Self {
            length: 270.0,
            folds: reference_folds(),
            main: FaceWidths::new(156.0, 55.0),
            side: FaceWidths::new(95.0, 45.0),
            side_space: DEFAULT_SIDE_SPACE,
            slack: DEFAULT_SLACK,
            connective: DEFAULT_CONNECTIVE,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            top_margin: DEFAULT_TOP_MARGIN,
        }
    }

    /// Per-face configs: `(main, side)`.
    pub fn configs(&self) -> (BellowsConfig, BellowsConfig) {
        let face = |widths: FaceWidths, other: FaceWidths, zigzag: bool| BellowsConfig {
            length: self.length,
            top_width: widths.top,
            bottom_width: widths.bottom,
            other_face_delta: other.delta(),
            folds: self.folds.clone(),
            side_space: self.side_space,
            slack: self.slack,
            connective: self.connective,
            zigzag,
            up_down: !zigzag,
            page_width: self.page_width,
            page_height: self.page_height,
            top_margin: self.top_margin,
        };
        (
            face(self.main, self.side, true),
            face(self.side, self.main, false),
        )
    }

    /// Parse from TOML and validate both derived faces.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let faces: Self = toml::from_str(s)?;
        let (main, side) = faces.configs();
        main.validate()?;
        side.validate()?;
        Ok(faces)
    }

    /// Load from a TOML file and validate both derived faces.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
