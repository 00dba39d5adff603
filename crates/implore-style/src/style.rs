//! Named style presets.
//!
//! Each preset accepts a small group of case-insensitive synonyms
//! (`bw`, `black`, `blackwhite` all select [`LineStyle::BlackWhite`]).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cycle::{DashPattern, PropCycle};
use crate::error::{CycleResult, StyleError, StyleResult};
use crate::preset::{DASHES, MARKERS, PALETTE};

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Base font size for paper figures, in points.
pub const PAPER_FONT_SIZE: f64 = 9.0;

/// Base font size for talks when the caller does not pick one.
pub const DEFAULT_PRESENTATION_FONT_SIZE: f64 = 16.0;

const LINE_STYLE_SYNONYMS: &[(&str, LineStyle)] = &[
    ("color", LineStyle::Color),
    ("c", LineStyle::Color),
    ("col", LineStyle::Color),
    ("bw", LineStyle::BlackWhite),
    ("blackwhite", LineStyle::BlackWhite),
    ("blacknwhite", LineStyle::BlackWhite),
    ("black", LineStyle::BlackWhite),
    ("both", LineStyle::Both),
    ("egal", LineStyle::Both),
    ("dunno", LineStyle::Both),
];

const FIGURE_SIZE_SYNONYMS: &[(&str, FigureSize)] = &[
    ("normal", FigureSize::Normal),
    ("n", FigureSize::Normal),
    ("small", FigureSize::Small),
    ("s", FigureSize::Small),
];

const FIGURE_STYLE_SYNONYMS: &[(&str, FigureStyle)] = &[
    ("paper", FigureStyle::Paper),
    ("p", FigureStyle::Paper),
    ("publication", FigureStyle::Paper),
    ("presentation", FigureStyle::Presentation),
    ("talk", FigureStyle::Presentation),
    ("t", FigureStyle::Presentation),
];

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    let name = name.to_lowercase();
    table
        .iter()
        .find(|(synonym, _)| *synonym == name)
        .map(|(_, value)| *value)
}

/// How successive series are told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LineStyle {
    /// Distinct colors, solid lines
    Color,
    /// Black lines with distinct dash patterns
    BlackWhite,
    /// Distinct colors and dash patterns
    #[default]
    Both,
}

impl LineStyle {
    /// Resolve a synonym (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        lookup(LINE_STYLE_SYNONYMS, name)
    }

    /// Build the property cycle for this style.
    ///
    /// - `Color`: colors, zipped with markers unless omitted
    /// - `BlackWhite`: `["k"] * dashes`, zipped with markers unless omitted
    /// - `Both`: colors zipped with dashes, then with markers unless omitted
    pub fn build_cycle(&self, omit_markers: bool) -> CycleResult<PropCycle> {
        let colors = PropCycle::colors(PALETTE);
        let dashes = PropCycle::dashes(DASHES.iter().map(|d| DashPattern::from(*d)));
        let markers = PropCycle::markers(MARKERS);

        let cycle = match self {
            Self::Color => colors,
            Self::BlackWhite => PropCycle::colors(["k"]).try_mul(&dashes)?,
            Self::Both => colors.try_add(&dashes)?,
        };

        if omit_markers {
            Ok(cycle)
        } else {
            cycle.try_add(&markers)
        }
    }
}

impl FromStr for LineStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StyleError::UnknownLineStyle {
            name: s.to_string(),
        })
    }
}

/// Nominal figure width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FigureSize {
    /// Full text width (175 mm)
    #[default]
    Normal,
    /// Single column (85 mm)
    Small,
}

impl FigureSize {
    pub fn parse(name: &str) -> Option<Self> {
        lookup(FIGURE_SIZE_SYNONYMS, name)
    }

    pub fn width_mm(&self) -> f64 {
        match self {
            Self::Normal => 175.0,
            Self::Small => 85.0,
        }
    }

    /// Major tick length in points.
    pub fn major_tick_size(&self) -> f64 {
        match self {
            Self::Normal => 3.2,
            Self::Small => 2.0,
        }
    }

    /// Minor tick length in points.
    pub fn minor_tick_size(&self) -> f64 {
        match self {
            Self::Normal => 1.8,
            Self::Small => 1.1,
        }
    }

    /// Figure (width, height) in inches.
    pub fn dimensions_in(&self, aspect: AspectRatio) -> (f64, f64) {
        let width_mm = self.width_mm();
        (
            width_mm / MM_PER_INCH,
            width_mm / aspect.ratio() / MM_PER_INCH,
        )
    }
}

impl FromStr for FigureSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StyleError::UnknownFigureSize {
            name: s.to_string(),
        })
    }
}

/// Font sizing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FigureStyle {
    #[default]
    Paper,
    Presentation,
}

impl FigureStyle {
    pub fn parse(name: &str) -> Option<Self> {
        lookup(FIGURE_STYLE_SYNONYMS, name)
    }

    /// Base font size. `fontsize` only applies to presentations.
    pub fn font_size(&self, fontsize: Option<f64>) -> StyleResult<f64> {
        match self {
            Self::Paper => Ok(PAPER_FONT_SIZE),
            Self::Presentation => {
                validate_font_size(fontsize.unwrap_or(DEFAULT_PRESENTATION_FONT_SIZE))
            }
        }
    }
}

/// Font sizes must be positive and finite.
pub fn validate_font_size(size: f64) -> StyleResult<f64> {
    if !size.is_finite() || size <= 0.0 {
        return Err(StyleError::InvalidFontSize { size });
    }
    Ok(size)
}

/// Width:height ratio of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// Both sides must be positive and finite.
    pub fn new(width: f64, height: f64) -> StyleResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(StyleError::InvalidAspect { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 3.0,
            height: 2.0,
        }
    }
}

impl TryFrom<(f64, f64)> for AspectRatio {
    type Error = StyleError;

    fn try_from((width, height): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<AspectRatio> for (f64, f64) {
    fn from(aspect: AspectRatio) -> Self {
        (aspect.width, aspect.height)
    }
}
