//! Curated style constants
//!
//! The base preset targets compact, publication-style figures: thin lines,
//! small inward ticks on all four sides, a translucent borderless legend and a
//! 3:2 figure sized for a full-width journal column.

use crate::cycle::Marker;
use crate::value::StyleValue;

pub const PROP_CYCLE_KEY: &str = "axes.prop_cycle";
pub const FONT_SIZE_KEY: &str = "font.size";
pub const FIGSIZE_KEY: &str = "figure.figsize";
pub const XTICK_MAJOR_SIZE_KEY: &str = "xtick.major.size";
pub const XTICK_MINOR_SIZE_KEY: &str = "xtick.minor.size";
pub const YTICK_MAJOR_SIZE_KEY: &str = "ytick.major.size";
pub const YTICK_MINOR_SIZE_KEY: &str = "ytick.minor.size";

/// Line colors: black first, then the tab10 hues reordered.
pub const PALETTE: [&str; 10] = [
    "k",       // black
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#e377c2", // magenta
    "#9467bd", // violet
    "#17becf", // cyan
    "#bcbd22", // lime
    "#d62728", // red
    "#8c564b", // brown
];

pub const MARKERS: [Marker; 10] = [
    Marker::Circle,
    Marker::Diamond,
    Marker::Square,
    Marker::Hexagon,
    Marker::TriangleDown,
    Marker::TriangleUp,
    Marker::TriangleLeft,
    Marker::TriangleRight,
    Marker::Pentagon,
    Marker::PlusFilled,
];

pub const DASHES: [&[u32]; 10] = [
    &[],                       // solid
    &[3, 1],                   // dash
    &[5, 1, 1, 1],             // long dash, dot
    &[5, 2],                   // long dash
    &[5, 1, 1, 1, 1, 1],       // long dash, dot, dot
    &[1, 1],                   // dots
    &[5, 1, 5, 1, 5, 3],       // triple dash
    &[10, 1, 1, 1, 1, 2],      // very long dash, dot, dot
    &[10, 2, 5, 2],            // very long dash, long dash
    &[10, 2, 1, 2, 5, 2, 1, 2], // very long dash, dot, long dash, dot
];

/// Key/value pairs written when a session is created
pub fn base_preset() -> Vec<(&'static str, StyleValue)> {
    vec![
        ("lines.linewidth", StyleValue::Float(1.0)),
        ("lines.markeredgewidth", StyleValue::Float(0.0)),
        ("lines.markersize", StyleValue::Int(6)),
        (FONT_SIZE_KEY, StyleValue::Float(9.0)),
        ("axes.linewidth", StyleValue::Float(0.5)),
        ("axes.titlesize", StyleValue::from("medium")),
        ("xtick.top", StyleValue::Bool(true)),
        (XTICK_MAJOR_SIZE_KEY, StyleValue::Float(3.2)),
        (XTICK_MINOR_SIZE_KEY, StyleValue::Float(1.8)),
        ("xtick.major.width", StyleValue::Float(0.5)),
        ("xtick.minor.width", StyleValue::Float(0.5)),
        ("ytick.right", StyleValue::Bool(true)),
        (YTICK_MAJOR_SIZE_KEY, StyleValue::Float(3.2)),
        (YTICK_MINOR_SIZE_KEY, StyleValue::Float(1.8)),
        ("ytick.major.width", StyleValue::Float(0.5)),
        ("ytick.minor.width", StyleValue::Float(0.5)),
        ("grid.linewidth", StyleValue::Float(0.5)),
        ("legend.framealpha", StyleValue::Float(0.7)),
        ("legend.edgecolor", StyleValue::from("none")),
        ("legend.fancybox", StyleValue::Bool(true)),
        ("legend.numpoints", StyleValue::Int(1)),
        ("legend.handlelength", StyleValue::Float(3.0)),
        ("figure.titlesize", StyleValue::from("medium")),
        (FIGSIZE_KEY, StyleValue::from((6.89, 4.59))), // 3:2
        ("figure.dpi", StyleValue::Int(100)),
        ("savefig.dpi", StyleValue::Int(150)),
        ("svg.fonttype", StyleValue::from("none")),
    ]
}
