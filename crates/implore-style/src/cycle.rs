//! Property cycles for successive plot series
//!
//! A cycle is an ordered list of entries; each entry may set a line color,
//! a dash pattern and a marker. Cycles compose like matplotlib's `cycler`:
//!
//! - `try_add` zips two cycles of equal length position by position
//! - `try_mul` builds the outer product (left operand varies slowest)
//!
//! Both operands must set disjoint properties.

use serde::{Deserialize, Serialize};

use crate::error::{CycleError, CycleResult};

/// Property a cycle entry can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleProperty {
    Color,
    Dashes,
    Marker,
}

impl CycleProperty {
    /// Registry-facing property name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Dashes => "dashes",
            Self::Marker => "marker",
        }
    }
}

/// Marker shape drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Marker {
    Circle,
    Diamond,
    Square,
    Hexagon,
    TriangleDown,
    TriangleUp,
    TriangleLeft,
    TriangleRight,
    Pentagon,
    PlusFilled,
}

impl Marker {
    /// Parse from the single-character marker code.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Self::Circle),
            'D' => Some(Self::Diamond),
            's' => Some(Self::Square),
            'h' => Some(Self::Hexagon),
            'v' => Some(Self::TriangleDown),
            '^' => Some(Self::TriangleUp),
            '<' => Some(Self::TriangleLeft),
            '>' => Some(Self::TriangleRight),
            'p' => Some(Self::Pentagon),
            'P' => Some(Self::PlusFilled),
            _ => None,
        }
    }

    /// Single-character marker code.
    pub fn code(&self) -> char {
        match self {
            Self::Circle => 'o',
            Self::Diamond => 'D',
            Self::Square => 's',
            Self::Hexagon => 'h',
            Self::TriangleDown => 'v',
            Self::TriangleUp => '^',
            Self::TriangleLeft => '<',
            Self::TriangleRight => '>',
            Self::Pentagon => 'p',
            Self::PlusFilled => 'P',
        }
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.code()
    }
}

impl TryFrom<char> for Marker {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or_else(|| format!("unknown marker code '{}'", c))
    }
}

/// Alternating stroke/gap lengths in points. Empty means a solid line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashPattern(pub Vec<u32>);

impl DashPattern {
    pub fn solid() -> Self {
        Self(Vec::new())
    }

    pub fn is_solid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[u32] {
        &self.0
    }
}

impl From<&[u32]> for DashPattern {
    fn from(segments: &[u32]) -> Self {
        Self(segments.to_vec())
    }
}

/// One step of a property cycle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CycleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashes: Option<DashPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl CycleEntry {
    /// Properties set on this entry, in canonical order
    pub fn properties(&self) -> Vec<CycleProperty> {
        let mut props = Vec::with_capacity(3);
        if self.color.is_some() {
            props.push(CycleProperty::Color);
        }
        if self.dashes.is_some() {
            props.push(CycleProperty::Dashes);
        }
        if self.marker.is_some() {
            props.push(CycleProperty::Marker);
        }
        props
    }

    /// Combine two entries that set disjoint properties
    fn merge(&self, other: &CycleEntry) -> CycleResult<CycleEntry> {
        if self.color.is_some() && other.color.is_some() {
            return Err(CycleError::DuplicateKey(CycleProperty::Color));
        }
        if self.dashes.is_some() && other.dashes.is_some() {
            return Err(CycleError::DuplicateKey(CycleProperty::Dashes));
        }
        if self.marker.is_some() && other.marker.is_some() {
            return Err(CycleError::DuplicateKey(CycleProperty::Marker));
        }

        Ok(CycleEntry {
            color: self.color.clone().or_else(|| other.color.clone()),
            dashes: self.dashes.clone().or_else(|| other.dashes.clone()),
            marker: self.marker.or(other.marker),
        })
    }
}

/// Ordered, repeating sequence of style combinations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropCycle {
    entries: Vec<CycleEntry>,
}

impl PropCycle {
    /// Cycle over colors alone
    pub fn colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: colors
                .into_iter()
                .map(|c| CycleEntry {
                    color: Some(c.into()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    /// Cycle over dash patterns alone
    pub fn dashes<I, D>(patterns: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DashPattern>,
    {
        Self {
            entries: patterns
                .into_iter()
                .map(|d| CycleEntry {
                    dashes: Some(d.into()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    /// Cycle over markers alone
    pub fn markers<I>(markers: I) -> Self
    where
        I: IntoIterator<Item = Marker>,
    {
        Self {
            entries: markers
                .into_iter()
                .map(|m| CycleEntry {
                    marker: Some(m),
                    ..Default::default()
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CycleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CycleEntry> {
        self.entries.iter()
    }

    /// Properties set by this cycle (taken from the first entry)
    pub fn properties(&self) -> Vec<CycleProperty> {
        self.entries
            .first()
            .map(CycleEntry::properties)
            .unwrap_or_default()
    }

    /// Zip with another cycle of the same length
    pub fn try_add(&self, other: &PropCycle) -> CycleResult<PropCycle> {
        if self.len() != other.len() {
            return Err(CycleError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a.merge(b))
            .collect::<CycleResult<Vec<_>>>()?;

        Ok(PropCycle { entries })
    }

    /// Outer product with another cycle
    pub fn try_mul(&self, other: &PropCycle) -> CycleResult<PropCycle> {
        let mut entries = Vec::with_capacity(self.len() * other.len());
        for a in &self.entries {
            for b in &other.entries {
                entries.push(a.merge(b)?);
            }
        }
        Ok(PropCycle { entries })
    }

    /// Render as a `cycler(...)` expression understood by matplotlibrc
    pub fn to_cycler_expr(&self) -> String {
        let terms: Vec<String> = self
            .properties()
            .into_iter()
            .map(|prop| {
                let values: Vec<String> = self
                    .entries
                    .iter()
                    .map(|entry| match prop {
                        CycleProperty::Color => {
                            format!("'{}'", entry.color.as_deref().unwrap_or_default())
                        }
                        CycleProperty::Dashes => format_dashes(entry.dashes.as_ref()),
                        CycleProperty::Marker => format!(
                            "'{}'",
                            entry.marker.map(|m| m.code().to_string()).unwrap_or_default()
                        ),
                    })
                    .collect();
                format!("cycler('{}', [{}])", prop.name(), values.join(", "))
            })
            .collect();

        match terms.len() {
            0 => "cycler('color', [])".to_string(),
            1 => terms[0].clone(),
            _ => format!("({})", terms.join(" + ")),
        }
    }
}

fn format_dashes(pattern: Option<&DashPattern>) -> String {
    let segments: Vec<String> = pattern
        .map(|p| p.segments().iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();
    match segments.len() {
        0 => "()".to_string(),
        1 => format!("({},)", segments[0]),
        _ => format!("({})", segments.join(", ")),
    }
}
