//! Registry values
//!
//! Style keys hold scalars (numbers, booleans, short strings), numeric tuples
//! such as `figure.figsize`, or a full property cycle.
//!
//! Deserialization is untagged. `Cycle` is tried before `Tuple`, so an empty
//! sequence reads back as an empty cycle; no style key holds an empty tuple.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cycle::PropCycle;

/// A single style registry value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Cycle(PropCycle),
    Tuple(Vec<f64>),
}

impl StyleValue {
    /// Numeric view of `Int` and `Float` values
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[f64]> {
        match self {
            Self::Tuple(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_cycle(&self) -> Option<&PropCycle> {
        match self {
            Self::Cycle(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    /// matplotlibrc rendering
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
            Self::Tuple(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", parts.join(", "))
            }
            Self::Cycle(cycle) => write!(f, "{}", cycle.to_cycler_expr()),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for StyleValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<(f64, f64)> for StyleValue {
    fn from((a, b): (f64, f64)) -> Self {
        Self::Tuple(vec![a, b])
    }
}

impl From<PropCycle> for StyleValue {
    fn from(v: PropCycle) -> Self {
        Self::Cycle(v)
    }
}
