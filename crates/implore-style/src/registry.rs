//! Style registry: the key/value store consumed by the plotting engine.
//!
//! Keys are dotted matplotlib rc names (`lines.linewidth`,
//! `xtick.major.size`, ...). Iteration order is alphabetical so exports are
//! stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cycle::PropCycle;
use crate::preset::PROP_CYCLE_KEY;
use crate::value::StyleValue;

/// Mapping from style keys to values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRegistry {
    values: BTreeMap<String, StyleValue>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Plotting engine defaults for every key the presets touch
    pub fn library_defaults() -> Self {
        let mut registry = Self::new();
        registry.update([
            ("lines.linewidth", StyleValue::Float(1.5)),
            ("lines.markeredgewidth", StyleValue::Float(1.0)),
            ("lines.markersize", StyleValue::Float(6.0)),
            ("font.size", StyleValue::Float(10.0)),
            ("axes.linewidth", StyleValue::Float(0.8)),
            ("axes.titlesize", StyleValue::from("large")),
            ("xtick.top", StyleValue::Bool(false)),
            ("xtick.major.size", StyleValue::Float(3.5)),
            ("xtick.minor.size", StyleValue::Float(2.0)),
            ("xtick.major.width", StyleValue::Float(0.8)),
            ("xtick.minor.width", StyleValue::Float(0.6)),
            ("ytick.right", StyleValue::Bool(false)),
            ("ytick.major.size", StyleValue::Float(3.5)),
            ("ytick.minor.size", StyleValue::Float(2.0)),
            ("ytick.major.width", StyleValue::Float(0.8)),
            ("ytick.minor.width", StyleValue::Float(0.6)),
            ("grid.linewidth", StyleValue::Float(0.8)),
            ("legend.framealpha", StyleValue::Float(0.8)),
            ("legend.edgecolor", StyleValue::from("0.8")),
            ("legend.fancybox", StyleValue::Bool(true)),
            ("legend.numpoints", StyleValue::Int(1)),
            ("legend.handlelength", StyleValue::Float(2.0)),
            ("figure.titlesize", StyleValue::from("large")),
            ("figure.figsize", StyleValue::from((6.4, 4.8))),
            ("figure.dpi", StyleValue::Int(100)),
            ("savefig.dpi", StyleValue::from("figure")),
            ("svg.fonttype", StyleValue::from("path")),
        ]);
        registry.set(
            PROP_CYCLE_KEY,
            PropCycle::colors([
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ]),
        );
        registry
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.values.get(key)
    }

    /// Numeric value of a key (`Int` or `Float`)
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_f64)
    }

    /// Current property cycle, if one is set
    pub fn prop_cycle(&self) -> Option<&PropCycle> {
        self.get(PROP_CYCLE_KEY).and_then(StyleValue::as_cycle)
    }

    /// Set a key, returning the previous value
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Overwrite many keys at once
    pub fn update<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Load from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Render as matplotlibrc text, one `key: value` per line
    pub fn to_rc_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.values {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.update(iter);
        registry
    }
}
