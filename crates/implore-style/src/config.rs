//! Style configuration files
//!
//! A `StyleConfig` bundles preset choices plus raw registry overrides so a
//! project can pin its figure style in a TOML or JSON file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};
use crate::style::{validate_font_size, AspectRatio, FigureSize, FigureStyle, LineStyle};
use crate::value::StyleValue;

/// Preset selections applied on top of the base preset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Line/marker/color style name (`color`, `bw`, `both`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<String>,
    /// Leave markers out of the property cycle
    pub omit_markers: bool,
    /// Figure size name (`normal`, `small`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure_size: Option<String>,
    /// Width:height, defaults to 3:2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect: Option<AspectRatio>,
    /// Font preset name (`paper`, `talk`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure_style: Option<String>,
    /// Base font size for presentations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<f64>,
    /// Raw registry keys, applied last
    pub overrides: BTreeMap<String, StyleValue>,
}

impl StyleConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn line_style(&self) -> StyleResult<Option<LineStyle>> {
        self.line_style.as_deref().map(str::parse::<LineStyle>).transpose()
    }

    pub fn figure_size(&self) -> StyleResult<Option<FigureSize>> {
        self.figure_size.as_deref().map(str::parse::<FigureSize>).transpose()
    }

    /// Unlike `StyleSession::set_figure_style`, an unknown name in a config
    /// file is an error.
    pub fn figure_style(&self) -> StyleResult<Option<FigureStyle>> {
        self.figure_style
            .as_deref()
            .map(|name| {
                FigureStyle::parse(name).ok_or_else(|| {
                    StyleError::InvalidConfig(format!("unknown figure style '{}'", name))
                })
            })
            .transpose()
    }

    /// Validate configuration values
    pub fn validate(&self) -> StyleResult<()> {
        self.line_style()?;
        self.figure_size()?;
        self.figure_style()?;

        if let Some(fontsize) = self.fontsize {
            validate_font_size(fontsize)?;
        }

        if self.aspect.is_some() && self.figure_size.is_none() {
            return Err(StyleError::InvalidConfig(
                "aspect requires figure_size".to_string(),
            ));
        }

        Ok(())
    }
}
