//! Style session management
//!
//! A session owns:
//! - The live style registry
//! - A single snapshot slot used by [`StyleSession::swap_snapshot`]
//! - The runtime detected when the session was created
//!
//! Creating a session applies the base preset. The snapshot slot starts out
//! holding that post-preset registry.

use tracing::{debug, info, warn};

use crate::backend::{Runtime, BACKEND_KEY};
use crate::config::StyleConfig;
use crate::error::StyleResult;
use crate::preset::{
    base_preset, FIGSIZE_KEY, FONT_SIZE_KEY, PROP_CYCLE_KEY, XTICK_MAJOR_SIZE_KEY,
    XTICK_MINOR_SIZE_KEY, YTICK_MAJOR_SIZE_KEY, YTICK_MINOR_SIZE_KEY,
};
use crate::registry::StyleRegistry;
use crate::style::{AspectRatio, FigureSize, FigureStyle, LineStyle};
use crate::value::StyleValue;

/// Single-owner style context
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSession {
    registry: StyleRegistry,
    snapshot: StyleRegistry,
    runtime: Runtime,
}

impl StyleSession {
    /// Start from library defaults in the detected runtime
    pub fn new() -> Self {
        Self::from_registry(StyleRegistry::library_defaults())
    }

    /// Apply the base preset on top of an existing registry
    pub fn from_registry(registry: StyleRegistry) -> Self {
        Self::with_runtime(registry, Runtime::detect())
    }

    /// Apply the base preset for an explicit runtime
    pub fn with_runtime(mut registry: StyleRegistry, runtime: Runtime) -> Self {
        if let Some(backend) = runtime.backend() {
            info!("Notebook kernel detected, using {} backend", backend);
            registry.set(BACKEND_KEY, backend);
        }

        let preset = base_preset();
        debug!("Applying base preset ({} keys)", preset.len());
        registry.update(preset);

        Self {
            snapshot: registry.clone(),
            registry,
            runtime,
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Registry held in the snapshot slot
    pub fn snapshot(&self) -> &StyleRegistry {
        &self.snapshot
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.registry.get(key)
    }

    /// Set a single registry key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.registry.set(key, value);
    }

    /// Switch the property cycle by style name.
    ///
    /// Unknown names are logged and returned as
    /// [`StyleError::UnknownLineStyle`](crate::StyleError::UnknownLineStyle);
    /// the registry is left untouched.
    pub fn set_line_marker_style(&mut self, style: &str, omit_markers: bool) -> StyleResult<()> {
        let line_style = style.parse::<LineStyle>().map_err(|e| {
            warn!("{}", e);
            e
        })?;
        self.apply_line_style(line_style, omit_markers)
    }

    pub fn apply_line_style(&mut self, style: LineStyle, omit_markers: bool) -> StyleResult<()> {
        let cycle = style.build_cycle(omit_markers)?;
        debug!(
            "Setting {} to {:?} ({} entries, markers: {})",
            PROP_CYCLE_KEY,
            style,
            cycle.len(),
            !omit_markers
        );
        self.registry.set(PROP_CYCLE_KEY, cycle);
        Ok(())
    }

    /// Resize figures by size name. `aspect` defaults to 3:2.
    ///
    /// Unknown names are logged and returned as
    /// [`StyleError::UnknownFigureSize`](crate::StyleError::UnknownFigureSize);
    /// the registry is left untouched.
    pub fn set_figure_size(&mut self, size: &str, aspect: Option<AspectRatio>) -> StyleResult<()> {
        let figure_size = size.parse::<FigureSize>().map_err(|e| {
            warn!("{}", e);
            e
        })?;
        self.apply_figure_size(figure_size, aspect.unwrap_or_default());
        Ok(())
    }

    pub fn apply_figure_size(&mut self, size: FigureSize, aspect: AspectRatio) {
        let dimensions = size.dimensions_in(aspect);
        debug!(
            "Setting {:?} figure size: {:.3} x {:.3} in",
            size, dimensions.0, dimensions.1
        );

        let major = size.major_tick_size();
        let minor = size.minor_tick_size();
        self.registry.update([
            (FIGSIZE_KEY, StyleValue::from(dimensions)),
            (XTICK_MAJOR_SIZE_KEY, StyleValue::Float(major)),
            (XTICK_MINOR_SIZE_KEY, StyleValue::Float(minor)),
            (YTICK_MAJOR_SIZE_KEY, StyleValue::Float(major)),
            (YTICK_MINOR_SIZE_KEY, StyleValue::Float(minor)),
        ]);
    }

    /// Set the font-size preset by name.
    ///
    /// `fontsize` only applies to presentations and defaults to 16. Unknown
    /// names and non-finite or non-positive sizes change nothing and are not
    /// an error; the return value tells whether a preset was applied.
    pub fn set_figure_style(&mut self, style: &str, fontsize: Option<f64>) -> Option<FigureStyle> {
        let Some(figure_style) = FigureStyle::parse(style) else {
            debug!("Ignoring unknown figure style '{}'", style);
            return None;
        };

        match self.apply_figure_style(figure_style, fontsize) {
            Ok(()) => Some(figure_style),
            Err(e) => {
                debug!("Ignoring figure style '{}': {}", style, e);
                None
            }
        }
    }

    pub fn apply_figure_style(
        &mut self,
        style: FigureStyle,
        fontsize: Option<f64>,
    ) -> StyleResult<()> {
        let size = style.font_size(fontsize)?;
        debug!("Setting {} to {} for {:?}", FONT_SIZE_KEY, size, style);
        self.registry.set(FONT_SIZE_KEY, size);
        Ok(())
    }

    /// Exchange the live registry with the snapshot slot.
    ///
    /// Calling this twice restores the original state.
    pub fn swap_snapshot(&mut self) {
        std::mem::swap(&mut self.registry, &mut self.snapshot);
        debug!("Swapped style registry with snapshot");
    }

    /// Apply a configuration: line style, figure size, figure style, then
    /// overrides. Nothing is changed if any part is invalid.
    pub fn apply_config(&mut self, config: &StyleConfig) -> StyleResult<()> {
        config.validate()?;

        let backup = self.registry.clone();
        if let Err(e) = self.apply_config_unchecked(config) {
            self.registry = backup;
            return Err(e);
        }
        Ok(())
    }

    fn apply_config_unchecked(&mut self, config: &StyleConfig) -> StyleResult<()> {
        if let Some(style) = config.line_style()? {
            self.apply_line_style(style, config.omit_markers)?;
        }
        if let Some(size) = config.figure_size()? {
            self.apply_figure_size(size, config.aspect.unwrap_or_default());
        }
        if let Some(style) = config.figure_style()? {
            self.apply_figure_style(style, config.fontsize)?;
        }
        self.registry.update(config.overrides.clone());
        Ok(())
    }
}

impl Default for StyleSession {
    fn default() -> Self {
        Self::new()
    }
}
