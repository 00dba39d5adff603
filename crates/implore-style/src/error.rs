//! Error types for implore-style
//!
//! Provides error handling for:
//! - Unrecognized preset names
//! - Invalid figure geometry
//! - Property cycle composition
//! - Style configuration files

use thiserror::Error;

use crate::cycle::CycleProperty;

/// Main error type for style operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// Line/marker style name matched no synonym group
    #[error("Unknown style '{name}'. Properties not set.")]
    UnknownLineStyle { name: String },

    /// Figure size name matched no synonym group
    #[error("Unknown size '{name}'.")]
    UnknownFigureSize { name: String },

    /// Aspect ratio with non-positive or non-finite components
    #[error("Invalid aspect ratio {width}:{height} (both sides must be positive and finite)")]
    InvalidAspect { width: f64, height: f64 },

    /// Font size that is not a positive, finite number
    #[error("Invalid font size {size} (must be positive and finite)")]
    InvalidFontSize { size: f64 },

    /// Property cycle could not be composed
    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while combining property cycles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    /// Zipping two cycles of different lengths
    #[error("Cannot add cycles of different lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Both operands set the same property
    #[error("Property '{}' is set by both cycles", .0.name())]
    DuplicateKey(CycleProperty),
}

/// Result type alias for style operations
pub type StyleResult<T> = Result<T, StyleError>;

/// Result type alias for cycle composition
pub type CycleResult<T> = Result<T, CycleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_display() {
        let err = StyleError::UnknownLineStyle {
            name: "rainbow".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown style 'rainbow'. Properties not set.");
    }

    #[test]
    fn test_unknown_size_display() {
        let err = StyleError::UnknownFigureSize {
            name: "huge".to_string(),
        };
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_cycle_error_display() {
        let err = CycleError::LengthMismatch { left: 10, right: 3 };
        assert!(err.to_string().contains("10 vs 3"));

        let err = CycleError::DuplicateKey(CycleProperty::Marker);
        assert!(err.to_string().contains("marker"));
    }

    #[test]
    fn test_cycle_error_converts() {
        let err: StyleError = CycleError::LengthMismatch { left: 1, right: 2 }.into();
        assert!(matches!(err, StyleError::Cycle(_)));
    }
}
