//! Error types for the parabola plotter.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while sampling, prompting or rendering.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The domain is empty or reversed (`x_min >= x_max`).
    #[error("Invalid domain: x_min ({x_min}) must be less than x_max ({x_max})")]
    InvalidDomain {
        /// Lower bound that was supplied.
        x_min: f64,
        /// Upper bound that was supplied.
        x_max: f64,
    },

    /// Fewer than two samples were requested.
    #[error("Invalid sample count: {0} (at least 2 required)")]
    InvalidSampleCount(usize),

    /// A required field was not a finite number.
    #[error("Invalid input for {field}: '{value}'")]
    InvalidInput {
        /// Name of the prompted field.
        field: String,
        /// Raw text the user entered.
        value: String,
    },

    /// The user interrupted the session (Ctrl+C or end of input).
    #[error("Interrupted")]
    Interrupted,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create an InvalidDomain error.
    pub fn invalid_domain(x_min: f64, x_max: f64) -> Self {
        Self::InvalidDomain { x_min, x_max }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether this error ends the session quietly with a closing message.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}
