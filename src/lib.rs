//! Parabola - plot quadratic functions in the terminal.
//!
//! Samples `y = ax² + bx + c` over a domain, marks the vertex, and draws the
//! result as a terminal chart. A small menu offers the default curve, a demo
//! curve, several preset curves overlaid, or coefficients typed at a prompt.
//!
//! # Features
//!
//! - Pure quadratic evaluator (sampling, vertex, labels)
//! - Full-screen chart viewer with grid, zero axes and legend
//! - Headless text rendering for pipes and tests
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use parabola::quadratic::{sample, vertex, CurveSpec};
//!
//! let spec = CurveSpec::new(2.0, -4.0, 1.0);
//! let curve = sample(&spec, 400)?;
//! assert_eq!(curve.len(), 400);
//! assert_eq!(vertex(&spec).map(|v| v.point()), Some((1.0, -1.0)));
//! # Ok::<(), parabola::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod figure;
pub mod input;
pub mod menu;
pub mod plot;
pub mod presets;
pub mod quadratic;
pub mod render;
pub mod theme;

pub use error::{PlotError, Result};
