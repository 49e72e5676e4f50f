//! Core types for the qubloch single-qubit engine
//!
//! This crate provides the pieces shared by the gate library and the state
//! model:
//! - [`Matrix2`]: closed-form 2×2 complex matrix arithmetic
//! - [`QubitError`]: the error taxonomy for rejected input
//! - [`EngineConfig`] / [`Tolerances`]: validator tolerances and policy
//! - [`BlochVector`]: 3D coordinates handed to a renderer
//! - [`parse`]: text and pair parsing for user-typed complex entries
//!
//! # Example
//! ```
//! use qubloch_core::{matrix, parse::parse_matrix};
//!
//! let x = parse_matrix("U", ["0", "1", "1", "0"]).unwrap();
//! let xx = matrix::multiply(&x, &x);
//! assert!(matrix::max_deviation(&xx, &matrix::IDENTITY) < 1e-12);
//! ```

pub mod bloch_sphere;
pub mod config;
pub mod error;
pub mod matrix;
pub mod parse;

// Re-exports for convenience
pub use bloch_sphere::{BlochAngles, BlochVector};
pub use config::{EngineConfig, Tolerances, UnitaryPolicy};
pub use error::{DensityViolation, QubitError};
pub use matrix::{Matrix2, Vector2};
pub use num_complex::Complex64;

/// Type alias for results in qubloch
pub type Result<T> = std::result::Result<T, QubitError>;
