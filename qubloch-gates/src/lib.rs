//! Single-qubit gate library for qubloch
//!
//! Every gate resolves to a 2×2 unitary through one function,
//! [`gate_matrix`], whether it is applied on its own or as part of a
//! [`GateSequence`].
//!
//! # Features
//!
//! - **Fixed gates**: X, Y, Z, H, S, S†, T, T† as `const` matrices
//! - **Rotations**: RX, RY, RZ for any real angle, no wrap-around
//! - **Custom gates**: user matrices validated once as [`UnitaryMatrix`]
//! - **Sequences**: ordered, append/undo/clear, serde-persistable
//!
//! # Example
//!
//! ```
//! use qubloch_gates::{gate_matrix, FixedGate, Gate, GateSequence};
//! use std::f64::consts::PI;
//!
//! let mut seq = GateSequence::new();
//! seq.push(Gate::Fixed(FixedGate::H));
//! seq.push(Gate::rz(PI / 2.0));
//! assert_eq!(seq.to_string(), "H → RZ(1.57)");
//!
//! let h = gate_matrix(&seq.gates()[0]);
//! assert!((h[1][1].re + std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//! ```

pub mod gate;
pub mod matrices;
pub mod sequence;
pub mod unitary;

// Re-export commonly used items
pub use gate::{gate_matrix, Axis, FixedGate, Gate, GateName};
pub use sequence::GateSequence;
pub use unitary::{validate_unitary, validate_unitary_with, UnitaryMatrix};
