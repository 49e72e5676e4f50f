//! Single-qubit states for qubloch
//!
//! This crate holds the state model and the three operations that act on it:
//!
//! - **Validation**: Hermitian / unit-trace / PSD checks with every failure
//!   reported together ([`validation`])
//! - **Evolution**: ψ → Uψ and ρ → UρU† for one gate or a whole
//!   [`GateSequence`](qubloch_gates::GateSequence) ([`evolution`])
//! - **Projection**: state → [`BlochVector`](qubloch_core::BlochVector)
//!   ([`bloch`])
//!
//! # Example
//!
//! ```
//! use qubloch_state::{BasisState, QubitState};
//! use qubloch_gates::{FixedGate, GateSequence};
//!
//! let seq = GateSequence::new().with(FixedGate::H).with(FixedGate::H);
//! let out = BasisState::Zero.state().evolve(&seq);
//! assert!((out.bloch_vector().z - 1.0).abs() < 1e-9);
//! ```

pub mod bloch;
pub mod evolution;
pub mod state;
pub mod validation;

pub use bloch::bloch_vector;
pub use evolution::{apply, apply_matrix, apply_sequence, apply_sequence_with, apply_with};
pub use state::{BasisState, DensityMatrix, PureState, QubitState};
pub use validation::{validate_density_matrix, validate_density_matrix_with};
