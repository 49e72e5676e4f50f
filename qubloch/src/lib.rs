//! qubloch: a single-qubit state and gate engine
//!
//! Build a pure or mixed qubit state, validate it, push gates through it and
//! read back a Bloch vector for plotting. The engine is purely functional:
//! every operation takes immutable inputs and returns a new value, so
//! independent sessions can run on any threads without coordination.
//!
//! The workspace is split into:
//! - `qubloch-core`: matrices, errors, tolerances, parsing, [`BlochVector`]
//! - `qubloch-gates`: the gate library and [`GateSequence`]
//! - `qubloch-state`: [`QubitState`], validation, evolution, projection
//!
//! This crate re-exports all three and adds [`Session`], the value a host
//! keeps per user for the sequence being built.
//!
//! # Example
//!
//! ```
//! use qubloch::{BasisState, FixedGate, Gate, Session};
//!
//! let mut session = Session::new(BasisState::Zero.state());
//! session.push_gate(Gate::Fixed(FixedGate::H));
//! session.push_gate(Gate::Fixed(FixedGate::S));
//!
//! let v = session.final_bloch().unwrap();
//! assert!((v.y - 1.0).abs() < 1e-9);
//! assert_eq!(session.sequence_label(), "H → S");
//! ```

pub mod input;
pub mod session;

pub use qubloch_core::{
    BlochAngles, BlochVector, Complex64, DensityViolation, EngineConfig, Matrix2, QubitError,
    Result, Tolerances, UnitaryPolicy,
};
pub use qubloch_gates::{gate_matrix, validate_unitary, Axis, FixedGate, Gate, GateName, GateSequence};
pub use qubloch_state::{
    apply, apply_sequence, bloch_vector, validate_density_matrix, BasisState, DensityMatrix,
    PureState, QubitState,
};
pub use session::Session;
