//! Gate application
//!
//! Pure states evolve as ψ → U·ψ, mixed states as ρ → U·ρ·U†. A sequence is a
//! left fold in index order, so the gate appended first acts first. Each
//! step yields a fresh [`QubitState`]; the input is never modified.

use crate::state::{DensityMatrix, PureState, QubitState};
use qubloch_core::config::{EngineConfig, UnitaryPolicy, DEFAULT_NORM_TOLERANCE};
use qubloch_core::matrix::{self, Matrix2, Vector2};
use qubloch_core::Result;
use qubloch_gates::{gate_matrix, validate_unitary_with, Gate, GateSequence};
use tracing::{error, trace, warn};

/// Apply one gate
///
/// Custom gates are trusted: a [`Gate::Custom`] can only be built from a
/// matrix that already passed the unitarity check.
///
/// # Example
/// ```
/// use qubloch_state::{apply, BasisState, QubitState};
/// use qubloch_gates::{FixedGate, Gate};
///
/// let one = apply(&BasisState::Zero.state(), &Gate::Fixed(FixedGate::X));
/// if let QubitState::Pure(psi) = one {
///     assert!((psi.b().re - 1.0).abs() < 1e-9);
/// }
/// ```
pub fn apply(state: &QubitState, gate: &Gate) -> QubitState {
    trace!(gate = %gate.label(), "applying gate");
    apply_matrix(state, &gate_matrix(gate))
}

/// Apply a unitary given directly as a matrix
///
/// The caller guarantees `u` is unitary with finite entries. A matrix that
/// breaks this and yields a non-finite or zero-norm result is logged at
/// error level and the input state is returned unchanged, so no invalid
/// state escapes. [`apply_with`] reports such gates as errors instead.
pub fn apply_matrix(state: &QubitState, u: &Matrix2) -> QubitState {
    let evolved = if matrix::is_finite(u) {
        match state {
            QubitState::Pure(psi) => renormalize(matrix::apply_to_vector(u, psi.amplitudes()))
                .map(|v| QubitState::Pure(PureState::from_normalized(v))),
            QubitState::Mixed(rho) => {
                DensityMatrix::from_evolved(matrix::conjugate(u, rho.matrix())).map(QubitState::Mixed)
            },
        }
    } else {
        None
    };
    evolved.unwrap_or_else(|| {
        error!(?u, "gate matrix produced an invalid state; state left unchanged");
        *state
    })
}

/// Apply every gate of `sequence` in order; the empty sequence returns `state`
pub fn apply_sequence(state: &QubitState, sequence: &GateSequence) -> QubitState {
    sequence
        .iter()
        .fold(*state, |current, gate| apply(&current, gate))
}

/// Apply one gate under an explicit configuration
///
/// Rotations with a non-finite angle are rejected. With
/// [`UnitaryPolicy::RecheckOnApply`] custom matrices are checked against the
/// configured tolerance again before use.
pub fn apply_with(state: &QubitState, gate: &Gate, config: &EngineConfig) -> Result<QubitState> {
    gate.validate()?;
    if let (UnitaryPolicy::RecheckOnApply, Gate::Custom(unitary)) = (config.unitary_policy, gate) {
        validate_unitary_with(unitary.matrix(), config.tolerances.unitary)?;
    }
    Ok(apply(state, gate))
}

/// Apply a sequence under an explicit configuration, stopping at the first
/// gate that fails its re-check
pub fn apply_sequence_with(
    state: &QubitState,
    sequence: &GateSequence,
    config: &EngineConfig,
) -> Result<QubitState> {
    sequence
        .iter()
        .try_fold(*state, |current, gate| apply_with(&current, gate, config))
}

/// Divide out floating drift accumulated by the matrix product
///
/// `None` if the norm is zero or not finite.
fn renormalize(v: Vector2) -> Option<Vector2> {
    let norm = v[0].norm().hypot(v[1].norm());
    if !norm.is_finite() || norm == 0.0 {
        return None;
    }
    if (norm - 1.0).abs() > DEFAULT_NORM_TOLERANCE {
        warn!(norm, "amplitude norm drifted during evolution");
    }
    Some([v[0] / norm, v[1] / norm])
}

impl QubitState {
    /// Apply one gate, returning the new state
    pub fn apply(&self, gate: &Gate) -> QubitState {
        apply(self, gate)
    }

    /// Apply a whole sequence, returning the final state
    pub fn evolve(&self, sequence: &GateSequence) -> QubitState {
        apply_sequence(self, sequence)
    }
}
