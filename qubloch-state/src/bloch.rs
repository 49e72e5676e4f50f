//! Bloch projection of a [`QubitState`]

use crate::state::QubitState;
use qubloch_core::BlochVector;

/// Map a state to its Bloch vector
///
/// Pure states land on the unit sphere, mixed states inside it. The input's
/// own invariants are relied on; nothing is re-validated.
pub fn bloch_vector(state: &QubitState) -> BlochVector {
    match state {
        QubitState::Pure(psi) => BlochVector::from_amplitudes(psi.amplitudes()),
        QubitState::Mixed(rho) => BlochVector::from_density_matrix(rho.matrix()),
    }
}

impl QubitState {
    /// Bloch vector of this state
    pub fn bloch_vector(&self) -> BlochVector {
        bloch_vector(self)
    }
}
