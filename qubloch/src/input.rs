//! Turning raw form entries into states and gates
//!
//! Every function here either returns a fully validated value or an error
//! naming what was wrong; nothing half-built escapes.

use num_complex::Complex64;
use qubloch_core::parse::parse_matrix;
use qubloch_core::{QubitError, Result, Tolerances};
use qubloch_gates::{Gate, GateName, UnitaryMatrix};
use qubloch_state::{DensityMatrix, PureState, QubitState};

/// Pure state from the four numbers Re(a), Im(a), Re(b), Im(b)
pub fn pure_state(a_re: f64, a_im: f64, b_re: f64, b_im: f64) -> Result<QubitState> {
    PureState::from_parts(a_re, a_im, b_re, b_im).map(QubitState::Pure)
}

/// Mixed state from the four typed entries ρ00, ρ01, ρ10, ρ11
///
/// Parsing failures surface as [`QubitError::MalformedInput`] before any
/// validation runs; a parsed matrix that is not a density matrix yields
/// [`QubitError::InvalidDensityMatrix`] listing every failed constraint.
pub fn density_matrix(entries: [&str; 4], tolerances: &Tolerances) -> Result<QubitState> {
    let rho = parse_matrix("ρ", entries)?;
    DensityMatrix::with_tolerances(rho, tolerances).map(QubitState::Mixed)
}

/// Build a gate from a picker selection plus its parameters
///
/// Rotations need `angle`; custom gates need the four entries U00, U01, U10,
/// U11, which are parsed and checked for unitarity here, once.
pub fn gate(
    name: GateName,
    angle: Option<f64>,
    entries: Option<[&str; 4]>,
    tolerances: &Tolerances,
) -> Result<Gate> {
    match name {
        GateName::Fixed(kind) => Ok(Gate::Fixed(kind)),
        GateName::Rotation(axis) => {
            let angle = angle.ok_or_else(|| QubitError::malformed("angle", "rotation needs an angle"))?;
            Gate::rotation(axis, angle)
        },
        GateName::Custom => {
            let entries = entries
                .ok_or_else(|| QubitError::malformed("U", "custom gate needs four matrix entries"))?;
            let matrix = parse_matrix("U", entries)?;
            UnitaryMatrix::with_tolerance(matrix, tolerances.unitary).map(Gate::Custom)
        },
    }
}

/// Pure state from two already-parsed amplitudes
pub fn pure_state_from_amplitudes(a: Complex64, b: Complex64) -> Result<QubitState> {
    QubitState::pure(a, b)
}
