//! Single-qubit state model
//!
//! A [`QubitState`] is either a normalized amplitude pair or a validated
//! density matrix. Both wrappers keep their fields private, so any value of
//! these types already satisfies its invariants; evolution returns new
//! values rather than editing existing ones.

use crate::validation::{hermitian_eigenvalues, validate_density_matrix_with};
use num_complex::Complex64;
use qubloch_core::config::{Tolerances, DEFAULT_NORM_TOLERANCE};
use qubloch_core::matrix::{self, Matrix2, Vector2};
use qubloch_core::parse::complex_from_parts;
use qubloch_core::{QubitError, Result};
use std::fmt;
use tracing::warn;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Pure state α|0⟩ + β|1⟩ with |α|² + |β|² = 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PureState {
    amplitudes: Vector2,
}

impl PureState {
    /// Normalize an arbitrary non-zero amplitude pair
    ///
    /// # Errors
    /// - [`QubitError::ZeroVector`] if both amplitudes are exactly zero
    /// - [`QubitError::MalformedInput`] if any component is NaN or infinite
    pub fn new(a: Complex64, b: Complex64) -> Result<Self> {
        let a = complex_from_parts("a", a.re, a.im)?;
        let b = complex_from_parts("b", b.re, b.im)?;

        let norm = a.norm().hypot(b.norm());
        if norm == 0.0 {
            return Err(QubitError::ZeroVector);
        }

        Ok(Self {
            amplitudes: [a / norm, b / norm],
        })
    }

    /// Build from real/imaginary pairs as typed into a form
    pub fn from_parts(a_re: f64, a_im: f64, b_re: f64, b_im: f64) -> Result<Self> {
        let a = complex_from_parts("Re(a)/Im(a)", a_re, a_im)?;
        let b = complex_from_parts("Re(b)/Im(b)", b_re, b_im)?;
        Self::new(a, b)
    }

    /// Wrap amplitudes already known to be normalized
    pub(crate) const fn from_normalized(amplitudes: Vector2) -> Self {
        Self { amplitudes }
    }

    /// Amplitude of |0⟩
    #[inline]
    pub fn a(&self) -> Complex64 {
        self.amplitudes[0]
    }

    /// Amplitude of |1⟩
    #[inline]
    pub fn b(&self) -> Complex64 {
        self.amplitudes[1]
    }

    /// Both amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &Vector2 {
        &self.amplitudes
    }

    /// ‖ψ‖, 1 up to rounding
    pub fn norm(&self) -> f64 {
        self.amplitudes[0].norm().hypot(self.amplitudes[1].norm())
    }

    /// ρ = |ψ⟩⟨ψ|
    pub fn to_density_matrix(&self) -> DensityMatrix {
        DensityMatrix {
            matrix: matrix::outer_product(&self.amplitudes),
        }
    }
}

/// Hermitian, unit-trace, positive semi-definite 2×2 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityMatrix {
    matrix: Matrix2,
}

impl DensityMatrix {
    /// Validate with default tolerances
    ///
    /// # Errors
    /// - [`QubitError::InvalidDensityMatrix`] listing every failed constraint
    /// - [`QubitError::MalformedInput`] if any entry is NaN or infinite
    pub fn new(matrix: Matrix2) -> Result<Self> {
        Self::with_tolerances(matrix, &Tolerances::default())
    }

    /// Validate with explicit tolerances
    pub fn with_tolerances(matrix: Matrix2, tolerances: &Tolerances) -> Result<Self> {
        if !matrix::is_finite(&matrix) {
            return Err(QubitError::malformed("ρ", "matrix contains NaN or infinite values"));
        }
        validate_density_matrix_with(&matrix, tolerances)
            .map_err(|violations| QubitError::InvalidDensityMatrix { violations })?;
        Ok(Self { matrix })
    }

    /// ρ = I/2
    pub fn maximally_mixed() -> Self {
        let half = Complex64::new(0.5, 0.0);
        Self {
            matrix: [[half, ZERO], [ZERO, half]],
        }
    }

    /// Result of a unitary conjugation, re-Hermitized and rescaled to unit trace
    ///
    /// Gates accepted under a loose unitarity tolerance shift the trace a
    /// little on every step; the rescale keeps the result a density matrix.
    /// `None` if the conjugated matrix is not finite or has no positive trace.
    pub(crate) fn from_evolved(evolved: Matrix2) -> Option<Self> {
        let trace = matrix::trace(&evolved).re;
        if !matrix::is_finite(&evolved) || !trace.is_finite() || trace <= 0.0 {
            return None;
        }
        if (trace - 1.0).abs() > DEFAULT_NORM_TOLERANCE {
            warn!(trace, "density matrix trace drifted during evolution");
        }
        let adjoint = matrix::dagger(&evolved);
        let mut rescaled = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                rescaled[i][j] = (evolved[i][j] + adjoint[i][j]) / (2.0 * trace);
            }
        }
        Some(Self { matrix: rescaled })
    }

    /// Matrix entries
    #[inline]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Get a matrix element ρᵢⱼ
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row][col]
    }

    /// Tr(ρ), 1 up to rounding
    pub fn trace(&self) -> f64 {
        matrix::trace(&self.matrix).re
    }

    /// Purity Tr(ρ²) ∈ [1/2, 1], equal to 1 for pure states
    pub fn purity(&self) -> f64 {
        matrix::trace(&matrix::multiply(&self.matrix, &self.matrix)).re
    }

    /// Eigenvalues, ascending
    pub fn eigenvalues(&self) -> [f64; 2] {
        hermitian_eigenvalues(&self.matrix)
    }
}

/// A single-qubit state, pure or mixed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QubitState {
    Pure(PureState),
    Mixed(DensityMatrix),
}

impl QubitState {
    /// Normalized pure state from two amplitudes
    pub fn pure(a: Complex64, b: Complex64) -> Result<Self> {
        PureState::new(a, b).map(QubitState::Pure)
    }

    /// Mixed state from a density matrix, validated with default tolerances
    pub fn mixed(rho: Matrix2) -> Result<Self> {
        DensityMatrix::new(rho).map(QubitState::Mixed)
    }

    /// Tr(ρ²)
    pub fn purity(&self) -> f64 {
        match self {
            QubitState::Pure(_) => 1.0,
            QubitState::Mixed(rho) => rho.purity(),
        }
    }

    /// Whether the state has purity 1 within `tolerance`
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.purity() - 1.0).abs() < tolerance
    }

    /// Density matrix of this state
    pub fn to_density_matrix(&self) -> DensityMatrix {
        match self {
            QubitState::Pure(psi) => psi.to_density_matrix(),
            QubitState::Mixed(rho) => *rho,
        }
    }
}

impl From<PureState> for QubitState {
    fn from(psi: PureState) -> Self {
        QubitState::Pure(psi)
    }
}

impl From<DensityMatrix> for QubitState {
    fn from(rho: DensityMatrix) -> Self {
        QubitState::Mixed(rho)
    }
}

impl From<BasisState> for QubitState {
    fn from(basis: BasisState) -> Self {
        basis.state()
    }
}

impl fmt::Display for PureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.amplitudes[0], self.amplitudes[1])
    }
}

impl fmt::Display for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.matrix;
        write!(
            f,
            "[[{:.4}, {:.4}],\n [{:.4}, {:.4}]]",
            m[0][0], m[0][1], m[1][0], m[1][1]
        )
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitState::Pure(psi) => psi.fmt(f),
            QubitState::Mixed(rho) => rho.fmt(f),
        }
    }
}

/// Predefined states: the computational basis and the X and Y eigenstates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisState {
    /// |0⟩
    Zero,
    /// |1⟩
    One,
    /// |+⟩ = (|0⟩ + |1⟩)/√2
    Plus,
    /// |−⟩ = (|0⟩ − |1⟩)/√2
    Minus,
    /// |+i⟩ = (|0⟩ + i|1⟩)/√2
    PlusI,
    /// |−i⟩ = (|0⟩ − i|1⟩)/√2
    MinusI,
}

impl BasisState {
    /// Catalog in menu order
    pub const ALL: [BasisState; 6] = [
        BasisState::Zero,
        BasisState::One,
        BasisState::Plus,
        BasisState::Minus,
        BasisState::PlusI,
        BasisState::MinusI,
    ];

    /// Exact closed-form amplitudes
    pub const fn amplitudes(&self) -> Vector2 {
        match self {
            BasisState::Zero => [ONE, ZERO],
            BasisState::One => [ZERO, ONE],
            BasisState::Plus => [Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
            BasisState::Minus => [Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
            BasisState::PlusI => [Complex64::new(INV_SQRT2, 0.0), Complex64::new(0.0, INV_SQRT2)],
            BasisState::MinusI => [Complex64::new(INV_SQRT2, 0.0), Complex64::new(0.0, -INV_SQRT2)],
        }
    }

    /// The state, without passing through floating-point validation
    pub const fn state(&self) -> QubitState {
        QubitState::Pure(PureState::from_normalized(self.amplitudes()))
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            BasisState::Zero => "|0⟩",
            BasisState::One => "|1⟩",
            BasisState::Plus => "|+⟩ = (|0⟩ + |1⟩)/√2",
            BasisState::Minus => "|-⟩ = (|0⟩ - |1⟩)/√2",
            BasisState::PlusI => "|i⟩ = (|0⟩ + i|1⟩)/√2",
            BasisState::MinusI => "|-i⟩ = (|0⟩ - i|1⟩)/√2",
        }
    }
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_pure_state_is_normalized() {
        let psi = PureState::new(Complex64::new(3.0, 0.0), Complex64::new(0.0, 4.0)).unwrap();
        assert_relative_eq!(psi.a().re, 0.6, epsilon = TOL);
        assert_relative_eq!(psi.b().im, 0.8, epsilon = TOL);
        assert_relative_eq!(psi.norm(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_vector_rejected() {
        assert_eq!(
            QubitState::pure(ZERO, ZERO).unwrap_err(),
            QubitError::ZeroVector
        );
    }

    #[test]
    fn test_tiny_vector_still_normalizes() {
        let psi = PureState::from_parts(1e-300, 0.0, 1e-300, 0.0).unwrap();
        assert_relative_eq!(psi.norm(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_amplitude_is_malformed() {
        let err = PureState::from_parts(f64::NAN, 0.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, QubitError::MalformedInput { .. }));
    }

    #[test]
    fn test_invalid_density_matrix_is_never_built() {
        let rho = [[ONE, ZERO], [ZERO, -ONE]];
        let err = QubitState::mixed(rho).unwrap_err();
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_purity() {
        assert_relative_eq!(DensityMatrix::maximally_mixed().purity(), 0.5, epsilon = TOL);
        let plus = BasisState::Plus.state();
        assert_relative_eq!(plus.to_density_matrix().purity(), 1.0, epsilon = TOL);
        assert!(plus.is_pure(TOL));
        assert!(!QubitState::Mixed(DensityMatrix::maximally_mixed()).is_pure(TOL));
    }

    #[test]
    fn test_catalog_states_are_exact() {
        for basis in BasisState::ALL {
            match basis.state() {
                QubitState::Pure(psi) => assert_relative_eq!(psi.norm(), 1.0, epsilon = 1e-15),
                QubitState::Mixed(_) => panic!("catalog states are pure"),
            }
        }
        assert_eq!(BasisState::One.amplitudes(), [ZERO, ONE]);
    }

    #[test]
    fn test_display() {
        let zero = BasisState::Zero.state();
        assert_eq!(zero.to_string(), "[1.0000+0.0000i, 0.0000+0.0000i]");

        let mixed = QubitState::Mixed(DensityMatrix::maximally_mixed());
        assert!(mixed.to_string().starts_with("[[0.5000+0.0000i"));
    }
}
