//! User-supplied unitary matrices
//!
//! A [`UnitaryMatrix`] can only be obtained through [`UnitaryMatrix::new`],
//! which runs [`validate_unitary`]. Holding one is therefore proof that the
//! check passed, and the gate library never repeats it on lookup.

use qubloch_core::config::DEFAULT_UNITARY_TOLERANCE;
use qubloch_core::matrix::{self, Matrix2, IDENTITY};
use qubloch_core::{QubitError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest entry of |U†U − I|
pub fn unitary_deviation(m: &Matrix2) -> f64 {
    let product = matrix::multiply(&matrix::dagger(m), m);
    matrix::max_deviation(&product, &IDENTITY)
}

/// Check U†U = I with the default tolerance (1e-8)
///
/// # Example
/// ```
/// use qubloch_gates::unitary::validate_unitary;
/// use num_complex::Complex64;
///
/// let one = Complex64::new(1.0, 0.0);
/// let zero = Complex64::new(0.0, 0.0);
/// let shear = [[one, one], [zero, one]];
/// assert!(validate_unitary(&shear).is_err());
/// ```
pub fn validate_unitary(m: &Matrix2) -> Result<()> {
    validate_unitary_with(m, DEFAULT_UNITARY_TOLERANCE)
}

/// Check U†U = I, reporting the observed deviation on failure
pub fn validate_unitary_with(m: &Matrix2, tolerance: f64) -> Result<()> {
    if !matrix::is_finite(m) {
        return Err(QubitError::malformed("U", "matrix contains NaN or infinite values"));
    }

    let max_deviation = unitary_deviation(m);
    if max_deviation < tolerance {
        Ok(())
    } else {
        debug!(max_deviation, tolerance, "rejected non-unitary matrix");
        Err(QubitError::NotUnitary {
            max_deviation,
            tolerance,
        })
    }
}

/// A 2×2 matrix that passed the unitarity check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Matrix2", into = "Matrix2")]
pub struct UnitaryMatrix {
    matrix: Matrix2,
}

impl UnitaryMatrix {
    /// Validate with the default tolerance and wrap
    pub fn new(matrix: Matrix2) -> Result<Self> {
        validate_unitary(&matrix)?;
        Ok(Self { matrix })
    }

    /// Validate with an explicit tolerance and wrap
    pub fn with_tolerance(matrix: Matrix2, tolerance: f64) -> Result<Self> {
        validate_unitary_with(&matrix, tolerance)?;
        Ok(Self { matrix })
    }

    /// The validated matrix
    #[inline]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }
}

/// Used by deserialization, which therefore always checks at
/// [`DEFAULT_UNITARY_TOLERANCE`]: a matrix accepted under a looser tolerance
/// does not load back.
impl TryFrom<Matrix2> for UnitaryMatrix {
    type Error = QubitError;

    fn try_from(matrix: Matrix2) -> Result<Self> {
        Self::new(matrix)
    }
}

impl From<UnitaryMatrix> for Matrix2 {
    fn from(u: UnitaryMatrix) -> Self {
        u.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    #[test]
    fn test_identity_is_unitary() {
        assert!(validate_unitary(&IDENTITY).is_ok());
        assert_eq!(unitary_deviation(&IDENTITY), 0.0);
    }

    #[test]
    fn test_shear_is_rejected_with_evidence() {
        let shear = [[ONE, ONE], [ZERO, ONE]];
        match validate_unitary(&shear) {
            Err(QubitError::NotUnitary {
                max_deviation,
                tolerance,
            }) => {
                assert!((max_deviation - 1.0).abs() < 1e-12);
                assert_eq!(tolerance, DEFAULT_UNITARY_TOLERANCE);
            },
            other => panic!("expected NotUnitary, got {:?}", other),
        }
    }

    #[test]
    fn test_rounded_hadamard_passes_default_tolerance() {
        // Eight typed digits leave ~1e-9 of drift
        let h = Complex64::new(0.70710678, 0.0);
        let m = [[h, h], [h, -h]];
        assert!(UnitaryMatrix::new(m).is_ok());
        assert!(UnitaryMatrix::with_tolerance(m, 1e-12).is_err());
    }

    #[test]
    fn test_non_finite_is_malformed() {
        let m = [[Complex64::new(f64::INFINITY, 0.0), ZERO], [ZERO, ONE]];
        assert!(matches!(
            validate_unitary(&m),
            Err(QubitError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_deserialize_revalidates() {
        let json = serde_json::to_string(&UnitaryMatrix::new(IDENTITY).unwrap()).unwrap();
        let back: UnitaryMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(*back.matrix(), IDENTITY);

        let shear = serde_json::to_string(&[[ONE, ONE], [ZERO, ONE]]).unwrap();
        assert!(serde_json::from_str::<UnitaryMatrix>(&shear).is_err());
    }
}
