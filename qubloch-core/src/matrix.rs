//! Closed-form 2×2 complex matrix arithmetic
//!
//! Every operator in a single-qubit engine is a 2×2 complex matrix, so the
//! handful of operations needed (product, adjoint, trace, deviation from a
//! reference) are written out directly instead of going through a general
//! linear-algebra library.

use num_complex::Complex64;

/// Row-major 2×2 complex matrix
pub type Matrix2 = [[Complex64; 2]; 2];

/// Amplitude pair (α, β) for |ψ⟩ = α|0⟩ + β|1⟩
pub type Vector2 = [Complex64; 2];

pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Identity matrix
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Matrix product a·b
#[inline]
pub fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut result = [[ZERO; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Conjugate transpose U†
#[inline]
pub fn dagger(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Matrix-vector product m·v
#[inline]
pub fn apply_to_vector(m: &Matrix2, v: &Vector2) -> Vector2 {
    [
        m[0][0] * v[0] + m[0][1] * v[1],
        m[1][0] * v[0] + m[1][1] * v[1],
    ]
}

/// Conjugation U·ρ·U†
#[inline]
pub fn conjugate(u: &Matrix2, rho: &Matrix2) -> Matrix2 {
    multiply(&multiply(u, rho), &dagger(u))
}

/// Tr(m)
#[inline]
pub fn trace(m: &Matrix2) -> Complex64 {
    m[0][0] + m[1][1]
}

/// Largest entry-wise distance |a_ij − b_ij|
pub fn max_deviation(a: &Matrix2, b: &Matrix2) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..2 {
        for j in 0..2 {
            max = max.max((a[i][j] - b[i][j]).norm());
        }
    }
    max
}

/// Outer product |v⟩⟨v|
pub fn outer_product(v: &Vector2) -> Matrix2 {
    [
        [v[0] * v[0].conj(), v[0] * v[1].conj()],
        [v[1] * v[0].conj(), v[1] * v[1].conj()],
    ]
}

/// True when no entry is NaN or infinite
pub fn is_finite(m: &Matrix2) -> bool {
    m.iter().flatten().all(|z| z.re.is_finite() && z.im.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const I: Complex64 = Complex64::new(0.0, 1.0);

    fn pauli_y() -> Matrix2 {
        [[ZERO, -I], [I, ZERO]]
    }

    #[test]
    fn test_identity_is_neutral() {
        let y = pauli_y();
        assert_eq!(multiply(&IDENTITY, &y), y);
        assert_eq!(multiply(&y, &IDENTITY), y);
    }

    #[test]
    fn test_pauli_y_squared_is_identity() {
        let y = pauli_y();
        assert!(max_deviation(&multiply(&y, &y), &IDENTITY) < 1e-12);
    }

    #[test]
    fn test_dagger_of_upper_triangular() {
        let m = [[ONE, I], [ZERO, ONE]];
        let d = dagger(&m);
        assert_eq!(d[1][0], -I);
        assert_eq!(d[0][1], ZERO);
    }

    #[test]
    fn test_outer_product_has_unit_trace() {
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        let v = [Complex64::new(inv_sqrt2, 0.0), Complex64::new(0.0, inv_sqrt2)];
        let rho = outer_product(&v);
        assert_relative_eq!(trace(&rho).re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(rho[1][0].im, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_is_finite_detects_nan() {
        let mut m = IDENTITY;
        assert!(is_finite(&m));
        m[0][1] = Complex64::new(f64::NAN, 0.0);
        assert!(!is_finite(&m));
    }
}
