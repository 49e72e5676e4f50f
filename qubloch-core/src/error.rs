//! Error types for qubloch

use num_complex::Complex64;
use std::fmt;
use thiserror::Error;

/// A single failed density-matrix constraint, with the numbers that failed it
#[derive(Debug, Clone, PartialEq)]
pub enum DensityViolation {
    /// ρ ≠ ρ†
    NotHermitian { max_deviation: f64 },
    /// Tr(ρ) ≠ 1
    TraceNotOne { trace: Complex64 },
    /// At least one eigenvalue is below the PSD floor (ascending order)
    NotPositiveSemidefinite { eigenvalues: [f64; 2] },
    /// An entry is NaN or infinite; no other constraint is meaningful
    NonFinite,
}

impl fmt::Display for DensityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DensityViolation::NotHermitian { max_deviation } => {
                write!(f, "matrix is not Hermitian (ρ ≠ ρ†, max deviation {:.2e})", max_deviation)
            },
            DensityViolation::TraceNotOne { trace } => {
                write!(f, "trace is not 1 (trace = {})", trace)
            },
            DensityViolation::NotPositiveSemidefinite { eigenvalues } => {
                write!(
                    f,
                    "matrix is not positive semi-definite (eigenvalues: [{}, {}])",
                    eigenvalues[0], eigenvalues[1]
                )
            },
            DensityViolation::NonFinite => f.write_str("matrix contains NaN or infinite entries"),
        }
    }
}

/// Errors that can occur while building states and gates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QubitError {
    /// The amplitude pair (0, 0) has no normalization
    #[error("amplitude vector cannot be zero")]
    ZeroVector,

    /// One or more density-matrix constraints failed
    #[error("invalid density matrix: {}", join_violations(.violations))]
    InvalidDensityMatrix { violations: Vec<DensityViolation> },

    /// U†U deviates from the identity
    #[error("matrix is not unitary: max deviation {max_deviation:.2e} exceeds tolerance {tolerance:.2e}")]
    NotUnitary { max_deviation: f64, tolerance: f64 },

    /// Non-numeric, incomplete or non-finite user entry
    #[error("malformed input for '{field}': {reason}")]
    MalformedInput { field: String, reason: String },
}

impl QubitError {
    /// Create a malformed input error
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Density-matrix violations carried by this error, empty for other kinds
    pub fn violations(&self) -> &[DensityViolation] {
        match self {
            QubitError::InvalidDensityMatrix { violations } => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[DensityViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
