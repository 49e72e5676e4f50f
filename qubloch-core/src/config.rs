//! Engine configuration
//!
//! Tolerances are fixed by default; hosts that want a different trade-off
//! between rounding slack and strictness can build their own
//! [`EngineConfig`].

use serde::{Deserialize, Serialize};

/// Maximum |ρ − ρ†| entry for a Hermitian matrix
pub const DEFAULT_HERMITIAN_TOLERANCE: f64 = 1e-10;

/// Maximum |Tr(ρ) − 1|
pub const DEFAULT_TRACE_TOLERANCE: f64 = 1e-10;

/// Eigenvalues down to −floor are accepted as non-negative
pub const DEFAULT_PSD_FLOOR: f64 = 1e-10;

/// Maximum |U†U − I| entry. Looser than the density checks because
/// hand-typed matrices carry more rounding.
pub const DEFAULT_UNITARY_TOLERANCE: f64 = 1e-8;

/// Maximum | ‖ψ‖ − 1 | for a normalized amplitude pair
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Numeric tolerances used by the validators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub hermitian: f64,
    pub trace: f64,
    pub psd_floor: f64,
    pub unitary: f64,
    pub normalization: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            hermitian: DEFAULT_HERMITIAN_TOLERANCE,
            trace: DEFAULT_TRACE_TOLERANCE,
            psd_floor: DEFAULT_PSD_FLOOR,
            unitary: DEFAULT_UNITARY_TOLERANCE,
            normalization: DEFAULT_NORM_TOLERANCE,
        }
    }
}

/// How custom gate matrices are treated once they have passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitaryPolicy {
    /// Validate once when the gate is built, then trust it on every application
    #[default]
    TrustValidated,
    /// Re-run the unitarity check every time a custom gate is applied
    RecheckOnApply,
}

/// Configuration for the evolution engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Validator tolerances
    pub tolerances: Tolerances,

    /// Custom gate re-validation policy
    ///
    /// Default: [`UnitaryPolicy::TrustValidated`]
    pub unitary_policy: UnitaryPolicy,
}

impl EngineConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that re-checks custom gates on every application
    pub fn strict() -> Self {
        Self {
            unitary_policy: UnitaryPolicy::RecheckOnApply,
            ..Default::default()
        }
    }

    /// Replace the tolerances
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }
}
