//! Single-qubit gate definitions
//!
//! A [`Gate`] is a small immutable value: one of the eight fixed gates, a
//! rotation about a Bloch axis, or a custom matrix that already passed the
//! unitarity check. [`gate_matrix`] is the single place where any of them
//! turns into a 2×2 matrix.

use crate::matrices;
use crate::unitary::UnitaryMatrix;
use qubloch_core::{Matrix2, QubitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gates with a compile-time matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixedGate {
    X,
    Y,
    Z,
    H,
    S,
    Sdg,
    T,
    Tdg,
}

impl FixedGate {
    /// All fixed gates in menu order
    pub const ALL: [FixedGate; 8] = [
        FixedGate::X,
        FixedGate::Y,
        FixedGate::Z,
        FixedGate::H,
        FixedGate::S,
        FixedGate::Sdg,
        FixedGate::T,
        FixedGate::Tdg,
    ];

    /// The gate's conventional name
    pub fn name(&self) -> &'static str {
        match self {
            FixedGate::X => "X",
            FixedGate::Y => "Y",
            FixedGate::Z => "Z",
            FixedGate::H => "H",
            FixedGate::S => "S",
            FixedGate::Sdg => "Sdg",
            FixedGate::T => "T",
            FixedGate::Tdg => "Tdg",
        }
    }

    /// The pre-computed matrix
    pub fn matrix(&self) -> &'static Matrix2 {
        match self {
            FixedGate::X => &matrices::PAULI_X,
            FixedGate::Y => &matrices::PAULI_Y,
            FixedGate::Z => &matrices::PAULI_Z,
            FixedGate::H => &matrices::HADAMARD,
            FixedGate::S => &matrices::S_GATE,
            FixedGate::Sdg => &matrices::S_GATE_DAGGER,
            FixedGate::T => &matrices::T_GATE,
            FixedGate::Tdg => &matrices::T_GATE_DAGGER,
        }
    }

    /// Whether the gate is its own inverse
    pub fn is_hermitian(&self) -> bool {
        matches!(self, FixedGate::X | FixedGate::Y | FixedGate::Z | FixedGate::H)
    }

    /// The inverse gate
    pub fn inverse(&self) -> FixedGate {
        match self {
            FixedGate::S => FixedGate::Sdg,
            FixedGate::Sdg => FixedGate::S,
            FixedGate::T => FixedGate::Tdg,
            FixedGate::Tdg => FixedGate::T,
            other => *other,
        }
    }
}

/// Rotation axis on the Bloch sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Name of the rotation gate about this axis
    pub fn gate_name(&self) -> &'static str {
        match self {
            Axis::X => "RX",
            Axis::Y => "RY",
            Axis::Z => "RZ",
        }
    }
}

/// A single-qubit gate
///
/// Rotation angles are radians and are used as given: no wrapping into
/// [0, 2π), negative values allowed. The angle must be finite; build gates
/// from untrusted numbers with [`Gate::rotation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    Fixed(FixedGate),
    Rotation { axis: Axis, angle: f64 },
    Custom(UnitaryMatrix),
}

impl Gate {
    /// Rotation about `axis`, rejecting NaN and infinite angles
    ///
    /// # Example
    /// ```
    /// use qubloch_gates::{Axis, Gate};
    ///
    /// assert_eq!(Gate::rotation(Axis::Y, 0.5).unwrap(), Gate::ry(0.5));
    /// assert!(Gate::rotation(Axis::Y, f64::NAN).is_err());
    /// ```
    pub fn rotation(axis: Axis, angle: f64) -> Result<Self> {
        if !angle.is_finite() {
            return Err(QubitError::malformed("angle", format!("{} is not a finite angle", angle)));
        }
        Ok(Gate::Rotation { axis, angle })
    }

    /// Rotation about X by `angle` radians; `angle` must be finite
    pub fn rx(angle: f64) -> Self {
        Gate::Rotation {
            axis: Axis::X,
            angle,
        }
    }

    /// Rotation about Y by `angle` radians; `angle` must be finite
    pub fn ry(angle: f64) -> Self {
        Gate::Rotation {
            axis: Axis::Y,
            angle,
        }
    }

    /// Rotation about Z by `angle` radians; `angle` must be finite
    pub fn rz(angle: f64) -> Self {
        Gate::Rotation {
            axis: Axis::Z,
            angle,
        }
    }

    /// Validate a user-supplied matrix and wrap it as a gate
    pub fn custom(matrix: Matrix2) -> Result<Self> {
        Ok(Gate::Custom(UnitaryMatrix::new(matrix)?))
    }

    /// Check that the gate describes a unitary
    ///
    /// Fixed and custom gates always pass. A rotation built directly through
    /// the variant fails if its angle is not finite.
    pub fn validate(&self) -> Result<()> {
        match self {
            Gate::Rotation { axis, angle } => Gate::rotation(*axis, *angle).map(|_| ()),
            Gate::Fixed(_) | Gate::Custom(_) => Ok(()),
        }
    }

    /// The gate's 2×2 unitary
    #[inline]
    pub fn matrix(&self) -> Matrix2 {
        gate_matrix(self)
    }

    /// Display label: `H`, `RX(1.57)`, `CustomUnitary`
    pub fn label(&self) -> String {
        match self {
            Gate::Fixed(kind) => kind.name().to_string(),
            Gate::Rotation { axis, angle } => {
                format!("{}({})", axis.gate_name(), format_angle(*angle))
            },
            Gate::Custom(_) => "CustomUnitary".to_string(),
        }
    }
}

impl From<FixedGate> for Gate {
    fn from(kind: FixedGate) -> Self {
        Gate::Fixed(kind)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Matrix for any gate
///
/// Total over fixed and rotation gates. Custom gates return their stored
/// matrix unchanged; the check happened when the [`UnitaryMatrix`] was built.
pub fn gate_matrix(gate: &Gate) -> Matrix2 {
    match gate {
        Gate::Fixed(kind) => *kind.matrix(),
        Gate::Rotation { axis, angle } => match axis {
            Axis::X => matrices::rotation_x(*angle),
            Axis::Y => matrices::rotation_y(*angle),
            Axis::Z => matrices::rotation_z(*angle),
        },
        Gate::Custom(unitary) => *unitary.matrix(),
    }
}

/// Angle rounded to two decimals, always with a fractional part (`3.0`, `1.57`)
fn format_angle(angle: f64) -> String {
    let rounded = (angle * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// A gate selection as offered by a picker, before parameters are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateName {
    Fixed(FixedGate),
    Rotation(Axis),
    Custom,
}

impl GateName {
    /// Every selectable gate in menu order
    pub const ALL: [GateName; 12] = [
        GateName::Fixed(FixedGate::X),
        GateName::Fixed(FixedGate::Y),
        GateName::Fixed(FixedGate::Z),
        GateName::Fixed(FixedGate::H),
        GateName::Fixed(FixedGate::S),
        GateName::Fixed(FixedGate::Sdg),
        GateName::Fixed(FixedGate::T),
        GateName::Fixed(FixedGate::Tdg),
        GateName::Rotation(Axis::X),
        GateName::Rotation(Axis::Y),
        GateName::Rotation(Axis::Z),
        GateName::Custom,
    ];

    /// Menu text
    pub fn as_str(&self) -> &'static str {
        match self {
            GateName::Fixed(kind) => kind.name(),
            GateName::Rotation(axis) => axis.gate_name(),
            GateName::Custom => "Custom Unitary",
        }
    }

    /// Whether the selection needs an angle
    pub fn takes_angle(&self) -> bool {
        matches!(self, GateName::Rotation(_))
    }

    /// Whether the selection needs four matrix entries
    pub fn takes_matrix(&self) -> bool {
        matches!(self, GateName::Custom)
    }
}

impl FromStr for GateName {
    type Err = QubitError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("Custom Unitary")
            || trimmed.eq_ignore_ascii_case("Custom")
            || trimmed.eq_ignore_ascii_case("CustomUnitary")
        {
            return Ok(GateName::Custom);
        }

        GateName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == trimmed)
            .ok_or_else(|| QubitError::malformed("gate", format!("unknown gate '{}'", s)))
    }
}

impl fmt::Display for GateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
