//! Bloch sphere coordinates for single-qubit states
//!
//! Every single-qubit state maps to a point in the closed unit ball:
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! lands on the surface at polar angle θ ∈ [0, π] and azimuth φ ∈ [0, 2π),
//! while mixed states fall strictly inside. Drawing the sphere is left to
//! the caller; this module only produces the coordinates.
//!
//! # Example
//!
//! ```
//! use qubloch_core::BlochVector;
//! use num_complex::Complex64;
//!
//! // |0⟩ state points to north pole
//! let state = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
//! let bloch = BlochVector::from_amplitudes(&state);
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//!
//! // maximally mixed state sits at the origin
//! let half = Complex64::new(0.5, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//! let bloch = BlochVector::from_density_matrix(&[[half, zero], [zero, half]]);
//! assert!(bloch.magnitude() < 1e-10);
//! ```

use crate::matrix::{Matrix2, Vector2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A point on or inside the Bloch sphere in Cartesian coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project a normalized amplitude pair [α, β]
    ///
    /// x = 2Re(ᾱβ), y = 2Im(ᾱβ), z = |α|² − |β|². The pair is assumed to be
    /// normalized; nothing is checked here.
    pub fn from_amplitudes(state: &Vector2) -> Self {
        let alpha = state[0];
        let beta = state[1];

        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Project a density matrix
    ///
    /// x = 2Re(ρ₀₁), y = 2Im(ρ₁₀), z = Re(ρ₀₀ − ρ₁₁). The matrix is assumed
    /// to be a valid density matrix; nothing is checked here.
    pub fn from_density_matrix(rho: &Matrix2) -> Self {
        Self {
            x: 2.0 * rho[0][1].re,
            y: 2.0 * rho[1][0].im,
            z: (rho[0][0] - rho[1][1]).re,
        }
    }

    /// Coordinates as `[x, y, z]`, the shape plotting collaborators expect
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert Bloch vector to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        // Handle near-zero vector
        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();

        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Get the magnitude of the Bloch vector
    ///
    /// 1.0 for pure states, less than 1.0 for mixed states
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Multi-line summary: coordinates, spherical angles and, when the
    /// vector sits on one of the six axis points, the matching basis state
    pub fn describe(&self) -> String {
        const AXIS_POINTS: [(&str, [f64; 3]); 6] = [
            ("|0⟩", [0.0, 0.0, 1.0]),
            ("|1⟩", [0.0, 0.0, -1.0]),
            ("|+⟩", [1.0, 0.0, 0.0]),
            ("|−⟩", [-1.0, 0.0, 0.0]),
            ("|+i⟩", [0.0, 1.0, 0.0]),
            ("|−i⟩", [0.0, -1.0, 0.0]),
        ];

        let r = self.magnitude();
        let angles = self.to_angles();
        let mut out = format!(
            "{}\n|r| = {:.4}, θ = {:.4}, φ = {:.4}\n",
            self, r, angles.theta, angles.phi
        );

        let here = self.as_array();
        let nearest = AXIS_POINTS.iter().find(|(_, point)| {
            let d2: f64 = point.iter().zip(here.iter()).map(|(p, q)| (p - q).powi(2)).sum();
            d2.sqrt() < 0.01
        });
        match nearest {
            Some((label, _)) => out.push_str(&format!("on axis: {}\n", label)),
            None if r < 0.99 => out.push_str("mixed: inside the sphere\n"),
            None => {},
        }
        out
    }
}

impl From<BlochVector> for [f64; 3] {
    fn from(v: BlochVector) -> Self {
        v.as_array()
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// Convert spherical coordinates to a Bloch vector on the surface
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }

    /// Amplitudes [α, β] of the pure state at these angles, with real α
    pub fn to_amplitudes(&self) -> Vector2 {
        let alpha = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let beta = Complex64::from_polar((self.theta / 2.0).sin(), self.phi);
        [alpha, beta]
    }
}
