//! Ordered gate sequences
//!
//! Index 0 is applied first. A sequence grows by [`GateSequence::push`],
//! shrinks by [`GateSequence::undo`] or [`GateSequence::clear`], and is never
//! reordered in place.

use crate::gate::Gate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when rendering a sequence as text
pub const SEQUENCE_SEPARATOR: &str = " → ";

/// Gates in application order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateSequence {
    gates: Vec<Gate>,
}

impl GateSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a gate; it will be applied after every gate already present
    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Builder-style append
    pub fn with(mut self, gate: impl Into<Gate>) -> Self {
        self.push(gate.into());
        self
    }

    /// Remove and return the most recently appended gate
    pub fn undo(&mut self) -> Option<Gate> {
        self.gates.pop()
    }

    /// Remove every gate
    pub fn clear(&mut self) {
        self.gates.clear();
    }

    /// Number of gates
    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the sequence is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Gates in application order
    #[inline]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Iterate in application order
    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// One label per gate, in application order
    pub fn labels(&self) -> Vec<String> {
        self.gates.iter().map(Gate::label).collect()
    }
}

impl From<Vec<Gate>> for GateSequence {
    fn from(gates: Vec<Gate>) -> Self {
        Self { gates }
    }
}

impl FromIterator<Gate> for GateSequence {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GateSequence {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

impl fmt::Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(SEQUENCE_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::FixedGate;

    #[test]
    fn test_push_keeps_order() {
        let seq = GateSequence::new()
            .with(FixedGate::H)
            .with(Gate::rz(0.5))
            .with(FixedGate::X);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.gates()[0], Gate::Fixed(FixedGate::H));
        assert_eq!(seq.gates()[2], Gate::Fixed(FixedGate::X));
    }

    #[test]
    fn test_undo_restores_previous_sequence() {
        let mut seq = GateSequence::new().with(FixedGate::H).with(FixedGate::S);
        let before = seq.clone();

        seq.push(Gate::rx(1.0));
        assert_ne!(seq, before);

        assert_eq!(seq.undo(), Some(Gate::rx(1.0)));
        assert_eq!(seq, before);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut seq = GateSequence::new();
        assert_eq!(seq.undo(), None);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut seq = GateSequence::new().with(FixedGate::T).with(FixedGate::Tdg);
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_display_joins_labels() {
        let seq = GateSequence::new()
            .with(FixedGate::H)
            .with(Gate::rx(std::f64::consts::PI))
            .with(FixedGate::Sdg);
        assert_eq!(seq.to_string(), "H → RX(3.14) → Sdg");
    }
}
