//! Per-session engine state
//!
//! A [`Session`] owns the chosen initial state and the gate sequence being
//! built. It is a plain value: the host keeps one per user and passes it by
//! `&mut` into the edit operations, so nothing is shared across sessions.

use crate::input;
use qubloch_core::{BlochVector, EngineConfig, Result};
use qubloch_gates::{Gate, GateName, GateSequence};
use qubloch_state::{apply_sequence_with, apply_with, bloch_vector, BasisState, QubitState};
use tracing::debug;

/// Initial state, gate sequence and configuration for one user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    initial: QubitState,
    sequence: GateSequence,
    config: EngineConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BasisState::Zero.state())
    }
}

impl Session {
    /// Start a session from `initial` with an empty sequence
    pub fn new(initial: QubitState) -> Self {
        Self::with_config(initial, EngineConfig::default())
    }

    /// Start a session with an explicit configuration
    pub fn with_config(initial: QubitState, config: EngineConfig) -> Self {
        Self {
            initial,
            sequence: GateSequence::new(),
            config,
        }
    }

    /// The initial state
    pub fn state(&self) -> &QubitState {
        &self.initial
    }

    /// Replace the initial state; the sequence is kept
    pub fn set_state(&mut self, state: QubitState) {
        self.initial = state;
    }

    /// The gate sequence
    pub fn sequence(&self) -> &GateSequence {
        &self.sequence
    }

    /// Replace the whole sequence, e.g. with one restored from storage
    ///
    /// Deserializing a [`GateSequence`] re-checks custom gates at the default
    /// unitarity tolerance, whatever this session's [`EngineConfig`] says. A
    /// sequence saved from a session with a looser tolerance may fail to
    /// deserialize; rebuild such gates with [`Session::push_selection`].
    pub fn set_sequence(&mut self, sequence: GateSequence) {
        self.sequence = sequence;
    }

    /// The configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Append a gate to the sequence
    pub fn push_gate(&mut self, gate: Gate) {
        debug!(gate = %gate.label(), len = self.sequence.len() + 1, "gate appended");
        self.sequence.push(gate);
    }

    /// Build a gate from a picker selection and append it
    ///
    /// Nothing is appended if the parameters are missing or invalid.
    pub fn push_selection(
        &mut self,
        name: GateName,
        angle: Option<f64>,
        entries: Option<[&str; 4]>,
    ) -> Result<Gate> {
        let gate = input::gate(name, angle, entries, &self.config.tolerances)?;
        self.push_gate(gate);
        Ok(gate)
    }

    /// Remove the most recent gate
    pub fn undo(&mut self) -> Option<Gate> {
        let removed = self.sequence.undo();
        if let Some(gate) = &removed {
            debug!(gate = %gate.label(), "gate removed");
        }
        removed
    }

    /// Empty the sequence
    pub fn clear(&mut self) {
        debug!(len = self.sequence.len(), "sequence cleared");
        self.sequence.clear();
    }

    /// Apply one gate to the initial state without touching the sequence
    pub fn apply_single(&self, gate: &Gate) -> Result<QubitState> {
        apply_with(&self.initial, gate, &self.config)
    }

    /// Initial state evolved through the whole sequence
    pub fn final_state(&self) -> Result<QubitState> {
        apply_sequence_with(&self.initial, &self.sequence, &self.config)
    }

    /// Bloch vector of the initial state
    pub fn initial_bloch(&self) -> BlochVector {
        bloch_vector(&self.initial)
    }

    /// Bloch vector after the whole sequence
    pub fn final_bloch(&self) -> Result<BlochVector> {
        self.final_state().map(|state| bloch_vector(&state))
    }

    /// Labels of the sequence joined by arrows
    pub fn sequence_label(&self) -> String {
        self.sequence.to_string()
    }
}
