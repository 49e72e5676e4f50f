//! Integration tests for a full input → gates → Bloch vector session

use approx::assert_relative_eq;
use qubloch::input;
use qubloch::{
    Axis, BasisState, EngineConfig, FixedGate, Gate, GateName, GateSequence, QubitError,
    QubitState, Session, Tolerances, UnitaryPolicy,
};
use std::f64::consts::PI;

#[test]
fn test_custom_pure_state_through_sequence() {
    // (1, 1) normalizes to |+⟩; Z flips it to |−⟩
    let initial = input::pure_state(1.0, 0.0, 1.0, 0.0).unwrap();
    let mut session = Session::new(initial);
    assert_relative_eq!(session.initial_bloch().x, 1.0, epsilon = 1e-12);

    session.push_selection("Z".parse().unwrap(), None, None).unwrap();
    let v = session.final_bloch().unwrap();
    assert_relative_eq!(v.x, -1.0, epsilon = 1e-9);
    assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_density_matrix_session() {
    let initial = input::density_matrix(["0.75", "0", "0", "0.25"], &Tolerances::default()).unwrap();
    let mut session = Session::new(initial);
    assert_relative_eq!(session.initial_bloch().z, 0.5, epsilon = 1e-12);

    // RY(π/2) tips the z component onto +x
    session.push_gate(Gate::ry(PI / 2.0));
    let v = session.final_bloch().unwrap();
    assert_relative_eq!(v.x, 0.5, epsilon = 1e-9);
    assert_relative_eq!(v.z, 0.0, epsilon = 1e-9);
    assert!(v.magnitude() < 1.0);
}

#[test]
fn test_rejected_inputs_report_reason() {
    assert_eq!(input::pure_state(0.0, 0.0, 0.0, 0.0), Err(QubitError::ZeroVector));

    let err = input::density_matrix(["1", "0.5", "0.2", "0"], &Tolerances::default()).unwrap_err();
    assert_eq!(err.violations().len(), 2);
    assert!(err.to_string().contains("Hermitian"));
    assert!(err.to_string().contains("positive semi-definite"));
}

#[test]
fn test_undo_after_append_restores_sequence() {
    let mut session = Session::default();
    session.push_gate(Gate::Fixed(FixedGate::H));
    session.push_gate(Gate::rx(0.5));
    let before = session.sequence().clone();

    session
        .push_selection(GateName::Custom, None, Some(["0", "-1j", "1j", "0"]))
        .unwrap();
    assert_eq!(session.sequence_label(), "H → RX(0.5) → CustomUnitary");

    session.undo();
    assert_eq!(session.sequence(), &before);
}

#[test]
fn test_sequence_persists_across_sessions() {
    let mut session = Session::new(BasisState::Zero.state());
    session.push_gate(Gate::Fixed(FixedGate::H));
    session.push_gate(Gate::Rotation {
        axis: Axis::Z,
        angle: -PI / 2.0,
    });
    session
        .push_selection(GateName::Custom, None, Some(["1", "0", "0", "-1"]))
        .unwrap();

    let saved = serde_json::to_string(session.sequence()).unwrap();

    let mut restored = Session::new(BasisState::Zero.state());
    restored.set_sequence(serde_json::from_str::<GateSequence>(&saved).unwrap());

    let a = session.final_bloch().unwrap();
    let b = restored.final_bloch().unwrap();
    assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    // H, RZ(-π/2), Z: |0⟩ → |+⟩ → |−i⟩ → |+i⟩
    assert_relative_eq!(a.y, 1.0, epsilon = 1e-9);
}

#[test]
fn test_loosely_accepted_gate_does_not_reload() {
    let loose = Tolerances {
        unitary: 1e-3,
        ..Tolerances::default()
    };
    let mut session = Session::with_config(
        BasisState::Zero.state(),
        EngineConfig::new().with_tolerances(loose),
    );
    session
        .push_selection(
            GateName::Custom,
            None,
            Some(["0.7071", "0.7071", "0.7071", "-0.7071"]),
        )
        .unwrap();

    let saved = serde_json::to_string(session.sequence()).unwrap();
    let err = serde_json::from_str::<GateSequence>(&saved).unwrap_err();
    assert!(err.to_string().contains("not unitary"));
    assert_eq!(session.sequence().len(), 1);
}

#[test]
fn test_strict_policy_rechecks_loosely_validated_gates() {
    let loose = Tolerances {
        unitary: 1e-3,
        ..Tolerances::default()
    };
    let mut lenient = Session::with_config(
        BasisState::Zero.state(),
        EngineConfig::new().with_tolerances(loose),
    );
    // 0.7071 is close enough for 1e-3, not for the default 1e-8
    let gate = lenient
        .push_selection(
            GateName::Custom,
            None,
            Some(["0.7071", "0.7071", "0.7071", "-0.7071"]),
        )
        .unwrap();
    assert!(lenient.final_state().is_ok());

    let mut strict = Session::with_config(BasisState::Zero.state(), EngineConfig::strict());
    assert_eq!(strict.config().unitary_policy, UnitaryPolicy::RecheckOnApply);
    strict.push_gate(gate);
    assert!(matches!(
        strict.final_state(),
        Err(QubitError::NotUnitary { .. })
    ));
    assert!(strict.apply_single(&gate).is_err());
}

#[test]
fn test_every_menu_gate_applies_to_every_catalog_state() {
    let tol = Tolerances::default();
    for name in GateName::ALL {
        let gate = input::gate(name, Some(0.9), Some(["0", "1", "1", "0"]), &tol).unwrap();
        for basis in BasisState::ALL {
            let out: QubitState = basis.state().apply(&gate);
            assert_relative_eq!(out.bloch_vector().magnitude(), 1.0, epsilon = 1e-9);
        }
    }
}
