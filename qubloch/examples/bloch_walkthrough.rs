//! Walk a qubit through a gate sequence and print the Bloch vectors
//!
//! Run with `RUST_LOG=qubloch=debug,qubloch_state=trace` to see every gate.

use qubloch::input;
use qubloch::{BasisState, FixedGate, Gate, GateName, Session, Tolerances};
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Predefined states ===\n");
    for basis in BasisState::ALL {
        println!("{:<24} -> {}", basis.label(), basis.state().bloch_vector());
    }

    println!("\n=== Gate sequence on |0⟩ ===\n");
    let mut session = Session::new(BasisState::Zero.state());
    session.push_gate(Gate::Fixed(FixedGate::H));
    session.push_gate(Gate::rz(PI / 4.0));
    if let Err(err) = session.push_selection(GateName::Custom, None, Some(["0", "1", "1", "0"])) {
        println!("custom gate rejected: {}", err);
    }

    println!("Sequence: {}", session.sequence_label());
    match session.final_state() {
        Ok(state) => {
            println!("Final state: {}", state);
            print!("{}", state.bloch_vector().describe());
        },
        Err(err) => println!("evolution failed: {}", err),
    }

    println!("\n=== Mixed state ===\n");
    match input::density_matrix(["0.8", "0.1-0.1j", "0.1+0.1j", "0.2"], &Tolerances::default()) {
        Ok(state) => {
            println!("ρ =\n{}", state);
            println!("purity = {:.4}", state.purity());
            let out = state.apply(&Gate::Fixed(FixedGate::H));
            print!("{}", out.bloch_vector().describe());
        },
        Err(err) => println!("rejected: {}", err),
    }

    println!("\n=== Rejected input ===\n");
    if let Err(err) = input::density_matrix(["1", "0", "0", "-1"], &Tolerances::default()) {
        println!("{}", err);
        for violation in err.violations() {
            println!("  - {}", violation);
        }
    }
}
