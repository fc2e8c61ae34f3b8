// tests/simulation_tests.rs

use qsat::operations::pauli_x_matrix;
use qsat::{CircuitBuilder, Gate, QsatError, QuantumBackend, QuantumRegister, QubitId, StateVectorBackend};

const TOLERANCE: f64 = 1e-9;

fn qid(id: usize) -> QubitId {
    QubitId(id)
}

fn assert_probability(register: &impl QuantumRegister, index: usize, expected: f64) -> Result<(), QsatError> {
    let p = register.probability(index)?;
    assert!((p - expected).abs() < TOLERANCE, "index {}: got {}, expected {}", index, p, expected);
    Ok(())
}

#[test]
fn test_empty_circuit_leaves_zero_state() -> Result<(), QsatError> {
    let backend = StateVectorBackend::new();
    let mut register = backend.allocate(2)?;
    CircuitBuilder::new(2).build().apply(&mut register)?;
    assert_probability(&register, 0, 1.0)?;
    backend.release(register);
    Ok(())
}

#[test]
fn test_bit_flip_then_controlled_flip() -> Result<(), QsatError> {
    // X on q0, then flip q1 where q0 = 1: |00> -> |01> -> |11>
    let circuit = CircuitBuilder::new(2)
        .add_gate(Gate::PauliX { target: qid(0) })
        .add_gate(Gate::ControlledUnitary {
            controls: vec![qid(0)],
            control_states: vec![true],
            target: qid(1),
            matrix: pauli_x_matrix(),
        })
        .build();
    let mut register = StateVectorBackend::new().allocate(2)?;
    circuit.apply(&mut register)?;
    assert_probability(&register, 0b11, 1.0)
}

#[test]
fn test_zero_controlled_flip_on_zero_state() -> Result<(), QsatError> {
    // Control matches value 0, so the flip fires on |00>.
    let circuit = CircuitBuilder::new(2)
        .add_gate(Gate::ControlledUnitary {
            controls: vec![qid(0)],
            control_states: vec![false],
            target: qid(1),
            matrix: pauli_x_matrix(),
        })
        .build();
    let mut register = StateVectorBackend::new().allocate(2)?;
    circuit.apply(&mut register)?;
    assert_probability(&register, 0b10, 1.0)
}

#[test]
fn test_two_qubit_search_finds_marked_state() -> Result<(), QsatError> {
    // Phase oracle on |11>, then one inversion about the mean: N = 4 needs one round.
    let both = [qid(0), qid(1)];
    let circuit = CircuitBuilder::new(2)
        .hadamard_all(both)
        .phase_flip(both.to_vec())
        .hadamard_all(both)
        .pauli_x_all(both)
        .phase_flip(both.to_vec())
        .pauli_x_all(both)
        .hadamard_all(both)
        .build();
    let mut register = StateVectorBackend::new().allocate(2)?;
    circuit.apply(&mut register)?;
    assert_probability(&register, 0b11, 1.0)
}

#[test]
fn test_gate_errors_surface_through_circuits() -> Result<(), QsatError> {
    let circuit = CircuitBuilder::new(2).add_gate(Gate::Hadamard { target: qid(2) }).build();
    let mut register = StateVectorBackend::new().allocate(2)?;
    match circuit.apply(&mut register) {
        Err(QsatError::QubitOutOfRange { qubit, num_qubits }) => {
            assert_eq!(qubit, qid(2));
            assert_eq!(num_qubits, 2);
        }
        other => panic!("expected QubitOutOfRange, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_probability_query_does_not_disturb_state() -> Result<(), QsatError> {
    let mut register = StateVectorBackend::new().allocate(3)?;
    for q in 0..3 {
        register.hadamard(qid(q))?;
    }
    let first: Vec<f64> = (0..8).map(|k| register.probability(k)).collect::<Result<_, _>>()?;
    let second: Vec<f64> = (0..8).map(|k| register.probability(k)).collect::<Result<_, _>>()?;
    assert_eq!(first, second);
    assert!(first.iter().all(|p| (p - 0.125).abs() < TOLERANCE));
    Ok(())
}
