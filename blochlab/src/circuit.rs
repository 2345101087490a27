//! Single-qubit circuit: an ordered list of gates.
//!
//! ```
//! use blochlab::Circuit;
//!
//! let mut circuit = Circuit::new();
//! circuit.h().rz(std::f64::consts::FRAC_PI_2);
//! assert_eq!(circuit.len(), 2);
//! ```

use crate::error::Result;
use crate::gate::Gate;
use crate::state::QubitState;
use crate::transition::{Transition, TransitionOptions};

/// A one-qubit circuit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a gate.
    pub fn push(&mut self, gate: Gate) -> &mut Self {
        self.gates.push(gate);
        self
    }

    pub fn x(&mut self) -> &mut Self {
        self.push(Gate::X)
    }

    pub fn y(&mut self) -> &mut Self {
        self.push(Gate::Y)
    }

    pub fn z(&mut self) -> &mut Self {
        self.push(Gate::Z)
    }

    pub fn h(&mut self) -> &mut Self {
        self.push(Gate::H)
    }

    pub fn s(&mut self) -> &mut Self {
        self.push(Gate::S)
    }

    pub fn sdg(&mut self) -> &mut Self {
        self.push(Gate::Sdg)
    }

    pub fn t(&mut self) -> &mut Self {
        self.push(Gate::T)
    }

    pub fn tdg(&mut self) -> &mut Self {
        self.push(Gate::Tdg)
    }

    pub fn rx(&mut self, theta: f64) -> &mut Self {
        self.push(Gate::Rx(theta))
    }

    pub fn ry(&mut self, theta: f64) -> &mut Self {
        self.push(Gate::Ry(theta))
    }

    pub fn rz(&mut self, theta: f64) -> &mut Self {
        self.push(Gate::Rz(theta))
    }

    /// Run the circuit on |0⟩.
    pub fn simulate(&self) -> QubitState {
        self.simulate_prefix(self.gates.len())
    }

    /// Run the first `steps` gates on |0⟩.
    pub fn simulate_prefix(&self, steps: usize) -> QubitState {
        let mut state = QubitState::new();
        for gate in self.gates.iter().take(steps) {
            state.apply(gate);
        }
        state
    }

    /// Build the Bloch-sphere animation for this circuit.
    pub fn transition(&self, options: &TransitionOptions) -> Result<Transition> {
        Ok(Transition::from_circuit(self, options)?)
    }
}
