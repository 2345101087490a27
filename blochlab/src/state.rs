//! Single-qubit state-vector simulation.
//!
//! # Example
//!
//! ```
//! use blochlab::QubitState;
//!
//! let mut state = QubitState::new();
//! state.h().s();
//!
//! // H then S takes |0⟩ to |+i⟩
//! let v = state.bloch_vector();
//! assert!((v.y - 1.0).abs() < 1e-10);
//! ```

use num_complex::Complex64;

use crate::bloch::BlochVector;
use crate::error::{QuantumError, Result};
use crate::gate::Gate;

const NORM_TOLERANCE: f64 = 1e-9;

/// A pure single-qubit state `α|0⟩ + β|1⟩`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitState {
    amplitudes: [Complex64; 2],
}

impl QubitState {
    /// Create a state initialized to |0⟩.
    pub fn new() -> Self {
        Self {
            amplitudes: [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        }
    }

    /// Create a state from explicit amplitudes.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is not finite or
    /// `|α|² + |β|² ≠ 1`.
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Result<Self> {
        if !(alpha.is_finite() && beta.is_finite()) {
            return Err(QuantumError::InvalidAmplitudes);
        }
        let norm = alpha.norm_sqr() + beta.norm_sqr();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(QuantumError::NotNormalized(norm.sqrt()));
        }
        Ok(Self { amplitudes: [alpha, beta] })
    }

    /// Complex amplitudes `[α, β]`.
    pub fn amplitudes(&self) -> [Complex64; 2] {
        self.amplitudes
    }

    /// Probability of measuring each basis state.
    pub fn probabilities(&self) -> [f64; 2] {
        [self.amplitudes[0].norm_sqr(), self.amplitudes[1].norm_sqr()]
    }

    pub fn prob_zero(&self) -> f64 {
        self.amplitudes[0].norm_sqr()
    }

    pub fn prob_one(&self) -> f64 {
        self.amplitudes[1].norm_sqr()
    }

    /// ⟨ψ|X|ψ⟩ = 2 Re(α* β)
    pub fn expectation_x(&self) -> f64 {
        2.0 * (self.amplitudes[0].conj() * self.amplitudes[1]).re
    }

    /// ⟨ψ|Y|ψ⟩ = 2 Im(α* β)
    pub fn expectation_y(&self) -> f64 {
        2.0 * (self.amplitudes[0].conj() * self.amplitudes[1]).im
    }

    /// ⟨ψ|Z|ψ⟩ = |α|² - |β|²
    pub fn expectation_z(&self) -> f64 {
        self.prob_zero() - self.prob_one()
    }

    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::new(self.expectation_x(), self.expectation_y(), self.expectation_z())
    }

    /// Tr(ρ²), always 1.0 up to rounding for a state vector.
    pub fn purity(&self) -> f64 {
        let r2 = self.bloch_vector().dot(&self.bloch_vector());
        (1.0 + r2) / 2.0
    }

    /// Reset the state to |0⟩.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Apply a gate.
    pub fn apply(&mut self, gate: &Gate) -> &mut Self {
        let m = gate.matrix();
        let [a, b] = self.amplitudes;
        self.amplitudes = [m[0][0] * a + m[0][1] * b, m[1][0] * a + m[1][1] * b];
        self
    }

    pub fn x(&mut self) -> &mut Self {
        self.apply(&Gate::X)
    }

    pub fn y(&mut self) -> &mut Self {
        self.apply(&Gate::Y)
    }

    pub fn z(&mut self) -> &mut Self {
        self.apply(&Gate::Z)
    }

    /// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
    pub fn h(&mut self) -> &mut Self {
        self.apply(&Gate::H)
    }

    pub fn s(&mut self) -> &mut Self {
        self.apply(&Gate::S)
    }

    pub fn sdg(&mut self) -> &mut Self {
        self.apply(&Gate::Sdg)
    }

    pub fn t(&mut self) -> &mut Self {
        self.apply(&Gate::T)
    }

    pub fn tdg(&mut self) -> &mut Self {
        self.apply(&Gate::Tdg)
    }

    pub fn rx(&mut self, theta: f64) -> &mut Self {
        self.apply(&Gate::Rx(theta))
    }

    pub fn ry(&mut self, theta: f64) -> &mut Self {
        self.apply(&Gate::Ry(theta))
    }

    pub fn rz(&mut self, theta: f64) -> &mut Self {
        self.apply(&Gate::Rz(theta))
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-10;

    #[test]
    fn test_initial_state() {
        let state = QubitState::new();
        let probs = state.probabilities();
        assert!((probs[0] - 1.0).abs() < EPS);
        assert!(probs[1] < EPS);
        assert!((state.expectation_z() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_hadamard() {
        let mut state = QubitState::new();
        state.h();

        let probs = state.probabilities();
        assert!((probs[0] - 0.5).abs() < EPS);
        assert!((probs[1] - 0.5).abs() < EPS);
        assert!((state.expectation_x() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_pauli_y_phase() {
        let mut state = QubitState::new();
        state.y();
        // Y|0⟩ = i|1⟩
        let amps = state.amplitudes();
        assert!(amps[0].norm() < EPS);
        assert!((amps[1].im - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_half_turn() {
        let mut state = QubitState::new();
        state.ry(PI / 2.0);
        assert!((state.expectation_x() - 1.0).abs() < EPS);

        state.reset().rx(PI / 2.0);
        assert!((state.expectation_y() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_inverse_pairs() {
        let mut state = QubitState::new();
        state.h().s().sdg().t().tdg().h();
        assert!((state.prob_zero() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_method_chaining_and_reset() {
        let mut state = QubitState::new();
        state.h().rz(PI / 4.0).reset().x();
        assert!((state.prob_one() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_from_amplitudes() {
        let h = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let state = QubitState::from_amplitudes(h, -h).unwrap();
        assert!((state.expectation_x() + 1.0).abs() < EPS);
        assert!((state.purity() - 1.0).abs() < EPS);

        let one = Complex64::new(1.0, 0.0);
        assert!(matches!(
            QubitState::from_amplitudes(one, one),
            Err(QuantumError::NotNormalized(_))
        ));
        assert_eq!(
            QubitState::from_amplitudes(Complex64::new(f64::NAN, 0.0), one),
            Err(QuantumError::InvalidAmplitudes)
        );
    }
}
