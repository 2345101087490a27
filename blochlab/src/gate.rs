//! Single-qubit gate set.
//!
//! Every gate has two equivalent descriptions: a 2×2 unitary acting on the
//! state vector, and a rotation of the Bloch vector. The simulator uses the
//! first, the transition animation uses the second.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

use num_complex::Complex64;

use crate::bloch::BlochVector;

/// 2×2 complex matrix, row-major.
pub type Matrix2 = [[Complex64; 2]; 2];

/// Rotation axis for the parameterized gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> &'static [Axis] {
        &[Axis::X, Axis::Y, Axis::Z]
    }

    /// Unit vector along this axis.
    pub fn unit(&self) -> BlochVector {
        match self {
            Axis::X => BlochVector::new(1.0, 0.0, 0.0),
            Axis::Y => BlochVector::new(0.0, 1.0, 0.0),
            Axis::Z => BlochVector::new(0.0, 0.0, 1.0),
        }
    }

    /// Rotation gate about this axis by `theta` radians.
    pub fn rotation(&self, theta: f64) -> Gate {
        match self {
            Axis::X => Gate::Rx(theta),
            Axis::Y => Gate::Ry(theta),
            Axis::Z => Gate::Rz(theta),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Gates that take no parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedGate {
    X,
    Y,
    Z,
    S,
    Sdg,
    T,
    Tdg,
    H,
}

impl FixedGate {
    pub fn all() -> &'static [FixedGate] {
        &[
            FixedGate::X,
            FixedGate::Y,
            FixedGate::Z,
            FixedGate::S,
            FixedGate::Sdg,
            FixedGate::T,
            FixedGate::Tdg,
            FixedGate::H,
        ]
    }
}

impl From<FixedGate> for Gate {
    fn from(gate: FixedGate) -> Self {
        match gate {
            FixedGate::X => Gate::X,
            FixedGate::Y => Gate::Y,
            FixedGate::Z => Gate::Z,
            FixedGate::S => Gate::S,
            FixedGate::Sdg => Gate::Sdg,
            FixedGate::T => Gate::T,
            FixedGate::Tdg => Gate::Tdg,
            FixedGate::H => Gate::H,
        }
    }
}

/// A single-qubit gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Pauli-X gate
    X,
    /// Pauli-Y gate
    Y,
    /// Pauli-Z gate
    Z,
    /// Phase gate, √Z
    S,
    /// Inverse of S
    Sdg,
    /// π/8 gate, √S
    T,
    /// Inverse of T
    Tdg,
    /// Hadamard gate
    H,
    /// Rotation about X by θ
    Rx(f64),
    /// Rotation about Y by θ
    Ry(f64),
    /// Rotation about Z by θ
    Rz(f64),
}

impl Gate {
    /// Short name used in circuit diagrams.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::S => "S",
            Gate::Sdg => "S†",
            Gate::T => "T",
            Gate::Tdg => "T†",
            Gate::H => "H",
            Gate::Rx(_) => "Rx",
            Gate::Ry(_) => "Ry",
            Gate::Rz(_) => "Rz",
        }
    }

    /// Symbol written to the display buffer when the gate is applied.
    pub fn display_symbol(&self) -> &'static str {
        match self {
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::S => "s",
            Gate::Sdg => "SD",
            Gate::T => "t",
            Gate::Tdg => "TD",
            Gate::H => "H",
            Gate::Rx(_) => "Rx",
            Gate::Ry(_) => "Ry",
            Gate::Rz(_) => "Rz",
        }
    }

    /// Rotation angle for parameterized gates.
    pub fn theta(&self) -> Option<f64> {
        match self {
            Gate::Rx(theta) | Gate::Ry(theta) | Gate::Rz(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Unitary matrix of the gate.
    pub fn matrix(&self) -> Matrix2 {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);

        match *self {
            Gate::X => [[zero, one], [one, zero]],
            Gate::Y => [[zero, -i], [i, zero]],
            Gate::Z => [[one, zero], [zero, -one]],
            Gate::S => [[one, zero], [zero, i]],
            Gate::Sdg => [[one, zero], [zero, -i]],
            Gate::T => [[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
            Gate::Tdg => [[one, zero], [zero, Complex64::from_polar(1.0, -FRAC_PI_4)]],
            Gate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            Gate::Rx(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, -(theta / 2.0).sin());
                [[c, s], [s, c]]
            }
            Gate::Ry(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new((theta / 2.0).sin(), 0.0);
                [[c, -s], [s, c]]
            }
            Gate::Rz(theta) => [
                [Complex64::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex64::from_polar(1.0, theta / 2.0)],
            ],
        }
    }

    /// Bloch-sphere rotation `(axis, angle)` equivalent to this gate up to
    /// global phase. Angles follow the right-hand rule.
    pub fn bloch_rotation(&self) -> (BlochVector, f64) {
        match *self {
            Gate::X => (Axis::X.unit(), PI),
            Gate::Y => (Axis::Y.unit(), PI),
            Gate::Z => (Axis::Z.unit(), PI),
            Gate::S => (Axis::Z.unit(), FRAC_PI_2),
            Gate::Sdg => (Axis::Z.unit(), -FRAC_PI_2),
            Gate::T => (Axis::Z.unit(), FRAC_PI_4),
            Gate::Tdg => (Axis::Z.unit(), -FRAC_PI_4),
            Gate::H => (BlochVector::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2), PI),
            Gate::Rx(theta) => (Axis::X.unit(), theta),
            Gate::Ry(theta) => (Axis::Y.unit(), theta),
            Gate::Rz(theta) => (Axis::Z.unit(), theta),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.theta() {
            Some(theta) => write!(f, "{}({:.3}π)", self.name(), theta / PI),
            None => f.write_str(self.name()),
        }
    }
}
