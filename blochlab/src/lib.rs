//! # Blochlab - Single-Qubit Bloch Sphere Visualizer
//!
//! Build a short single-qubit circuit and animate its state evolution on the
//! Bloch sphere.
//!
//! ## Quick Start
//!
//! ```
//! use blochlab::{Circuit, TransitionOptions};
//!
//! let mut circuit = Circuit::new();
//! circuit.h()           // |0⟩ → |+⟩
//!        .s()           // |+⟩ → |+i⟩
//!        .rx(1.0);
//!
//! // Final state from the state-vector simulator
//! let state = circuit.simulate();
//! println!("P(|0⟩) = {:.3}", state.prob_zero());
//!
//! // Animation frames for the same circuit
//! let transition = circuit.transition(&TransitionOptions::default()).unwrap();
//! assert_eq!(transition.len(), 1 + 3 * 100);
//! ```
//!
//! ## Architecture
//!
//! - [`gate`]: the gate set, as matrices and as Bloch rotations
//! - [`state`]: state-vector simulation
//! - [`circuit`]: ordered gate lists
//! - [`transition`]: frame generation and the [`Visualizer`] seam
//! - [`session`]: interactive state shared by the UI handlers

pub mod bloch;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod session;
pub mod state;
pub mod transition;

// Re-export main types
pub use bloch::BlochVector;
pub use circuit::Circuit;
pub use error::{QuantumError, Result, VisualizationError};
pub use gate::{Axis, FixedGate, Gate};
pub use session::{Session, VisualizeOutcome, AUTO_VISUALIZE_THRESHOLD};
pub use state::QubitState;
pub use transition::{
    BlochAnimator, Transition, TransitionFrame, TransitionOptions, Visualizer, MAX_FPG, MAX_GATES,
    MAX_SPG,
};

/// Prelude module for convenient imports.
///
/// ```
/// use blochlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bloch::BlochVector;
    pub use crate::circuit::Circuit;
    pub use crate::error::{QuantumError, Result, VisualizationError};
    pub use crate::gate::{Axis, FixedGate, Gate};
    pub use crate::session::{Session, VisualizeOutcome};
    pub use crate::state::QubitState;
    pub use crate::transition::{BlochAnimator, Transition, TransitionOptions, Visualizer};
}
