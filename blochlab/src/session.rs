//! Interactive session state.
//!
//! A [`Session`] owns the circuit being built, the text shown to the user,
//! and a gate log that decides when to animate automatically. Every gate
//! goes through the session so the circuit and display never disagree.
//!
//! ```
//! use blochlab::{Axis, BlochAnimator, FixedGate, Session};
//!
//! let mut session = Session::new();
//! let mut animator = BlochAnimator::default();
//!
//! session.apply_fixed_gate(FixedGate::H, &mut animator);
//! session.apply_rotation_gate(Axis::Z, 0.5, &mut animator);
//! assert_eq!(session.display(), "HRz");
//! assert!(session.visualize(&mut animator).is_rendered());
//! ```

use std::f64::consts::PI;

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::VisualizationError;
use crate::gate::{Axis, FixedGate, Gate};
use crate::transition::Visualizer;

/// Number of applied gates that triggers an automatic visualization.
pub const AUTO_VISUALIZE_THRESHOLD: usize = 10;

/// Result of asking for a visualization.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualizeOutcome {
    Rendered,
    /// The visualizer could not animate the circuit.
    Impossible(VisualizationError),
}

impl VisualizeOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, VisualizeOutcome::Rendered)
    }
}

/// Circuit, display buffer, gate log and pending rotation angle.
#[derive(Debug, Clone, Default)]
pub struct Session {
    circuit: Circuit,
    display: String,
    gate_log: Vec<&'static str>,
    pending_angle: f64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Gate symbols typed so far.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Gates applied since the last automatic visualization.
    pub fn gate_log(&self) -> &[&'static str] {
        &self.gate_log
    }

    /// Rotation angle in radians awaiting a rotation gate. Zero between calls.
    pub fn pending_angle(&self) -> f64 {
        self.pending_angle
    }

    /// Append a non-parameterized gate.
    pub fn apply_fixed_gate<V: Visualizer>(
        &mut self,
        gate: FixedGate,
        visualizer: &mut V,
    ) -> Option<VisualizeOutcome> {
        self.push(Gate::from(gate));
        self.maybe_auto_visualize(visualizer)
    }

    /// Append a rotation about `axis` by `multiple × π`.
    ///
    /// The documented range is [-2π, 2π] but values outside it are not
    /// rejected here.
    pub fn apply_rotation_gate<V: Visualizer>(
        &mut self,
        axis: Axis,
        multiple_of_pi: f64,
        visualizer: &mut V,
    ) -> Option<VisualizeOutcome> {
        self.pending_angle = multiple_of_pi * PI;
        let gate = axis.rotation(self.pending_angle);
        self.pending_angle = 0.0;
        self.push(gate);
        self.maybe_auto_visualize(visualizer)
    }

    fn push(&mut self, gate: Gate) {
        let symbol = gate.display_symbol();
        self.circuit.push(gate);
        self.display.push_str(symbol);
        self.gate_log.push(symbol);
        debug!(gate = %gate, logged = self.gate_log.len(), "gate applied");
    }

    /// Discard everything and start over with an empty circuit.
    pub fn clear(&mut self) {
        self.display.clear();
        self.gate_log.clear();
        self.pending_angle = 0.0;
        self.circuit = Circuit::new();
        debug!("session cleared");
    }

    /// Visualize once the gate log reaches the threshold, then reset the log.
    ///
    /// Returns `None` when the threshold was not reached.
    pub fn maybe_auto_visualize<V: Visualizer>(
        &mut self,
        visualizer: &mut V,
    ) -> Option<VisualizeOutcome> {
        if self.gate_log.len() < AUTO_VISUALIZE_THRESHOLD {
            return None;
        }
        let outcome = self.visualize(visualizer);
        self.gate_log.clear();
        Some(outcome)
    }

    /// Visualize the current circuit. Never mutates the session.
    pub fn visualize<V: Visualizer>(&self, visualizer: &mut V) -> VisualizeOutcome {
        match visualizer.visualize(&self.circuit) {
            Ok(()) => VisualizeOutcome::Rendered,
            Err(err) => {
                debug!(error = %err, "visualization impossible");
                VisualizeOutcome::Impossible(err)
            }
        }
    }
}
