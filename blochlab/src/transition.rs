//! Animated Bloch-sphere transitions.
//!
//! A [`Transition`] shows a circuit as a sequence of Bloch vectors. Each
//! gate is drawn as a rotation of the vector about the gate's axis, split
//! into `fpg` frames. Only short circuits can be animated; anything longer
//! than [`MAX_GATES`] is rejected with a [`VisualizationError`].

use std::time::Duration;

use tracing::{debug, trace};

use crate::bloch::BlochVector;
use crate::circuit::Circuit;
use crate::error::VisualizationError;
use crate::gate::Gate;

/// Maximum number of gates a single transition can show.
pub const MAX_GATES: usize = 10;

/// Largest accepted frames-per-gate value.
pub const MAX_FPG: u32 = 1000;

/// Largest accepted seconds-per-gate value.
pub const MAX_SPG: f64 = 3600.0;

/// Animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionOptions {
    /// Frames per gate.
    pub fpg: u32,
    /// Seconds per gate.
    pub spg: f64,
    /// Keep the path of the vector visible.
    pub trace: bool,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            fpg: 100,
            spg: 2.0,
            trace: false,
        }
    }
}

impl TransitionOptions {
    fn validate(&self) -> Result<(), VisualizationError> {
        if !(1..=MAX_FPG).contains(&self.fpg) {
            return Err(VisualizationError::InvalidOptions(format!(
                "frames per gate must be between 1 and {MAX_FPG}, got {}",
                self.fpg
            )));
        }
        // NaN fails the range check too.
        if !(self.spg > 0.0 && self.spg <= MAX_SPG) {
            return Err(VisualizationError::InvalidOptions(format!(
                "seconds per gate must be in (0, {MAX_SPG}], got {}",
                self.spg
            )));
        }
        Ok(())
    }
}

/// One animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Gate being animated, `None` for the initial frame.
    pub gate_index: Option<usize>,
    pub vector: BlochVector,
}

/// Precomputed animation of a circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    gates: Vec<Gate>,
    frames: Vec<TransitionFrame>,
    options: TransitionOptions,
}

impl Transition {
    /// Build the animation for `circuit`.
    ///
    /// # Errors
    ///
    /// Fails when the circuit is empty, has more than [`MAX_GATES`] gates,
    /// or the options are unusable.
    pub fn from_circuit(
        circuit: &Circuit,
        options: &TransitionOptions,
    ) -> Result<Self, VisualizationError> {
        options.validate()?;

        if circuit.is_empty() {
            return Err(VisualizationError::EmptyCircuit);
        }
        if circuit.len() > MAX_GATES {
            return Err(VisualizationError::TooManyGates {
                count: circuit.len(),
                max: MAX_GATES,
            });
        }

        let fpg = options.fpg as usize;
        let mut frames = Vec::with_capacity(1 + circuit.len() * fpg);
        let mut current = BlochVector::zero_state();
        frames.push(TransitionFrame {
            gate_index: None,
            vector: current,
        });

        for (index, gate) in circuit.gates().iter().enumerate() {
            let (axis, angle) = gate.bloch_rotation();
            for step in 1..=fpg {
                let fraction = step as f64 / fpg as f64;
                frames.push(TransitionFrame {
                    gate_index: Some(index),
                    vector: current.rotate(&axis, angle * fraction),
                });
            }
            current = current.rotate(&axis, angle);
            trace!(gate = %gate, x = current.x, y = current.y, z = current.z, "gate frames built");
        }

        Ok(Self {
            gates: circuit.gates().to_vec(),
            frames,
            options: *options,
        })
    }

    pub fn frames(&self) -> &[TransitionFrame] {
        &self.frames
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn options(&self) -> &TransitionOptions {
        &self.options
    }

    /// Number of frames, including the initial one.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// A transition always holds at least the initial frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, clamped to the last frame.
    pub fn frame(&self, index: usize) -> &TransitionFrame {
        let last = self.frames.len().saturating_sub(1);
        &self.frames[index.min(last)]
    }

    pub fn final_vector(&self) -> BlochVector {
        self.frame(usize::MAX).vector
    }

    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.options.spg / self.options.fpg as f64)
    }

    /// Total playback time.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.options.spg * self.gates.len() as f64)
    }
}

/// Renders a circuit, or reports that it cannot be rendered.
pub trait Visualizer {
    fn visualize(&mut self, circuit: &Circuit) -> Result<(), VisualizationError>;
}

/// Visualizer that builds transitions and keeps the latest one for playback.
#[derive(Debug, Clone, Default)]
pub struct BlochAnimator {
    options: TransitionOptions,
    latest: Option<Transition>,
    rendered: usize,
}

impl BlochAnimator {
    pub fn new(options: TransitionOptions) -> Self {
        Self {
            options,
            latest: None,
            rendered: 0,
        }
    }

    pub fn options(&self) -> &TransitionOptions {
        &self.options
    }

    /// Most recent successful transition.
    pub fn latest(&self) -> Option<&Transition> {
        self.latest.as_ref()
    }

    /// Number of successful renders so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl Visualizer for BlochAnimator {
    fn visualize(&mut self, circuit: &Circuit) -> Result<(), VisualizationError> {
        let transition = Transition::from_circuit(circuit, &self.options)?;
        debug!(
            gates = transition.gates().len(),
            frames = transition.len(),
            "transition rendered"
        );
        self.latest = Some(transition);
        self.rendered += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn options(fpg: u32) -> TransitionOptions {
        TransitionOptions {
            fpg,
            ..TransitionOptions::default()
        }
    }

    #[test]
    fn test_frame_count() {
        let mut circuit = Circuit::new();
        circuit.h().t().x();
        let transition = Transition::from_circuit(&circuit, &options(4)).unwrap();
        assert_eq!(transition.len(), 1 + 3 * 4);
        assert_eq!(transition.frames()[0].gate_index, None);
        assert_eq!(transition.frames()[5].gate_index, Some(1));
    }

    #[test]
    fn test_hadamard_path_ends_on_plus() {
        let mut circuit = Circuit::new();
        circuit.h();
        let transition = Transition::from_circuit(&circuit, &options(10)).unwrap();
        let end = transition.final_vector();
        assert!(end.distance(&BlochVector::new(1.0, 0.0, 0.0)) < EPS);
        // Every intermediate frame stays on the sphere
        for frame in transition.frames() {
            assert!((frame.vector.norm() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_final_frame_matches_simulation() {
        let mut circuit = Circuit::new();
        circuit.h().s().rx(0.7).tdg().ry(-1.3).z();
        let transition = Transition::from_circuit(&circuit, &options(3)).unwrap();
        let simulated = circuit.simulate().bloch_vector();
        assert!(transition.final_vector().distance(&simulated) < 1e-9);
    }

    #[test]
    fn test_rejects_empty_circuit() {
        assert_eq!(
            Transition::from_circuit(&Circuit::new(), &TransitionOptions::default()),
            Err(VisualizationError::EmptyCircuit)
        );
    }

    #[test]
    fn test_rejects_too_many_gates() {
        let mut circuit = Circuit::new();
        for _ in 0..MAX_GATES {
            circuit.x();
        }
        assert!(Transition::from_circuit(&circuit, &options(1)).is_ok());

        circuit.x();
        assert_eq!(
            Transition::from_circuit(&circuit, &options(1)),
            Err(VisualizationError::TooManyGates { count: 11, max: 10 })
        );
    }

    #[test]
    fn test_rejects_bad_options() {
        let mut circuit = Circuit::new();
        circuit.x();
        assert!(matches!(
            Transition::from_circuit(&circuit, &options(0)),
            Err(VisualizationError::InvalidOptions(_))
        ));
        let slow = TransitionOptions {
            spg: f64::NAN,
            ..TransitionOptions::default()
        };
        assert!(Transition::from_circuit(&circuit, &slow).is_err());
    }

    #[test]
    fn test_rejects_options_outside_bounds() {
        let mut circuit = Circuit::new();
        circuit.x();
        for spg in [1e19, 1e30, f64::INFINITY, MAX_SPG * 2.0] {
            let glacial = TransitionOptions {
                fpg: 1,
                spg,
                trace: false,
            };
            assert!(
                matches!(
                    Transition::from_circuit(&circuit, &glacial),
                    Err(VisualizationError::InvalidOptions(_))
                ),
                "spg {spg} accepted"
            );
        }
        assert!(matches!(
            Transition::from_circuit(&circuit, &options(u32::MAX)),
            Err(VisualizationError::InvalidOptions(_))
        ));
        assert!(matches!(
            Transition::from_circuit(&circuit, &options(MAX_FPG + 1)),
            Err(VisualizationError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_timing_at_upper_bounds() {
        let mut circuit = Circuit::new();
        for _ in 0..MAX_GATES {
            circuit.x();
        }
        let slowest = TransitionOptions {
            fpg: 1,
            spg: MAX_SPG,
            trace: false,
        };
        let transition = Transition::from_circuit(&circuit, &slowest).unwrap();
        assert_eq!(transition.frame_interval(), Duration::from_secs(3600));
        assert_eq!(transition.duration(), Duration::from_secs(36_000));
    }

    #[test]
    fn test_timing() {
        let mut circuit = Circuit::new();
        circuit.x().y();
        let transition = Transition::from_circuit(&circuit, &TransitionOptions::default()).unwrap();
        assert_eq!(transition.frame_interval(), Duration::from_millis(20));
        assert_eq!(transition.duration(), Duration::from_secs(4));
    }

    #[test]
    fn test_animator_keeps_latest_success() {
        let mut animator = BlochAnimator::new(options(2));
        let mut circuit = Circuit::new();
        circuit.x();
        animator.visualize(&circuit).unwrap();
        assert_eq!(animator.rendered(), 1);

        assert!(animator.visualize(&Circuit::new()).is_err());
        assert_eq!(animator.rendered(), 1);
        assert_eq!(animator.latest().map(|t| t.gates().len()), Some(1));
    }
}
