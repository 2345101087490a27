//! Error types for the Blochlab simulator.
//!
//! Visualization failures get their own type so callers can match on the
//! "cannot animate this circuit" case without caring about the rest.

use thiserror::Error;

/// Raised when a circuit's state sequence cannot be animated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisualizationError {
    /// Nothing to animate.
    #[error("Circuit has no gates to visualize")]
    EmptyCircuit,

    /// More gates than a single transition can show.
    #[error("Maximum of {max} gates can be visualized, circuit has {count}")]
    TooManyGates { count: usize, max: usize },

    /// Frame or timing options make the animation impossible.
    #[error("Invalid transition options: {0}")]
    InvalidOptions(String),
}

/// Main error type for all quantum simulator operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// State vector is not properly normalized.
    #[error("Quantum state is not normalized (norm = {0:.6})")]
    NotNormalized(f64),

    /// Amplitudes contain NaN or infinite components.
    #[error("Amplitudes must be finite")]
    InvalidAmplitudes,

    /// The circuit could not be visualized.
    #[error(transparent)]
    Visualization(#[from] VisualizationError),
}

/// Convenience type alias for Results using QuantumError.
pub type Result<T> = std::result::Result<T, QuantumError>;
