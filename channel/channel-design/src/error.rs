//! Error types for design export.

use channel_lattice::LatticeError;
use thiserror::Error;

/// Result type for design operations.
pub type DesignResult<T> = Result<T, DesignError>;

/// Errors raised while naming boundaries or handing a lattice to a design
/// backend.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DesignError {
    /// The extrusion height is zero, negative, or not finite.
    #[error("extrusion height must be positive and finite, got {0}")]
    InvalidExtrusionHeight(f64),

    /// The lattice has no channel layers, or an end layer has no channels.
    #[error("lattice has no inlet or outlet channels")]
    EmptyLattice,

    /// A geometry operation failed.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
}
