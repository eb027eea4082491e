use thiserror::Error;

use crate::primitives::location::Location;
use crate::primitives::strategy::Capability;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Every failure the topology core can surface to its caller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// Topology built from a matrix with no rows
    #[error("matrix cannot be empty")]
    EmptyMatrix,

    /// Topology built from rows of different lengths
    #[error("matrix rows must be of the same length: row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Location of the wrong arity for the topology
    #[error("expected a {expected}-dimensional location, got {found} dimensions")]
    CoordinateType { expected: usize, found: usize },

    /// Location outside of the topology's bounds
    #[error("location {location} is out of bounds")]
    OutOfBounds { location: Location },

    /// Strategy invoked on a topology lacking a capability it requires
    #[error("strategy {strategy} requires interface {capability}")]
    MissingCapability {
        strategy: &'static str,
        capability: Capability,
    },

    /// Destination unreachable from the source
    #[error("no path found from {src} to {dst}")]
    PathNotFound { src: Location, dst: Location },

    /// Movement rule with a zero, negative or non-finite weight
    #[error("invalid weight {weight} for move {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },
}

impl TopologyError {
    /// Both ways a matrix can fail shape validation
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::EmptyMatrix | Self::RaggedRow { .. })
    }
}
