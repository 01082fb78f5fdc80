//! Error types for cloth construction and external commands.

use core::fmt;

/// Errors raised while configuring or building a cloth, or while applying an
/// external command. The per-frame step itself cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid must have at least 2 points per row and column.
    InvalidGridDimensions { resolution: usize },
    /// The link table cannot hold every link the topology needs.
    LinkCapacityExceeded { required: usize, capacity: usize },
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
    /// A point already records the maximum number of incident links.
    DegreeExceeded { point: usize, max: usize },
    /// At least one relaxation pass per step is required.
    InvalidIterations,
    /// Damping must be in (0, 1).
    InvalidDamping,
    /// Gravity must be finite and non-negative.
    InvalidGravity,
    /// Picker cell density or radius must be finite and positive.
    InvalidPicker,
    /// Output buffer cannot hold two floats per point.
    BufferTooSmall { required: usize, len: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { resolution } => {
                write!(f, "grid must be at least 2x2 (got {}x{})", resolution, resolution)
            }
            ClothError::LinkCapacityExceeded { required, capacity } => {
                write!(f, "link capacity {} too small, {} links required", capacity, required)
            }
            ClothError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            ClothError::DegreeExceeded { point, max } => {
                write!(f, "point {} already has {} incident links", point, max)
            }
            ClothError::InvalidIterations => write!(f, "at least one relaxation pass is required"),
            ClothError::InvalidDamping => write!(f, "damping must be in (0, 1)"),
            ClothError::InvalidGravity => write!(f, "gravity must be finite and non-negative"),
            ClothError::InvalidPicker => {
                write!(f, "picker cell density and radius must be finite and positive")
            }
            ClothError::BufferTooSmall { required, len } => {
                write!(f, "position buffer holds {} floats, {} required", len, required)
            }
        }
    }
}
