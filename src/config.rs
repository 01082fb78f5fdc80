//! Configuration for the solver and the grid topology.

use crate::error::ClothError;
use crate::float::Float;
use alloc::vec::Vec;

/// Per-frame solver parameters.
///
/// # Builder Pattern
/// ```
/// use clothgrid::config::SolverConfig;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(5)
///     .with_gravity(0.0002)
///     .with_damping(0.98);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Relaxation passes run after each integration step. Default: 3.
    pub iterations: usize,
    /// Downward offset applied to every free point per step. It is not
    /// scaled by a time step. Default: 0.0001.
    pub gravity: F,
    /// Fraction of the implied velocity kept each step, in (0, 1).
    /// Default: 0.99.
    pub damping: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 3,
            gravity: F::from_f32(0.0001),
            damping: F::from_f32(0.99),
        }
    }

    /// Set the number of relaxation passes per step.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the per-step gravity offset.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Reject parameters that would make the step meaningless.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.iterations == 0 {
            return Err(ClothError::InvalidIterations);
        }
        if !self.damping.is_finite() || self.damping <= F::zero() || self.damping >= F::one() {
            return Err(ClothError::InvalidDamping);
        }
        if !self.gravity.is_finite() || self.gravity < F::zero() {
            return Err(ClothError::InvalidGravity);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Which points are anchored once the grid is built.
#[derive(Clone, Debug, PartialEq)]
pub enum Anchors {
    /// The last point, the first point of the last row and the middle of the
    /// last row. With y pointing up this hangs the cloth by its top edge.
    HangingEdge,
    /// Exactly these point indices.
    Indices(Vec<usize>),
    /// Nothing is anchored.
    None,
}

impl Anchors {
    /// Resolve to point indices for a grid with `resolution` points per row.
    pub fn indices(&self, resolution: usize) -> Vec<usize> {
        match self {
            Anchors::HangingEdge => {
                let total = match resolution.checked_mul(resolution) {
                    Some(total) if total > 0 => total,
                    _ => return Vec::new(),
                };
                let mut out = Vec::with_capacity(3);
                for index in [total - 1, total - resolution, total - resolution / 2] {
                    if !out.contains(&index) {
                        out.push(index);
                    }
                }
                out
            }
            Anchors::Indices(list) => list.clone(),
            Anchors::None => Vec::new(),
        }
    }
}

/// Configuration for building a cloth grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Points per row and per column. Must be at least 2. Default: 60.
    pub resolution: usize,
    /// Link table capacity. `None` over-provisions `2 * resolution^2`.
    pub link_capacity: Option<usize>,
    /// Anchor designation applied after construction.
    pub anchors: Anchors,
}

impl GridConfig {
    pub fn new(resolution: usize) -> Self {
        GridConfig {
            resolution,
            link_capacity: None,
            anchors: Anchors::HangingEdge,
        }
    }

    pub fn with_link_capacity(mut self, capacity: usize) -> Self {
        self.link_capacity = Some(capacity);
        self
    }

    pub fn with_anchors(mut self, anchors: Anchors) -> Self {
        self.anchors = anchors;
        self
    }

    /// Number of points the grid will hold.
    pub fn point_count(&self) -> Result<usize, ClothError> {
        self.resolution
            .checked_mul(self.resolution)
            .ok_or(ClothError::InvalidGridDimensions { resolution: self.resolution })
    }

    /// Number of horizontal plus vertical links: `2 * R * (R - 1)`.
    pub fn required_links(&self) -> Result<usize, ClothError> {
        self.resolution
            .saturating_sub(1)
            .checked_mul(self.resolution)
            .and_then(|n| n.checked_mul(2))
            .ok_or(ClothError::InvalidGridDimensions { resolution: self.resolution })
    }

    /// Link table capacity, defaulting to `2 * R^2`.
    pub fn capacity(&self) -> Result<usize, ClothError> {
        match self.link_capacity {
            Some(capacity) => Ok(capacity),
            None => self
                .point_count()?
                .checked_mul(2)
                .ok_or(ClothError::InvalidGridDimensions { resolution: self.resolution }),
        }
    }

    /// Check dimensions, capacity and anchor indices.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.resolution < 2 {
            return Err(ClothError::InvalidGridDimensions { resolution: self.resolution });
        }
        let count = self.point_count()?;
        let required = self.required_links()?;
        let capacity = self.capacity()?;
        if capacity < required {
            return Err(ClothError::LinkCapacityExceeded { required, capacity });
        }
        for index in self.anchors.indices(self.resolution) {
            if index >= count {
                return Err(ClothError::PointOutOfBounds { index, count });
            }
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(60)
    }
}
