//! Point masses with implicit (position-difference) velocity.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Highest vertex degree in a horizontal/vertical grid.
pub const MAX_DEGREE: usize = 4;

/// Bounded set of link indices touching a point.
///
/// Stored inline, so a point owns no heap memory. Bookkeeping only: the
/// integration and relaxation loops walk the link table directly.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IncidentLinks {
    slots: [usize; MAX_DEGREE],
    len: usize,
}

impl IncidentLinks {
    /// Record `link`. Fails once `MAX_DEGREE` links are recorded.
    pub fn push(&mut self, point: usize, link: usize) -> Result<(), ClothError> {
        if self.len == MAX_DEGREE {
            return Err(ClothError::DegreeExceeded { point, max: MAX_DEGREE });
        }
        self.slots[self.len] = link;
        self.len += 1;
        Ok(())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A cloth point: current position, position one step ago, anchor flag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub anchor: bool,
    pub links: IncidentLinks,
}

impl<F: Float> Point<F> {
    /// A free point at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Point {
            pos,
            prev_pos: pos,
            anchor: false,
            links: IncidentLinks::default(),
        }
    }

    /// An anchored point at rest.
    pub fn anchored(pos: Vec2<F>) -> Self {
        Point { anchor: true, ..Point::new(pos) }
    }

    /// Advance one unit step: keep `damping` of the implied velocity and
    /// drop by `gravity`. Anchors are left untouched, history included.
    pub fn integrate(&mut self, damping: F, gravity: F) {
        if self.anchor {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(damping);
        let new_pos = self.pos + velocity - Vec2::new(F::zero(), gravity);
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Overwrite the current position only. The jump becomes velocity on the
    /// next integration step.
    pub fn set_position(&mut self, pos: Vec2<F>) {
        self.pos = pos;
    }

    pub fn pin(&mut self) {
        self.anchor = true;
    }

    /// Release an anchor. History is reset so the point starts at rest
    /// instead of inheriting whatever jump happened while it was pinned.
    pub fn unpin(&mut self) {
        self.anchor = false;
        self.prev_pos = self.pos;
    }
}
