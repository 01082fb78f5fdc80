//! Distance links between points and the fixed-capacity table holding them.

use crate::error::ClothError;
use crate::float::Float;
use crate::point::Point;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A distance constraint between points `a` and `b`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Link<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
}

impl<F: Float> Link<F> {
    /// Link two points, taking the rest length from their current distance.
    pub fn between(a: usize, b: usize, points: &[Point<F>]) -> Self {
        let rest_length = points[a].pos.distance(points[b].pos);
        Link { a, b, rest_length }
    }

    /// Link two points with an explicit rest length.
    pub fn with_rest_length(a: usize, b: usize, rest_length: F) -> Self {
        Link { a, b, rest_length }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Current distance between the endpoints.
    pub fn length(&self, points: &[Point<F>]) -> F {
        points[self.a].pos.distance(points[self.b].pos)
    }

    /// Move both endpoints half of the way toward the rest length.
    ///
    /// Anchors still count for the distance but are never moved themselves.
    /// Coincident endpoints get no correction.
    pub fn relax(&self, points: &mut [Point<F>]) {
        let a_pos = points[self.a].pos;
        let b_pos = points[self.b].pos;

        let delta = b_pos - a_pos;
        let dist = delta.length();
        let diff = self.rest_length - dist;
        let percent = if diff != F::zero() && dist != F::zero() {
            diff / dist / F::two()
        } else {
            F::zero()
        };
        let offset = delta.scale(percent);

        if !points[self.a].anchor {
            points[self.a].pos = points[self.a].pos - offset;
        }
        if !points[self.b].anchor {
            points[self.b].pos = points[self.b].pos + offset;
        }
    }
}

/// Fixed-capacity link storage.
///
/// Slots are filled in order; unfilled slots hold `None` and every pass over
/// the table skips them.
///
/// With the `serde` feature a table can be written out but not read back;
/// tables only come from [`crate::grid::build`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LinkTable<F: Float> {
    slots: Vec<Option<Link<F>>>,
    len: usize,
}

impl<F: Float> LinkTable<F> {
    /// A table with `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        LinkTable { slots, len: 0 }
    }

    /// Store `link` in the next free slot and return its index.
    pub fn push(&mut self, link: Link<F>) -> Result<usize, ClothError> {
        let index = self.len;
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(link);
                self.len += 1;
                Ok(index)
            }
            None => Err(ClothError::LinkCapacityExceeded {
                required: index + 1,
                capacity: self.slots.len(),
            }),
        }
    }

    /// Occupied links in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Link<F>> {
        self.slots.iter().flatten()
    }

    pub fn get(&self, index: usize) -> Option<&Link<F>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// One relaxation pass over every occupied slot, in slot order.
    ///
    /// Updates are applied in place, so later links see the corrections of
    /// earlier ones within the same pass.
    pub fn relax(&self, points: &mut [Point<F>]) {
        for link in self.iter() {
            link.relax(points);
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
