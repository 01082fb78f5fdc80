//! Cursor picking: map a world-space cursor to a point index.

use crate::error::ClothError;
use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;

/// How a cursor position selects a point.
///
/// Both strategies break ties by taking the lowest point index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Picker<F: Float> {
    /// Floor cursor and point coordinates to cells of size
    /// `1 / cells_per_unit` and match equal cells. Coarse: may find nothing
    /// near a cell boundary, and several points can share a cell.
    Quantized { cells_per_unit: F },
    /// The closest point no farther than `radius` from the cursor.
    Nearest { radius: F },
}

impl<F: Float> Picker<F> {
    /// Reject a zero, negative or non-finite cell density or radius.
    pub fn validate(&self) -> Result<(), ClothError> {
        let value = match *self {
            Picker::Quantized { cells_per_unit } => cells_per_unit,
            Picker::Nearest { radius } => radius,
        };
        if !value.is_finite() || value <= F::zero() {
            return Err(ClothError::InvalidPicker);
        }
        Ok(())
    }

    /// Pick the point under `cursor`, if any.
    pub fn pick(&self, points: &[Point<F>], cursor: Vec2<F>) -> Option<usize> {
        match *self {
            Picker::Quantized { cells_per_unit } => {
                let target = quantize(cursor, cells_per_unit);
                points
                    .iter()
                    .position(|p| quantize(p.pos, cells_per_unit) == target)
            }
            Picker::Nearest { radius } => {
                let limit = radius * radius;
                let mut best: Option<(usize, F)> = None;
                for (i, p) in points.iter().enumerate() {
                    let d = p.pos.distance_sq(cursor);
                    if d > limit {
                        continue;
                    }
                    match best {
                        Some((_, best_d)) if best_d <= d => {}
                        _ => best = Some((i, d)),
                    }
                }
                best.map(|(i, _)| i)
            }
        }
    }

    /// Position a dragged point is moved to for this cursor.
    pub fn snap(&self, cursor: Vec2<F>) -> Vec2<F> {
        match *self {
            Picker::Quantized { cells_per_unit } => quantize(cursor, cells_per_unit),
            Picker::Nearest { .. } => cursor,
        }
    }
}

impl<F: Float> Default for Picker<F> {
    fn default() -> Self {
        Picker::Quantized { cells_per_unit: F::from_f32(100.0) }
    }
}

fn quantize<F: Float>(v: Vec2<F>, cells_per_unit: F) -> Vec2<F> {
    Vec2::new(
        (v.x * cells_per_unit).floor() / cells_per_unit,
        (v.y * cells_per_unit).floor() / cells_per_unit,
    )
}
