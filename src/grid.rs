//! Square cloth grid: topology construction and the owning container.

use crate::config::{GridConfig, SolverConfig};
use crate::error::ClothError;
use crate::float::Float;
use crate::link::{Link, LinkTable};
use crate::observer::StepObserver;
use crate::picking::Picker;
use crate::point::Point;
use crate::solver;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Build the points and links of an R x R grid.
///
/// Points cover the unit square centred on the origin, row-major: the point
/// at column `i`, row `j` has index `j * R + i` and starts at
/// `(i / R - 0.5, j / R - 0.5)` with zero velocity. Every point is linked to
/// its right and upper neighbour, each link resting at its initial length.
/// Links are emitted column by column, horizontal before vertical.
pub fn build<F: Float>(config: &GridConfig) -> Result<(Vec<Point<F>>, LinkTable<F>), ClothError> {
    config.validate()?;
    let r = config.resolution;
    let side = F::from_f32(r as f32);

    let mut points = Vec::with_capacity(r * r);
    for j in 0..r {
        for i in 0..r {
            let x = F::from_f32(i as f32) / side - F::half();
            let y = F::from_f32(j as f32) / side - F::half();
            points.push(Point::new(Vec2::new(x, y)));
        }
    }

    let mut links = LinkTable::with_capacity(config.capacity()?);
    for i in 0..r {
        for j in 0..r {
            let here = j * r + i;
            if i + 1 < r {
                connect(&mut points, &mut links, here, here + 1)?;
            }
            if j + 1 < r {
                connect(&mut points, &mut links, here, here + r)?;
            }
        }
    }

    for index in config.anchors.indices(r) {
        points[index].pin();
    }

    Ok((points, links))
}

fn connect<F: Float>(
    points: &mut [Point<F>],
    links: &mut LinkTable<F>,
    a: usize,
    b: usize,
) -> Result<(), ClothError> {
    let id = links.push(Link::between(a, b, points))?;
    points[a].links.push(a, id)?;
    points[b].links.push(b, id)?;
    Ok(())
}

/// A cloth mesh: owns its points and links for the whole simulation.
#[derive(Clone, Debug)]
pub struct Cloth<F: Float> {
    points: Vec<Point<F>>,
    links: LinkTable<F>,
    resolution: usize,
}

impl<F: Float> Cloth<F> {
    /// Build a grid cloth from `config`.
    pub fn new(config: &GridConfig) -> Result<Self, ClothError> {
        let (points, links) = build(config)?;
        Ok(Cloth { points, links, resolution: config.resolution })
    }

    /// Split into the raw point array and link table.
    pub fn into_parts(self) -> (Vec<Point<F>>, LinkTable<F>) {
        (self.points, self.links)
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.resolution + col
    }

    /// Advance one frame. See [`solver::step`].
    ///
    /// The cloth does not own its solver settings: check `config` with
    /// [`SolverConfig::validate`] before the first frame, as [`Session`]
    /// does.
    ///
    /// [`Session`]: crate::session::Session
    pub fn step<O: StepObserver>(&mut self, config: &SolverConfig<F>, observer: &mut O) {
        solver::step(&mut self.points, &self.links, config, observer);
    }

    /// Overwrite a point's current position, leaving its history alone.
    pub fn set_position(&mut self, index: usize, pos: Vec2<F>) -> Result<(), ClothError> {
        self.point_mut(index)?.set_position(pos);
        Ok(())
    }

    pub fn pin(&mut self, index: usize) -> Result<(), ClothError> {
        self.point_mut(index)?.pin();
        Ok(())
    }

    pub fn unpin(&mut self, index: usize) -> Result<(), ClothError> {
        self.point_mut(index)?.unpin();
        Ok(())
    }

    /// Index of the point under `cursor`, if any.
    pub fn pick(&self, picker: &Picker<F>, cursor: Vec2<F>) -> Option<usize> {
        picker.pick(&self.points, cursor)
    }

    /// Current positions in index order.
    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Write `[x0, y0, x1, y1, ...]` into `out` for upload to a renderer.
    pub fn write_positions(&self, out: &mut [F]) -> Result<(), ClothError> {
        let required = self.points.len() * 2;
        if out.len() < required {
            return Err(ClothError::BufferTooSmall { required, len: out.len() });
        }
        for (chunk, p) in out.chunks_exact_mut(2).zip(self.points.iter()) {
            chunk[0] = p.pos.x;
            chunk[1] = p.pos.y;
        }
        Ok(())
    }

    /// Largest relative deviation from rest length over all links.
    pub fn max_strain(&self) -> F {
        self.links.iter().fold(F::zero(), |worst, link| {
            let rest = link.rest_length();
            if rest == F::zero() {
                return worst;
            }
            worst.max(((link.length(&self.points) - rest) / rest).abs())
        })
    }

    pub fn point(&self, index: usize) -> Option<&Point<F>> {
        self.points.get(index)
    }

    pub(crate) fn point_mut(&mut self, index: usize) -> Result<&mut Point<F>, ClothError> {
        let count = self.points.len();
        self.points
            .get_mut(index)
            .ok_or(ClothError::PointOutOfBounds { index, count })
    }

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn links(&self) -> &LinkTable<F> { &self.links }
    pub fn resolution(&self) -> usize { self.resolution }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Anchors;

    #[test]
    fn corner_positions() {
        let cloth: Cloth<f32> = Cloth::new(&GridConfig::new(4)).unwrap();
        assert_eq!(cloth.point(0).unwrap().pos, Vec2::new(-0.5, -0.5));
        assert_eq!(cloth.point(cloth.index(3, 0)).unwrap().pos, Vec2::new(0.25, -0.5));
        assert_eq!(cloth.point(cloth.index(0, 3)).unwrap().pos, Vec2::new(-0.5, 0.25));
    }

    #[test]
    fn links_emitted_column_major() {
        let cloth: Cloth<f32> = Cloth::new(&GridConfig::new(3)).unwrap();
        let order: Vec<(usize, usize)> = cloth.links().iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(&order[..4], &[(0, 1), (0, 3), (3, 4), (3, 6)]);
        // The last column only has vertical links.
        assert_eq!(&order[order.len() - 2..], &[(2, 5), (5, 8)]);
        assert_eq!(order.len(), 12);
    }

    #[test]
    fn interior_point_has_four_back_references() {
        let cloth: Cloth<f32> = Cloth::new(&GridConfig::new(3)).unwrap();
        assert_eq!(cloth.point(4).unwrap().links.len(), 4);
        assert_eq!(cloth.point(0).unwrap().links.len(), 2);
        assert_eq!(cloth.point(1).unwrap().links.len(), 3);
        for &id in cloth.point(4).unwrap().links.as_slice() {
            let link = cloth.links().get(id).unwrap();
            assert!(link.a == 4 || link.b == 4);
        }
    }

    #[test]
    fn default_anchors_hang_top_edge() {
        let cloth: Cloth<f32> = Cloth::new(&GridConfig::new(4)).unwrap();
        let anchored: Vec<usize> = cloth
            .points()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.anchor)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(anchored, alloc::vec![12, 14, 15]);
    }

    #[test]
    fn write_positions_rejects_short_buffer() {
        let cloth: Cloth<f32> =
            Cloth::new(&GridConfig::new(2).with_anchors(Anchors::None)).unwrap();
        let mut buf = [0.0f32; 7];
        assert_eq!(
            cloth.write_positions(&mut buf),
            Err(ClothError::BufferTooSmall { required: 8, len: 7 }),
        );
        let mut buf = [0.0f32; 8];
        cloth.write_positions(&mut buf).unwrap();
        assert_eq!(buf, [-0.5, -0.5, 0.0, -0.5, -0.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn commands_check_bounds() {
        let mut cloth: Cloth<f32> = Cloth::new(&GridConfig::new(2)).unwrap();
        assert_eq!(
            cloth.set_position(4, Vec2::zero()),
            Err(ClothError::PointOutOfBounds { index: 4, count: 4 }),
        );
        assert!(cloth.pin(0).is_ok());
        assert!(cloth.point(0).unwrap().anchor);
    }
}
