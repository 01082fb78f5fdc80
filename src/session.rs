//! Interactive driver state around a cloth: run/pause, cursor dragging and
//! the corner commands bound to keys by a front end.

use crate::config::{GridConfig, SolverConfig};
use crate::error::ClothError;
use crate::float::Float;
use crate::grid::Cloth;
use crate::observer::StepObserver;
use crate::picking::Picker;
use crate::vec::Vec2;

/// Index of the corner the keyboard commands move.
pub const CORNER: usize = 0;

/// A cloth plus the input-layer state that drives it frame by frame.
///
/// Starts paused. While paused, [`Session::frame`] does nothing and points
/// only move through explicit commands.
pub struct Session<F: Float> {
    cloth: Cloth<F>,
    solver: SolverConfig<F>,
    picker: Picker<F>,
    running: bool,
    selected: Option<usize>,
    held_at: Option<Vec2<F>>,
}

impl<F: Float> Session<F> {
    /// Build the cloth and check both configs up front.
    pub fn new(grid: &GridConfig, solver: SolverConfig<F>) -> Result<Self, ClothError> {
        solver.validate()?;
        let cloth = Cloth::new(grid)?;
        Ok(Session {
            cloth,
            solver,
            picker: Picker::default(),
            running: false,
            selected: None,
            held_at: None,
        })
    }

    pub fn with_picker(mut self, picker: Picker<F>) -> Result<Self, ClothError> {
        self.set_picker(picker)?;
        Ok(self)
    }

    /// Replace the picker. A degenerate picker is refused and the current one
    /// stays in place.
    pub fn set_picker(&mut self, picker: Picker<F>) -> Result<(), ClothError> {
        picker.validate()?;
        self.picker = picker;
        Ok(())
    }

    pub fn run(&mut self) { self.running = true; }
    pub fn pause(&mut self) { self.running = false; }
    pub fn toggle(&mut self) { self.running = !self.running; }
    pub fn is_running(&self) -> bool { self.running }

    /// Advance one frame if running. Returns whether a step was taken.
    ///
    /// A dragged point is put back at its drag target before every step, so
    /// it stays under a still cursor instead of falling between drag events.
    pub fn frame<O: StepObserver>(&mut self, observer: &mut O) -> bool {
        if !self.running {
            return false;
        }
        if let (Some(index), Some(target)) = (self.selected, self.held_at) {
            if let Ok(point) = self.cloth.point_mut(index) {
                point.set_position(target);
            }
        }
        self.cloth.step(&self.solver, observer);
        true
    }

    /// Select the point under `cursor` (world units). Keeps any existing
    /// selection when nothing is hit. Picking a different point drops the
    /// previous drag target.
    pub fn select_at(&mut self, cursor: Vec2<F>) -> Option<usize> {
        if let Some(index) = self.cloth.pick(&self.picker, cursor) {
            if self.selected != Some(index) {
                self.held_at = None;
            }
            self.selected = Some(index);
        }
        self.selected
    }

    /// Move the selected point to `cursor`, snapped by the picker, and hold
    /// it there on later frames until [`Session::release`].
    pub fn drag_to(&mut self, cursor: Vec2<F>) -> Result<(), ClothError> {
        let index = match self.selected {
            Some(index) => index,
            None => return Ok(()),
        };
        let target = self.picker.snap(cursor);
        self.cloth.set_position(index, target)?;
        self.held_at = Some(target);
        Ok(())
    }

    pub fn release(&mut self) {
        self.selected = None;
        self.held_at = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Raise the corner to y = 0.8.
    pub fn lift_corner(&mut self) -> Result<(), ClothError> {
        self.move_corner(None, Some(F::from_f32(0.8)))
    }

    /// Pull the corner to x = -0.8.
    pub fn pull_corner_left(&mut self) -> Result<(), ClothError> {
        self.move_corner(Some(F::from_f32(-0.8)), None)
    }

    /// Pull the corner to x = 0.8.
    pub fn pull_corner_right(&mut self) -> Result<(), ClothError> {
        self.move_corner(Some(F::from_f32(0.8)), None)
    }

    /// Throw the corner far out to x = -3.0.
    pub fn fling_corner(&mut self) -> Result<(), ClothError> {
        self.move_corner(Some(F::from_f32(-3.0)), None)
    }

    fn move_corner(&mut self, x: Option<F>, y: Option<F>) -> Result<(), ClothError> {
        let count = self.cloth.point_count();
        let current = self
            .cloth
            .point(CORNER)
            .ok_or(ClothError::PointOutOfBounds { index: CORNER, count })?
            .pos;
        let target = Vec2::new(x.unwrap_or(current.x), y.unwrap_or(current.y));
        self.cloth.set_position(CORNER, target)
    }

    pub fn cloth(&self) -> &Cloth<F> { &self.cloth }
    pub fn cloth_mut(&mut self) -> &mut Cloth<F> { &mut self.cloth }
    pub fn solver(&self) -> &SolverConfig<F> { &self.solver }
}
