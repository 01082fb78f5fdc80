use clothgrid::{ClothError, GridConfig, NoOpStepObserver, Picker, Session, SolverConfig, Vec2};
use wasm_bindgen::prelude::*;

/// Convert a cursor in screen pixels to normalized device coordinates.
/// Screen y grows downward, world y grows upward.
pub fn screen_to_world(px: f64, py: f64, width: f64, height: f64) -> Vec2<f32> {
    let x = (px / width) * 2.0 - 1.0;
    let y = (py / height) * 2.0 - 1.0;
    Vec2::new(x as f32, -y as f32)
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    session: Session<f32>,
    width: f64,
    height: f64,
    vertices: Vec<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Hanging cloth with `resolution` points per side, viewed through a
    /// `width` x `height` pixel canvas. Starts paused.
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: usize, width: f64, height: f64) -> Result<ClothDemo, JsError> {
        let session = Session::new(&GridConfig::new(resolution), SolverConfig::new())
            .map_err(js_error)?;
        let vertices = vec![0.0; session.cloth().point_count() * 2];
        let mut demo = ClothDemo { session, width, height, vertices };
        demo.refresh()?;
        Ok(demo)
    }

    /// Switch to nearest-point picking within `radius` world units.
    pub fn use_nearest_picking(&mut self, radius: f32) -> Result<(), JsError> {
        self.session.set_picker(Picker::Nearest { radius }).map_err(js_error)
    }

    pub fn start(&mut self) {
        self.session.run();
    }

    pub fn toggle(&mut self) {
        self.session.toggle();
    }

    pub fn running(&self) -> bool {
        self.session.is_running()
    }

    /// Advance one frame (if running) and refresh the vertex buffer.
    pub fn update(&mut self) -> Result<(), JsError> {
        self.session.frame(&mut NoOpStepObserver);
        self.refresh()
    }

    /// Begin a drag at the point under the cursor. Returns the picked index
    /// or -1 when nothing is under it.
    pub fn select(&mut self, px: f64, py: f64) -> i32 {
        let cursor = screen_to_world(px, py, self.width, self.height);
        match self.session.select_at(cursor) {
            Some(index) => index as i32,
            None => -1,
        }
    }

    pub fn drag(&mut self, px: f64, py: f64) -> Result<(), JsError> {
        let cursor = screen_to_world(px, py, self.width, self.height);
        self.session.drag_to(cursor).map_err(js_error)
    }

    pub fn release(&mut self) {
        self.session.release();
    }

    pub fn lift_corner(&mut self) -> Result<(), JsError> {
        self.session.lift_corner().map_err(js_error)
    }

    pub fn pull_corner_left(&mut self) -> Result<(), JsError> {
        self.session.pull_corner_left().map_err(js_error)
    }

    pub fn pull_corner_right(&mut self) -> Result<(), JsError> {
        self.session.pull_corner_right().map_err(js_error)
    }

    pub fn fling_corner(&mut self) -> Result<(), JsError> {
        self.session.fling_corner().map_err(js_error)
    }

    /// Returns flat [x0, y0, x1, y1, ...] in point index order
    pub fn positions(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    pub fn point_count(&self) -> usize {
        self.session.cloth().point_count()
    }
}

impl ClothDemo {
    fn refresh(&mut self) -> Result<(), JsError> {
        self.session
            .cloth()
            .write_positions(&mut self.vertices)
            .map_err(js_error)
    }
}

fn js_error(e: ClothError) -> JsError {
    JsError::new(&e.to_string())
}
