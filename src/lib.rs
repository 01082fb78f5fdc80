//! Verlet cloth simulation on a square grid of point masses.
//!
//! `clothgrid` builds an R x R mesh of points joined by horizontal and
//! vertical distance links, then advances it one frame at a time:
//! position-based Verlet integration with damping and gravity, followed by a
//! fixed number of under-relaxed passes over the links.
//!
//! # Features
//!
//! - **Grid topology**: row-major points on the unit square, index-based links
//! - **Verlet integration**: implicit velocity, unit time step
//! - **Link relaxation**: in-order, half-correction per endpoint, anchors fixed
//! - **Input helpers**: cursor picking and a run/pause [`Session`]
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! ```
//! use clothgrid::{Cloth, GridConfig, SolverConfig, NoOpStepObserver};
//!
//! let mut cloth: Cloth<f32> = Cloth::new(&GridConfig::new(10)).unwrap();
//! let config = SolverConfig::new();
//! for _ in 0..60 {
//!     cloth.step(&config, &mut NoOpStepObserver);
//! }
//! let mut vertices = vec![0.0f32; cloth.point_count() * 2];
//! cloth.write_positions(&mut vertices).unwrap();
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod link;
pub mod solver;
pub mod grid;
pub mod picking;
pub mod session;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::{Point, IncidentLinks, MAX_DEGREE};
pub use link::{Link, LinkTable};
pub use solver::{integrate, relax_pass, step};
pub use grid::{build, Cloth};
pub use picking::Picker;
pub use session::Session;
pub use config::{Anchors, GridConfig, SolverConfig};
pub use observer::{StepObserver, NoOpStepObserver, StepStats};
pub use error::ClothError;
