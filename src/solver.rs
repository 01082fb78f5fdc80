//! Per-frame stepping: Verlet integration followed by link relaxation.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::link::LinkTable;
use crate::observer::StepObserver;
use crate::point::Point;

/// Move every free point by its damped implied velocity plus gravity.
///
/// Returns the number of points that were integrated.
pub fn integrate<F: Float>(points: &mut [Point<F>], config: &SolverConfig<F>) -> usize {
    let mut moved = 0;
    for p in points.iter_mut() {
        if p.anchor {
            continue;
        }
        p.integrate(config.damping, config.gravity);
        moved += 1;
    }
    moved
}

/// One relaxation pass over `links`, in ascending slot order.
pub fn relax_pass<F: Float>(points: &mut [Point<F>], links: &LinkTable<F>) {
    links.relax(points);
}

/// Advance one frame: integrate once, then run `config.iterations`
/// relaxation passes. There is no convergence check; residual stretch
/// after the fixed pass count is expected.
///
/// `config` must pass [`SolverConfig::validate`]; callers check it once at
/// setup. Debug builds assert it here.
pub fn step<F: Float, O: StepObserver>(
    points: &mut [Point<F>],
    links: &LinkTable<F>,
    config: &SolverConfig<F>,
    observer: &mut O,
) {
    debug_assert!(config.validate().is_ok(), "unchecked solver config: {:?}", config);
    let moved = integrate(points, config);
    observer.on_integrate(moved);

    for pass in 0..config.iterations {
        relax_pass(points, links);
        observer.on_relaxation_pass(pass);
    }

    observer.on_step_complete();
}
