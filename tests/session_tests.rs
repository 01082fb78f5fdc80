use clothgrid::session::CORNER;
use clothgrid::{ClothError, GridConfig, NoOpStepObserver, Picker, Session, SolverConfig, StepStats, Vec2};

fn session(resolution: usize) -> Session<f32> {
    Session::new(&GridConfig::new(resolution), SolverConfig::new()).unwrap()
}

#[test]
fn paused_session_is_frozen_except_for_commands() {
    let mut s = session(5);
    let before = s.cloth().positions();
    for _ in 0..10 {
        assert!(!s.frame(&mut NoOpStepObserver));
    }
    assert_eq!(s.cloth().positions(), before);

    s.pull_corner_left().unwrap();
    assert_eq!(s.cloth().point(CORNER).unwrap().pos.x, -0.8);
    assert_eq!(s.cloth().positions()[1..], before[1..]);
}

#[test]
fn running_session_steps_every_frame() {
    let mut s = session(5);
    s.run();
    let mut stats = StepStats::default();
    for _ in 0..4 {
        assert!(s.frame(&mut stats));
    }
    s.pause();
    assert!(!s.frame(&mut stats));
    assert_eq!(stats.steps, 4);
    assert_eq!(stats.relaxation_passes, 12);
}

#[test]
fn select_drag_release() {
    let mut s = session(8);
    // Point (2, 3) sits exactly at (-0.25, -0.125).
    let target = s.cloth().index(2, 3);
    let picked = s.select_at(Vec2::new(-0.245, -0.121));
    assert_eq!(picked, Some(target));

    s.drag_to(Vec2::new(0.123, 0.456)).unwrap();
    let pos = s.cloth().point(target).unwrap().pos;
    assert!((pos.x - 0.12).abs() < 1e-6 && (pos.y - 0.45).abs() < 1e-6, "dragged to {:?}", pos);

    s.release();
    assert_eq!(s.selected(), None);
    s.drag_to(Vec2::new(0.9, 0.9)).unwrap();
    assert!((s.cloth().point(target).unwrap().pos.x - 0.12).abs() < 1e-6);
}

#[test]
fn miss_keeps_previous_selection() {
    let mut s = session(10).with_picker(Picker::Nearest { radius: 0.02 }).unwrap();
    assert_eq!(s.select_at(Vec2::new(0.9, 0.9)), None);
    let first = s.select_at(Vec2::new(-0.49, -0.49));
    assert_eq!(first, Some(0));
    assert_eq!(s.select_at(Vec2::new(0.9, 0.9)), Some(0));
}

#[test]
fn nearest_picker_drags_unsnapped() {
    let mut s = session(10).with_picker(Picker::Nearest { radius: 0.05 }).unwrap();
    let picked = s.select_at(Vec2::new(0.01, 0.01)).unwrap();
    assert_eq!(picked, s.cloth().index(5, 5));
    s.drag_to(Vec2::new(0.123, 0.456)).unwrap();
    assert_eq!(s.cloth().point(picked).unwrap().pos, Vec2::new(0.123, 0.456));
}

#[test]
fn lifted_corner_swings_back_down() {
    let mut s = session(8);
    s.lift_corner().unwrap();
    s.run();
    for _ in 0..200 {
        s.frame(&mut NoOpStepObserver);
    }
    let corner = s.cloth().point(CORNER).unwrap().pos;
    assert!(corner.y < 0.8, "corner should fall from 0.8, at {}", corner.y);
    assert!(corner.is_finite());
}

#[test]
fn zero_density_picker_cannot_poison_the_mesh() {
    let mut s = session(5);
    s.run();
    assert_eq!(s.select_at(Vec2::new(-0.5, -0.5)), Some(0));
    assert_eq!(
        s.set_picker(Picker::Quantized { cells_per_unit: 0.0 }),
        Err(ClothError::InvalidPicker),
    );
    s.drag_to(Vec2::new(0.1, 0.1)).unwrap();
    for _ in 0..5 {
        s.frame(&mut NoOpStepObserver);
    }
    assert!(s.cloth().positions().iter().all(|p| p.is_finite()));

    assert!(session(5).with_picker(Picker::Nearest { radius: -0.1 }).is_err());
}

#[test]
fn held_point_is_replaced_each_frame() {
    let mut s = session(8);
    s.run();
    let corner = s.select_at(Vec2::new(-0.5, -0.5)).unwrap();
    s.drag_to(Vec2::new(-0.5, 0.2)).unwrap();
    let target = s.cloth().point(corner).unwrap().pos;
    s.frame(&mut NoOpStepObserver);

    // The next frame must match re-placing the point by hand, then stepping.
    let mut expected = s.cloth().clone();
    expected.set_position(corner, target).unwrap();
    expected.step(s.solver(), &mut NoOpStepObserver);
    s.frame(&mut NoOpStepObserver);
    assert_eq!(s.cloth().positions(), expected.positions());

    // Released points are left to the solver.
    s.release();
    let mut expected = s.cloth().clone();
    expected.step(s.solver(), &mut NoOpStepObserver);
    s.frame(&mut NoOpStepObserver);
    assert_eq!(s.cloth().positions(), expected.positions());
}
