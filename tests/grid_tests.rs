use clothgrid::{Anchors, Cloth, GridConfig, NoOpStepObserver, SolverConfig, StepStats};

#[test]
fn link_count_is_two_r_r_minus_one() {
    for r in 2..=12 {
        let cloth: Cloth<f32> = Cloth::new(&GridConfig::new(r)).unwrap();
        assert_eq!(cloth.point_count(), r * r);
        assert_eq!(cloth.link_count(), 2 * r * (r - 1), "resolution {}", r);
        assert_eq!(cloth.links().capacity(), 2 * r * r);
    }
}

#[test]
fn exact_link_capacity_is_enough() {
    let config = GridConfig::new(5).with_link_capacity(40);
    let cloth: Cloth<f32> = Cloth::new(&config).unwrap();
    assert_eq!(cloth.link_count(), 40);
    assert_eq!(cloth.links().capacity(), 40);
}

#[test]
fn rest_length_is_grid_spacing() {
    for r in 2..=12 {
        let cloth: Cloth<f32> = Cloth::new(&GridConfig::new(r)).unwrap();
        let spacing = 1.0 / r as f32;
        for link in cloth.links().iter() {
            assert!(
                (link.rest_length() - spacing).abs() < 1e-6,
                "resolution {}: link {}-{} rests at {}, expected {}",
                r, link.a, link.b, link.rest_length(), spacing,
            );
        }
    }
}

#[test]
fn every_point_degree_within_bound() {
    let cloth: Cloth<f64> = Cloth::new(&GridConfig::new(6)).unwrap();
    let corners = [0, 5, 30, 35];
    for (i, p) in cloth.points().iter().enumerate() {
        assert!(p.links.len() >= 2 && p.links.len() <= clothgrid::MAX_DEGREE);
        if corners.contains(&i) {
            assert_eq!(p.links.len(), 2);
        }
    }
}

#[test]
fn hanging_cloth_drapes_under_gravity() {
    let mut cloth: Cloth<f32> = Cloth::new(&GridConfig::new(10)).unwrap();
    let anchored: Vec<usize> = Anchors::HangingEdge.indices(10);
    let anchor_initial: Vec<_> = anchored.iter().map(|&i| cloth.point(i).unwrap().pos).collect();
    let bottom_initial: Vec<_> = (0..10).map(|col| cloth.point(cloth.index(col, 0)).unwrap().pos).collect();

    let config = SolverConfig::new();
    let mut stats = StepStats::default();
    for _ in 0..300 {
        cloth.step(&config, &mut stats);
    }

    for (&i, init) in anchored.iter().zip(anchor_initial.iter()) {
        assert_eq!(cloth.point(i).unwrap().pos, *init, "anchor {} moved", i);
    }
    for col in 0..10 {
        let pos = cloth.point(cloth.index(col, 0)).unwrap().pos;
        assert!(
            pos.y < bottom_initial[col].y,
            "bottom row col {} should drop below {}, got {}",
            col, bottom_initial[col].y, pos.y,
        );
    }
    assert_eq!(stats.steps, 300);
    assert_eq!(stats.relaxation_passes, 900);
    assert_eq!(stats.points_moved, 300 * 97);
}

#[test]
fn relaxation_keeps_stretch_bounded() {
    let mut cloth: Cloth<f32> = Cloth::new(&GridConfig::new(10)).unwrap();
    let config = SolverConfig::new();
    for _ in 0..300 {
        cloth.step(&config, &mut NoOpStepObserver);
    }
    // Fixed pass count leaves some residual stretch, but not much.
    assert!(cloth.max_strain() < 0.2, "max strain {}", cloth.max_strain());
}

#[test]
fn into_parts_matches_wrapper() {
    let cloth: Cloth<f32> = Cloth::new(&GridConfig::new(4)).unwrap();
    let positions = cloth.positions();
    let (points, links) = cloth.into_parts();
    assert_eq!(points.len(), 16);
    assert_eq!(links.len(), 24);
    assert_eq!(points.iter().map(|p| p.pos).collect::<Vec<_>>(), positions);
}
