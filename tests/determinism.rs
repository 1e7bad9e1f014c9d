use drapery::{
    Cloth, ClothConfig, ClothParameters, CollisionObject, NoOpStepObserver, Orientation,
    SimulationConfig, Sphere, Vec3,
};

fn hanging(seed: u64) -> Cloth<f64> {
    let config = ClothConfig::new()
        .with_points(8, 8)
        .with_orientation(Orientation::Vertical)
        .with_pin(0, 7)
        .with_pin(7, 7)
        .with_seed(seed);
    Cloth::new(&config).unwrap()
}

fn run(cloth: &mut Cloth<f64>, frames: usize) {
    let sim = SimulationConfig::new().with_acceleration(Vec3::new(0.0, 0.0, 2.0));
    let params = ClothParameters::new();
    let scene = [CollisionObject::from(Sphere::new(Vec3::new(0.5, 0.3, 0.3), 0.2, 0.3))];
    for _ in 0..frames {
        cloth.advance_frame(&sim, &params, &scene, &mut NoOpStepObserver);
    }
}

#[test]
fn same_seed_same_trajectory() {
    let results: Vec<_> = (0..3)
        .map(|_| {
            let mut cloth = hanging(42);
            run(&mut cloth, 3);
            cloth.positions()
        })
        .collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn different_seeds_jitter_differently() {
    assert_ne!(hanging(1).positions(), hanging(2).positions());
}

#[test]
fn reset_restores_build_state_exactly() {
    let mut cloth = hanging(9);
    let start = cloth.positions();
    run(&mut cloth, 4);
    assert_ne!(cloth.positions(), start);

    cloth.reset();
    for (pm, original) in cloth.point_masses().iter().zip(start.iter()) {
        assert_eq!(pm.position, *original);
        assert_eq!(pm.last_position, *original);
    }

    // A reset cloth replays the same trajectory.
    run(&mut cloth, 2);
    let replay = cloth.positions();
    let mut fresh = hanging(9);
    run(&mut fresh, 2);
    assert_eq!(replay, fresh.positions());
}
