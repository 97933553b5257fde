use tether::{RopeConfig, RopeController, Vec2};

fn scripted_run() -> (Vec<f32>, Vec2<f32>) {
    let config = RopeConfig::new().with_gravity(Vec2::new(0.0, 0.2));
    let mut rope = RopeController::new(config).unwrap();
    rope.set_iterations(24);
    for frame in 0..240u32 {
        let t = frame as f32 / 240.0;
        rope.set_anchor(0.3 + 0.5 * t, 0.2 + 0.1 * (frame % 7) as f32 / 7.0);
        match frame {
            10 | 150 => rope.attach(),
            90 => rope.detach(),
            120 => {
                rope.dash();
            }
            _ => {}
        }
        rope.step(16.0 + (frame % 3) as f32);
    }
    (rope.positions_flat(), rope.body_position())
}

#[test]
fn rope_trajectory_is_deterministic() {
    let first = scripted_run();
    for _ in 0..4 {
        let again = scripted_run();
        assert_eq!(first.0, again.0);
        assert_eq!(first.1, again.1);
    }
    assert!(!first.0.is_empty());
}

#[test]
fn f64_matches_f32_roughly() {
    let mut a: RopeController<f32> = RopeController::default();
    let mut b: RopeController<f64> = RopeController::default();
    a.set_anchor(0.7, 0.3);
    b.set_anchor(0.7, 0.3);
    a.attach();
    b.attach();
    assert_eq!(a.node_count(), b.node_count());
    for _ in 0..30 {
        a.step(16.0);
        b.step(16.0);
    }
    let (pa, pb) = (a.positions_flat(), b.positions_flat());
    for (x, y) in pa.iter().zip(pb.iter()) {
        assert!((*x as f64 - *y).abs() < 1e-3);
    }
}
