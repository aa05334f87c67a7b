// Host-side tests for the per-frame tick: ball animations and orbit sync.

use glam::{Quat, Vec3};
use goal_core::frame::animate_ball;
use goal_core::{GoalDemo, GoalLayout};

const EPS: f32 = 1e-4;

fn demo() -> GoalDemo {
    GoalDemo::new(&GoalLayout::default(), 800, 600)
}

fn ball_position(demo: &GoalDemo) -> Vec3 {
    demo.goal.scene.node(demo.goal.ball).position()
}

fn ball_rotation(demo: &GoalDemo) -> Quat {
    let (_, rotation, _) = demo
        .goal
        .scene
        .node(demo.goal.ball)
        .transform
        .to_scale_rotation_translation();
    rotation
}

fn same_rotation(a: Quat, b: Quat) -> bool {
    // q and -q are the same rotation
    a.abs_diff_eq(b, 1e-5) || a.abs_diff_eq(-b, 1e-5)
}

#[test]
fn idle_frame_changes_nothing() {
    let mut demo = demo();
    let ball = ball_position(&demo);
    let eye = demo.camera.eye;

    let report = demo.tick();

    assert!(!report.ball_moved);
    assert!(!report.camera_moved);
    assert_eq!(ball_position(&demo), ball);
    assert!(demo.camera.eye.distance(eye) < 1e-5);
}

#[test]
fn ball_starts_in_front_of_the_goal() {
    let demo = demo();
    let p = ball_position(&demo);
    assert!((p - Vec3::new(0.0, 5.0, 5.0)).length() < EPS);
}

#[test]
fn animation_1_moves_ball_toward_the_goal() {
    for (speed_keys, speed) in [(&[][..], 1.0_f32), (&["+", "+"][..], 1.2), (&["-", "-", "-"][..], 0.7)] {
        let mut demo = demo();
        for key in speed_keys {
            demo.handle_key(key);
        }
        demo.handle_key("1");
        let before = ball_position(&demo);

        let report = demo.tick();
        assert!(report.ball_moved);

        let after = ball_position(&demo);
        assert!((after.z - (before.z - 0.05 * speed)).abs() < EPS, "speed {speed}");
        assert!((after.x - before.x).abs() < EPS);
        assert!((after.y - before.y).abs() < EPS);
    }
}

#[test]
fn animation_2_lifts_the_ball() {
    let mut demo = demo();
    demo.handle_key("2");
    let before = ball_position(&demo);

    for _ in 0..10 {
        demo.tick();
    }

    let after = ball_position(&demo);
    assert!((after.y - (before.y + 0.1)).abs() < EPS);
    assert!((after.z - before.z).abs() < EPS);
}

#[test]
fn both_animations_compose() {
    let mut demo = demo();
    demo.handle_key("1");
    demo.handle_key("2");
    let before = ball_position(&demo);

    demo.tick();

    let after = ball_position(&demo);
    assert!((after.z - (before.z - 0.05)).abs() < EPS);
    assert!((after.y - (before.y + 0.01)).abs() < EPS);
}

#[test]
fn negative_speed_runs_animations_backwards() {
    let mut demo = demo();
    for _ in 0..15 {
        demo.handle_key("-");
    }
    demo.handle_key("1");
    let before = ball_position(&demo);

    demo.tick();

    // speed is now -0.5, so the ball moves away from the goal
    let after = ball_position(&demo);
    assert!((after.z - (before.z + 0.025)).abs() < EPS);
}

#[test]
fn animations_leave_other_nodes_alone() {
    let mut demo = demo();
    let before: Vec<_> = demo.goal.scene.nodes().iter().map(|n| n.transform).collect();
    demo.state.animation_1 = true;
    demo.state.animation_2 = true;

    let ball = demo.goal.ball;
    assert!(animate_ball(&demo.state, &mut demo.goal.scene, ball));

    for (i, (node, m)) in demo.goal.scene.nodes().iter().zip(before).enumerate() {
        if i != ball.0 {
            assert_eq!(node.transform, m, "{} moved", node.name);
        }
    }
}

#[test]
fn orbit_flag_reaches_the_controller_each_frame() {
    let mut demo = demo();
    assert!(demo.controls.enabled());

    demo.handle_key("o");
    demo.tick();
    assert!(!demo.controls.enabled());

    demo.controls.rotate_by_pixels(150.0, 0.0, 600.0);
    let eye = demo.camera.eye;
    assert!(!demo.tick().camera_moved);
    assert!(demo.camera.eye.distance(eye) < 1e-5);

    demo.handle_key("o");
    demo.tick();
    assert!(demo.controls.enabled());
    demo.controls.rotate_by_pixels(150.0, 0.0, 600.0);
    assert!(demo.tick().camera_moved);
    // orbiting keeps the distance to the target
    assert!((demo.camera.eye.length() - 5.0).abs() < 1e-3);
}

#[test]
fn shrink_does_not_touch_the_camera() {
    let mut demo = demo();
    let eye = demo.camera.eye;
    demo.handle_key("3");
    let report = demo.tick();
    assert!(!report.camera_moved);
    assert!(demo.camera.eye.distance(eye) < 1e-5);
}

#[test]
fn animation_1_spins_the_ball_about_its_vertical_axis() {
    for (speed_keys, speed) in [(&[][..], 1.0_f32), (&["+", "+", "+"][..], 1.3), (&["-", "-"][..], 0.8)] {
        let mut demo = demo();
        for key in speed_keys {
            demo.handle_key(key);
        }
        demo.handle_key("1");
        assert!(same_rotation(ball_rotation(&demo), Quat::IDENTITY));

        demo.tick();

        let expected = Quat::from_rotation_y(0.01 * speed);
        assert!(same_rotation(ball_rotation(&demo), expected), "speed {speed}");
    }
}

#[test]
fn animation_2_spins_the_ball_backwards_about_x() {
    for (speed_keys, speed) in [(&[][..], 1.0_f32), (&["+", "+", "+", "+", "+"][..], 1.5)] {
        let mut demo = demo();
        for key in speed_keys {
            demo.handle_key(key);
        }
        demo.handle_key("2");

        demo.tick();

        let expected = Quat::from_rotation_x(-0.01 * speed);
        assert!(same_rotation(ball_rotation(&demo), expected), "speed {speed}");
    }
}

#[test]
fn spin_accumulates_about_the_ball_center() {
    let mut demo = demo();
    demo.handle_key("1");
    let start = ball_position(&demo);

    demo.tick();
    demo.tick();

    assert!(same_rotation(ball_rotation(&demo), Quat::from_rotation_y(0.02)));
    let p = ball_position(&demo);
    assert!((p - (start + Vec3::new(0.0, 0.0, -0.1))).length() < EPS);
}

#[test]
fn spinning_ball_still_travels_along_world_axes() {
    let mut demo = demo();
    demo.handle_key("1");
    demo.handle_key("2");
    let start = ball_position(&demo);

    demo.tick();
    demo.tick();

    // the spins would skew these steps if they turned the ball's translation
    let p = ball_position(&demo);
    assert!((p - (start + Vec3::new(0.0, 0.02, -0.1))).length() < EPS);
}

#[test]
fn zero_speed_leaves_the_ball_still() {
    let mut demo = demo();
    demo.handle_key("1");
    demo.handle_key("2");
    demo.state.speed_factor = 0.0;
    let before = demo.goal.scene.node(demo.goal.ball).transform;

    let report = demo.tick();

    assert!(!report.ball_moved);
    assert_eq!(demo.goal.scene.node(demo.goal.ball).transform, before);
}
