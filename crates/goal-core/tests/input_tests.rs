// Host-side tests for keyboard dispatch and the interaction state it drives.

use glam::Mat4;
use goal_core::input::{apply, command_for_key, handle_key, KeyCommand};
use goal_core::{build_goal_scene, GoalLayout, GoalScene, InteractionState};

fn make_goal() -> GoalScene {
    build_goal_scene(&GoalLayout::default())
}

fn mats_close(a: Mat4, b: Mat4, eps: f32) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() <= eps)
}

#[test]
fn command_for_key_valid_keys() {
    assert_eq!(command_for_key("o"), Some(KeyCommand::ToggleOrbit));
    assert_eq!(command_for_key("O"), Some(KeyCommand::ToggleOrbit));
    assert_eq!(command_for_key("w"), Some(KeyCommand::ToggleWireframe));
    assert_eq!(command_for_key("W"), Some(KeyCommand::ToggleWireframe));
    assert_eq!(command_for_key("1"), Some(KeyCommand::ToggleAnimation1));
    assert_eq!(command_for_key("2"), Some(KeyCommand::ToggleAnimation2));
    assert_eq!(command_for_key("+"), Some(KeyCommand::SpeedUp));
    assert_eq!(command_for_key("-"), Some(KeyCommand::SlowDown));
    assert_eq!(command_for_key("3"), Some(KeyCommand::Shrink));
}

#[test]
fn command_for_key_invalid_keys() {
    for key in ["", "4", "0", "=", "_", "a", "x", "ArrowUp", "Enter", " ", "oo"] {
        assert_eq!(command_for_key(key), None, "key {key:?} should be ignored");
    }
}

#[test]
fn unknown_key_leaves_everything_untouched() {
    let mut goal = make_goal();
    let mut state = InteractionState::default();
    let before: Vec<Mat4> = goal.scene.nodes().iter().map(|n| n.transform).collect();

    assert_eq!(handle_key("q", &mut state, &mut goal.scene), None);

    assert_eq!(state, InteractionState::default());
    for (node, m) in goal.scene.nodes().iter().zip(before) {
        assert_eq!(node.transform, m);
    }
}

#[test]
fn orbit_flag_follows_press_parity() {
    for presses in 0..7 {
        let mut goal = make_goal();
        let mut state = InteractionState::default();
        let initial = state.orbit_enabled;
        for _ in 0..presses {
            handle_key("o", &mut state, &mut goal.scene);
        }
        assert_eq!(state.orbit_enabled, initial ^ (presses % 2 == 1), "presses = {presses}");
    }
}

#[test]
fn speed_factor_is_additive_and_unbounded() {
    let sequences: [&[&str]; 4] = [
        &["+", "+", "+"],
        &["-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-"],
        &["+", "-", "+", "+", "-", "+"],
        &[],
    ];
    for seq in sequences {
        let mut goal = make_goal();
        let mut state = InteractionState::default();
        for key in seq {
            handle_key(key, &mut state, &mut goal.scene);
        }
        let plus = seq.iter().filter(|k| **k == "+").count() as f64;
        let minus = seq.iter().filter(|k| **k == "-").count() as f64;
        let expected = 1.0 + 0.1 * (plus - minus);
        assert!(
            (state.speed_factor - expected).abs() <= 1e-9,
            "seq {seq:?}: got {} expected {expected}",
            state.speed_factor
        );
    }
}

#[test]
fn shrink_scales_everything_but_the_ball() {
    for presses in [1u32, 2, 5] {
        let mut goal = make_goal();
        let mut state = InteractionState::default();
        let before: Vec<Mat4> = goal.scene.nodes().iter().map(|n| n.transform).collect();

        for _ in 0..presses {
            apply(KeyCommand::Shrink, &mut state, &mut goal.scene);
        }

        let factor = 0.95_f32.powi(presses as i32);
        let scale = Mat4::from_scale(glam::Vec3::splat(factor));
        for (i, (node, m0)) in goal.scene.nodes().iter().zip(&before).enumerate() {
            if i == goal.ball.0 {
                assert_eq!(node.transform, *m0, "ball must not shrink");
            } else {
                assert!(
                    mats_close(node.transform, scale * *m0, 1e-4),
                    "node {} not scaled by {factor}",
                    node.name
                );
            }
        }
        assert_eq!(state.shrink_presses, presses);
    }
}

#[test]
fn wireframe_toggles_all_tracked_materials() {
    let mut goal = make_goal();
    let mut state = InteractionState::default();
    let mats = goal.materials;
    let original: Vec<bool> = [mats.frame, mats.ball, mats.net]
        .iter()
        .map(|id| goal.scene.material(*id).wireframe)
        .collect();

    handle_key("w", &mut state, &mut goal.scene);
    for (id, was) in [mats.frame, mats.ball, mats.net].iter().zip(&original) {
        assert_eq!(goal.scene.material(*id).wireframe, !was);
    }
    assert!(state.wireframe);

    handle_key("w", &mut state, &mut goal.scene);
    for (id, was) in [mats.frame, mats.ball, mats.net].iter().zip(&original) {
        assert_eq!(goal.scene.material(*id).wireframe, *was);
    }
    assert!(!state.wireframe);
}

#[test]
fn animation_keys_are_independent_toggles() {
    let mut goal = make_goal();
    let mut state = InteractionState::default();

    handle_key("1", &mut state, &mut goal.scene);
    assert!(state.animation_1 && !state.animation_2);
    handle_key("2", &mut state, &mut goal.scene);
    assert!(state.animation_1 && state.animation_2);
    handle_key("1", &mut state, &mut goal.scene);
    assert!(!state.animation_1 && state.animation_2);
    handle_key("2", &mut state, &mut goal.scene);
    assert!(!state.animating());
}

#[test]
fn status_line_reflects_state() {
    let mut goal = make_goal();
    let mut state = InteractionState::default();
    assert_eq!(
        state.status_line(),
        "Orbit: on • Wireframe: off • Anim 1: off • Anim 2: off • Speed: 1.0 • Shrinks: 0"
    );
    for key in ["o", "w", "2", "+", "3"] {
        handle_key(key, &mut state, &mut goal.scene);
    }
    assert_eq!(
        state.status_line(),
        "Orbit: off • Wireframe: on • Anim 1: off • Anim 2: on • Speed: 1.1 • Shrinks: 1"
    );
}
