//! Per-frame update: ball animations and orbit controller sync.
//!
//! The two animation flags are independent, so idle / animation 1 /
//! animation 2 / both are just their combinations. Rendering is left to the
//! caller after `tick` returns.

use crate::camera::Camera;
use crate::constants::{ANIM1_FORWARD_STEP, ANIM1_SPIN_STEP, ANIM2_LIFT_STEP, ANIM2_SPIN_STEP};
use crate::orbit::OrbitControls;
use crate::scene::{NodeId, Scene};
use crate::state::InteractionState;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub ball_moved: bool,
    pub camera_moved: bool,
}

/// Advance the enabled ball animations by one tick.
///
/// Translations are world-space; spins turn the ball about its own axes so
/// they never move its center. Returns whether the ball's transform changed,
/// which is false with no animation enabled or a speed factor of zero.
pub fn animate_ball(state: &InteractionState, scene: &mut Scene, ball: NodeId) -> bool {
    if !state.animating() {
        return false;
    }
    let s = state.speed_factor as f32;
    let node = scene.node_mut(ball);
    let before = node.transform;
    if state.animation_1 {
        node.apply_matrix(Mat4::from_translation(Vec3::new(0.0, 0.0, -ANIM1_FORWARD_STEP * s)));
        node.transform *= Mat4::from_rotation_y(ANIM1_SPIN_STEP * s);
    }
    if state.animation_2 {
        node.apply_matrix(Mat4::from_translation(Vec3::new(0.0, ANIM2_LIFT_STEP * s, 0.0)));
        node.transform *= Mat4::from_rotation_x(ANIM2_SPIN_STEP * s);
    }
    node.transform != before
}

/// One frame: animate the ball, push the orbit flag into the controller and
/// re-sync the camera.
pub fn tick(
    state: &InteractionState,
    scene: &mut Scene,
    ball: NodeId,
    controls: &mut OrbitControls,
    camera: &mut Camera,
) -> FrameReport {
    let ball_moved = animate_ball(state, scene, ball);
    controls.set_enabled(state.orbit_enabled);
    let camera_moved = controls.update(camera);
    FrameReport {
        ball_moved,
        camera_moved,
    }
}
