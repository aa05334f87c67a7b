//! Orbit controller: keeps the camera on a sphere around a target point.
//!
//! Pointer input only accumulates deltas; `update` applies them to the
//! camera. `update` also re-reads the camera eye, so it must run after any
//! manual change to the camera transform.

use crate::camera::Camera;
use crate::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_STEP,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y.
    phi: f32,
    /// Azimuth around +Y, measured from +Z towards +X.
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius < EPS {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    enabled: bool,
    pub target: Vec3,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Orbit around `camera.target`.
    pub fn new(camera: &Camera) -> Self {
        Self {
            target: camera.target,
            ..Self::default()
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any input accumulated since the last update.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.reset_deltas();
        }
        self.enabled = enabled;
    }

    /// Pointer drag in pixels; a drag across the full viewport height turns
    /// the camera once around the target.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.enabled {
            return;
        }
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    /// Wheel input: positive `delta_y` moves away from the target.
    pub fn wheel(&mut self, delta_y: f32) {
        if !self.enabled || delta_y == 0.0 {
            return;
        }
        if delta_y > 0.0 {
            self.scale /= self.zoom_step;
        } else {
            self.scale *= self.zoom_step;
        }
    }

    /// Apply pending input to `camera`. Returns whether the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let mut spherical = Spherical::from_offset(camera.eye - self.target);
        spherical.theta += self.delta_theta;
        spherical.phi = (spherical.phi + self.delta_phi)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);
        self.reset_deltas();

        let eye = self.target + spherical.to_offset();
        let changed = eye.distance_squared(camera.eye) > EPS;
        camera.eye = eye;
        camera.target = self.target;
        changed
    }

    fn reset_deltas(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(16.0 / 9.0)
    }

    #[test]
    fn update_without_input_keeps_camera() {
        let mut cam = camera();
        let before = cam.eye;
        let mut controls = OrbitControls::new(&cam);
        assert!(!controls.update(&mut cam));
        assert!(cam.eye.distance(before) < 1e-5);
    }

    #[test]
    fn rotation_preserves_distance_to_target() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        let d0 = cam.eye.distance(controls.target);
        controls.rotate_by_pixels(120.0, -40.0, 720.0);
        assert!(controls.update(&mut cam));
        assert!((cam.eye.distance(controls.target) - d0).abs() < 1e-4);
    }

    #[test]
    fn quarter_height_drag_turns_quarter_circle() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        // dragging right by h/4 rotates the eye from +Z to -X
        controls.rotate_by_pixels(180.0, 0.0, 720.0);
        controls.update(&mut cam);
        assert!((cam.eye.x + 5.0).abs() < 1e-4, "eye = {:?}", cam.eye);
        assert!(cam.eye.z.abs() < 1e-4);
    }

    #[test]
    fn disabled_controller_ignores_input() {
        let mut cam = camera();
        let before = cam.eye;
        let mut controls = OrbitControls::new(&cam);
        controls.set_enabled(false);
        controls.rotate_by_pixels(300.0, 300.0, 720.0);
        controls.wheel(-1.0);
        assert!(!controls.update(&mut cam));
        assert!(cam.eye.distance(before) < 1e-5);
    }

    #[test]
    fn disabling_drops_pending_input() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.rotate_by_pixels(300.0, 0.0, 720.0);
        controls.set_enabled(false);
        controls.set_enabled(true);
        assert!(!controls.update(&mut cam));
    }

    #[test]
    fn wheel_dollies_and_clamps() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.wheel(-100.0);
        controls.update(&mut cam);
        assert!((cam.eye.length() - 5.0 * ORBIT_ZOOM_STEP).abs() < 1e-4);

        for _ in 0..200 {
            controls.wheel(-1.0);
        }
        controls.update(&mut cam);
        assert!((cam.eye.length() - ORBIT_MIN_DISTANCE).abs() < 1e-4);
    }

    #[test]
    fn polar_angle_never_reaches_the_pole() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.rotate_by_pixels(0.0, 10_000.0, 720.0);
        controls.update(&mut cam);
        assert!(cam.eye.is_finite());
        assert!(cam.eye.y > 4.99 && cam.eye.y <= 5.0);

        // still able to come back down from the clamped angle
        controls.rotate_by_pixels(0.0, -180.0, 720.0);
        assert!(controls.update(&mut cam));
        assert!(cam.eye.y < 4.0);
    }
}
