//! Uniform blocks shared with `scene.wgsl`. Field order and padding mirror the
//! WGSL structs exactly.

use glam::Mat4;
use goal_core::{Camera, Light, Material, Node, Scene};

pub const MAX_POINT_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightPacked {
    pub position: [f32; 4],
    /// rgb = color, a = intensity
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye, w = number of point lights in use
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    pub lights: [PointLightPacked; MAX_POINT_LIGHTS],
}

impl FrameUniforms {
    pub fn new(scene: &Scene, camera: &Camera) -> Self {
        let mut lights = [PointLightPacked::default(); MAX_POINT_LIGHTS];
        let mut ambient = [0.0_f32; 3];
        let mut count = 0usize;
        for light in scene.lights() {
            match *light {
                Light::Point {
                    position,
                    color,
                    intensity,
                } => {
                    if count == MAX_POINT_LIGHTS {
                        log::warn!("[gpu] more than {} point lights; extra ignored", MAX_POINT_LIGHTS);
                        continue;
                    }
                    let [r, g, b] = color.to_array();
                    lights[count] = PointLightPacked {
                        position: position.extend(1.0).to_array(),
                        color: [r, g, b, intensity],
                    };
                    count += 1;
                }
                Light::Ambient { color, intensity } => {
                    for (acc, c) in ambient.iter_mut().zip(color.to_array()) {
                        *acc += c * intensity;
                    }
                }
            }
        }
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(count as f32).to_array(),
            ambient: [ambient[0], ambient[1], ambient[2], 1.0],
            lights,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NodeUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl NodeUniforms {
    pub fn new(node: &Node, material: &Material) -> Self {
        let [r, g, b] = material.color.to_array();
        Self {
            model: node.transform.to_cols_array_2d(),
            normal_matrix: normal_matrix(node.transform).to_cols_array_2d(),
            color: [r, g, b, 1.0],
        }
    }
}

/// Inverse-transpose of the model matrix; falls back to the model itself when
/// it is singular.
fn normal_matrix(model: Mat4) -> Mat4 {
    if model.determinant().abs() <= f32::EPSILON {
        return model;
    }
    model.inverse().transpose()
}
