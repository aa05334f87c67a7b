//! Procedural mesh builders for the goal scene.
//!
//! Layouts follow the usual retained-mode conventions so that transforms
//! written for the scene read naturally:
//! - cylinders run along +Y and are centered on the origin,
//! - the torus lies in the XY plane around +Z,
//! - the plane lies in XY facing +Z,
//! - spheres are centered on the origin.
//!
//! Triangles are counter-clockwise when seen from their front side.

use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Indexed triangle mesh with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        index
    }

    fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        // a-b-d and b-c-d
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    /// Unique undirected edges of all triangles, as a line-list index buffer.
    ///
    /// Edges shared by two triangles are emitted once, in first-seen order.
    pub fn edge_indices(&self) -> Vec<u32> {
        let mut seen = FnvHashSet::default();
        let mut lines = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    lines.push(a);
                    lines.push(b);
                }
            }
        }
        lines
    }
}

/// Capped cylinder (or truncated cone) along +Y, centered on the origin.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> MeshData {
    debug_assert!(radial_segments >= 3, "cylinder needs at least 3 segments");
    debug_assert!(height > 0.0, "cylinder height must be positive");

    let mut mesh = MeshData::default();
    let half_height = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    // Side wall: two rings (top, bottom), seam vertex duplicated.
    let mut rows: [Vec<u32>; 2] = [Vec::new(), Vec::new()];
    for (row, v) in [0.0_f32, 1.0].into_iter().enumerate() {
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(radius * sin, -v * height + half_height, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            rows[row].push(mesh.push_vertex(position, normal));
        }
    }
    for x in 0..radial_segments as usize {
        let a = rows[0][x];
        let b = rows[1][x];
        let c = rows[1][x + 1];
        let d = rows[0][x + 1];
        mesh.push_quad(a, b, c, d);
    }

    push_cap(&mut mesh, radius_top, half_height, radial_segments, true);
    push_cap(&mut mesh, radius_bottom, half_height, radial_segments, false);
    mesh
}

fn push_cap(mesh: &mut MeshData, radius: f32, half_height: f32, segments: u32, top: bool) {
    if radius <= 0.0 {
        return;
    }
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);

    // One center vertex per segment keeps the fan symmetric.
    let center_start = mesh.positions.len() as u32;
    for _ in 0..segments {
        mesh.push_vertex(Vec3::new(0.0, half_height * sign, 0.0), normal);
    }
    let rim_start = mesh.positions.len() as u32;
    for x in 0..=segments {
        let theta = x as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push_vertex(
            Vec3::new(radius * sin, half_height * sign, radius * cos),
            normal,
        );
    }
    for x in 0..segments {
        let c = center_start + x;
        let i = rim_start + x;
        if top {
            mesh.indices.extend_from_slice(&[i, i + 1, c]);
        } else {
            mesh.indices.extend_from_slice(&[i + 1, i, c]);
        }
    }
}

/// Full torus in the XY plane around +Z.
///
/// `radius` is the distance from the center to the middle of the tube,
/// `tube` the tube radius.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    debug_assert!(radial_segments >= 3 && tubular_segments >= 3);

    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        let (sin_v, cos_v) = v.sin_cos();
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let (sin_u, cos_u) = u.sin_cos();
            let position = Vec3::new(
                (radius + tube * cos_v) * cos_u,
                (radius + tube * cos_v) * sin_u,
                tube * sin_v,
            );
            let center = Vec3::new(radius * cos_u, radius * sin_u, 0.0);
            mesh.push_vertex(position, (position - center).normalize());
        }
    }

    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.push_quad(a, b, c, d);
        }
    }
    mesh
}

/// Single-quad plane in XY, facing +Z, centered on the origin.
pub fn plane(width: f32, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let normal = Vec3::Z;
    for iy in 0..=1 {
        let y = iy as f32 * height - height / 2.0;
        for ix in 0..=1 {
            let x = ix as f32 * width - width / 2.0;
            mesh.push_vertex(Vec3::new(x, -y, 0.0), normal);
        }
    }
    // grid is 2 vertices wide
    let (a, b, c, d) = (0, 2, 3, 1);
    mesh.push_quad(a, b, c, d);
    mesh
}

/// UV sphere centered on the origin. Pole rows emit a single triangle per
/// segment.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    debug_assert!(width_segments >= 3 && height_segments >= 2);

    let mut mesh = MeshData::default();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height_segments as usize + 1);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let (sin_t, cos_t) = (v * PI).sin_cos();
        let mut row = Vec::with_capacity(width_segments as usize + 1);
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let (sin_p, cos_p) = (u * TAU).sin_cos();
            let position = Vec3::new(-radius * cos_p * sin_t, radius * cos_t, radius * sin_p * sin_t);
            let normal = position.try_normalize().unwrap_or(Vec3::Y);
            row.push(mesh.push_vertex(position, normal));
        }
        grid.push(row);
    }

    for iy in 0..height_segments as usize {
        for ix in 0..width_segments as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments as usize - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// One flat triangle with its face normal on every vertex.
pub fn triangle(vertices: [Vec3; 3]) -> MeshData {
    let [a, b, c] = vertices;
    let normal = (c - b).cross(a - b).try_normalize().unwrap_or(Vec3::Z);
    let mut mesh = MeshData::default();
    for p in vertices {
        mesh.push_vertex(p, normal);
    }
    mesh.indices.extend_from_slice(&[0, 1, 2]);
    mesh
}
