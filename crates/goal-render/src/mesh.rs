//! GPU copies of scene geometries.
//!
//! Each mesh keeps two index buffers over the same vertices: triangles for
//! filled drawing and unique edges for wireframe drawing.

use fnv::FnvHashMap;
use goal_core::geometry::MeshData;
use goal_core::{GeometryId, Scene};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Interleave positions and normals into the vertex buffer layout.
pub fn interleave(mesh: &MeshData) -> Vec<Vertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .map(|(p, n)| Vertex {
            position: *p,
            normal: *n,
        })
        .collect()
}

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) triangle_buffer: wgpu::Buffer,
    pub(crate) triangle_count: u32,
    pub(crate) edge_buffer: wgpu::Buffer,
    pub(crate) edge_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, id: GeometryId, mesh: &MeshData) -> Self {
        let vertices = interleave(mesh);
        let edges = mesh.edge_indices();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("mesh{}_vertices", id.0)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let triangle_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("mesh{}_triangles", id.0)),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let edge_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("mesh{}_edges", id.0)),
            contents: bytemuck::cast_slice(&edges),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            triangle_buffer,
            triangle_count: mesh.indices.len() as u32,
            edge_buffer,
            edge_count: edges.len() as u32,
        }
    }

    /// Index buffer and index count for the requested drawing mode.
    pub(crate) fn indices(&self, wireframe: bool) -> (&wgpu::Buffer, u32) {
        if wireframe {
            (&self.edge_buffer, self.edge_count)
        } else {
            (&self.triangle_buffer, self.triangle_count)
        }
    }
}

/// Geometries are immutable once added to a scene, so each one is uploaded
/// on first sight and reused afterwards.
#[derive(Default)]
pub(crate) struct MeshCache {
    meshes: FnvHashMap<GeometryId, GpuMesh>,
}

impl MeshCache {
    pub(crate) fn sync(&mut self, device: &wgpu::Device, scene: &Scene) {
        for (i, mesh) in scene.geometries().iter().enumerate() {
            let id = GeometryId(i);
            if !self.meshes.contains_key(&id) {
                self.meshes.insert(id, GpuMesh::upload(device, id, mesh));
                log::debug!(
                    "[gpu] uploaded geometry {} ({} vertices, {} triangles)",
                    i,
                    mesh.vertex_count(),
                    mesh.triangle_count()
                );
            }
        }
    }

    pub(crate) fn get(&self, id: GeometryId) -> Option<&GpuMesh> {
        self.meshes.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_is_two_packed_vec3() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn interleave_pairs_positions_with_normals() {
        let mesh = goal_core::geometry::plane(2.0, 2.0);
        let vertices = interleave(&mesh);
        assert_eq!(vertices.len(), mesh.vertex_count());
        for (v, (p, n)) in vertices.iter().zip(mesh.positions.iter().zip(&mesh.normals)) {
            assert_eq!(v.position, *p);
            assert_eq!(v.normal, *n);
        }
    }
}
