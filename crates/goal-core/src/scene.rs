//! Retained scene graph: shared geometries and materials, flat list of nodes,
//! lights and a background color.
//!
//! Nodes carry a world transform that later operations multiply in place
//! (`M <- A * M`), the way a retained scene applies a world-space matrix.

use crate::geometry::MeshData;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Linear RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Decode a `0xRRGGBB` sRGB value into linear RGB.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// Phong-lit surface description shared between nodes.
#[derive(Clone, Debug)]
pub struct Material {
    pub color: Color,
    pub side: Side,
    pub wireframe: bool,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            side: Side::Front,
            wireframe: false,
        }
    }

    pub fn double_sided(mut self) -> Self {
        self.side = Side::Double;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: &'static str,
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub transform: Mat4,
    /// Skip this node when the whole scene is scaled down.
    pub exclude_from_shrink: bool,
}

impl Node {
    pub fn new(name: &'static str, geometry: GeometryId, material: MaterialId) -> Self {
        Self {
            name,
            geometry,
            material,
            transform: Mat4::IDENTITY,
            exclude_from_shrink: false,
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn excluded_from_shrink(mut self) -> Self {
        self.exclude_from_shrink = true;
        self
    }

    /// World-space origin of the node.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// Left-multiply a world-space matrix into the node transform.
    #[inline]
    pub fn apply_matrix(&mut self, m: Mat4) {
        self.transform = m * self.transform;
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Light {
    /// Inverse-square point light.
    Point {
        position: Vec3,
        color: Color,
        intensity: f32,
    },
    Ambient {
        color: Color,
        intensity: f32,
    },
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub background: Color,
    geometries: Vec<MeshData>,
    materials: Vec<Material>,
    nodes: Vec<Node>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            geometries: Vec::new(),
            materials: Vec::new(),
            nodes: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_geometry(&mut self, mesh: MeshData) -> GeometryId {
        self.geometries.push(mesh);
        GeometryId(self.geometries.len() - 1)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        debug_assert!(node.geometry.0 < self.geometries.len(), "unknown geometry");
        debug_assert!(node.material.0 < self.materials.len(), "unknown material");
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    #[inline]
    pub fn geometry(&self, id: GeometryId) -> &MeshData {
        &self.geometries[id.0]
    }

    #[inline]
    pub fn geometries(&self) -> &[MeshData] {
        &self.geometries
    }

    #[inline]
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Flip the wireframe flag on every material.
    pub fn toggle_wireframe(&mut self) {
        for m in &mut self.materials {
            m.wireframe = !m.wireframe;
        }
    }

    /// Scale every node not tagged `exclude_from_shrink` by `factor` about
    /// the world origin. Returns how many nodes were scaled.
    pub fn shrink(&mut self, factor: f32) -> usize {
        let s = Mat4::from_scale(Vec3::splat(factor));
        let mut scaled = 0;
        for node in self.nodes.iter_mut().filter(|n| !n.exclude_from_shrink) {
            node.apply_matrix(s);
            scaled += 1;
        }
        scaled
    }
}
