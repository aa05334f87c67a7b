// Host-side tests for the procedural mesh builders.

use glam::Vec3;
use goal_core::geometry::{self, MeshData};

fn assert_well_formed(mesh: &MeshData) {
    assert_eq!(mesh.positions.len(), mesh.normals.len());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n), "index out of range");
    for normal in &mesh.normals {
        let len = Vec3::from_array(*normal).length();
        assert!((len - 1.0).abs() < 1e-4, "normal not unit length: {len}");
    }
}

#[test]
fn cylinder_counts_and_extent() {
    let mesh = geometry::cylinder(0.5, 0.5, 10.0, 32);
    assert_well_formed(&mesh);
    // side grid plus two caps (one center per segment and a rim each)
    assert_eq!(mesh.vertex_count(), 2 * 33 + 2 * (32 + 33));
    assert_eq!(mesh.triangle_count(), 32 * 2 + 32 * 2);

    let ys: Vec<f32> = mesh.positions.iter().map(|p| p[1]).collect();
    let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert!((min + 5.0).abs() < 1e-5 && (max - 5.0).abs() < 1e-5);
    for p in &mesh.positions {
        assert!(p[0].hypot(p[2]) <= 0.5 + 1e-5);
    }
}

#[test]
fn torus_lies_around_z() {
    let mesh = geometry::torus(0.5, 0.25, 16, 100);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertex_count(), 17 * 101);
    assert_eq!(mesh.triangle_count(), 16 * 100 * 2);
    for p in &mesh.positions {
        assert!(p[2].abs() <= 0.25 + 1e-5);
        let ring = p[0].hypot(p[1]);
        assert!(ring >= 0.25 - 1e-5 && ring <= 0.75 + 1e-5);
    }
}

#[test]
fn plane_faces_positive_z() {
    let mesh = geometry::plane(30.0, 13.5);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.positions[i as usize]));
        assert!((b - a).cross(c - a).z > 0.0, "plane triangle wound clockwise");
    }
}

#[test]
fn sphere_pole_rows_are_single_triangles() {
    let mesh = geometry::sphere(0.625, 32, 32);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertex_count(), 33 * 33);
    assert_eq!(mesh.triangle_count(), 32 * (2 * 32 - 2));
    for p in &mesh.positions {
        assert!((Vec3::from_array(*p).length() - 0.625).abs() < 1e-4);
    }
}

#[test]
fn triangle_normal_follows_winding() {
    let mesh = geometry::triangle([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]);
    assert_well_formed(&mesh);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    for n in &mesh.normals {
        assert_eq!(*n, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn edge_indices_are_unique_lines() {
    let mesh = geometry::plane(2.0, 2.0);
    let edges = mesh.edge_indices();
    // four outline edges plus the shared diagonal
    assert_eq!(edges.len(), 5 * 2);

    let mut pairs: Vec<(u32, u32)> = edges
        .chunks_exact(2)
        .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
        .collect();
    pairs.sort_unstable();
    pairs.dedup();
    assert_eq!(pairs.len(), 5);
}
