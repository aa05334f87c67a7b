//! Builds the goal scene: frame, rings, nets, ball and lights.

use crate::constants::*;
use crate::geometry;
use crate::scene::{Color, Light, Material, MaterialId, Node, NodeId, Scene};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Dimensions the goal is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalLayout {
    pub width: f32,
    pub height: f32,
    pub back_support_angle_deg: f32,
    pub post_radius: f32,
}

impl Default for GoalLayout {
    fn default() -> Self {
        Self {
            width: GOAL_WIDTH,
            height: GOAL_HEIGHT,
            back_support_angle_deg: BACK_SUPPORT_ANGLE_DEG,
            post_radius: POST_RADIUS,
        }
    }
}

impl GoalLayout {
    #[inline]
    pub fn back_support_angle(&self) -> f32 {
        self.back_support_angle_deg.to_radians()
    }

    /// How far the back rings sit behind the goal line.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.height / self.back_support_angle().tan()
    }
}

/// Materials shared by the goal nodes; all three follow the wireframe toggle.
#[derive(Clone, Copy, Debug)]
pub struct GoalMaterials {
    pub frame: MaterialId,
    pub ball: MaterialId,
    pub net: MaterialId,
}

#[derive(Clone, Debug)]
pub struct GoalScene {
    pub scene: Scene,
    pub ball: NodeId,
    pub materials: GoalMaterials,
}

pub fn build_goal_scene(layout: &GoalLayout) -> GoalScene {
    debug_assert!(layout.width > 0.0 && layout.height > 0.0 && layout.post_radius > 0.0);
    debug_assert!(
        layout.back_support_angle_deg > 0.0 && layout.back_support_angle_deg < 90.0,
        "back supports must lean backwards"
    );

    let w = layout.width;
    let h = layout.height;
    let r = layout.post_radius;
    let d = layout.depth();
    let angle = layout.back_support_angle();

    let mut scene = Scene::new(Color::from_hex(BACKGROUND_COLOR));
    add_lights(&mut scene, d);

    let materials = GoalMaterials {
        frame: scene.add_material(Material::new(Color::from_hex(FRAME_COLOR))),
        ball: scene.add_material(Material::new(Color::from_hex(BALL_COLOR))),
        net: scene.add_material(Material::new(Color::from_hex(NET_COLOR)).double_sided()),
    };

    // Posts
    let post = scene.add_geometry(geometry::cylinder(r, r, h, CYLINDER_SEGMENTS));
    for (name, x) in [("post_left", -w / 2.0), ("post_right", w / 2.0)] {
        scene.add_node(
            Node::new(name, post, materials.frame)
                .with_transform(Mat4::from_translation(Vec3::new(x, h / 2.0, 0.0))),
        );
    }

    // Back supports, leaning back from mid-depth
    let support = scene.add_geometry(geometry::cylinder(
        r,
        r,
        h + SUPPORT_EXTRA_LENGTH,
        CYLINDER_SEGMENTS,
    ));
    for (name, x) in [("support_left", -w / 2.0), ("support_right", w / 2.0)] {
        let m = Mat4::from_translation(Vec3::new(x, h / 2.0, -d / 2.0)) * Mat4::from_rotation_x(angle);
        scene.add_node(Node::new(name, support, materials.frame).with_transform(m));
    }

    // Crossbar, laid along X
    let crossbar = scene.add_geometry(geometry::cylinder(
        r,
        r,
        w + CROSSBAR_EXTRA_LENGTH,
        CYLINDER_SEGMENTS,
    ));
    scene.add_node(
        Node::new("crossbar", crossbar, materials.frame).with_transform(
            Mat4::from_translation(Vec3::new(0.0, h, 0.0)) * Mat4::from_rotation_z(FRAC_PI_2),
        ),
    );

    // Rings at the feet of the posts and of the back supports, lying flat
    let ring = scene.add_geometry(geometry::torus(
        r,
        r / 2.0,
        RING_RADIAL_SEGMENTS,
        RING_TUBULAR_SEGMENTS,
    ));
    let ring_positions = [
        ("ring_front_left", Vec3::new(-w / 2.0, 0.0, 0.0)),
        ("ring_front_right", Vec3::new(w / 2.0, 0.0, 0.0)),
        ("ring_back_left", Vec3::new(-w / 2.0, 0.0, -d)),
        ("ring_back_right", Vec3::new(w / 2.0, 0.0, -d)),
    ];
    for (name, p) in ring_positions {
        let m = Mat4::from_translation(p) * Mat4::from_rotation_x(FRAC_PI_2);
        scene.add_node(Node::new(name, ring, materials.frame).with_transform(m));
    }

    // Back net, tilted like the supports
    let back_net = scene.add_geometry(geometry::plane(w, h + BACK_NET_EXTRA_HEIGHT));
    scene.add_node(
        Node::new("net_back", back_net, materials.net).with_transform(
            Mat4::from_translation(Vec3::new(0.0, h - BACK_NET_INSET, -d + BACK_NET_INSET))
                * Mat4::from_rotation_x(angle),
        ),
    );

    // Side nets: right triangles between post, ground and back ring
    for (name, x) in [("net_side_left", -w / 2.0), ("net_side_right", w / 2.0)] {
        let mesh = geometry::triangle([
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x, h, 0.0),
            Vec3::new(x, 0.0, -d),
        ]);
        let side = scene.add_geometry(mesh);
        scene.add_node(Node::new(name, side, materials.net));
    }

    // Ball, in front of the goal mouth
    let ball_mesh = scene.add_geometry(geometry::sphere(
        h / BALL_RADIUS_DIVISOR,
        BALL_SEGMENTS,
        BALL_SEGMENTS,
    ));
    let ball = scene.add_node(
        Node::new("ball", ball_mesh, materials.ball)
            .with_transform(Mat4::from_translation(Vec3::new(0.0, h / 2.0, h / 2.0)))
            .excluded_from_shrink(),
    );

    log::info!(
        "[scene] goal {}x{} depth {:.2}: {} nodes, {} geometries",
        w,
        h,
        d,
        scene.nodes().len(),
        scene.geometries().len()
    );

    GoalScene {
        scene,
        ball,
        materials,
    }
}

fn add_lights(scene: &mut Scene, depth: f32) {
    scene.add_light(Light::Point {
        position: Vec3::new(0.0, 0.0, FRONT_LIGHT_Z),
        color: Color::WHITE,
        intensity: POINT_LIGHT_INTENSITY,
    });
    scene.add_light(Light::Point {
        position: Vec3::new(0.0, BACK_LIGHT_Y, -depth - BACK_LIGHT_OFFSET),
        color: Color::WHITE,
        intensity: POINT_LIGHT_INTENSITY,
    });
    scene.add_light(Light::Ambient {
        color: Color::WHITE,
        intensity: AMBIENT_INTENSITY,
    });
}
