pub mod camera;
pub mod constants;
pub mod demo;
pub mod frame;
pub mod geometry;
pub mod goal;
pub mod input;
pub mod orbit;
pub mod scene;
pub mod state;

pub use camera::*;
pub use demo::*;
pub use goal::*;
pub use input::{command_for_key, KeyCommand};
pub use orbit::*;
pub use scene::*;
pub use state::*;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
