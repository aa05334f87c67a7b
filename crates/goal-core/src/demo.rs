//! Everything one running goal viewer owns, shared by both frontends.

use crate::camera::Camera;
use crate::frame::{self, FrameReport};
use crate::goal::{build_goal_scene, GoalLayout, GoalScene};
use crate::input::{self, KeyCommand};
use crate::orbit::OrbitControls;
use crate::state::InteractionState;

pub struct GoalDemo {
    pub goal: GoalScene,
    pub state: InteractionState,
    pub camera: Camera,
    pub controls: OrbitControls,
}

impl GoalDemo {
    pub fn new(layout: &GoalLayout, width: u32, height: u32) -> Self {
        let goal = build_goal_scene(layout);
        let mut camera = Camera::new(1.0);
        camera.set_viewport(width, height);
        let mut controls = OrbitControls::new(&camera);
        // sync once so the first frame starts from the controller's view
        controls.update(&mut camera);
        Self {
            goal,
            state: InteractionState::default(),
            camera,
            controls,
        }
    }

    pub fn handle_key(&mut self, key: &str) -> Option<KeyCommand> {
        input::handle_key(key, &mut self.state, &mut self.goal.scene)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn tick(&mut self) -> FrameReport {
        frame::tick(
            &self.state,
            &mut self.goal.scene,
            self.goal.ball,
            &mut self.controls,
            &mut self.camera,
        )
    }
}
