use std::sync::Arc;
use std::time::Instant;
use winit::{
    dpi::PhysicalPosition,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, ModifiersState},
    window::{Window, WindowBuilder},
};

use goal_core::{GoalDemo, GoalLayout};
use goal_render::{GpuState, RenderError};

const WINDOW_TITLE: &str = "Goal viewer (native)";
const LOG_INTERVAL_SECS: f32 = 5.0;
// Pixels per wheel line, so line and pixel deltas feed the same sign test
const WHEEL_LINE_PX: f32 = 40.0;

/// Ctrl or Super shortcuts stay with the window manager. Ctrl+Alt is AltGr
/// on Windows and still types characters.
fn is_plain_key(modifiers: ModifiersState) -> bool {
    !modifiers.super_key() && (!modifiers.control_key() || modifiers.alt_key())
}

/// Mouse state for orbit drags, in physical pixels.
#[derive(Default)]
struct PointerState {
    cursor: Option<PhysicalPosition<f64>>,
    dragging: bool,
}

struct App {
    window: Arc<Window>,
    gpu: GpuState<'static>,
    demo: GoalDemo,
    pointer: PointerState,
    modifiers: ModifiersState,
    last_log: Instant,
    frames: u32,
}

impl App {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .map_err(RenderError::from)?;
        let gpu = GpuState::new(&instance, surface, size.width, size.height).await?;
        let (width, height) = gpu.size();
        let demo = GoalDemo::new(&GoalLayout::default(), width, height);
        let app = Self {
            window,
            gpu,
            demo,
            pointer: PointerState::default(),
            modifiers: ModifiersState::empty(),
            last_log: Instant::now(),
            frames: 0,
        };
        app.update_title();
        Ok(app)
    }

    fn update_title(&self) {
        self.window.set_title(&format!(
            "{} | {}",
            WINDOW_TITLE,
            self.demo.state.status_line()
        ));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize_if_needed(width, height);
        self.demo.set_viewport(width, height);
    }

    fn key_pressed(&mut self, key: &Key) {
        if !is_plain_key(self.modifiers) {
            return;
        }
        let Key::Character(text) = key else {
            return;
        };
        if self.demo.handle_key(text.as_str()).is_some() {
            self.update_title();
        }
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let previous = self.pointer.cursor.replace(position);
        if !self.pointer.dragging || !self.demo.state.orbit_enabled {
            return;
        }
        if let Some(prev) = previous {
            let dx = (position.x - prev.x) as f32;
            let dy = (position.y - prev.y) as f32;
            let height = self.window.inner_size().height as f32;
            self.demo.controls.rotate_by_pixels(dx, dy, height);
        }
    }

    fn wheel(&mut self, delta: MouseScrollDelta) {
        if !self.demo.state.orbit_enabled {
            return;
        }
        // winit reports scrolling up as positive; the controller takes DOM sign
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
            MouseScrollDelta::PixelDelta(p) => -p.y as f32,
        };
        self.demo.controls.wheel(delta_y);
    }

    fn frame(&mut self) -> Result<(), RenderError> {
        self.demo.tick();
        self.gpu.render(&self.demo.goal.scene, &self.demo.camera)?;

        self.frames += 1;
        let elapsed = self.last_log.elapsed().as_secs_f32();
        if elapsed >= LOG_INTERVAL_SECS {
            log::debug!("[frame] {:.1} fps", self.frames as f32 / elapsed);
            self.frames = 0;
            self.last_log = Instant::now();
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)?,
    );

    let mut app = pollster::block_on(App::new(window))?;
    log::info!("goal-native running");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.resize(size.width, size.height),
            WindowEvent::ModifiersChanged(modifiers) => app.modifiers = modifiers.state(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => app.key_pressed(&logical_key),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.pointer.dragging = state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => app.cursor_moved(position),
            WindowEvent::CursorLeft { .. } => app.pointer.cursor = None,
            WindowEvent::MouseWheel { delta, .. } => app.wheel(delta),
            _ => {}
        },
        Event::AboutToWait => match app.frame() {
            Ok(()) => app.window.request_redraw(),
            Err(e) if e.is_recoverable() => app.gpu.reconfigure(),
            Err(e) if e.is_fatal() => {
                log::error!("render error: {}", e);
                elwt.exit();
            }
            Err(e) => log::warn!("render error: {}", e),
        },
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_are_not_dispatched() {
        assert!(is_plain_key(ModifiersState::empty()));
        assert!(!is_plain_key(ModifiersState::CONTROL));
        assert!(!is_plain_key(ModifiersState::SUPER));
        assert!(!is_plain_key(ModifiersState::SUPER | ModifiersState::ALT));
    }

    #[test]
    fn altgr_characters_are_dispatched() {
        assert!(is_plain_key(ModifiersState::CONTROL | ModifiersState::ALT));
        assert!(is_plain_key(ModifiersState::ALT));
        assert!(is_plain_key(ModifiersState::SHIFT));
    }
}
