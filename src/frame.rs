use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::dom;
use goal_core::GoalDemo;
use goal_render::{GpuState, RenderError};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub demo: Rc<RefCell<GoalDemo>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'a>>,

    pub last_instant: Instant,
    pub fps_window_sec: f32,
    pub fps_frames: u32,
}

impl<'a> FrameContext<'a> {
    pub fn new(demo: Rc<RefCell<GoalDemo>>, canvas: web::HtmlCanvasElement, gpu: GpuState<'a>) -> Self {
        Self {
            demo,
            canvas,
            gpu: Some(gpu),
            last_instant: Instant::now(),
            fps_window_sec: 0.0,
            fps_frames: 0,
        }
    }

    /// One animation frame: advance the demo, then draw it.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.log_frame_rate(dt_sec);

        let w = self.canvas.width();
        let h = self.canvas.height();
        let mut demo = self.demo.borrow_mut();
        demo.set_viewport(w, h);
        demo.tick();

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(w, h);
        match g.render(&demo.goal.scene, &demo.camera) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => g.reconfigure(),
            Err(RenderError::Surface(wgpu::SurfaceError::Timeout)) => {
                log::warn!("render error: surface timeout, skipping frame");
            }
            Err(e) if e.is_fatal() => {
                log::error!("render error: {}", e);
                dom::show_fatal(&e.to_string());
                self.gpu = None;
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    fn log_frame_rate(&mut self, dt_sec: f32) {
        self.fps_window_sec += dt_sec;
        self.fps_frames += 1;
        if self.fps_window_sec >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps",
                self.fps_frames as f32 / self.fps_window_sec
            );
            self.fps_window_sec = 0.0;
            self.fps_frames = 0;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Result<GpuState<'static>, RenderError> {
    let instance = wgpu::Instance::default();
    // the surface owns its own handle to the canvas, so it can be 'static
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    GpuState::new(&instance, surface, canvas.width(), canvas.height()).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
