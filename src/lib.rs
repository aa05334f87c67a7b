#![cfg(target_arch = "wasm32")]
use goal_core::{GoalDemo, GoalLayout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("goal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            dom::show_fatal(&format!("{:#}", e));
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::acquire_canvas(&document)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let gpu = frame::init_gpu(&canvas).await?;
    let (width, height) = gpu.size();

    let demo = Rc::new(RefCell::new(GoalDemo::new(
        &GoalLayout::default(),
        width,
        height,
    )));

    events::wire_global_keydown(demo.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        demo: demo.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    // Animation and rendering driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(demo, canvas, gpu)));
    frame::start_loop(frame_ctx);
    log::info!("goal-web running");
    Ok(())
}
