use crate::constants::{CANVAS_ID, ERROR_OVERLAY_ID, ERROR_STYLE, MAX_DEVICE_PIXEL_RATIO};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The page's `#app-canvas`, or a full-window canvas appended to `<body>`.
pub fn acquire_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e));
    }
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute(
        "style",
        "position: fixed; inset: 0; width: 100vw; height: 100vh; display: block; touch-action: none;",
    );
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    log::info!("[dom] created #{}", CANVAS_ID);
    Ok(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Replace the page content with a visible error message.
pub fn show_fatal(message: &str) {
    let Some(document) = window_document() else {
        return;
    };
    let el = match document.get_element_by_id(ERROR_OVERLAY_ID) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_id(ERROR_OVERLAY_ID);
            if let Some(body) = document.body() {
                _ = body.append_child(&el);
            }
            el
        }
    };
    _ = el.set_attribute("style", ERROR_STYLE);
    el.set_text_content(Some(&format!("Unable to start the goal viewer: {}", message)));
}
