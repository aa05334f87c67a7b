use crate::constants::{HINT_OVERLAY_ID, HINT_STYLE};
use web_sys as web;

fn hint_element(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(HINT_OVERLAY_ID);
    _ = el.set_attribute("style", HINT_STYLE);
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Update the hint overlay with the current interaction state
pub fn update_hint(document: &web::Document, status_line: &str) {
    if let Some(el) = hint_element(document) {
        el.set_text_content(Some(status_line));
    }
}

/// Show the hint overlay
pub fn show_hint(document: &web::Document) {
    if let Some(el) = hint_element(document) {
        _ = el.set_attribute("style", HINT_STYLE);
    }
}
