use crate::input;
use crate::overlay;
use goal_core::GoalDemo;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Refresh the hint overlay after a state change
fn update_hint_after_change(demo: &Rc<RefCell<GoalDemo>>) {
    if let Some(window) = web::window() {
        if let Some(document) = window.document() {
            let status = demo.borrow().state.status_line();
            overlay::update_hint(&document, &status);
            overlay::show_hint(&document);
        }
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, demo: &Rc<RefCell<GoalDemo>>) {
    if !input::is_plain_key(ev.ctrl_key(), ev.meta_key(), ev.alt_key()) {
        return;
    }
    let key = ev.key();
    let handled = demo.borrow_mut().handle_key(&key);
    if handled.is_some() {
        update_hint_after_change(demo);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(demo: Rc<RefCell<GoalDemo>>) {
    update_hint_after_change(&demo);
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &demo);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
