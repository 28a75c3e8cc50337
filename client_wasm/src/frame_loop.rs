//! requestAnimationFrame driver
//!
//! Each callback runs one `Client::frame` and schedules the next. The loop has
//! no stop condition and runs until the page is closed.

use crate::Client;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

type FrameCallback = Closure<dyn FnMut(f64)>;

pub fn start(client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    // The closure holds a handle to itself so it can re-register every frame
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
        if let Err(e) = client.borrow_mut().frame() {
            log::error!("Frame failed: {:?}", e);
        }

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(cb) {
                log::error!("Failed to schedule next frame: {:?}", e);
            }
        }
    }));

    let started = match callback.borrow().as_ref() {
        Some(cb) => request_animation_frame(cb),
        None => Err(JsValue::from_str("Frame callback missing")),
    };
    started
}

fn request_animation_frame(cb: &FrameCallback) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}
