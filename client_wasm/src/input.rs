//! Keyboard input handling

use crate::Client;
use game_core::KeyBindings;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{FocusEvent, KeyboardEvent, Window};

/// Whether the browser's default action for `key` (page scroll) should be suppressed
pub fn is_bound_key(key: &str, keys: &KeyBindings) -> bool {
    key == keys.up || key == keys.down
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

/// Register keydown/keyup/blur listeners on `window` feeding the client's input state.
///
/// Listeners live for the rest of the page.
pub fn attach(window: &Window, client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let down_client = client.clone();
    let on_key_down = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        let mut client = down_client.borrow_mut();
        if is_bound_key(&key, &client.game.config().keys) {
            event.prevent_default();
        }
        client.game.key_down(&key);
    });
    window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let up_client = client.clone();
    let on_key_up = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        let mut client = up_client.borrow_mut();
        if is_bound_key(&key, &client.game.config().keys) {
            event.prevent_default();
        }
        client.game.key_up(&key);
    });
    window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    // keyup never arrives once the window loses focus
    let on_blur = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
        client.borrow_mut().game.input_mut().release_all();
        log::debug!("Window blurred, released held keys");
    });
    window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
    on_blur.forget();

    Ok(())
}
