use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `tick` once per animation frame, rescheduling indefinitely.
///
/// The closure keeps itself alive by holding its own handle; there is no
/// termination condition, the loop runs for the life of the document.
pub fn spawn_raf_loop(mut tick: impl FnMut() + 'static) {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle_inner = handle.clone();
    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        if let Some(w) = web::window() {
            if let Some(cb) = handle_inner.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = handle.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
