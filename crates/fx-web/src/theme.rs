//! Theme watching: the host page flips `data-theme` on `<body>`; this module
//! only reads it and never writes it.

use std::cell::Cell;
use std::rc::Rc;

use fx_core::Theme;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{THEME_ATTRIBUTE, THEME_INITIAL_CHECK_MS, THEME_POLL_INTERVAL_MS};
use crate::dom;

/// Keep `flag` in sync with the body's theme attribute: MutationObserver
/// where available, an interval poll otherwise, plus one deferred initial
/// sample because the host sets the attribute after load.
pub fn wire_theme_watcher(
    window: &web::Window,
    document: &web::Document,
    flag: Rc<Cell<Theme>>,
) -> anyhow::Result<()> {
    let body = dom::body(document)?;

    let body_cb = body.clone();
    let flag_cb = flag.clone();
    let callback = Closure::wrap(Box::new(
        move |records: js_sys::Array, _observer: web::MutationObserver| {
            for record in records.iter() {
                let record: web::MutationRecord = record.unchecked_into();
                if record.attribute_name().as_deref() == Some(THEME_ATTRIBUTE) {
                    flag_cb.set(read_theme(&body_cb));
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);

    match web::MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            let init = web::MutationObserverInit::new();
            init.set_attributes(true);
            observer
                .observe_with_options(&body, &init)
                .map_err(dom::js_error)?;
            callback.forget();
        }
        Err(_) => {
            drop(callback);
            wire_poll(window, &body, flag.clone());
        }
    }

    wire_initial_check(window, &body, flag);
    Ok(())
}

fn read_theme(body: &web::HtmlElement) -> Theme {
    Theme::from_attr(body.get_attribute(THEME_ATTRIBUTE).as_deref())
}

fn wire_initial_check(window: &web::Window, body: &web::HtmlElement, flag: Rc<Cell<Theme>>) {
    let body = body.clone();
    let closure = Closure::wrap(Box::new(move || {
        flag.set(read_theme(&body));
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        THEME_INITIAL_CHECK_MS,
    );
    closure.forget();
}

fn wire_poll(window: &web::Window, body: &web::HtmlElement, flag: Rc<Cell<Theme>>) {
    log::warn!("[theme] MutationObserver unavailable, falling back to polling");
    let body = body.clone();
    let closure = Closure::wrap(Box::new(move || {
        flag.set(read_theme(&body));
    }) as Box<dyn FnMut()>);
    _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        THEME_POLL_INTERVAL_MS,
    );
    closure.forget();
}
