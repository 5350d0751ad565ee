//! Custom cursor: an instant dot, a trailing ring, and magnetic attraction
//! on interactive elements.

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::{magnetic_offset, CursorTracker, Rect};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{HOVER_CLASS, MAGNETIC_SELECTORS, MAGNET_HOVER_SCALE};
use crate::{dom, frame};

static CURSOR_CSS: &str = include_str!("../assets/cursor.css");

pub fn install(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    dom::inject_style(document, CURSOR_CSS)?;

    let body = dom::body(document)?;
    let dot = dom::create_div(document, "cursor-dot")?;
    let ring = dom::create_div(document, "cursor-ring")?;
    body.append_child(&dot).map_err(dom::js_error)?;
    body.append_child(&ring).map_err(dom::js_error)?;

    let tracker = Rc::new(RefCell::new(CursorTracker::new()));
    wire_pointer(window, tracker.clone(), dot);
    wire_magnets(document, &body)?;

    let ring_tracker = tracker;
    frame::spawn_raf_loop(move || {
        let pos = ring_tracker.borrow_mut().tick();
        dom::set_translate(&ring, pos);
    });
    log::info!("[cursor] installed");
    Ok(())
}

fn wire_pointer(window: &web::Window, tracker: Rc<RefCell<CursorTracker>>, dot: web::HtmlElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut t = tracker.borrow_mut();
        t.set_pointer(ev.client_x() as f32, ev.client_y() as f32);
        // the dot snaps to the pointer on every event; only the ring trails
        dom::set_translate(&dot, t.pointer());
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_magnets(document: &web::Document, body: &web::HtmlElement) -> anyhow::Result<()> {
    let list = document
        .query_selector_all(MAGNETIC_SELECTORS)
        .map_err(dom::js_error)?;
    let mut wired = 0usize;
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        wire_magnet(body, &el);
        wired += 1;
    }
    log::info!("[cursor] {} magnetic elements", wired);
    Ok(())
}

fn wire_magnet(body: &web::HtmlElement, el: &web::HtmlElement) {
    {
        let body = body.clone();
        let closure = Closure::wrap(Box::new(move || {
            _ = body.class_list().add_1(HOVER_CLASS);
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let body = body.clone();
        let el_reset = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            _ = body.class_list().remove_1(HOVER_CLASS);
            _ = el_reset.style().set_property("transform", "translate(0, 0)");
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let el_pull = el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let r = el_pull.get_bounding_client_rect();
            let rect = Rect {
                left: r.left() as f32,
                top: r.top() as f32,
                width: r.width() as f32,
                height: r.height() as f32,
            };
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let pull = magnetic_offset(pointer, rect);
            _ = el_pull.style().set_property(
                "transform",
                &format!(
                    "translate({}px, {}px) scale({})",
                    pull.x, pull.y, MAGNET_HOVER_SCALE
                ),
            );
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
