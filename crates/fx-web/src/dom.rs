use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

#[inline]
pub fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow!("no body"))
}

/// Viewport size in CSS pixels, clamped away from zero.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    (w.max(1.0), h.max(1.0))
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el: web::HtmlElement = document
        .create_element("div")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("div is not an HtmlElement"))?;
    el.set_class_name(class);
    Ok(el)
}

/// Append a `<style>` block to the document head (body when head is absent).
pub fn inject_style(document: &web::Document, css: &str) -> anyhow::Result<()> {
    let style = document.create_element("style").map_err(js_error)?;
    style.set_text_content(Some(css));
    let parent: web::Node = match document.head() {
        Some(head) => head.into(),
        None => body(document)?.into(),
    };
    parent.append_child(&style).map_err(js_error)?;
    Ok(())
}

pub fn set_translate(el: &web::HtmlElement, pos: glam::Vec2) {
    _ = el.style().set_property(
        "transform",
        &format!("translate({}px, {}px) translate(-50%, -50%)", pos.x, pos.y),
    );
}
