#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
mod cursor;
mod dom;
mod frame;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    install_all(&window, &document)
}

/// Mount both effects. Each owns its own DOM nodes, listeners, and frame
/// loop; neither reads the other's state.
pub fn install_all(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    background::install(window, document)?;
    cursor::install(window, document)?;
    Ok(())
}
