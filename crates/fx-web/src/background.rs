//! Particle backdrop: a fixed full-viewport canvas layered behind the page
//! content, repainted every frame from the core particle field.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fx_core::{ParticleField, Theme, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{DARK_BG_INNER, DARK_BG_OUTER, LIGHT_BG};
use crate::{dom, frame, theme};

struct BackgroundLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Rc<RefCell<ParticleField>>,
    theme: Rc<Cell<Theme>>,
}

pub fn install(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let canvas = create_backdrop_canvas(document)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_error)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("unexpected context type"))?;

    let (w, h) = dom::viewport_size(window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);

    let field = Rc::new(RefCell::new(ParticleField::new(Viewport::new(w, h))));
    let theme_flag = Rc::new(Cell::new(Theme::default()));

    theme::wire_theme_watcher(window, document, theme_flag.clone())?;
    wire_resize(window, &canvas, field.clone());
    wire_pointer(window, field.clone());

    let mut layer = BackgroundLayer {
        canvas,
        ctx,
        field,
        theme: theme_flag,
    };
    frame::spawn_raf_loop(move || layer.frame());
    log::info!("[backdrop] installed");
    Ok(())
}

fn create_backdrop_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom::js_error)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("canvas is not an HtmlCanvasElement"))?;
    let style = canvas.style();
    for (key, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "-1"),
    ] {
        style.set_property(key, value).map_err(dom::js_error)?;
    }
    dom::body(document)?
        .append_child(&canvas)
        .map_err(dom::js_error)?;
    Ok(canvas)
}

fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) {
    let canvas = canvas.clone();
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::viewport_size(&win);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        field.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer(window: &web::Window, field: Rc<RefCell<ParticleField>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        field
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

impl BackgroundLayer {
    fn frame(&mut self) {
        self.paint_background();

        let mut field = self.field.borrow_mut();
        field.tick();
        let theme = self.theme.get();
        for p in field.visible() {
            self.ctx.set_fill_style_str(&particle_fill(theme, p.alpha));
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.x as f64, p.y as f64, p.radius as f64, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
        }
    }

    fn paint_background(&self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        if self.theme.get().is_dark() {
            // radial vignette from the viewport center out to the width
            if let Ok(gradient) = self
                .ctx
                .create_radial_gradient(w / 2.0, h / 2.0, 0.0, w / 2.0, h / 2.0, w)
            {
                _ = gradient.add_color_stop(0.0, DARK_BG_INNER);
                _ = gradient.add_color_stop(1.0, DARK_BG_OUTER);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        } else {
            self.ctx.set_fill_style_str(LIGHT_BG);
        }
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }
}

fn particle_fill(theme: Theme, alpha: f32) -> String {
    match theme {
        Theme::Dark => format!("rgba(100, 150, 255, {alpha})"),
        Theme::Light => format!("rgba(37, 99, 235, {alpha})"),
    }
}
