use field_core::{Simulation, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(
    document: &web::Document,
    id: &str,
    selector: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id(id) {
        Some(el) => el,
        None => document
            .query_selector(selector)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no #{} or {} element", id, selector))?,
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Value of `key` in the page's query string, if present.
pub fn query_param(window: &web::Window, key: &str) -> Option<String> {
    let search = window.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get(key)
}

/// Size the canvas backing store to the window and return the new viewport.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let (w, h) = web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0));
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Viewport::new(canvas.width() as f64, canvas.height() as f64)
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, sim: Rc<RefCell<Simulation>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let vp = sync_canvas_to_window(&canvas_resize);
        sim.borrow_mut().resize(vp.width, vp.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
