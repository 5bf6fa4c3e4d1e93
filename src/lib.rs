#![cfg(target_arch = "wasm32")]
use field_core::{FieldConfig, Simulation, Variant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("field-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn choose_variant(window: &web::Window) -> Variant {
    match dom::query_param(window, VARIANT_QUERY_KEY) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("{}; using {}", e, Variant::default());
            Variant::default()
        }),
        None => Variant::default(),
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document, CANVAS_ELEMENT_ID, CANVAS_FALLBACK_SELECTOR)?;
    let ctx = dom::context_2d(&canvas)?;
    let viewport = dom::sync_canvas_to_window(&canvas);

    let variant = choose_variant(&window);
    log::info!(
        "[init] variant={} viewport={}x{}",
        variant,
        viewport.width,
        viewport.height
    );

    let mut rng = StdRng::from_entropy();
    let sim = Rc::new(RefCell::new(Simulation::new(
        FieldConfig::for_variant(variant),
        viewport,
        &mut rng,
    )));

    dom::wire_resize(&canvas, sim.clone());
    events::wire_mousemove(sim.clone());
    events::wire_touch_handlers(sim.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sim,
        canvas::CanvasSurface::new(ctx),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
