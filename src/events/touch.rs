use field_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_touch_handlers(sim: Rc<RefCell<Simulation>>) {
    let start = sim.clone();
    add_touch_listener("touchstart", move |ev| {
        if let Some((x, y)) = first_changed_touch(ev) {
            start.borrow_mut().input.touch_start(x, y);
        }
    });

    let drag = sim.clone();
    add_touch_listener("touchmove", move |ev| {
        if let Some((x, y)) = first_changed_touch(ev) {
            drag.borrow_mut().input.touch_move(x, y);
        }
    });

    add_touch_listener("touchend", move |_| {
        sim.borrow_mut().input.touch_end();
    });
}

#[inline]
fn first_changed_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    let touch = ev.changed_touches().get(0)?;
    Some((touch.page_x() as f64, touch.page_y() as f64))
}

// Non-passive so preventDefault actually suppresses scrolling and zooming.
fn add_touch_listener(kind: &'static str, mut handler: impl FnMut(&web::TouchEvent) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        handler(&ev);
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Some(wnd) = web::window() {
        if let Err(e) = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("[touch] could not listen for {}: {:?}", kind, e);
        }
    }
    closure.forget();
}
