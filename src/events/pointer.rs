use field_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse movement deltas become the rotation velocity.
pub fn wire_mousemove(sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        sim.borrow_mut()
            .input
            .pointer_move(ev.movement_x() as f64, ev.movement_y() as f64);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
