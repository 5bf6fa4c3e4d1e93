use crate::canvas::CanvasSurface;
use crate::constants::STATS_INTERVAL_FRAMES;
use field_core::Simulation;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: CanvasSurface,

    pub last_instant: Instant,
    pub stats_frames: u32,
    pub stats_secs: f32,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, surface: CanvasSurface) -> Self {
        Self {
            sim,
            surface,
            last_instant: Instant::now(),
            stats_frames: 0,
            stats_secs: 0.0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.sim.borrow_mut().frame(&mut self.surface);

        self.stats_frames += 1;
        self.stats_secs += dt_sec;
        if self.stats_frames >= STATS_INTERVAL_FRAMES {
            let sim = self.sim.borrow();
            log::debug!(
                "[frame] avg {:.2} ms over {} frames, spin=({:.3},{:.3})",
                self.stats_secs * 1000.0 / self.stats_frames as f32,
                self.stats_frames,
                sim.input.velocity.x,
                sim.input.velocity.y
            );
            self.stats_frames = 0;
            self.stats_secs = 0.0;
        }
    }
}

/// Run `frame` on every animation frame, forever.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
