pub mod pointer;
pub mod touch;

pub use pointer::wire_mousemove;
pub use touch::wire_touch_handlers;
