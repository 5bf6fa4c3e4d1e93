pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod input;
pub mod math;
pub mod particle;
pub mod projection;
pub mod sim;
pub mod surface;

pub use config::*;
pub use error::*;
pub use field::*;
pub use input::*;
pub use particle::*;
pub use projection::*;
pub use sim::*;
pub use surface::*;
