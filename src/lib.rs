#[macro_use]
mod utils;

pub mod animator;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod surface;
pub mod viewport;
pub mod web;

use wasm_bindgen::prelude::*;

pub use animator::{Animator, FrameScheduler};
pub use color::Color;
pub use config::BackgroundConfig;
pub use error::{BackgroundError, BackgroundResult};
pub use field::ParticleField;
pub use particle::Particle;
pub use surface::Surface;
pub use viewport::Viewport;
pub use web::ParticleBackground;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
