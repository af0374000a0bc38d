//! Circula Engine - circle sandbox physics in WASM
//!
//! Architecture:
//! - domain/     - Domain data (color generation)
//! - systems/    - Physics systems (gravity, boundary bounce, collisions)
//! - simulation/ - World orchestration and WASM facade

pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::physics;
pub use systems::physics::{Body, Vec2};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Circula WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{PerfStats, RenderLayout, World};
