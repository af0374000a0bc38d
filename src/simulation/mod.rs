//! World - circle sandbox simulation
//!
//! Refactored from the legacy sandbox's module-global state: the body list,
//! id counter, next-spawn radius/color and RNG all live on `WorldCore`,
//! and the whole frame runs synchronously inside `step()`.
//!
//! Physics routines are in systems/physics; this module only orchestrates
//! and owns state. The wasm-bindgen surface is in facade.rs.

use crate::systems::physics::Body;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
pub(crate) mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::{RenderLayout, World};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Stride of the packed body transfer buffer, in f32 elements:
/// id, pos_x, pos_y, radius, vel_x, vel_y.
pub const BODY_STRIDE: usize = 6;

/// Transfer buffers handed to the JS renderer by pointer.
pub(crate) struct RenderBuffers {
    pub(crate) body_transfer: Vec<f32>,
    pub(crate) color_transfer: Vec<u32>,
}

/// The simulation world
pub struct WorldCore {
    bodies: Vec<Body>,

    // Settings
    surface_width: f32,
    surface_height: f32,
    gravity: f32,

    // Spawn state (was module-global in the legacy sandbox)
    next_body_id: u32,
    next_radius: f32,
    next_color: u32,

    // State
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world for a surface of the given size
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        init::create_world_core(surface_width, surface_height)
    }

    pub fn surface_width(&self) -> f32 { self.surface_width }

    pub fn surface_height(&self) -> f32 { self.surface_height }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn gravity(&self) -> f32 { self.gravity }

    /// The bodies, in spawn order, for a renderer to iterate
    pub fn bodies(&self) -> &[Body] { &self.bodies }

    /// Radius staged for the next `spawn_body_here` call
    pub fn next_radius(&self) -> f32 { self.next_radius }

    /// Color staged for the next `spawn_body_here` call
    pub fn next_color(&self) -> u32 { self.next_color }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    /// Update the surface size (canvas resize). Bodies past the new
    /// right/bottom edges are clamped back inside with their velocity
    /// component flipped.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        settings::set_surface_size(self, width, height);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Spawn a body at (x, y) with the given radius and color and a random
    /// velocity in [-2, 2] per axis. Returns the body id, or 0 if rejected.
    pub fn spawn_body(&mut self, x: f32, y: f32, radius: f32, color: u32) -> u32 {
        commands::spawn_body(self, x, y, radius, color)
    }

    /// Spawn a body at (x, y) using the staged next radius/color, then
    /// re-roll both. Returns the body id, or 0 if rejected.
    pub fn spawn_body_here(&mut self, x: f32, y: f32) -> u32 {
        commands::spawn_body_here(self, x, y)
    }

    /// Remove all bodies and reset counters
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward by one frame-unit
    pub fn step(&mut self) {
        step::step(self, 1.0);
    }

    /// Step the simulation forward by `dt` frame-units
    pub fn step_dt(&mut self, dt: f32) {
        step::step(self, dt);
    }

    // === RENDER TRANSFER API ===

    /// Pack all bodies into the transfer buffers. Returns the body count.
    pub fn extract_render_buffers(&mut self) -> usize {
        render_extract::extract_render_buffers(self)
    }

    /// Get pointer to the packed body buffer (for JS rendering)
    pub fn bodies_ptr(&self) -> *const f32 {
        self.render.body_transfer.as_ptr()
    }

    pub fn bodies_len_elements(&self) -> usize {
        self.bodies.len() * BODY_STRIDE
    }

    pub fn bodies_len_bytes(&self) -> usize {
        self.bodies_len_elements() * std::mem::size_of::<f32>()
    }

    /// Get pointer to the colors buffer (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.render.color_transfer.as_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.bodies.len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.colors_len_elements() * std::mem::size_of::<u32>()
    }

    /// Serialize all bodies to JSON (debugging and tests)
    pub fn bodies_json(&self) -> String {
        snapshot::bodies_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
