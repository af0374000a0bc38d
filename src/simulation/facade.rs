use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::{WorldCore, BODY_STRIDE};

#[wasm_bindgen]
pub struct RenderLayout {
    bodies_ptr: usize,
    bodies_len_elements: usize,
    bodies_len_bytes: usize,
    colors_ptr: usize,
    colors_len_elements: usize,
    colors_len_bytes: usize,
    body_stride: usize,
    body_count: usize,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn bodies_ptr(&self) -> usize { self.bodies_ptr }
    #[wasm_bindgen(getter)]
    pub fn bodies_len_elements(&self) -> usize { self.bodies_len_elements }
    #[wasm_bindgen(getter)]
    pub fn bodies_len_bytes(&self) -> usize { self.bodies_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> usize { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> usize { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> usize { self.colors_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn body_stride(&self) -> usize { self.body_stride }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.body_count }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world for a drawable surface of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            core: WorldCore::new(surface_width, surface_height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn surface_width(&self) -> f32 { self.core.surface_width() }

    #[wasm_bindgen(getter)]
    pub fn surface_height(&self) -> f32 { self.core.surface_height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 { self.core.gravity() }

    /// Set the global gravity scalar (the UI slider value)
    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    /// Update the surface size on canvas resize
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.core.set_surface_size(width, height);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Radius staged for the next `spawn_body_here` call (UI preview)
    pub fn next_radius(&self) -> f32 {
        self.core.next_radius()
    }

    /// Color staged for the next `spawn_body_here` call (UI preview)
    pub fn next_color(&self) -> u32 {
        self.core.next_color()
    }

    /// Spawn a body at (x, y) with the given radius and 0xRRGGBB color.
    /// Velocity is random in [-2, 2] per axis.
    /// Returns the body ID, or 0 if the spawn was rejected.
    pub fn spawn_body(&mut self, x: f32, y: f32, radius: f32, color: u32) -> u32 {
        self.core.spawn_body(x, y, radius, color)
    }

    /// Spawn a body at (x, y) using the staged next radius/color.
    /// Returns the body ID, or 0 if the spawn was rejected.
    pub fn spawn_body_here(&mut self, x: f32, y: f32) -> u32 {
        self.core.spawn_body_here(x, y)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Step the simulation forward by `dt` frame-units
    pub fn step_dt(&mut self, dt: f32) {
        self.core.step_dt(dt);
    }

    // === RENDER TRANSFER API ===

    /// Pack bodies into the transfer buffers (call once per frame, before
    /// reading the pointers). Returns the body count.
    pub fn extract_render_buffers(&mut self) -> usize {
        self.core.extract_render_buffers()
    }

    /// Get pointer to the packed body buffer (for JS rendering)
    pub fn bodies_ptr(&self) -> *const f32 {
        self.core.bodies_ptr()
    }

    pub fn bodies_len_elements(&self) -> usize {
        self.core.bodies_len_elements()
    }

    pub fn bodies_len_bytes(&self) -> usize {
        self.core.bodies_len_bytes()
    }

    /// Get pointer to the colors buffer (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.colors_len_elements()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }

    /// Stride of one body record in the f32 buffer
    pub fn body_stride(&self) -> usize {
        BODY_STRIDE
    }

    /// Serialize all bodies to JSON (debugging and tests)
    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    pub fn render_layout(&self) -> RenderLayout {
        RenderLayout {
            bodies_ptr: self.core.bodies_ptr() as usize,
            bodies_len_elements: self.core.bodies_len_elements(),
            bodies_len_bytes: self.core.bodies_len_bytes(),
            colors_ptr: self.core.colors_ptr() as usize,
            colors_len_elements: self.core.colors_len_elements(),
            colors_len_bytes: self.core.colors_len_bytes(),
            body_stride: BODY_STRIDE,
            body_count: self.core.body_count(),
        }
    }
}
