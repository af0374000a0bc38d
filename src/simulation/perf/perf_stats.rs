use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) body_count: u32,
    pub(super) collision_checks: u32,
    pub(super) collisions_resolved: u32,
    pub(super) wall_bounces: u32,
    pub(super) floor_contacts: u32,
    pub(super) ceiling_contacts: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn collision_checks(&self) -> u32 { self.collision_checks }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn ceiling_contacts(&self) -> u32 { self.ceiling_contacts }
}
