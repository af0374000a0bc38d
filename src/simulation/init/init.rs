use crate::domain::colors::random_bright_color;

use super::perf_stats::PerfStats;
use super::random;
use super::{RenderBuffers, WorldCore, BODY_STRIDE};

pub(super) fn create_world_core(surface_width: f32, surface_height: f32) -> WorldCore {
    let mut rng_state = 12345u32;
    // Stage the first spawn preview up front so the UI can show it before
    // the first click.
    let next_radius = random::rand_range(&mut rng_state, 10.0, 30.0);
    let next_color = random_bright_color(&mut rng_state);

    WorldCore {
        bodies: Vec::new(),
        surface_width,
        surface_height,
        gravity: 0.01,
        next_body_id: 1,
        next_radius,
        next_color,
        frame: 0,
        rng_state,

        render: RenderBuffers {
            // Start small; `extract_render_buffers` resizes on demand.
            body_transfer: vec![0.0f32; 16 * BODY_STRIDE],
            color_transfer: vec![0u32; 16],
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
