use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    // Disabling drops the last snapshot so reads go back to zeros
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) {
    world.gravity = gravity;
}

/// Apply a canvas resize. Mirrors the legacy resize handler: only the
/// right and bottom edges clamp (the wall/ceiling checks in the next step
/// catch the other two), and the clamped axis gets its velocity flipped.
pub(super) fn set_surface_size(world: &mut WorldCore, width: f32, height: f32) {
    world.surface_width = width;
    world.surface_height = height;

    for body in world.bodies.iter_mut() {
        if body.pos.x + body.radius >= width {
            body.pos.x = width - body.radius;
            body.velocity.x = -body.velocity.x;
        }
        if body.pos.y + body.radius >= height {
            body.pos.y = height - body.radius;
            body.velocity.y = -body.velocity.y;
        }
    }
}
