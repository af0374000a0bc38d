use crate::systems::physics::{boundary, collision, forces};

use super::{PerfTimer, WorldCore};

/// One simulation frame:
/// gravity -> walls -> ground -> ceiling -> integrate, per body in spawn
/// order, then one O(n²) pass over all unordered pairs. Boundary checks
/// run against the pre-integration position plus look-ahead velocity, so
/// bounce decisions are one step ahead of position updates.
pub(super) fn step(world: &mut WorldCore, dt: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = PerfTimer::maybe_start(perf_on);

    let t0 = PerfTimer::maybe_start(perf_on);
    let (wall_bounces, floor_contacts, ceiling_contacts) = integrate_bodies(world, dt);
    if let Some(t) = t0 {
        world.perf_stats.integrate_ms = t.elapsed_ms();
    }

    let t1 = PerfTimer::maybe_start(perf_on);
    let (collision_checks, collisions_resolved) = resolve_pairs(world);
    if let Some(t) = t1 {
        world.perf_stats.collision_ms = t.elapsed_ms();
    }

    if perf_on {
        world.perf_stats.wall_bounces = wall_bounces;
        world.perf_stats.floor_contacts = floor_contacts;
        world.perf_stats.ceiling_contacts = ceiling_contacts;
        world.perf_stats.collision_checks = collision_checks;
        world.perf_stats.collisions_resolved = collisions_resolved;
    }

    world.frame += 1;

    if let Some(t) = step_start {
        world.perf_stats.step_ms = t.elapsed_ms();
    }
}

/// Per-body pass: gravity, boundary handling in fixed order, integration.
fn integrate_bodies(world: &mut WorldCore, dt: f32) -> (u32, u32, u32) {
    let width = world.surface_width;
    let height = world.surface_height;
    let gravity = world.gravity;

    let mut wall_bounces = 0u32;
    let mut floor_contacts = 0u32;
    let mut ceiling_contacts = 0u32;

    for body in world.bodies.iter_mut() {
        forces::apply_gravity(body, gravity, dt);

        // Fixed order: walls, then ground, then ceiling. Each check sees
        // the velocity the previous one left behind.
        if boundary::bounce_walls(body, width) {
            wall_bounces += 1;
        }
        if boundary::bounce_ground(body, height, dt) {
            floor_contacts += 1;
        }
        if boundary::bounce_ceiling(body, dt) {
            ceiling_contacts += 1;
        }

        body.pos += body.velocity * dt;
    }

    (wall_bounces, floor_contacts, ceiling_contacts)
}

/// All unordered pairs (i < j). No spatial partitioning; the sandbox's
/// body counts stay small enough that the quadratic scan is fine.
fn resolve_pairs(world: &mut WorldCore) -> (u32, u32) {
    let mut checks = 0u32;
    let mut resolved = 0u32;

    let n = world.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            checks += 1;

            let (head, tail) = world.bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if collision::bodies_intersect(a, b) && collision::resolve_collision(a, b) {
                resolved += 1;
            }
        }
    }

    (checks, resolved)
}
