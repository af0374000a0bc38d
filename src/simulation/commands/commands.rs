use crate::domain::colors::random_bright_color;
use crate::systems::physics::{Body, Vec2};

use super::random;
use super::WorldCore;

pub(super) fn spawn_body(world: &mut WorldCore, x: f32, y: f32, radius: f32, color: u32) -> u32 {
    // Validate: radius > 0 is a lifetime invariant of every body
    if !radius.is_finite() || radius <= 0.0 || !x.is_finite() || !y.is_finite() {
        return 0;
    }

    let id = world.next_body_id;
    world.next_body_id = world.next_body_id.saturating_add(1);

    let velocity = Vec2::new(
        random::rand_range(&mut world.rng_state, -2.0, 2.0),
        random::rand_range(&mut world.rng_state, -2.0, 2.0),
    );

    world
        .bodies
        .push(Body::new(id, Vec2::new(x, y), velocity, radius, color));
    id
}

pub(super) fn spawn_body_here(world: &mut WorldCore, x: f32, y: f32) -> u32 {
    let radius = world.next_radius;
    let color = world.next_color;

    let id = spawn_body(world, x, y, radius, color);
    if id != 0 {
        // Re-roll the staged preview for the next spawn
        world.next_radius = random::rand_range(&mut world.rng_state, 10.0, 30.0);
        world.next_color = random_bright_color(&mut world.rng_state);
    }
    id
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    // The id counter survives: ids are never reused, even across a clear
    world.frame = 0;
}
