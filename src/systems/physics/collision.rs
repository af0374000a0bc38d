//! Pairwise circle collision detection and resolution.
//!
//! Detection is a plain Euclidean distance test. The legacy sandbox this
//! engine replaces computed the vertical delta as `c2.y - c2.y`, gating
//! collisions on horizontal proximity only; this implementation uses the
//! corrected 2D distance.
//!
//! Resolution treats the pair as equal-mass: push both out by half the
//! overlap, swap the velocity components along the collision normal, keep
//! the tangential components, then force both speeds back to a fixed
//! magnitude. The constant-speed renormalization is a deliberate stylistic
//! choice of the sandbox, not physically accurate elastic behavior.

use super::types::Body;
use super::DIST_EPSILON;

/// Speed every body is forced back to after a resolved collision
pub const POST_COLLISION_SPEED: f32 = 2.0;

/// True 2D intersection test: center distance within the sum of radii.
pub fn bodies_intersect(a: &Body, b: &Body) -> bool {
    let d = b.pos - a.pos;
    d.length() <= a.radius + b.radius
}

/// Resolve one overlapping pair. Returns whether anything was changed.
///
/// Coincident centers have no collision normal, so that case is a defined
/// no-op (the pair stays overlapped until something moves them apart)
/// instead of a NaN factory.
pub fn resolve_collision(a: &mut Body, b: &mut Body) -> bool {
    let d = b.pos - a.pos;
    let distance = d.length();

    let overlap = a.radius + b.radius - distance;
    if overlap <= 0.0 || distance < DIST_EPSILON {
        return false;
    }

    // Unit collision normal along the center line, tangent perpendicular
    let n = d * (1.0 / distance);
    let t = n.perp();

    // Push apart by half the overlap each, no mass weighting
    let push = n * (overlap / 2.0);
    a.pos = a.pos - push;
    b.pos = b.pos + push;

    // Equal-mass elastic exchange: swap normal components, keep tangential
    let a_normal = a.velocity.dot(n);
    let b_normal = b.velocity.dot(n);
    let a_tangent = a.velocity.dot(t);
    let b_tangent = b.velocity.dot(t);

    a.velocity = n * b_normal + t * a_tangent;
    b.velocity = n * a_normal + t * b_tangent;

    // Force both back to constant speed
    a.set_speed(POST_COLLISION_SPEED);
    b.set_speed(POST_COLLISION_SPEED);

    true
}
