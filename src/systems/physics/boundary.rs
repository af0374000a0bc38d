//! Boundary bounce with resting contact.
//!
//! Ground and ceiling use a look-ahead check (current position plus the
//! velocity the body will integrate this frame) split on speed: a slow body
//! is clamped to the boundary and its velocity zeroed, which kills the
//! infinite micro-bounce oscillation a naive always-bounce rule produces
//! near equilibrium. A fast body does a standard bounce with energy loss.

use super::types::Body;

/// Horizontal friction factor while resting on a boundary
pub const GROUND_FRICTION: f32 = 0.9;
/// Below this horizontal speed a resting body stops outright
pub const VELOCITY_THRESHOLD: f32 = 0.1;
/// Velocity retained after a fast bounce (20% energy loss)
pub const BOUNCE_RETENTION: f32 = 0.8;

/// Reverse horizontal velocity when the body pokes past either wall.
///
/// No positional correction: a body can sit fully outside the surface for
/// one frame before the reversed velocity pulls it back. Fine for radii
/// small relative to the surface; a very large body can get stuck flapping
/// at the edge.
pub fn bounce_walls(body: &mut Body, surface_width: f32) -> bool {
    if body.pos.x - body.radius < 0.0 || body.pos.x + body.radius > surface_width {
        body.velocity.x = -body.velocity.x;
        return true;
    }
    false
}

/// Ground bounce, checked against the position the body is about to take.
pub fn bounce_ground(body: &mut Body, surface_height: f32, dt: f32) -> bool {
    if body.pos.y + body.velocity.y * dt + body.radius > surface_height {
        if body.velocity.y.abs() < body.radius / 2.0 {
            // Resting contact: stop the oscillation
            body.velocity.y = 0.0;
            body.pos.y = surface_height - body.radius;
            apply_resting_friction(body);
        } else {
            // Standard bounce with energy loss
            body.velocity.y *= -BOUNCE_RETENTION;
            body.pos.y = surface_height - body.radius;
        }
        return true;
    }
    false
}

/// Ceiling bounce, symmetric to the ground with the clamp target at
/// `pos.y = radius`.
pub fn bounce_ceiling(body: &mut Body, dt: f32) -> bool {
    if body.pos.y + body.velocity.y * dt - body.radius < 0.0 {
        if body.velocity.y.abs() < body.radius / 2.0 {
            body.velocity.y = 0.0;
            body.pos.y = body.radius;
            apply_resting_friction(body);
        } else {
            body.velocity.y *= -BOUNCE_RETENTION;
            body.pos.y = body.radius;
        }
        return true;
    }
    false
}

/// Slow down horizontal motion while resting against a boundary.
fn apply_resting_friction(body: &mut Body) {
    if body.velocity.x.abs() < VELOCITY_THRESHOLD {
        body.velocity.x = 0.0;
    } else {
        body.velocity.x *= GROUND_FRICTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::physics::Vec2;

    fn body_at(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Body {
        Body::new(1, Vec2::new(x, y), Vec2::new(vx, vy), radius, 0)
    }

    #[test]
    fn left_wall_reverses_horizontal_velocity() {
        let mut b = body_at(5.0, 50.0, -1.5, 0.0, 10.0);
        assert!(bounce_walls(&mut b, 400.0));
        assert_eq!(b.velocity.x, 1.5);
        // No positional correction by design
        assert_eq!(b.pos.x, 5.0);
    }

    #[test]
    fn right_wall_reverses_horizontal_velocity() {
        let mut b = body_at(395.0, 50.0, 2.0, 0.0, 10.0);
        assert!(bounce_walls(&mut b, 400.0));
        assert_eq!(b.velocity.x, -2.0);
    }

    #[test]
    fn interior_body_ignores_walls() {
        let mut b = body_at(200.0, 50.0, 2.0, 0.0, 10.0);
        assert!(!bounce_walls(&mut b, 400.0));
        assert_eq!(b.velocity.x, 2.0);
    }

    #[test]
    fn fast_ground_bounce_loses_twenty_percent() {
        let mut b = body_at(50.0, 295.0, 0.0, 8.0, 10.0);
        assert!(bounce_ground(&mut b, 300.0, 1.0));
        assert!((b.velocity.y + 6.4).abs() < 1e-6);
        assert_eq!(b.pos.y, 290.0);
    }

    #[test]
    fn slow_ground_contact_comes_to_rest() {
        let mut b = body_at(50.0, 295.0, 0.0, 2.0, 10.0);
        assert!(bounce_ground(&mut b, 300.0, 1.0));
        assert_eq!(b.velocity.y, 0.0);
        assert_eq!(b.pos.y, 290.0);
    }

    #[test]
    fn resting_friction_scales_fast_horizontal_motion() {
        let mut b = body_at(50.0, 295.0, 1.0, 2.0, 10.0);
        bounce_ground(&mut b, 300.0, 1.0);
        assert!((b.velocity.x - 0.9).abs() < 1e-6);
    }

    #[test]
    fn resting_friction_stops_slow_horizontal_motion() {
        let mut b = body_at(50.0, 295.0, 0.05, 2.0, 10.0);
        bounce_ground(&mut b, 300.0, 1.0);
        assert_eq!(b.velocity.x, 0.0);
    }

    #[test]
    fn ceiling_clamps_to_radius() {
        let mut b = body_at(50.0, 12.0, 0.0, -8.0, 10.0);
        assert!(bounce_ceiling(&mut b, 1.0));
        assert!((b.velocity.y - 6.4).abs() < 1e-6);
        assert_eq!(b.pos.y, 10.0);
    }

    #[test]
    fn slow_ceiling_contact_comes_to_rest() {
        let mut b = body_at(50.0, 11.0, 0.0, -2.0, 10.0);
        assert!(bounce_ceiling(&mut b, 1.0));
        assert_eq!(b.velocity.y, 0.0);
        assert_eq!(b.pos.y, 10.0);
    }

    #[test]
    fn look_ahead_triggers_before_penetration() {
        // Still above the floor, but next frame's position would cross it.
        let mut b = body_at(50.0, 280.0, 0.0, 15.0, 10.0);
        assert!(bounce_ground(&mut b, 300.0, 1.0));
    }
}
