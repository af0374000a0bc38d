use super::vec2::Vec2;
use super::DIST_EPSILON;

/// A simulated circle.
///
/// Position and velocity are in surface pixels (origin top-left, y down),
/// velocity in pixels per frame-unit. Radius is fixed at creation and is
/// always positive (spawn validation rejects anything else).
pub struct Body {
    /// Unique ID, monotonic, never reused
    pub id: u32,
    /// Center position (surface coordinates)
    pub pos: Vec2,
    /// Velocity (pixels per frame)
    pub velocity: Vec2,
    /// Collision extent and visual size
    pub radius: f32,
    /// Packed 0xRRGGBB, presentation only
    pub color: u32,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, velocity: Vec2, radius: f32, color: u32) -> Self {
        Self { id, pos, velocity, radius, color }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Rescale the velocity to `speed` while keeping its direction.
    ///
    /// A body with (near-)zero velocity has no direction to keep, so the
    /// call is a no-op there rather than a division by zero.
    pub fn set_speed(&mut self, speed: f32) {
        let current = self.velocity.length();
        if current < DIST_EPSILON {
            return;
        }
        self.velocity = self.velocity * (speed / current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_speed_keeps_direction() {
        let mut body = Body::new(1, Vec2::zero(), Vec2::new(3.0, 4.0), 10.0, 0xFFFFFF);
        body.set_speed(2.0);
        assert!((body.speed() - 2.0).abs() < 1e-6);
        assert!((body.velocity.x - 1.2).abs() < 1e-6);
        assert!((body.velocity.y - 1.6).abs() < 1e-6);
    }

    #[test]
    fn set_speed_is_noop_at_rest() {
        let mut body = Body::new(1, Vec2::zero(), Vec2::zero(), 10.0, 0xFFFFFF);
        body.set_speed(2.0);
        assert_eq!(body.velocity, Vec2::zero());
        assert!(body.velocity.x.is_finite());
    }
}
