use super::types::Body;

/// Apply the global gravity scalar to one body's vertical velocity.
///
/// Gravity is signed and unclamped: negative values drift bodies upward.
/// The UI slider typically stays within [-0.1, 0.1].
pub fn apply_gravity(body: &mut Body, gravity: f32, dt: f32) {
    body.velocity.y += gravity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::physics::Vec2;

    #[test]
    fn gravity_accumulates_on_vertical_velocity() {
        let mut body = Body::new(1, Vec2::zero(), Vec2::zero(), 10.0, 0);
        apply_gravity(&mut body, 0.05, 1.0);
        apply_gravity(&mut body, 0.05, 1.0);
        assert!((body.velocity.y - 0.1).abs() < 1e-6);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn negative_gravity_drifts_upward() {
        let mut body = Body::new(1, Vec2::zero(), Vec2::new(0.0, 1.0), 10.0, 0);
        apply_gravity(&mut body, -0.1, 1.0);
        assert!((body.velocity.y - 0.9).abs() < 1e-6);
    }
}
