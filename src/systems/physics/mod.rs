//! Per-frame circle physics.
//!
//! Pure routines over [`Body`]: gravity, boundary bounce with resting
//! contact, pairwise elastic collision resolution. The simulation layer
//! drives them once per animation frame; nothing here owns state.

pub mod boundary;
pub mod collision;
pub mod forces;
pub mod types;
pub mod vec2;

pub use boundary::{bounce_ceiling, bounce_ground, bounce_walls};
pub use collision::{bodies_intersect, resolve_collision};
pub use forces::apply_gravity;
pub use types::Body;
pub use vec2::Vec2;

/// Below this distance/speed the collision math degenerates (division by
/// zero on the normal or on normalization), so the routines treat it as a
/// defined no-op instead of letting NaN propagate.
pub const DIST_EPSILON: f32 = 1e-6;
