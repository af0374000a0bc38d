use serde::Serialize;

use super::WorldCore;

/// Flat body record for the JSON debug snapshot. Field names match the
/// legacy sandbox's circle shape so existing tooling can read it.
#[derive(Serialize)]
struct BodySnapshot {
    id: u32,
    pos_x: f32,
    pos_y: f32,
    vec_x: f32,
    vec_y: f32,
    radius: f32,
    color: u32,
}

pub(super) fn bodies_json(world: &WorldCore) -> String {
    let snapshot: Vec<BodySnapshot> = world
        .bodies
        .iter()
        .map(|b| BodySnapshot {
            id: b.id,
            pos_x: b.pos.x,
            pos_y: b.pos.y,
            vec_x: b.velocity.x,
            vec_y: b.velocity.y,
            radius: b.radius,
            color: b.color,
        })
        .collect();

    serde_json::to_string(&snapshot).unwrap_or_else(|_| "[]".to_string())
}
