use super::{WorldCore, BODY_STRIDE};

/// Pack every body into the flat transfer buffers:
/// f32 stride-6 records (id, pos_x, pos_y, radius, vel_x, vel_y) plus a
/// parallel u32 color buffer. JS reads both through wasm memory views
/// after each step. Returns the body count.
pub(super) fn extract_render_buffers(world: &mut WorldCore) -> usize {
    let count = world.bodies.len();

    let needed = count * BODY_STRIDE;
    if world.render.body_transfer.len() < needed {
        world.render.body_transfer.resize(needed, 0.0);
    }
    if world.render.color_transfer.len() < count {
        world.render.color_transfer.resize(count, 0);
    }

    for (i, body) in world.bodies.iter().enumerate() {
        let base = i * BODY_STRIDE;
        let buf = &mut world.render.body_transfer;
        buf[base] = body.id as f32;
        buf[base + 1] = body.pos.x;
        buf[base + 2] = body.pos.y;
        buf[base + 3] = body.radius;
        buf[base + 4] = body.velocity.x;
        buf[base + 5] = body.velocity.y;

        world.render.color_transfer[i] = body.color;
    }

    count
}
