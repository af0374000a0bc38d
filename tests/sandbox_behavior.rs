//! Behavioral tests through the public facade, reading state back via the
//! JSON snapshot the way a debugging session would.

use circula_engine::World;
use serde_json::Value;

fn snapshot(world: &World) -> Vec<Value> {
    let parsed: Value = serde_json::from_str(&world.bodies_json()).unwrap();
    parsed.as_array().unwrap().clone()
}

fn field(body: &Value, name: &str) -> f64 {
    body[name].as_f64().unwrap()
}

#[test]
fn spawned_bodies_fall_under_positive_gravity() {
    let mut world = World::new(800.0, 600.0);
    world.set_gravity(0.1);

    world.spawn_body(400.0, 100.0, 10.0, 0xFF0000);
    let y_before = field(&snapshot(&world)[0], "pos_y");

    for _ in 0..30 {
        world.step();
    }

    let y_after = field(&snapshot(&world)[0], "pos_y");
    assert!(y_after > y_before, "body should have fallen: {y_before} -> {y_after}");
}

#[test]
fn negative_gravity_drifts_bodies_to_the_ceiling() {
    let mut world = World::new(800.0, 600.0);
    world.set_gravity(-0.1);

    world.spawn_body(400.0, 300.0, 10.0, 0);

    for _ in 0..2000 {
        world.step();
    }

    // Settled against the ceiling: resting clamp at pos_y == radius
    let body = &snapshot(&world)[0];
    assert_eq!(field(body, "pos_y"), 10.0);
    assert_eq!(field(body, "vec_y"), 0.0);
}

#[test]
fn bodies_settle_on_the_floor_and_stop() {
    let mut world = World::new(800.0, 600.0);
    world.set_gravity(0.05);

    world.spawn_body(400.0, 200.0, 12.0, 0);

    for _ in 0..5000 {
        world.step();
    }

    let body = &snapshot(&world)[0];
    assert_eq!(field(body, "pos_y"), 600.0 - 12.0);
    assert_eq!(field(body, "vec_y"), 0.0);
    // Ground friction has drained the horizontal motion too
    assert_eq!(field(body, "vec_x"), 0.0);
}

#[test]
fn a_lone_body_never_tunnels_below_the_floor() {
    // Holds per body between collisions; pair resolution can push a body
    // past the floor for a frame, so test the boundary handling alone.
    let mut world = World::new(400.0, 300.0);
    world.set_gravity(0.1);

    world.spawn_body(200.0, 50.0, 8.0, 0);

    for _ in 0..3000 {
        world.step();
        let body = &snapshot(&world)[0];
        let y = field(body, "pos_y");
        assert!(y + 8.0 <= 300.0 + 1e-3, "body below the floor: pos_y={y}");
        assert!(y - 8.0 >= -1e-3, "body above the ceiling: pos_y={y}");
    }
}

#[test]
fn colliding_bodies_exit_at_constant_speed() {
    let mut world = World::new(800.0, 600.0);
    world.set_gravity(0.0);

    // Overlapping at spawn, resolved on the first step
    world.spawn_body(300.0, 300.0, 30.0, 0);
    world.spawn_body(340.0, 300.0, 30.0, 0);

    let mut saw_collision = false;
    world.enable_perf_metrics(true);
    for _ in 0..10 {
        world.step();
        let stats = world.get_perf_stats();
        if stats.collisions_resolved() > 0 {
            saw_collision = true;
            for body in &snapshot(&world) {
                let vx = field(body, "vec_x");
                let vy = field(body, "vec_y");
                let speed = (vx * vx + vy * vy).sqrt();
                // Renormalized to speed 2, unless the body was at rest
                assert!(
                    (speed - 2.0).abs() < 1e-3 || speed < 1e-3,
                    "post-collision speed {speed}"
                );
            }
        }
    }
    assert!(saw_collision, "overlapping spawn should have collided");
}

#[test]
fn render_buffers_match_snapshot() {
    let mut world = World::new(800.0, 600.0);
    for i in 0..5 {
        world.spawn_body(100.0 + 120.0 * i as f32, 200.0, 10.0, 0x112233 + i);
    }
    world.step();

    let count = world.extract_render_buffers();
    assert_eq!(count, 5);

    let stride = world.body_stride();
    assert_eq!(world.bodies_len_elements(), 5 * stride);
    assert_eq!(world.bodies_len_bytes(), 5 * stride * 4);
    assert_eq!(world.colors_len_elements(), 5);

    let layout = world.render_layout();
    assert_eq!(layout.body_count(), 5);
    assert_eq!(layout.body_stride(), stride);
    // Valid on native too: the layout pointer is the live buffer address
    assert_eq!(layout.bodies_ptr(), world.bodies_ptr() as usize);

    // The transfer buffer and the JSON snapshot describe the same bodies
    let bodies = snapshot(&world);
    let buf = unsafe { std::slice::from_raw_parts(world.bodies_ptr(), 5 * stride) };
    for (i, body) in bodies.iter().enumerate() {
        assert_eq!(buf[i * stride] as f64, field(body, "id"));
        assert!((buf[i * stride + 1] as f64 - field(body, "pos_x")).abs() < 1e-3);
        assert!((buf[i * stride + 3] as f64 - field(body, "radius")).abs() < 1e-3);
    }
}

#[test]
fn gravity_slider_range_is_respected_but_not_enforced() {
    let mut world = World::new(800.0, 600.0);
    // The UI clamps to [-0.1, 0.1]; the engine takes any value
    world.set_gravity(5.0);
    assert_eq!(world.gravity(), 5.0);

    world.spawn_body(400.0, 100.0, 10.0, 0);
    world.step();
    let body = &snapshot(&world)[0];
    assert!(field(body, "vec_y") > 2.0);
}
