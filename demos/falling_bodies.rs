//! Headless driver: streams bodies into the arena and reports where they
//! settle. Run with `RUST_LOG=trace` to see per-phase solver timings.

use verlet_sandbox::{Sandbox, Vec2, WorldConfig};

fn main() {
    env_logger::init();

    let mut sandbox = Sandbox::new(WorldConfig {
        substeps: 8,
        ..WorldConfig::default()
    });

    let dt = 1.0 / 60.0;
    for frame in 0..900 {
        if frame % 5 == 0 && sandbox.world().body_count() < 600 {
            sandbox.spawn(Vec2::new(515.0, 200.0), 10.0);
        }
        sandbox.step(dt);
    }

    let world = sandbox.world();
    println!("bodies: {}", world.body_count());
    println!("max broad-phase candidates: {}", world.max_query_hits());

    let center = world.constraint.center;
    let lowest = world
        .bodies()
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y));
    if let Some(body) = lowest {
        println!(
            "lowest body {:?} at {:.1}, {:.1} ({:.1} from center)",
            body.id,
            body.position.x,
            body.position.y,
            body.position.distance(center)
        );
    }
}
