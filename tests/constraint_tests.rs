use approx::assert_relative_eq;
use glam::Vec2;
use verlet_sandbox::core::body::{Body, BodyId};
use verlet_sandbox::{CircleConstraint, Sandbox, WorldConfig};

#[test]
fn constrained_bodies_stay_inside_the_boundary() {
    let mut sandbox = Sandbox::new(WorldConfig {
        substeps: 8,
        ..WorldConfig::default()
    });
    sandbox.spawn_block(Vec2::new(515.0, 300.0), 2, 2, 10.0);

    for _ in 0..300 {
        sandbox.step(1.0 / 60.0);
    }

    let world = sandbox.world();
    let center = world.constraint.center;
    let radius = world.constraint.radius;
    // The constraint clamps before integration, so at read time a body can
    // sit past the rim by up to one substep of travel.
    for body in world.bodies() {
        let distance = body.position.distance(center);
        assert!(
            distance <= radius - body.radius + 5.0,
            "body {:?} escaped: distance {distance}",
            body.id
        );
        assert!(body.position.is_finite());
    }
}

#[test]
fn escaped_body_is_projected_onto_the_rim() {
    let constraint = CircleConstraint::new(Vec2::new(500.0, 500.0), 450.0);
    let mut body = Body::new(BodyId(0), Vec2::new(990.0, 500.0), 10.0);

    constraint.apply(&mut body);

    assert_relative_eq!(body.position.x, 940.0, max_relative = 1e-6);
    assert_relative_eq!(body.position.y, 500.0, max_relative = 1e-6);
}

#[test]
fn body_inside_the_boundary_is_left_alone() {
    let constraint = CircleConstraint::new(Vec2::new(500.0, 500.0), 450.0);
    let mut body = Body::new(BodyId(0), Vec2::new(600.0, 500.0), 10.0);

    constraint.apply(&mut body);
    assert_eq!(body.position, Vec2::new(600.0, 500.0));
}

#[test]
fn oversized_body_at_the_exact_center_is_guarded() {
    // radius - body.radius is negative here, so the body counts as escaped,
    // but with zero distance there is no radial direction to clamp along.
    let constraint = CircleConstraint::new(Vec2::new(500.0, 500.0), 5.0);
    let mut body = Body::new(BodyId(0), Vec2::new(500.0, 500.0), 10.0);

    constraint.apply(&mut body);
    assert!(body.position.is_finite());
    assert_eq!(body.position, Vec2::new(500.0, 500.0));
}

#[test]
fn disabling_the_constraint_lets_bodies_fall_out() {
    let mut sandbox = Sandbox::new(WorldConfig {
        substeps: 2,
        ..WorldConfig::default()
    });
    sandbox.world_mut().set_constraint_enabled(false);
    sandbox.spawn(Vec2::new(500.0, 900.0), 10.0);

    for _ in 0..120 {
        sandbox.step(1.0 / 60.0);
    }

    let world = sandbox.world();
    let distance = world.bodies()[0].position.distance(world.constraint.center);
    assert!(distance > world.constraint.radius);
}
