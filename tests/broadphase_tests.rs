use glam::Vec2;
use verlet_sandbox::core::body::{Body, BodyId};
use verlet_sandbox::SpatialGrid;

fn bodies_at(positions: &[Vec2], radius: f32) -> Vec<Body> {
    positions
        .iter()
        .enumerate()
        .map(|(index, &position)| Body::new(BodyId(index as u32), position, radius))
        .collect()
}

#[test]
fn grid_dimensions_cover_the_region() {
    let grid = SpatialGrid::new(1000.0, 1000.0, 25.0);
    assert_eq!(grid.cols(), 40);
    assert_eq!(grid.rows(), 40);
    assert_eq!(grid.cell_size(), 25.0);
}

#[test]
fn cell_coords_use_floor_division() {
    let grid = SpatialGrid::new(1000.0, 1000.0, 25.0);
    assert_eq!(grid.cell_coords(Vec2::new(0.0, 0.0)), (0, 0));
    assert_eq!(grid.cell_coords(Vec2::new(24.9, 25.0)), (0, 1));
    assert_eq!(grid.cell_coords(Vec2::new(999.9, 999.9)), (39, 39));
    assert_eq!(grid.cell_coords(Vec2::new(-0.1, 5.0)), (-1, 0));
}

#[test]
fn query_finds_overlapping_pairs_across_cell_seams() {
    // Pairs straddling cell boundaries in x, y, and the diagonal. With the
    // cell size above the body diameter, an overlapping partner can never be
    // outside the 3x3 neighborhood.
    let placements = [
        (Vec2::new(24.0, 40.0), Vec2::new(26.0, 40.0)),
        (Vec2::new(40.0, 24.0), Vec2::new(40.0, 26.0)),
        (Vec2::new(24.5, 24.5), Vec2::new(25.5, 25.5)),
        (Vec2::new(500.0, 500.0), Vec2::new(512.0, 500.0)),
    ];

    for (first, second) in placements {
        let bodies = bodies_at(&[first, second], 10.0);
        let mut grid = SpatialGrid::new(1000.0, 1000.0, 25.0);
        grid.rebuild(&bodies);

        let mut out = Vec::new();
        grid.query(first, 64, &mut out);
        assert!(out.contains(&1), "query at {first:?} missed partner");
        grid.query(second, 64, &mut out);
        assert!(out.contains(&0), "query at {second:?} missed partner");
    }
}

#[test]
fn query_includes_the_query_body_itself() {
    let bodies = bodies_at(&[Vec2::new(500.0, 500.0)], 10.0);
    let mut grid = SpatialGrid::new(1000.0, 1000.0, 25.0);
    grid.rebuild(&bodies);

    let mut out = Vec::new();
    grid.query(bodies[0].position, 64, &mut out);
    assert_eq!(out, vec![0]);
}

#[test]
fn out_of_range_bodies_are_dropped_from_indexing() {
    let bodies = bodies_at(&[Vec2::new(-50.0, -50.0), Vec2::new(500.0, 500.0)], 10.0);
    let mut grid = SpatialGrid::new(1000.0, 1000.0, 25.0);
    grid.rebuild(&bodies);

    let mut out = Vec::new();
    grid.query(Vec2::new(-50.0, -50.0), 64, &mut out);
    assert!(out.is_empty());

    // The in-range body is indexed normally.
    grid.query(Vec2::new(500.0, 500.0), 64, &mut out);
    assert_eq!(out, vec![1]);
}

#[test]
fn query_truncates_at_capacity() {
    let positions = vec![Vec2::new(500.0, 500.0); 10];
    let bodies = bodies_at(&positions, 10.0);
    let mut grid = SpatialGrid::new(1000.0, 1000.0, 25.0);
    grid.rebuild(&bodies);

    let mut out = Vec::new();
    let truncated = grid.query(Vec2::new(500.0, 500.0), 4, &mut out);
    assert!(truncated);
    assert_eq!(out.len(), 4);

    let truncated = grid.query(Vec2::new(500.0, 500.0), 64, &mut out);
    assert!(!truncated);
    assert_eq!(out.len(), 10);
}

#[test]
fn query_order_is_deterministic_across_rebuilds() {
    let positions: Vec<Vec2> = (0..20)
        .map(|index| Vec2::new(490.0 + index as f32, 500.0 + (index % 5) as f32))
        .collect();
    let bodies = bodies_at(&positions, 3.0);
    let mut grid = SpatialGrid::new(1000.0, 1000.0, 25.0);

    grid.rebuild(&bodies);
    let mut first = Vec::new();
    grid.query(Vec2::new(500.0, 500.0), 64, &mut first);

    grid.rebuild(&bodies);
    let mut second = Vec::new();
    grid.query(Vec2::new(500.0, 500.0), 64, &mut second);

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn queries_near_the_edge_clip_the_neighborhood() {
    let bodies = bodies_at(&[Vec2::new(5.0, 5.0), Vec2::new(995.0, 995.0)], 10.0);
    let mut grid = SpatialGrid::new(1000.0, 1000.0, 25.0);
    grid.rebuild(&bodies);

    // Corner queries must not wrap around or index out of bounds.
    let mut out = Vec::new();
    grid.query(Vec2::new(5.0, 5.0), 64, &mut out);
    assert_eq!(out, vec![0]);
    grid.query(Vec2::new(995.0, 995.0), 64, &mut out);
    assert_eq!(out, vec![1]);
}
